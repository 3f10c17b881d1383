use std::fmt;

use crate::common::{PAGE_SIZE, ids::PageId};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Io { message: String },

    BlockOutOfRange { page: PageId, nblocks: usize },

    BufferSize { page: PageId, len: usize },

    TooLarge { nblocks: usize },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io { message } => {
                write!(f, "storage IO error: {}", message)
            }

            StorageError::BlockOutOfRange { page, nblocks } => {
                write!(
                    f,
                    "storage error: block {} out of range (disk has {} blocks)",
                    page.0, nblocks
                )
            }

            StorageError::BufferSize { page, len } => {
                write!(
                    f,
                    "storage error: transfer for {} uses a {} byte buffer, expected {}",
                    page, len, PAGE_SIZE
                )
            }

            StorageError::TooLarge { nblocks } => {
                write!(
                    f,
                    "storage error: {} blocks of {} bytes do not fit in a disk",
                    nblocks, PAGE_SIZE
                )
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io {
            message: e.to_string(),
        }
    }
}
