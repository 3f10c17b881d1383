use std::fmt;

use crate::{mmu::errors::MmuError, storage::errors::StorageError};

pub type FaultResult<T> = Result<T, FaultError>;

#[derive(Debug)]
pub enum FaultError {
    /// The frame table and the translation entries no longer agree.
    InvariantViolation { reason: String },

    Storage(StorageError),

    Mmu(MmuError),
}

impl FaultError {
    pub fn invariant(reason: impl Into<String>) -> Self {
        FaultError::InvariantViolation {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultError::InvariantViolation { reason } => {
                write!(f, "fault error: invariant violated ({})", reason)
            }
            FaultError::Storage(e) => write!(f, "fault error: {e}"),
            FaultError::Mmu(e) => write!(f, "fault error: {e}"),
        }
    }
}

impl std::error::Error for FaultError {}

impl From<StorageError> for FaultError {
    fn from(e: StorageError) -> Self {
        FaultError::Storage(e)
    }
}

impl From<MmuError> for FaultError {
    fn from(e: MmuError) -> Self {
        FaultError::Mmu(e)
    }
}
