use std::fmt;

use crate::common::ids::{FrameId, PageId};
use crate::mmu::entry::Access;

pub type MmuResult<T> = Result<T, MmuError>;

#[derive(Debug)]
pub enum MmuError {
    InvalidGeometry { npages: usize, nframes: usize },

    TooLarge { npages: usize, nframes: usize },

    Allocation { what: &'static str, len: usize },

    AddressOutOfRange { addr: usize, len: usize },

    PageOutOfRange { page: PageId, npages: usize },

    FrameOutOfRange { frame: FrameId, nframes: usize },

    InvalidEntry { page: PageId, reason: String },

    UnresolvedFault { page: PageId, access: Access },
}

impl fmt::Display for MmuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MmuError::InvalidGeometry { npages, nframes } => {
                write!(
                    f,
                    "mmu error: cannot build a page table with {} pages and {} frames",
                    npages, nframes
                )
            }

            MmuError::TooLarge { npages, nframes } => {
                write!(
                    f,
                    "mmu error: {} pages and {} frames overflow the address space",
                    npages, nframes
                )
            }

            MmuError::Allocation { what, len } => {
                write!(f, "mmu error: cannot allocate {} ({} elements)", what, len)
            }

            MmuError::AddressOutOfRange { addr, len } => {
                write!(
                    f,
                    "mmu error: address {:#x} outside virtual memory of {} bytes",
                    addr, len
                )
            }

            MmuError::PageOutOfRange { page, npages } => {
                write!(f, "mmu error: {} out of range ({} pages)", page, npages)
            }

            MmuError::FrameOutOfRange { frame, nframes } => {
                write!(f, "mmu error: {} out of range ({} frames)", frame, nframes)
            }

            MmuError::InvalidEntry { page, reason } => {
                write!(f, "mmu error: invalid entry for {} ({})", page, reason)
            }

            MmuError::UnresolvedFault { page, access } => {
                write!(
                    f,
                    "mmu error: {:?} access to {} still faults after the handler ran",
                    access, page
                )
            }
        }
    }
}

impl std::error::Error for MmuError {}
