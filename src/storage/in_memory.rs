use crate::{
    common::{PAGE_SIZE, ids::PageId},
    storage::{
        disk::{BlockStore, check_transfer},
        errors::StorageResult,
    },
};

/// Backing store held entirely in process memory.
#[derive(Debug, Clone)]
pub struct MemoryDisk {
    blocks: Vec<u8>,
    nblocks: usize,
}

impl MemoryDisk {
    /// Zero-filled disk of `nblocks` blocks. Panics like `vec!` when the
    /// byte size is not allocatable; [`FileDisk`](super::FileDisk) is the
    /// fallible store.
    pub fn new(nblocks: usize) -> Self {
        Self {
            blocks: vec![0u8; nblocks * PAGE_SIZE],
            nblocks,
        }
    }

    /// Raw contents of one block, bypassing the transfer accounting of a
    /// simulator run.
    pub fn block(&self, page: PageId) -> Option<&[u8]> {
        if page.0 >= self.nblocks {
            return None;
        }
        let start = page.0 * PAGE_SIZE;
        Some(&self.blocks[start..start + PAGE_SIZE])
    }
}

impl BlockStore for MemoryDisk {
    fn nblocks(&self) -> usize {
        self.nblocks
    }

    fn read_page(&mut self, page: PageId, dest: &mut [u8]) -> StorageResult<()> {
        check_transfer(page, self.nblocks, dest.len())?;
        let start = page.0 * PAGE_SIZE;
        dest.copy_from_slice(&self.blocks[start..start + PAGE_SIZE]);
        Ok(())
    }

    fn write_page(&mut self, page: PageId, src: &[u8]) -> StorageResult<()> {
        check_transfer(page, self.nblocks, src.len())?;
        let start = page.0 * PAGE_SIZE;
        self.blocks[start..start + PAGE_SIZE].copy_from_slice(src);
        Ok(())
    }
}
