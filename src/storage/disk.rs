use crate::common::{PAGE_SIZE, ids::PageId};
use crate::storage::errors::{StorageError, StorageResult};

/// Page-indexed backing store. Every transfer moves exactly one
/// `PAGE_SIZE` block; block `n` holds virtual page `n`.
pub trait BlockStore {
    fn nblocks(&self) -> usize;
    fn read_page(&mut self, page: PageId, dest: &mut [u8]) -> StorageResult<()>;
    fn write_page(&mut self, page: PageId, src: &[u8]) -> StorageResult<()>;
}

pub(crate) fn check_transfer(page: PageId, nblocks: usize, len: usize) -> StorageResult<()> {
    if page.0 >= nblocks {
        return Err(StorageError::BlockOutOfRange { page, nblocks });
    }
    if len != PAGE_SIZE {
        return Err(StorageError::BufferSize { page, len });
    }
    Ok(())
}
