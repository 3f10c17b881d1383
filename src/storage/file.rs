use std::{
    fs::{File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use crate::{
    common::{PAGE_SIZE, ids::PageId},
    debugger::Component,
    storage::{
        disk::{BlockStore, check_transfer},
        errors::{StorageError, StorageResult},
    },
    vm_debug,
};

/// Backing store kept in a regular file of `nblocks * PAGE_SIZE` bytes.
#[derive(Debug)]
pub struct FileDisk {
    file: File,
    path: PathBuf,
    nblocks: usize,
}

impl FileDisk {
    /// Creates (or truncates) the backing file and sizes it to `nblocks`
    /// zero-filled blocks.
    pub fn create(path: impl AsRef<Path>, nblocks: usize) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        let bytes = nblocks
            .checked_mul(PAGE_SIZE)
            .and_then(|bytes| u64::try_from(bytes).ok())
            .ok_or(StorageError::TooLarge { nblocks })?;

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        file.set_len(bytes)?;

        vm_debug!(
            Component::Disk,
            "opened {} with {} blocks",
            path.display(),
            nblocks
        );

        Ok(Self {
            file,
            path,
            nblocks,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn seek_to(&mut self, page: PageId) -> StorageResult<()> {
        let offset = (page.0 * PAGE_SIZE) as u64;
        self.file.seek(SeekFrom::Start(offset))?;
        Ok(())
    }
}

impl BlockStore for FileDisk {
    fn nblocks(&self) -> usize {
        self.nblocks
    }

    fn read_page(&mut self, page: PageId, dest: &mut [u8]) -> StorageResult<()> {
        check_transfer(page, self.nblocks, dest.len())?;
        self.seek_to(page)?;
        self.file.read_exact(dest)?;
        Ok(())
    }

    fn write_page(&mut self, page: PageId, src: &[u8]) -> StorageResult<()> {
        check_transfer(page, self.nblocks, src.len())?;
        self.seek_to(page)?;
        self.file.write_all(src)?;
        Ok(())
    }
}
