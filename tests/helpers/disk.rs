use std::{cell::RefCell, rc::Rc};

use virtmem::{
    common::ids::PageId,
    storage::{BlockStore, MemoryDisk, errors::StorageResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Io {
    Read(usize),
    Write(usize),
}

pub type IoLog = Rc<RefCell<Vec<Io>>>;

/// In-memory disk that records every transfer in a log the test keeps a
/// handle to.
pub struct RecordingDisk {
    inner: MemoryDisk,
    log: IoLog,
}

impl RecordingDisk {
    pub fn new(nblocks: usize) -> (Self, IoLog) {
        let log: IoLog = Rc::new(RefCell::new(Vec::new()));
        let disk = Self {
            inner: MemoryDisk::new(nblocks),
            log: log.clone(),
        };
        (disk, log)
    }
}

impl BlockStore for RecordingDisk {
    fn nblocks(&self) -> usize {
        self.inner.nblocks()
    }

    fn read_page(&mut self, page: PageId, dest: &mut [u8]) -> StorageResult<()> {
        self.log.borrow_mut().push(Io::Read(page.0));
        self.inner.read_page(page, dest)
    }

    fn write_page(&mut self, page: PageId, src: &[u8]) -> StorageResult<()> {
        self.log.borrow_mut().push(Io::Write(page.0));
        self.inner.write_page(page, src)
    }
}

#[allow(dead_code)]
pub fn writes(log: &IoLog) -> Vec<usize> {
    log.borrow()
        .iter()
        .filter_map(|io| match io {
            Io::Write(page) => Some(*page),
            Io::Read(_) => None,
        })
        .collect()
}

#[allow(dead_code)]
pub fn reads(log: &IoLog) -> Vec<usize> {
    log.borrow()
        .iter()
        .filter_map(|io| match io {
            Io::Read(page) => Some(*page),
            Io::Write(_) => None,
        })
        .collect()
}
