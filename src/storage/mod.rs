pub mod disk;
pub mod errors;
pub mod file;
pub mod in_memory;

pub use disk::BlockStore;
pub use file::FileDisk;
pub use in_memory::MemoryDisk;
