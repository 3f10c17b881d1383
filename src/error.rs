use crate::{
    config::ConfigError, fault::errors::FaultError, mmu::errors::MmuError,
    storage::errors::StorageError,
};

pub type VmResult<T> = Result<T, VmError>;

#[derive(Debug)]
pub enum VmError {
    Config(ConfigError),
    Fault(FaultError),
    Mmu(MmuError),
    Storage(StorageError),

    OutOfMemory {
        what: &'static str,
        bytes: usize,
    },

    /// A workload read back a byte that differs from what it last wrote.
    DataMismatch {
        addr: usize,
        expected: u8,
        found: u8,
    },
}

impl std::fmt::Display for VmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VmError::Config(e) => write!(f, "configuration error: {e}"),
            VmError::Fault(e) => write!(f, "{e}"),
            VmError::Mmu(e) => write!(f, "{e}"),
            VmError::Storage(e) => write!(f, "{e}"),
            VmError::OutOfMemory { what, bytes } => {
                write!(f, "cannot allocate {} bytes for {}", bytes, what)
            }
            VmError::DataMismatch {
                addr,
                expected,
                found,
            } => write!(
                f,
                "data mismatch at {:#x}: expected {}, found {}",
                addr, expected, found
            ),
        }
    }
}

impl std::error::Error for VmError {}

impl From<ConfigError> for VmError {
    fn from(e: ConfigError) -> Self {
        VmError::Config(e)
    }
}

impl From<FaultError> for VmError {
    fn from(e: FaultError) -> Self {
        VmError::Fault(e)
    }
}

impl From<MmuError> for VmError {
    fn from(e: MmuError) -> Self {
        VmError::Mmu(e)
    }
}

impl From<StorageError> for VmError {
    fn from(e: StorageError) -> Self {
        VmError::Storage(e)
    }
}
