use std::fmt;

/// Counters kept by the fault controller and read once at shutdown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Fault callbacks received
    pub page_faults: u64,

    /// Pages loaded from the backing store
    pub disk_reads: u64,

    /// Dirty pages flushed to the backing store
    pub disk_writes: u64,

    /// Occupied frames reclaimed for another page
    pub evictions: u64,
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Page faults: {}", self.page_faults)?;
        writeln!(f, "Disk reads: {}", self.disk_reads)?;
        write!(f, "Disk writes: {}", self.disk_writes)
    }
}
