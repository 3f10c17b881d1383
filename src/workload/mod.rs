//! Access patterns driven against the virtual memory.
//!
//! Every workload checks what it reads back against what it wrote, so a
//! page that lost its contents across an eviction surfaces as
//! [`VmError::DataMismatch`] instead of a silently different checksum.

pub mod focus;
pub mod random;
pub mod scan;
pub mod sort;
pub mod trace;

use std::{fmt, str::FromStr};

use crate::{
    common::try_filled,
    config::ConfigError,
    error::{VmError, VmResult},
    mmu::{FaultHandler, PageTable},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Workload {
    /// Sequential fill, then repeated sequential scans.
    Alpha,
    /// Uniform random reads and writes.
    Beta,
    /// In-place heap sort of random bytes.
    Gamma,
    /// Random accesses concentrated in small, moving windows.
    Delta,
}

impl Workload {
    pub const ALL: [Workload; 4] = [
        Workload::Alpha,
        Workload::Beta,
        Workload::Gamma,
        Workload::Delta,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Workload::Alpha => "alpha",
            Workload::Beta => "beta",
            Workload::Gamma => "gamma",
            Workload::Delta => "delta",
        }
    }

    /// Runs to completion and returns a checksum of the bytes read.
    pub fn run<H: FaultHandler>(&self, vm: &mut PageTable<H>, seed: u64) -> VmResult<u64> {
        match self {
            Workload::Alpha => scan::run(vm),
            Workload::Beta => random::run(vm, seed),
            Workload::Gamma => sort::run(vm, seed),
            Workload::Delta => focus::run(vm, seed),
        }
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Workload {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Workload::ALL
            .into_iter()
            .find(|w| w.name() == s)
            .ok_or_else(|| ConfigError::UnknownWorkload(s.to_string()))
    }
}

pub(crate) fn shadow_of(len: usize) -> VmResult<Vec<u8>> {
    try_filled(len, 0u8).ok_or(VmError::OutOfMemory {
        what: "workload shadow copy",
        bytes: len,
    })
}

pub(crate) fn expect_byte(addr: usize, expected: u8, found: u8) -> VmResult<()> {
    if expected != found {
        return Err(VmError::DataMismatch {
            addr,
            expected,
            found,
        });
    }
    Ok(())
}
