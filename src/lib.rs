pub mod config;
pub mod error;
pub mod stats;

pub mod common;
pub mod debugger;
pub mod fault;
pub mod frame;
pub mod mmu;
pub mod replacement;
pub mod sim;
pub mod storage;
pub mod workload;
