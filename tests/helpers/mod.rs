pub mod disk;
pub mod harness;
