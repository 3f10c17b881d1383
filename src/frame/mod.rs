pub mod frame_table;
pub mod unit_tests;

pub use frame_table::{FrameEntry, FrameTable};
