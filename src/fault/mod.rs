pub mod controller;
pub mod errors;

pub use controller::PageFaultController;
