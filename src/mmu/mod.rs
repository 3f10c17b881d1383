pub mod entry;
pub mod errors;
pub mod page_table;

pub use entry::{Access, PageEntry, Protection};
pub use page_table::{AddressSpace, FaultHandler, PageTable};
