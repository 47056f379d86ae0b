pub mod mock;
pub mod records;
pub mod search;
pub mod store;

pub use records::*;
pub use store::*;
