pub mod event_bus;
pub mod tick;
pub mod ticker;

pub use event_bus::*;
pub use tick::*;
pub use ticker::*;
