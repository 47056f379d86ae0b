pub mod auth;
pub mod command;
pub mod raffle;
pub mod rooms;
pub mod session;
pub mod state;
pub mod wallet;

pub use command::Command;
pub use session::{PurchaseRecord, Session, SessionError, UNLOCK_COST};
pub use state::{DetailTab, ViewState};
pub use wallet::{InsufficientBalance, UnlockLedger, Wallet};
