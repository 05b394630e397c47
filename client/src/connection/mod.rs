mod connection;
mod error;
mod frame_sync;

pub use connection::{Connection, Session};
pub use error::{ConnectError, SyncError};
pub use frame_sync::{await_ready, exchange_frame};
