cfg_if! {
    if #[cfg(all(unix, feature = "transport_shm"))] {
        pub mod shm;
    } else {}
}

mod error;

pub use error::SignalError;

use crate::connection::ConnectError;
use crate::config::ClientConfig;
use crate::link::GameLink;

/// Blocking single-byte handshake channel to one engine session.
///
/// Both halves block: `read_signal` until the engine writes a byte,
/// `write_signal` until the byte is accepted. There is exactly one reader
/// and one writer per session for the life of a connection.
pub trait SignalLink: Send {
    fn write_signal(&mut self, byte: u8) -> Result<(), SignalError>;
    fn read_signal(&mut self) -> Result<u8, SignalError>;
}

/// Mapped view over one session's opaque game-data region.
///
/// The runtime never defines the region's internal layout; a [`GameLink`]
/// built on top of it does all interpretation.
pub trait RegionMap: Send {
    fn bytes(&self) -> &[u8];
    fn bytes_mut(&mut self) -> &mut [u8];
}

/// Discovery plus attach: produce a live link and signal channel for an
/// available session, or a recoverable [`ConnectError`].
pub trait Transport<L: GameLink>: Send {
    fn attach(&mut self, config: &ClientConfig) -> Result<(L, Box<dyn SignalLink>), ConnectError>;
}
