use thiserror::Error;

use broodlink_shared::SessionTableError;

use crate::transport::SignalError;

/// Errors that can fail one connection attempt.
///
/// Everything here is recoverable (the caller retries via `reconnect`)
/// except a protocol version mismatch, which is fatal for the session.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// The discovery table could not be read
    #[error("Discovery table unavailable: {source}")]
    TableUnavailable { source: std::io::Error },

    /// The discovery table snapshot failed to decode
    #[error("Discovery table malformed: {0}")]
    TableMalformed(#[from] SessionTableError),

    /// No open slot with a live engine behind it
    #[error("No attachable session in the discovery table")]
    NoSession,

    /// The selected session's game-data region could not be mapped
    #[error("Session region unavailable: {source}")]
    RegionUnavailable { source: std::io::Error },

    /// The selected session's signal channel could not be opened
    #[error("Session signal channel unavailable: {source}")]
    SignalUnavailable { source: std::io::Error },

    /// Client and engine protocol constants disagree; never retried
    #[error("Protocol version mismatch: engine speaks {engine}, client speaks {client}")]
    VersionMismatch { engine: u32, client: u32 },

    /// Signal-channel failure during the initial ready wait
    #[error("Handshake failed: {0}")]
    Handshake(#[from] SignalError),
}

impl ConnectError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConnectError::VersionMismatch { .. })
    }
}

/// Errors during a per-frame exchange. Any of these forces a disconnect;
/// the caller must `reconnect` before the next exchange.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No live session to exchange against
    #[error("Not connected")]
    NotConnected,

    /// Signal-channel failure in either half of the handshake
    #[error("Frame handshake failed: {0}")]
    Signal(#[from] SignalError),
}
