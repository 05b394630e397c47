use thiserror::Error;

/// Errors that can occur on the single-byte signal channel
#[derive(Debug, Error)]
pub enum SignalError {
    /// The peer closed its end of the channel
    #[error("Signal channel closed by peer")]
    Closed,

    /// Underlying I/O failure
    #[error("Signal channel I/O error: {0}")]
    Io(#[from] std::io::Error),
}
