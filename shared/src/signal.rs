use crate::constants::{SIGNAL_CLIENT_DONE, SIGNAL_FRAME_READY};

/// Decoded single-byte handshake signal.
///
/// Only two values are meaningful. Anything else observed while waiting is
/// carried as `Other` so callers can keep waiting instead of treating it as
/// an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    ClientDone,
    FrameReady,
    Other(u8),
}

impl Signal {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            SIGNAL_CLIENT_DONE => Signal::ClientDone,
            SIGNAL_FRAME_READY => Signal::FrameReady,
            other => Signal::Other(other),
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            Signal::ClientDone => SIGNAL_CLIENT_DONE,
            Signal::FrameReady => SIGNAL_FRAME_READY,
            Signal::Other(byte) => byte,
        }
    }
}
