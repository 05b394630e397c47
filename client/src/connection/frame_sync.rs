use log::trace;

use broodlink_shared::{Signal, SIGNAL_CLIENT_DONE};

use crate::connection::SyncError;
use crate::transport::{SignalError, SignalLink};

/// Exchanges exactly one frame with the engine: one "done" write, then a
/// blocking wait for exactly one "ready" sentinel.
///
/// Any other byte observed while waiting is inconclusive and the wait
/// continues; only an I/O failure ends it early. The caller is responsible
/// for disconnecting on error.
pub fn exchange_frame(link: &mut dyn SignalLink) -> Result<(), SyncError> {
    link.write_signal(SIGNAL_CLIENT_DONE)?;
    await_ready(link)?;
    Ok(())
}

/// Blocks until the exact "ready" sentinel is observed. Also used for the
/// first ready wait right after attaching to a session.
pub fn await_ready(link: &mut dyn SignalLink) -> Result<(), SignalError> {
    loop {
        match Signal::from_byte(link.read_signal()?) {
            Signal::FrameReady => return Ok(()),
            other => trace!("Ignoring non-sentinel signal {:?} while waiting", other),
        }
    }
}
