use crate::types::Frame;

/// Protocol version this client speaks. Compared against the engine's
/// advertised version at connect time; a mismatch is fatal for the session.
pub const CLIENT_VERSION: u32 = 10003;

/// Number of records in the discovery table.
pub const SESSION_SLOT_COUNT: usize = 8;

/// Bytes per discovery-table record: process id, claimed flag, keepalive.
pub const SESSION_SLOT_BYTES: usize = 12;

/// Total size of a discovery-table snapshot.
pub const SESSION_TABLE_BYTES: usize = SESSION_SLOT_COUNT * SESSION_SLOT_BYTES;

/// Handshake byte written by the client after it has finished a frame.
pub const SIGNAL_CLIENT_DONE: u8 = 1;

/// Handshake byte written by the engine once the next frame is ready.
pub const SIGNAL_FRAME_READY: u8 = 2;

/// Fixed length of a unit's production queue.
pub const TRAINING_QUEUE_LENGTH: usize = 5;

/// Cancelling production, construction, research or an upgrade refunds
/// `price * 3 / 4`, rounded down. Engine formula, do not "fix" the rounding.
pub const CANCEL_REFUND_NUM: u32 = 3;
pub const CANCEL_REFUND_DEN: u32 = 4;

/// Pixels per build tile.
pub const TILE_PIXELS: i32 = 32;

/// Sentinel for "no frame observed yet".
pub const FRAME_NONE: Frame = Frame::MAX;

/// Refund paid out when a queued or in-progress purchase is cancelled.
pub fn cancel_refund(price: u32) -> i32 {
    (price * CANCEL_REFUND_NUM / CANCEL_REFUND_DEN) as i32
}
