use thiserror::Error;

use crate::constants::{SESSION_SLOT_BYTES, SESSION_SLOT_COUNT, SESSION_TABLE_BYTES};
use crate::types::SlotIndex;

/// Errors that can occur while decoding a discovery-table snapshot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionTableError {
    /// The snapshot did not have the fixed table size
    #[error("Discovery table snapshot is {actual} bytes (expected {expected})")]
    WrongLength { expected: usize, actual: usize },
}

/// One record of the discovery table: an attachable engine instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSlot {
    pub process_id: u32,
    pub claimed: bool,
    pub last_keepalive: u32,
}

impl SessionSlot {
    /// A slot is attachable when an engine lives behind it and no other
    /// client has claimed it.
    pub fn is_open(&self) -> bool {
        self.process_id != 0 && !self.claimed
    }
}

/// Read-only snapshot of the fixed eight-slot discovery table, refreshed
/// only at connect time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionTable {
    slots: [SessionSlot; SESSION_SLOT_COUNT],
}

impl SessionTable {
    pub fn new(slots: [SessionSlot; SESSION_SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// Decodes a snapshot from its fixed wire layout: eight records of
    /// three little-endian `u32`s (process id, claimed flag, keepalive).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SessionTableError> {
        if bytes.len() != SESSION_TABLE_BYTES {
            return Err(SessionTableError::WrongLength {
                expected: SESSION_TABLE_BYTES,
                actual: bytes.len(),
            });
        }
        let mut slots = [SessionSlot::default(); SESSION_SLOT_COUNT];
        for (index, slot) in slots.iter_mut().enumerate() {
            let record = &bytes[index * SESSION_SLOT_BYTES..(index + 1) * SESSION_SLOT_BYTES];
            slot.process_id = u32::from_le_bytes(record[0..4].try_into().unwrap());
            slot.claimed = u32::from_le_bytes(record[4..8].try_into().unwrap()) != 0;
            slot.last_keepalive = u32::from_le_bytes(record[8..12].try_into().unwrap());
        }
        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[SessionSlot] {
        &self.slots
    }

    pub fn slot(&self, index: SlotIndex) -> Option<&SessionSlot> {
        self.slots.get(index)
    }

    /// Selects the open slot with the oldest keepalive timestamp, the engine
    /// instance that has been waiting for a client the longest. Returns
    /// `None` when no slot qualifies; the caller retries the whole attempt.
    pub fn pick_oldest_open(&self) -> Option<SlotIndex> {
        let mut best: Option<SlotIndex> = None;
        for (index, slot) in self.slots.iter().enumerate() {
            if !slot.is_open() {
                continue;
            }
            match best {
                Some(current) if self.slots[current].last_keepalive <= slot.last_keepalive => {}
                _ => best = Some(index),
            }
        }
        best
    }
}
