use broodlink_shared::{Frame, PlayerId};

use crate::world::prediction::PlayerOverlay;

/// Authoritative per-player state as read from the engine's data region.
#[derive(Clone, Debug, Default)]
pub struct PlayerData {
    pub id: PlayerId,
    pub minerals: i32,
    pub gas: i32,
    /// Supply in the engine's doubled internal unit.
    pub supply_used: i32,
    pub supply_total: i32,
}

/// Read view over one player. Numeric overlay deltas are added to the
/// authoritative value when latency compensation is on and the cell is
/// valid for the queried frame; otherwise the authoritative value passes
/// through unmodified.
pub struct PlayerView<'a> {
    data: &'a PlayerData,
    overlay: &'a PlayerOverlay,
    frame: Frame,
    latcom: bool,
}

impl<'a> PlayerView<'a> {
    pub(crate) fn new(
        data: &'a PlayerData,
        overlay: &'a PlayerOverlay,
        frame: Frame,
        latcom: bool,
    ) -> Self {
        Self {
            data,
            overlay,
            frame,
            latcom,
        }
    }

    fn combined(&self, cell: &crate::world::prediction::AccumCell, authoritative: i32) -> i32 {
        if self.latcom && cell.valid(self.frame) {
            authoritative + cell.get()
        } else {
            authoritative
        }
    }

    pub fn id(&self) -> PlayerId {
        self.data.id
    }

    pub fn minerals(&self) -> i32 {
        self.combined(&self.overlay.minerals, self.data.minerals)
    }

    pub fn gas(&self) -> i32 {
        self.combined(&self.overlay.gas, self.data.gas)
    }

    pub fn supply_used(&self) -> i32 {
        self.combined(&self.overlay.supply_used, self.data.supply_used)
    }

    pub fn supply_total(&self) -> i32 {
        self.combined(&self.overlay.supply_total, self.data.supply_total)
    }
}
