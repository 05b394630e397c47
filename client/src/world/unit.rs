use broodlink_shared::{
    registry, Frame, OrderId, PlayerId, Position, TechId, UnitId, UnitTypeId, UnitTypeInfo,
    UpgradeId, TRAINING_QUEUE_LENGTH,
};

use crate::world::prediction::UnitOverlay;

/// Fixed-length production queue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrainingQueue {
    slots: [UnitTypeId; TRAINING_QUEUE_LENGTH],
    count: usize,
}

impl TrainingQueue {
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == TRAINING_QUEUE_LENGTH
    }

    pub fn slot(&self, index: usize) -> Option<UnitTypeId> {
        if index < self.count {
            Some(self.slots[index])
        } else {
            None
        }
    }

    /// Appends to the first free slot. Returns `false` when full.
    pub fn push(&mut self, what: UnitTypeId) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots[self.count] = what;
        self.count += 1;
        true
    }

    /// Removes one slot, shifting the remaining entries down by one and
    /// decrementing the count. Returns the removed type.
    pub fn remove_slot(&mut self, index: usize) -> Option<UnitTypeId> {
        if index >= self.count {
            return None;
        }
        let removed = self.slots[index];
        for slot in index..self.count - 1 {
            self.slots[slot] = self.slots[slot + 1];
        }
        self.count -= 1;
        self.slots[self.count] = UnitTypeId::default();
        Some(removed)
    }
}

/// Authoritative per-unit state as read from the engine's data region.
///
/// Reading the region is the external accessor's job; this is the already
/// decoded projection the runtime works with.
#[derive(Clone, Debug, Default)]
pub struct UnitData {
    pub id: UnitId,
    pub player: PlayerId,
    pub type_id: UnitTypeId,
    pub position: Position,
    pub hit_points: i32,
    pub order: OrderId,
    pub target: Option<UnitId>,
    pub target_position: Position,
    pub rally_position: Position,
    pub rally_unit: Option<UnitId>,
    pub build_type: UnitTypeId,
    pub tech: TechId,
    pub upgrade: UpgradeId,
    pub is_completed: bool,
    pub is_constructing: bool,
    pub is_training: bool,
    pub is_morphing: bool,
    pub is_researching: bool,
    pub is_upgrading: bool,
    pub is_burrowed: bool,
    pub is_cloaked: bool,
    pub training_queue: TrainingQueue,
}

impl UnitData {
    pub fn type_info(&self) -> Option<&'static UnitTypeInfo> {
        registry().unit(self.type_id)
    }
}

/// Read view over one unit: authoritative value first, then the overlay
/// cell only when latency compensation is enabled and the cell is valid
/// for the exact frame being queried. Flags and enums replace, they never
/// blend; stale cells from earlier frames are ignored.
pub struct UnitView<'a> {
    data: &'a UnitData,
    overlay: &'a UnitOverlay,
    frame: Frame,
    latcom: bool,
}

impl<'a> UnitView<'a> {
    pub(crate) fn new(data: &'a UnitData, overlay: &'a UnitOverlay, frame: Frame, latcom: bool) -> Self {
        Self {
            data,
            overlay,
            frame,
            latcom,
        }
    }

    fn overlaid<T: Copy>(&self, cell: &crate::world::prediction::FrameCell<T>, authoritative: T) -> T {
        if self.latcom && cell.valid(self.frame) {
            cell.get()
        } else {
            authoritative
        }
    }

    pub fn id(&self) -> UnitId {
        self.data.id
    }

    pub fn player(&self) -> PlayerId {
        self.data.player
    }

    pub fn type_id(&self) -> UnitTypeId {
        self.data.type_id
    }

    pub fn position(&self) -> Position {
        self.data.position
    }

    pub fn hit_points(&self) -> i32 {
        self.data.hit_points
    }

    pub fn is_completed(&self) -> bool {
        self.data.is_completed
    }

    pub fn order(&self) -> OrderId {
        self.overlaid(&self.overlay.order, self.data.order)
    }

    pub fn target(&self) -> Option<UnitId> {
        self.overlaid(&self.overlay.target, self.data.target)
    }

    pub fn target_position(&self) -> Position {
        self.overlaid(&self.overlay.target_position, self.data.target_position)
    }

    pub fn rally_position(&self) -> Position {
        self.overlaid(&self.overlay.rally_position, self.data.rally_position)
    }

    pub fn rally_unit(&self) -> Option<UnitId> {
        self.overlaid(&self.overlay.rally_unit, self.data.rally_unit)
    }

    pub fn build_type(&self) -> UnitTypeId {
        self.overlaid(&self.overlay.build_type, self.data.build_type)
    }

    pub fn tech(&self) -> TechId {
        self.overlaid(&self.overlay.tech, self.data.tech)
    }

    pub fn upgrade(&self) -> UpgradeId {
        self.overlaid(&self.overlay.upgrade, self.data.upgrade)
    }

    pub fn is_constructing(&self) -> bool {
        self.overlaid(&self.overlay.is_constructing, self.data.is_constructing)
    }

    pub fn is_training(&self) -> bool {
        self.overlaid(&self.overlay.is_training, self.data.is_training)
    }

    pub fn is_morphing(&self) -> bool {
        self.overlaid(&self.overlay.is_morphing, self.data.is_morphing)
    }

    pub fn is_researching(&self) -> bool {
        self.overlaid(&self.overlay.is_researching, self.data.is_researching)
    }

    pub fn is_upgrading(&self) -> bool {
        self.overlaid(&self.overlay.is_upgrading, self.data.is_upgrading)
    }

    pub fn is_burrowed(&self) -> bool {
        self.overlaid(&self.overlay.is_burrowed, self.data.is_burrowed)
    }

    pub fn is_cloaked(&self) -> bool {
        self.overlaid(&self.overlay.is_cloaked, self.data.is_cloaked)
    }

    pub fn training_queue(&self) -> TrainingQueue {
        self.overlaid(&self.overlay.training_queue, self.data.training_queue)
    }
}
