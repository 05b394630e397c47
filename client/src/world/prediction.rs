use broodlink_shared::{Frame, OrderId, Position, TechId, UnitId, UnitTypeId, UpgradeId, FRAME_NONE};

use crate::world::unit::TrainingQueue;

/// A value paired with the one frame for which it is valid.
///
/// `valid` holds iff the stored frame equals the frame being queried; there
/// is no implicit extension across frames. Stale values stay readable via
/// `get`, callers must gate on `valid`.
#[derive(Clone, Copy, Debug)]
pub struct FrameCell<T: Copy> {
    value: T,
    frame: Frame,
}

impl<T: Copy + Default> Default for FrameCell<T> {
    fn default() -> Self {
        Self {
            value: T::default(),
            frame: FRAME_NONE,
        }
    }
}

impl<T: Copy> FrameCell<T> {
    pub fn set(&mut self, value: T, frame: Frame) {
        self.value = value;
        self.frame = frame;
    }

    pub fn valid(&self, frame: Frame) -> bool {
        self.frame == frame
    }

    pub fn get(&self) -> T {
        self.value
    }
}

/// A frame-stamped cell that sums within a frame and resets across frames.
///
/// Models cumulative resource deltas from multiple commands issued in the
/// same frame; a partial sum is never carried over a frame boundary.
#[derive(Clone, Copy, Debug)]
pub struct AccumCell {
    value: i32,
    frame: Frame,
}

impl Default for AccumCell {
    fn default() -> Self {
        Self {
            value: 0,
            frame: FRAME_NONE,
        }
    }
}

impl AccumCell {
    pub fn add_or_set(&mut self, delta: i32, frame: Frame) {
        if self.valid(frame) {
            self.value += delta;
        } else {
            self.value = delta;
        }
        self.frame = frame;
    }

    pub fn valid(&self, frame: Frame) -> bool {
        self.frame == frame
    }

    pub fn get(&self) -> i32 {
        self.value
    }
}

/// Predicted per-unit deltas, written by the latency simulator and read by
/// the unit accessors. One typed optional field per predictable property,
/// each with its own frame stamp.
#[derive(Clone, Debug, Default)]
pub struct UnitOverlay {
    pub order: FrameCell<OrderId>,
    pub target_position: FrameCell<Position>,
    pub target: FrameCell<Option<UnitId>>,
    pub rally_position: FrameCell<Position>,
    pub rally_unit: FrameCell<Option<UnitId>>,
    pub build_type: FrameCell<UnitTypeId>,
    pub tech: FrameCell<TechId>,
    pub upgrade: FrameCell<UpgradeId>,
    pub is_constructing: FrameCell<bool>,
    pub is_training: FrameCell<bool>,
    pub is_morphing: FrameCell<bool>,
    pub is_researching: FrameCell<bool>,
    pub is_upgrading: FrameCell<bool>,
    pub is_burrowed: FrameCell<bool>,
    pub is_cloaked: FrameCell<bool>,
    pub training_queue: FrameCell<TrainingQueue>,
}

/// Predicted per-player resource deltas. Numeric, so they accumulate when
/// several commands land in one frame.
#[derive(Clone, Debug, Default)]
pub struct PlayerOverlay {
    pub minerals: AccumCell,
    pub gas: AccumCell,
    pub supply_used: AccumCell,
    pub supply_total: AccumCell,
}
