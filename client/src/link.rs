use broodlink_shared::{Command, Frame, GameEvent};

use crate::side_effect::SideEffect;
use crate::world::{PlayerData, UnitData};

/// Accessor over one session's opaque game-data region.
///
/// The region's byte layout is externally defined and consumed opaquely;
/// this trait is the only way the runtime reads or writes through it.
/// Implementations decode authoritative snapshots and encode the outbound
/// command/side-effect buffers.
pub trait GameLink: Send {
    /// Engine protocol version advertised in the region header.
    fn engine_version(&self) -> u32;

    /// The frame the region currently describes.
    fn frame(&self) -> Frame;

    /// Frames until a command issued right now is guaranteed processed.
    fn remaining_latency_frames(&self) -> u32;

    /// Drains the inbound event batch for the current frame. Called exactly
    /// once per exchange; events come back in engine-reported order.
    fn drain_events(&mut self) -> Vec<GameEvent>;

    /// Authoritative unit snapshots for the current frame.
    fn unit_snapshots(&self) -> Vec<UnitData>;

    /// Authoritative player snapshots for the current frame.
    fn player_snapshots(&self) -> Vec<PlayerData>;

    /// Appends a command to the outbound buffer.
    fn push_command(&mut self, command: &Command);

    /// Appends a draw/announce directive to the outbound buffer.
    fn push_side_effect(&mut self, effect: &SideEffect);
}
