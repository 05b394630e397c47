//! # Broodlink Shared
//! Protocol definitions shared between the broodlink client runtime and its
//! tooling: the discovery-table and handshake wire formats, the typed
//! command model, engine events, positions, and the static type registry.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod command;
mod constants;
mod events;
mod position;
mod registry;
mod session;
mod signal;
mod types;

pub use command::{Command, CommandPayload};
pub use constants::{
    cancel_refund, CANCEL_REFUND_DEN, CANCEL_REFUND_NUM, CLIENT_VERSION, FRAME_NONE,
    SESSION_SLOT_BYTES, SESSION_SLOT_COUNT, SESSION_TABLE_BYTES, SIGNAL_CLIENT_DONE,
    SIGNAL_FRAME_READY, TILE_PIXELS, TRAINING_QUEUE_LENGTH,
};
pub use events::GameEvent;
pub use position::{Position, TilePosition};
pub use registry::{
    registry, techs, unit_types, upgrades, OrderId, Registry, TechId, TechInfo, UnitTypeId,
    UnitTypeInfo, UpgradeId, UpgradeInfo,
};
pub use session::{SessionSlot, SessionTable, SessionTableError};
pub use signal::Signal;
pub use types::{Frame, PlayerId, SlotIndex, UnitId};
