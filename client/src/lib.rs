//! # Broodlink Client
//! Client runtime that lets a bot control a real-time game engine across a
//! fixed-layout shared-memory boundary: session discovery and attach, the
//! per-frame handshake, a frame-stamped speculative cache that masks
//! command round-trip latency, and a grid-based building-placement search.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

mod client;
mod config;
mod connection;
mod events;
mod link;
mod placement;
mod side_effect;
mod sim;
mod transport;
mod world;

pub use client::{Client, GameCtx};
pub use config::ClientConfig;
pub use connection::{Connection, ConnectError, Session, SyncError};
pub use events::{dispatch_batch, BatchOutcome, EventListener, FrameTiming};
pub use link::GameLink;
pub use placement::{
    find_build_location, Footprint, FootprintKind, PlacementGrid, PlacementOracle, TileRect,
    PLACEMENT_WINDOW_TILES,
};
pub use side_effect::{Color, SideEffect, SideEffectQueue};
pub use sim::Simulator;
pub use transport::{RegionMap, SignalError, SignalLink, Transport};
pub use world::{
    AccumCell, FrameCell, PlayerData, PlayerOverlay, PlayerView, TrainingQueue, UnitData,
    UnitOverlay, UnitView, World,
};

cfg_if! {
    if #[cfg(all(unix, feature = "transport_shm"))] {
        pub use transport::shm::{FifoSignalLink, MappedRegion, ShmTransport};
    } else {}
}
