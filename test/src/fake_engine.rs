use std::mem;
use std::sync::{Arc, Mutex};

use broodlink_client::{GameLink, PlayerData, SideEffect, UnitData};
use broodlink_shared::{Command, Frame, GameEvent, CLIENT_VERSION};

/// Scripted engine-side state, shared between a test and the
/// [`FakeGameLink`] living inside the client's session.
///
/// Tests mutate the snapshot fields between exchanges and inspect the
/// `commands`/`effects` buffers the client flushed.
pub struct EngineState {
    pub version: u32,
    pub frame: Frame,
    pub remaining_latency: u32,
    pub events: Vec<GameEvent>,
    pub units: Vec<UnitData>,
    pub players: Vec<PlayerData>,
    pub commands: Vec<Command>,
    pub effects: Vec<SideEffect>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            version: CLIENT_VERSION,
            frame: 0,
            remaining_latency: 0,
            events: Vec::new(),
            units: Vec::new(),
            players: Vec::new(),
            commands: Vec::new(),
            effects: Vec::new(),
        }
    }
}

pub type SharedEngineState = Arc<Mutex<EngineState>>;

/// Game-data link backed by [`EngineState`] instead of a mapped region.
pub struct FakeGameLink {
    state: SharedEngineState,
}

impl FakeGameLink {
    pub fn new(state: SharedEngineState) -> Self {
        Self { state }
    }
}

impl GameLink for FakeGameLink {
    fn engine_version(&self) -> u32 {
        self.state.lock().unwrap().version
    }

    fn frame(&self) -> Frame {
        self.state.lock().unwrap().frame
    }

    fn remaining_latency_frames(&self) -> u32 {
        self.state.lock().unwrap().remaining_latency
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.state.lock().unwrap().events)
    }

    fn unit_snapshots(&self) -> Vec<UnitData> {
        self.state.lock().unwrap().units.clone()
    }

    fn player_snapshots(&self) -> Vec<PlayerData> {
        self.state.lock().unwrap().players.clone()
    }

    fn push_command(&mut self, command: &Command) {
        self.state.lock().unwrap().commands.push(*command);
    }

    fn push_side_effect(&mut self, effect: &SideEffect) {
        self.state.lock().unwrap().effects.push(effect.clone());
    }
}
