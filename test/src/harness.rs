use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use broodlink_client::{
    Client, ClientConfig, ConnectError, EventListener, GameCtx, PlayerData, SideEffect, SignalLink,
    Transport, UnitData,
};
use broodlink_shared::{Command, Frame, GameEvent, PlayerId, UnitId, UnitTypeId};

use crate::fake_engine::{EngineState, FakeGameLink, SharedEngineState};
use crate::local_link::LocalSignalPair;

/// Transport over the in-memory signal pair. Counts attach calls and can
/// be told to fail the first few with a recoverable error.
pub struct LocalTransport {
    state: SharedEngineState,
    signals: LocalSignalPair,
    attaches: Arc<AtomicUsize>,
    fail_remaining: Arc<AtomicUsize>,
}

impl Transport<FakeGameLink> for LocalTransport {
    fn attach(
        &mut self,
        _config: &ClientConfig,
    ) -> Result<(FakeGameLink, Box<dyn SignalLink>), ConnectError> {
        self.attaches.fetch_add(1, Ordering::SeqCst);
        if self
            .fail_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| {
                left.checked_sub(1)
            })
            .is_ok()
        {
            return Err(ConnectError::NoSession);
        }
        Ok((FakeGameLink::new(self.state.clone()), self.signals.client_link()))
    }
}

/// A client wired to a scripted in-memory engine.
pub struct EngineHarness {
    pub state: SharedEngineState,
    pub signals: LocalSignalPair,
    pub client: Client<FakeGameLink>,
    attaches: Arc<AtomicUsize>,
}

impl EngineHarness {
    pub fn new() -> Self {
        Self::with_failing_attaches(0)
    }

    /// Harness whose transport rejects the first `fail_first` attach
    /// attempts before succeeding.
    pub fn with_failing_attaches(fail_first: usize) -> Self {
        let state: SharedEngineState = Arc::new(Mutex::new(EngineState::default()));
        let signals = LocalSignalPair::new();
        let attaches = Arc::new(AtomicUsize::new(0));
        let transport = LocalTransport {
            state: state.clone(),
            signals: signals.clone(),
            attaches: attaches.clone(),
            fail_remaining: Arc::new(AtomicUsize::new(fail_first)),
        };
        let config = ClientConfig {
            reconnect_backoff: Duration::from_millis(1),
            ..ClientConfig::default()
        };
        let client = Client::new(config, Box::new(transport));
        Self {
            state,
            signals,
            client,
            attaches,
        }
    }

    pub fn attach_count(&self) -> usize {
        self.attaches.load(Ordering::SeqCst)
    }

    /// Queues the handshake ready sentinel and runs one connect attempt.
    pub fn connect(&mut self) -> bool {
        self.signals.push_ready();
        self.client.connect()
    }

    /// Scripts the next frame's batch and unblocks the pending exchange.
    pub fn present_frame(&self, frame: Frame, events: Vec<GameEvent>) {
        {
            let mut state = self.state.lock().unwrap();
            state.frame = frame;
            state.events = events;
        }
        self.signals.push_ready();
    }

    pub fn set_units(&self, units: Vec<UnitData>) {
        self.state.lock().unwrap().units = units;
    }

    pub fn set_players(&self, players: Vec<PlayerData>) {
        self.state.lock().unwrap().players = players;
    }

    pub fn set_remaining_latency(&self, frames: u32) {
        self.state.lock().unwrap().remaining_latency = frames;
    }

    pub fn set_version(&self, version: u32) {
        self.state.lock().unwrap().version = version;
    }

    /// Commands the client has flushed to the engine so far.
    pub fn flushed_commands(&self) -> Vec<Command> {
        self.state.lock().unwrap().commands.clone()
    }

    /// Side effects the client has flushed to the engine so far.
    pub fn flushed_effects(&self) -> Vec<SideEffect> {
        self.state.lock().unwrap().effects.clone()
    }
}

impl Default for EngineHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal unit snapshot for one scripted frame.
pub fn unit(id: UnitId, player: PlayerId, type_id: UnitTypeId) -> UnitData {
    UnitData {
        id,
        player,
        type_id,
        is_completed: true,
        hit_points: 1,
        ..UnitData::default()
    }
}

/// Minimal player snapshot for one scripted frame.
pub fn player(id: PlayerId, minerals: i32, gas: i32) -> PlayerData {
    PlayerData {
        id,
        minerals,
        gas,
        supply_used: 8,
        supply_total: 20,
    }
}

/// Listener that records every callback as a short tag, in dispatch order.
/// Optionally panics on the match-end callback and issues queued commands
/// from the per-frame callback.
#[derive(Default)]
pub struct CollectingListener {
    pub log: Vec<String>,
    pub panic_on_end: bool,
    pub issue_on_frame: Vec<Command>,
}

impl EventListener for CollectingListener {
    fn on_start(&mut self, _ctx: &mut GameCtx<'_>) {
        self.log.push("start".into());
    }

    fn on_frame(&mut self, ctx: &mut GameCtx<'_>) {
        self.log.push("frame".into());
        for command in self.issue_on_frame.drain(..) {
            ctx.issue(command);
        }
    }

    fn on_end(&mut self, _ctx: &mut GameCtx<'_>, winner: bool) {
        if self.panic_on_end {
            panic!("listener panic on match end");
        }
        self.log.push(format!("end:{winner}"));
    }

    fn on_unit_create(&mut self, _ctx: &mut GameCtx<'_>, unit: UnitId) {
        self.log.push(format!("create:{unit}"));
    }

    fn on_unit_destroy(&mut self, _ctx: &mut GameCtx<'_>, unit: UnitId) {
        self.log.push(format!("destroy:{unit}"));
    }

    fn on_unit_complete(&mut self, _ctx: &mut GameCtx<'_>, unit: UnitId) {
        self.log.push(format!("complete:{unit}"));
    }

    fn on_receive_text(&mut self, _ctx: &mut GameCtx<'_>, player: PlayerId, text: &str) {
        self.log.push(format!("chat:{player}:{text}"));
    }

    fn on_player_left(&mut self, _ctx: &mut GameCtx<'_>, player: PlayerId) {
        self.log.push(format!("left:{player}"));
    }
}
