use std::time::Duration;

use broodlink_shared::{Command, GameEvent, Position};

use crate::config::ClientConfig;
use crate::connection::{ConnectError, Connection, SyncError};
use crate::events::{dispatch_batch, EventListener, FrameTiming};
use crate::link::GameLink;
use crate::side_effect::{Color, SideEffect, SideEffectQueue};
use crate::sim::Simulator;
use crate::transport::Transport;
use crate::world::World;

/// Per-frame surface handed to listener callbacks.
///
/// Commands issued here go through the latency simulator immediately, so a
/// query later in the same callback already reflects the issued intent, and
/// are queued for the next flush. Draw/announce directives are buffered the
/// same way.
pub struct GameCtx<'a> {
    world: &'a mut World,
    simulator: &'a mut Simulator,
    outbound: &'a mut Vec<Command>,
    effects: &'a mut SideEffectQueue,
    remaining_latency: u32,
}

impl<'a> GameCtx<'a> {
    pub fn world(&self) -> &World {
        self.world
    }

    pub fn remaining_latency_frames(&self) -> u32 {
        self.remaining_latency
    }

    pub fn issue(&mut self, command: Command) {
        self.simulator
            .issue(&command, self.world, self.remaining_latency);
        self.outbound.push(command);
    }

    pub fn send_text(&mut self, text: impl Into<String>) {
        self.effects.push(SideEffect::SendText { text: text.into() });
    }

    pub fn draw_text(&mut self, at: Position, text: impl Into<String>) {
        self.effects.push(SideEffect::DrawText {
            at,
            text: text.into(),
        });
    }

    pub fn draw_line(&mut self, from: Position, to: Position, color: Color) {
        self.effects.push(SideEffect::DrawLine { from, to, color });
    }

    pub fn draw_box(&mut self, top_left: Position, bottom_right: Position, color: Color) {
        self.effects.push(SideEffect::DrawBox {
            top_left,
            bottom_right,
            color,
        });
    }

    pub fn draw_circle(&mut self, center: Position, radius: i32, color: Color) {
        self.effects.push(SideEffect::DrawCircle {
            center,
            radius,
            color,
        });
    }
}

/// The client runtime: owns the connection, the frame-stamped world, the
/// latency simulator and the outbound buffers, and drives one blocking
/// exchange per engine frame.
pub struct Client<L: GameLink> {
    connection: Connection<L>,
    world: World,
    simulator: Simulator,
    effects: SideEffectQueue,
    outbound: Vec<Command>,
    timing: FrameTiming,
    terminal: bool,
    winner: Option<bool>,
    remaining_latency: u32,
}

impl<L: GameLink> Client<L> {
    pub fn new(config: ClientConfig, transport: Box<dyn Transport<L>>) -> Self {
        let latency_compensation = config.latency_compensation;
        Self {
            connection: Connection::new(config, transport),
            world: World::new(latency_compensation),
            simulator: Simulator::new(),
            effects: SideEffectQueue::default(),
            outbound: Vec::new(),
            timing: FrameTiming::default(),
            terminal: false,
            winner: None,
            remaining_latency: 0,
        }
    }

    pub fn connection(&self) -> &Connection<L> {
        &self.connection
    }

    pub fn connect(&mut self) -> bool {
        self.connection.connect()
    }

    pub fn reconnect(&mut self) -> Result<(), ConnectError> {
        self.connection.reconnect()
    }

    pub fn disconnect(&mut self) {
        self.connection.disconnect()
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Whether the current match has ended.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Match outcome, once terminal.
    pub fn winner(&self) -> Option<bool> {
        self.winner
    }

    /// Bot response time of the last timed per-frame callback.
    pub fn last_frame_response(&self) -> Option<Duration> {
        self.timing.last_response()
    }

    pub fn set_latency_compensation(&mut self, enabled: bool) {
        self.world.set_latency_compensation(enabled);
    }

    /// Issues a command outside of a listener callback, with the same
    /// predict-then-queue behavior as [`GameCtx::issue`].
    pub fn issue_command(&mut self, command: Command) {
        self.simulator
            .issue(&command, &mut self.world, self.remaining_latency);
        self.outbound.push(command);
    }

    pub fn send_text(&mut self, text: impl Into<String>) {
        self.effects.push(SideEffect::SendText { text: text.into() });
    }

    /// Exchanges one frame with the engine and dispatches its event batch.
    ///
    /// Flushes everything queued since the previous exchange, signals done,
    /// blocks for ready, refreshes the world snapshot, advances the
    /// simulator, then runs the listener callbacks. On a synchronization
    /// failure the connection is already torn down; `reconnect` before the
    /// next call.
    pub fn update<E: EventListener>(&mut self, listener: &mut E) -> Result<(), SyncError> {
        self.flush_outbound()?;
        self.connection.exchange_frame()?;

        let (frame, remaining_latency, batch, units, players) = {
            let session = self
                .connection
                .session_mut()
                .ok_or(SyncError::NotConnected)?;
            (
                session.link.frame(),
                session.link.remaining_latency_frames(),
                session.link.drain_events(),
                session.link.unit_snapshots(),
                session.link.player_snapshots(),
            )
        };
        self.remaining_latency = remaining_latency;

        self.world.refresh(frame, units, players);
        self.simulator.advance(&mut self.world);
        for event in &batch {
            self.simulator.observe(event, &mut self.world);
        }

        if batch.iter().any(|event| *event == GameEvent::MatchStart) {
            self.terminal = false;
            self.winner = None;
        }
        // Recorded before any listener runs, so a panicking handler cannot
        // lose the match outcome.
        for event in &batch {
            if let GameEvent::MatchEnd { winner } = event {
                self.terminal = true;
                self.winner = Some(*winner);
            }
        }

        let mut ctx = GameCtx {
            world: &mut self.world,
            simulator: &mut self.simulator,
            outbound: &mut self.outbound,
            effects: &mut self.effects,
            remaining_latency,
        };
        let outcome = dispatch_batch(&batch, self.terminal, listener, &mut ctx, &mut self.timing);
        self.terminal = outcome.terminal;
        if outcome.winner.is_some() {
            self.winner = outcome.winner;
        }
        Ok(())
    }

    /// Writes everything queued since the previous exchange into the
    /// outbound shared buffer. Runs exactly once per exchange.
    fn flush_outbound(&mut self) -> Result<(), SyncError> {
        let session = self
            .connection
            .session_mut()
            .ok_or(SyncError::NotConnected)?;
        for command in self.outbound.drain(..) {
            session.link.push_command(&command);
        }
        for effect in self.effects.drain() {
            session.link.push_side_effect(&effect);
        }
        Ok(())
    }
}
