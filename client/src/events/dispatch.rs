use std::time::{Duration, Instant};

use broodlink_shared::GameEvent;

use crate::client::GameCtx;
use crate::events::EventListener;

/// How long the bot spent answering the last timed per-frame callback.
#[derive(Default)]
pub struct FrameTiming {
    last_response: Option<Duration>,
}

impl FrameTiming {
    pub fn last_response(&self) -> Option<Duration> {
        self.last_response
    }

    fn record(&mut self, elapsed: Duration) {
        self.last_response = Some(elapsed);
    }
}

/// Result of dispatching one inbound batch. `winner` is `Some` only when
/// this batch itself carried the match-end event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub terminal: bool,
    pub winner: Option<bool>,
}

/// Dispatches one inbound batch to the listener.
///
/// The terminal flag is computed by a full scan *before* any handler runs,
/// so it is already correct even if a handler panics; listener panics are
/// deliberately left to propagate. Handlers fire once per event in batch
/// order. When terminal, per-frame handlers still fire but the bot-response
/// timing measurement is skipped.
pub fn dispatch_batch<E: EventListener>(
    batch: &[GameEvent],
    already_terminal: bool,
    listener: &mut E,
    ctx: &mut GameCtx<'_>,
    timing: &mut FrameTiming,
) -> BatchOutcome {
    let mut outcome = BatchOutcome {
        terminal: already_terminal,
        winner: None,
    };
    for event in batch {
        if let GameEvent::MatchEnd { winner } = event {
            outcome.terminal = true;
            outcome.winner = Some(*winner);
        }
    }

    for event in batch {
        match event {
            GameEvent::MatchStart => listener.on_start(ctx),
            GameEvent::MatchFrame => {
                if outcome.terminal {
                    listener.on_frame(ctx);
                } else {
                    let started = Instant::now();
                    listener.on_frame(ctx);
                    timing.record(started.elapsed());
                }
            }
            GameEvent::MatchEnd { winner } => listener.on_end(ctx, *winner),
            GameEvent::UnitDiscover { unit } => listener.on_unit_discover(ctx, *unit),
            GameEvent::UnitShow { unit } => listener.on_unit_show(ctx, *unit),
            GameEvent::UnitHide { unit } => listener.on_unit_hide(ctx, *unit),
            GameEvent::UnitCreate { unit } => listener.on_unit_create(ctx, *unit),
            GameEvent::UnitDestroy { unit } => listener.on_unit_destroy(ctx, *unit),
            GameEvent::UnitMorph { unit } => listener.on_unit_morph(ctx, *unit),
            GameEvent::UnitRenegade { unit } => listener.on_unit_renegade(ctx, *unit),
            GameEvent::UnitComplete { unit } => listener.on_unit_complete(ctx, *unit),
            GameEvent::SendText { text } => listener.on_send_text(ctx, text),
            GameEvent::ReceiveText { player, text } => {
                listener.on_receive_text(ctx, *player, text)
            }
            GameEvent::PlayerLeft { player } => listener.on_player_left(ctx, *player),
            GameEvent::PlayerDropped { player } => listener.on_player_dropped(ctx, *player),
            GameEvent::NukeDetect { target } => listener.on_nuke_detect(ctx, *target),
            GameEvent::SaveGame { name } => listener.on_save_game(ctx, name),
        }
    }

    outcome
}
