use crate::position::Position;
use crate::types::{PlayerId, UnitId};

/// One engine-reported occurrence, drained exactly once per frame exchange
/// and dispatched in the engine's order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    MatchStart,
    MatchFrame,
    MatchEnd { winner: bool },
    UnitDiscover { unit: UnitId },
    UnitShow { unit: UnitId },
    UnitHide { unit: UnitId },
    UnitCreate { unit: UnitId },
    UnitDestroy { unit: UnitId },
    UnitMorph { unit: UnitId },
    UnitRenegade { unit: UnitId },
    UnitComplete { unit: UnitId },
    SendText { text: String },
    ReceiveText { player: PlayerId, text: String },
    PlayerLeft { player: PlayerId },
    PlayerDropped { player: PlayerId },
    NukeDetect { target: Option<Position> },
    SaveGame { name: String },
}

impl GameEvent {
    /// Whether this event ends the match. Terminal state is computed for a
    /// whole batch before any handler runs.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::MatchEnd { .. })
    }

    /// The unit this event concerns, if any.
    pub fn unit(&self) -> Option<UnitId> {
        match self {
            GameEvent::UnitDiscover { unit }
            | GameEvent::UnitShow { unit }
            | GameEvent::UnitHide { unit }
            | GameEvent::UnitCreate { unit }
            | GameEvent::UnitDestroy { unit }
            | GameEvent::UnitMorph { unit }
            | GameEvent::UnitRenegade { unit }
            | GameEvent::UnitComplete { unit } => Some(*unit),
            _ => None,
        }
    }
}
