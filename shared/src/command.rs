use crate::position::{Position, TilePosition};
use crate::registry::{TechId, UnitTypeId, UpgradeId};
use crate::types::UnitId;

/// Per-kind command payload.
///
/// Each variant carries only the fields its kind actually uses; there is no
/// generic "extra" field to reinterpret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandPayload {
    Move { target: Position },
    AttackMove { target: Position },
    AttackUnit { target: UnitId },
    Patrol { target: Position },
    Stop,
    HoldPosition,
    Gather { target: UnitId },
    ReturnCargo,
    Build { what: UnitTypeId, at: TilePosition },
    Train { what: UnitTypeId },
    Morph { what: UnitTypeId },
    Research { tech: TechId },
    Upgrade { upgrade: UpgradeId },
    CancelConstruction,
    CancelTrain { slot: usize },
    CancelMorph,
    CancelResearch,
    CancelUpgrade,
    SetRallyPosition { at: Position },
    SetRallyUnit { target: UnitId },
    Burrow,
    Unburrow,
    Cloak,
    Decloak,
}

impl CommandPayload {
    /// Kinds whose execution requires a mobile issuer; the simulator mirrors
    /// the engine's rejection of these on immobile types.
    pub fn is_move_class(&self) -> bool {
        matches!(
            self,
            CommandPayload::Move { .. }
                | CommandPayload::AttackMove { .. }
                | CommandPayload::Patrol { .. }
                | CommandPayload::Gather { .. }
                | CommandPayload::ReturnCargo
        )
    }

    /// The unit this command targets, if its kind carries one.
    pub fn target_unit(&self) -> Option<UnitId> {
        match self {
            CommandPayload::AttackUnit { target }
            | CommandPayload::Gather { target }
            | CommandPayload::SetRallyUnit { target } => Some(*target),
            _ => None,
        }
    }
}

/// An immutable command: created once by bot logic, consumed once by the
/// latency simulator, then flushed to the outbound buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    pub issuer: UnitId,
    pub payload: CommandPayload,
    /// Queued commands execute at a locally nondeterministic point, so the
    /// simulator never predicts their effects.
    pub queued: bool,
}

impl Command {
    pub fn new(issuer: UnitId, payload: CommandPayload) -> Self {
        Self {
            issuer,
            payload,
            queued: false,
        }
    }

    /// Marks this command as queued behind the unit's current activity.
    pub fn queued(mut self) -> Self {
        self.queued = true;
        self
    }

    pub fn move_to(issuer: UnitId, target: Position) -> Self {
        Self::new(issuer, CommandPayload::Move { target })
    }

    pub fn attack_move(issuer: UnitId, target: Position) -> Self {
        Self::new(issuer, CommandPayload::AttackMove { target })
    }

    pub fn attack_unit(issuer: UnitId, target: UnitId) -> Self {
        Self::new(issuer, CommandPayload::AttackUnit { target })
    }

    pub fn patrol(issuer: UnitId, target: Position) -> Self {
        Self::new(issuer, CommandPayload::Patrol { target })
    }

    pub fn stop(issuer: UnitId) -> Self {
        Self::new(issuer, CommandPayload::Stop)
    }

    pub fn hold_position(issuer: UnitId) -> Self {
        Self::new(issuer, CommandPayload::HoldPosition)
    }

    pub fn gather(issuer: UnitId, target: UnitId) -> Self {
        Self::new(issuer, CommandPayload::Gather { target })
    }

    pub fn return_cargo(issuer: UnitId) -> Self {
        Self::new(issuer, CommandPayload::ReturnCargo)
    }

    pub fn build(issuer: UnitId, what: UnitTypeId, at: TilePosition) -> Self {
        Self::new(issuer, CommandPayload::Build { what, at })
    }

    pub fn train(issuer: UnitId, what: UnitTypeId) -> Self {
        Self::new(issuer, CommandPayload::Train { what })
    }

    pub fn morph(issuer: UnitId, what: UnitTypeId) -> Self {
        Self::new(issuer, CommandPayload::Morph { what })
    }

    pub fn research(issuer: UnitId, tech: TechId) -> Self {
        Self::new(issuer, CommandPayload::Research { tech })
    }

    pub fn upgrade(issuer: UnitId, upgrade: UpgradeId) -> Self {
        Self::new(issuer, CommandPayload::Upgrade { upgrade })
    }

    pub fn cancel_construction(issuer: UnitId) -> Self {
        Self::new(issuer, CommandPayload::CancelConstruction)
    }

    pub fn cancel_train(issuer: UnitId, slot: usize) -> Self {
        Self::new(issuer, CommandPayload::CancelTrain { slot })
    }

    pub fn cancel_morph(issuer: UnitId) -> Self {
        Self::new(issuer, CommandPayload::CancelMorph)
    }

    pub fn cancel_research(issuer: UnitId) -> Self {
        Self::new(issuer, CommandPayload::CancelResearch)
    }

    pub fn cancel_upgrade(issuer: UnitId) -> Self {
        Self::new(issuer, CommandPayload::CancelUpgrade)
    }

    pub fn set_rally_position(issuer: UnitId, at: Position) -> Self {
        Self::new(issuer, CommandPayload::SetRallyPosition { at })
    }

    pub fn set_rally_unit(issuer: UnitId, target: UnitId) -> Self {
        Self::new(issuer, CommandPayload::SetRallyUnit { target })
    }

    pub fn burrow(issuer: UnitId) -> Self {
        Self::new(issuer, CommandPayload::Burrow)
    }

    pub fn unburrow(issuer: UnitId) -> Self {
        Self::new(issuer, CommandPayload::Unburrow)
    }

    pub fn cloak(issuer: UnitId) -> Self {
        Self::new(issuer, CommandPayload::Cloak)
    }

    pub fn decloak(issuer: UnitId) -> Self {
        Self::new(issuer, CommandPayload::Decloak)
    }
}
