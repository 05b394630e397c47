use log::trace;

use broodlink_shared::{
    cancel_refund, registry, Command, CommandPayload, Frame, GameEvent, OrderId, PlayerId, UnitId,
};

use crate::world::{TrainingQueue, World};

/// A command whose order-phase (and possibly finish-phase) writes are still
/// ahead of it.
struct PendingCommand {
    command: Command,
    /// Frame at which the engine is guaranteed to have acknowledged the
    /// order as active.
    due: Frame,
    order_applied: bool,
}

/// Translates each issued command into the frame-stamped cell writes that
/// predict what the engine will eventually compute, so same-frame queries
/// reflect intent instead of stale data.
///
/// This layer never raises a user-visible error: a command whose effects
/// cannot be safely predicted is a no-op here and the engine remains the
/// sole source of truth once it catches up.
#[derive(Default)]
pub struct Simulator {
    pending: Vec<PendingCommand>,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Predicts the local effects of a just-issued command.
    ///
    /// Resource effects land immediately; order effects land once the
    /// remaining-latency window has elapsed (straight away when it is
    /// already zero); finish effects wait for a confirming event.
    pub fn issue(&mut self, command: &Command, world: &mut World, remaining_latency: u32) {
        if !world.latency_compensation() {
            return;
        }
        if command.queued {
            // Execution order of queued commands is not locally
            // deterministic, so nothing is predicted for them.
            return;
        }
        if !admits(command, world) {
            trace!("Not predicting command {:?}", command.payload);
            return;
        }
        let player = match world.unit_data(command.issuer) {
            Some(data) => data.player,
            None => return,
        };

        let frame = world.frame();
        apply_resource_phase(command, player, world, frame);

        if remaining_latency == 0 {
            apply_order_phase(command, world, frame);
            if awaits_finish(command) {
                self.pending.push(PendingCommand {
                    command: *command,
                    due: frame,
                    order_applied: true,
                });
            }
        } else {
            self.pending.push(PendingCommand {
                command: *command,
                due: frame + remaining_latency,
                order_applied: false,
            });
        }
    }

    /// Applies order-phase writes for every pending command whose
    /// remaining-latency window has elapsed. Called once per frame after the
    /// world snapshot is refreshed.
    pub fn advance(&mut self, world: &mut World) {
        let frame = world.frame();
        let mut keep = Vec::with_capacity(self.pending.len());
        for mut entry in self.pending.drain(..) {
            if !world.contains_unit(entry.command.issuer) {
                continue;
            }
            if !entry.order_applied && entry.due <= frame {
                apply_order_phase(&entry.command, world, frame);
                entry.order_applied = true;
            }
            if !entry.order_applied || awaits_finish(&entry.command) {
                keep.push(entry);
            }
        }
        self.pending = keep;
    }

    /// Settles pending commands when a confirming event arrives for their
    /// issuing unit.
    pub fn observe(&mut self, event: &GameEvent, world: &mut World) {
        let confirming = matches!(
            event,
            GameEvent::UnitComplete { .. } | GameEvent::UnitMorph { .. } | GameEvent::UnitDestroy { .. }
        );
        if !confirming {
            return;
        }
        let Some(unit) = event.unit() else {
            return;
        };
        let frame = world.frame();
        let mut keep = Vec::with_capacity(self.pending.len());
        for entry in self.pending.drain(..) {
            if entry.command.issuer == unit {
                if entry.order_applied && !matches!(event, GameEvent::UnitDestroy { .. }) {
                    apply_finish_phase(&entry.command, world, frame);
                }
            } else {
                keep.push(entry);
            }
        }
        self.pending = keep;
    }

    #[cfg(test)]
    pub(crate) fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// Mirrors the engine's own validation for the command kinds it would
/// reject outright, so no speculative state is written for them.
fn admits(command: &Command, world: &World) -> bool {
    let Some(data) = world.unit_data(command.issuer) else {
        return false;
    };
    if let Some(target) = command.payload.target_unit() {
        if !world.contains_unit(target) {
            return false;
        }
    }
    let Some(info) = data.type_info() else {
        // Unknown catalogue entry: nothing can be validated, predict nothing.
        return false;
    };

    match &command.payload {
        payload if payload.is_move_class() => info.can_move,
        CommandPayload::Train { .. } => info.is_producer,
        CommandPayload::Build { .. } => info.is_worker,
        CommandPayload::Research { .. } | CommandPayload::Upgrade { .. } => info.is_building,
        CommandPayload::SetRallyPosition { .. } | CommandPayload::SetRallyUnit { .. } => {
            info.is_producer
        }
        CommandPayload::Burrow | CommandPayload::Unburrow => info.can_burrow,
        CommandPayload::Cloak | CommandPayload::Decloak => info.can_cloak,
        CommandPayload::CancelConstruction => !data.is_completed,
        CommandPayload::CancelTrain { slot } => *slot < data.training_queue.len(),
        CommandPayload::CancelMorph => data.is_morphing,
        CommandPayload::CancelResearch => data.is_researching,
        CommandPayload::CancelUpgrade => data.is_upgrading,
        _ => true,
    }
}

/// Cancellation outcomes settle only once the engine confirms them.
fn awaits_finish(command: &Command) -> bool {
    matches!(
        command.payload,
        CommandPayload::CancelConstruction
            | CommandPayload::CancelMorph
            | CommandPayload::CancelResearch
            | CommandPayload::CancelUpgrade
    )
}

/// The queue the next prediction builds on: the already-predicted queue when
/// one is valid for this frame, the authoritative one otherwise.
fn effective_queue(world: &World, unit: UnitId) -> TrainingQueue {
    world
        .unit(unit)
        .map(|view| view.training_queue())
        .unwrap_or_default()
}

fn add_player_resources(
    world: &mut World,
    player: PlayerId,
    frame: Frame,
    minerals: i32,
    gas: i32,
    supply_used: i32,
) {
    if let Some(overlay) = world.player_overlay_mut(player) {
        if minerals != 0 {
            overlay.minerals.add_or_set(minerals, frame);
        }
        if gas != 0 {
            overlay.gas.add_or_set(gas, frame);
        }
        if supply_used != 0 {
            overlay.supply_used.add_or_set(supply_used, frame);
        }
    }
}

/// Immediate effects: costs, queue-slot reservations, supply. Applied
/// unconditionally at issuance.
fn apply_resource_phase(command: &Command, player: PlayerId, world: &mut World, frame: Frame) {
    let issuer = command.issuer;
    match command.payload {
        CommandPayload::Train { what } => {
            let Some(info) = registry().unit(what) else {
                return;
            };
            add_player_resources(
                world,
                player,
                frame,
                -(info.mineral_price as i32),
                -(info.gas_price as i32),
                info.supply_required,
            );
            let mut queue = effective_queue(world, issuer);
            if queue.push(what) {
                if let Some(overlay) = world.unit_overlay_mut(issuer) {
                    overlay.training_queue.set(queue, frame);
                    overlay.is_training.set(true, frame);
                }
            }
        }
        CommandPayload::Morph { what } => {
            let Some(info) = registry().unit(what) else {
                return;
            };
            add_player_resources(
                world,
                player,
                frame,
                -(info.mineral_price as i32),
                -(info.gas_price as i32),
                info.supply_required,
            );
            if info.supply_provided > 0 {
                if let Some(overlay) = world.player_overlay_mut(player) {
                    overlay.supply_total.add_or_set(info.supply_provided, frame);
                }
            }
        }
        CommandPayload::Research { tech } => {
            let Some(info) = registry().tech(tech) else {
                return;
            };
            add_player_resources(
                world,
                player,
                frame,
                -(info.mineral_price as i32),
                -(info.gas_price as i32),
                0,
            );
        }
        CommandPayload::Upgrade { upgrade } => {
            let Some(info) = registry().upgrade(upgrade) else {
                return;
            };
            add_player_resources(
                world,
                player,
                frame,
                -(info.mineral_price as i32),
                -(info.gas_price as i32),
                0,
            );
        }
        CommandPayload::CancelTrain { slot } => {
            let mut queue = effective_queue(world, issuer);
            let Some(removed) = queue.remove_slot(slot) else {
                return;
            };
            let Some(info) = registry().unit(removed) else {
                return;
            };
            add_player_resources(
                world,
                player,
                frame,
                cancel_refund(info.mineral_price),
                cancel_refund(info.gas_price),
                -info.supply_required,
            );
            if let Some(overlay) = world.unit_overlay_mut(issuer) {
                overlay.training_queue.set(queue, frame);
                if queue.is_empty() {
                    overlay.is_training.set(false, frame);
                }
            }
        }
        CommandPayload::CancelConstruction => {
            let Some(type_id) = world.unit_data(issuer).map(|data| data.type_id) else {
                return;
            };
            let Some(info) = registry().unit(type_id) else {
                return;
            };
            add_player_resources(
                world,
                player,
                frame,
                cancel_refund(info.mineral_price),
                cancel_refund(info.gas_price),
                0,
            );
        }
        CommandPayload::CancelMorph => {
            let Some(build_type) = world.unit(issuer).map(|view| view.build_type()) else {
                return;
            };
            let Some(info) = registry().unit(build_type) else {
                return;
            };
            add_player_resources(
                world,
                player,
                frame,
                cancel_refund(info.mineral_price),
                cancel_refund(info.gas_price),
                -info.supply_required,
            );
            if info.supply_provided > 0 {
                if let Some(overlay) = world.player_overlay_mut(player) {
                    overlay.supply_total.add_or_set(-info.supply_provided, frame);
                }
            }
        }
        CommandPayload::CancelResearch => {
            let Some(tech) = world.unit_data(issuer).map(|data| data.tech) else {
                return;
            };
            let Some(info) = registry().tech(tech) else {
                return;
            };
            add_player_resources(
                world,
                player,
                frame,
                cancel_refund(info.mineral_price),
                cancel_refund(info.gas_price),
                0,
            );
        }
        CommandPayload::CancelUpgrade => {
            let Some(upgrade) = world.unit_data(issuer).map(|data| data.upgrade) else {
                return;
            };
            let Some(info) = registry().upgrade(upgrade) else {
                return;
            };
            add_player_resources(
                world,
                player,
                frame,
                cancel_refund(info.mineral_price),
                cancel_refund(info.gas_price),
                0,
            );
        }
        _ => {}
    }
}

/// Order effects: the order/state fields that only become true once the
/// engine would have acknowledged the order as active. Stamped at the frame
/// they are applied, never re-armed afterwards.
fn apply_order_phase(command: &Command, world: &mut World, frame: Frame) {
    let Some(overlay) = world.unit_overlay_mut(command.issuer) else {
        return;
    };
    match command.payload {
        CommandPayload::Move { target } => {
            overlay.order.set(OrderId::Move, frame);
            overlay.target_position.set(target, frame);
        }
        CommandPayload::AttackMove { target } => {
            overlay.order.set(OrderId::AttackMove, frame);
            overlay.target_position.set(target, frame);
        }
        CommandPayload::AttackUnit { target } => {
            overlay.order.set(OrderId::AttackUnit, frame);
            overlay.target.set(Some(target), frame);
        }
        CommandPayload::Patrol { target } => {
            overlay.order.set(OrderId::Patrol, frame);
            overlay.target_position.set(target, frame);
        }
        CommandPayload::Stop => overlay.order.set(OrderId::Stop, frame),
        CommandPayload::HoldPosition => overlay.order.set(OrderId::HoldPosition, frame),
        CommandPayload::Gather { target } => {
            overlay.order.set(OrderId::MoveToMinerals, frame);
            overlay.target.set(Some(target), frame);
        }
        CommandPayload::ReturnCargo => overlay.order.set(OrderId::ReturnMinerals, frame),
        CommandPayload::Build { what, at } => {
            overlay.order.set(OrderId::PlaceBuilding, frame);
            overlay.target_position.set(at.to_position(), frame);
            overlay.build_type.set(what, frame);
        }
        CommandPayload::Train { .. } => overlay.order.set(OrderId::Train, frame),
        CommandPayload::Morph { what } => {
            overlay.order.set(OrderId::ConstructingBuilding, frame);
            overlay.build_type.set(what, frame);
            overlay.is_morphing.set(true, frame);
        }
        CommandPayload::Research { tech } => {
            overlay.order.set(OrderId::ResearchTech, frame);
            overlay.tech.set(tech, frame);
            overlay.is_researching.set(true, frame);
        }
        CommandPayload::Upgrade { upgrade } => {
            overlay.order.set(OrderId::Upgrade, frame);
            overlay.upgrade.set(upgrade, frame);
            overlay.is_upgrading.set(true, frame);
        }
        CommandPayload::CancelConstruction => {
            overlay.order.set(OrderId::Die, frame);
            overlay.is_constructing.set(false, frame);
        }
        CommandPayload::CancelTrain { .. } => {}
        CommandPayload::CancelMorph => overlay.is_morphing.set(false, frame),
        CommandPayload::CancelResearch => overlay.is_researching.set(false, frame),
        CommandPayload::CancelUpgrade => overlay.is_upgrading.set(false, frame),
        CommandPayload::SetRallyPosition { at } => {
            overlay.order.set(OrderId::RallyPointTile, frame);
            overlay.rally_position.set(at, frame);
        }
        CommandPayload::SetRallyUnit { target } => {
            overlay.order.set(OrderId::RallyPointUnit, frame);
            overlay.rally_unit.set(Some(target), frame);
        }
        CommandPayload::Burrow => {
            overlay.order.set(OrderId::Burrowing, frame);
            overlay.is_burrowed.set(true, frame);
        }
        CommandPayload::Unburrow => {
            overlay.order.set(OrderId::Unburrowing, frame);
            overlay.is_burrowed.set(false, frame);
        }
        CommandPayload::Cloak => {
            overlay.order.set(OrderId::Cloak, frame);
            overlay.is_cloaked.set(true, frame);
        }
        CommandPayload::Decloak => {
            overlay.order.set(OrderId::Decloak, frame);
            overlay.is_cloaked.set(false, frame);
        }
    }
}

/// Finish effects: settling outcomes once a confirming event has arrived.
fn apply_finish_phase(command: &Command, world: &mut World, frame: Frame) {
    let Some(overlay) = world.unit_overlay_mut(command.issuer) else {
        return;
    };
    match command.payload {
        CommandPayload::CancelConstruction => overlay.is_constructing.set(false, frame),
        CommandPayload::CancelMorph => overlay.is_morphing.set(false, frame),
        CommandPayload::CancelResearch => overlay.is_researching.set(false, frame),
        CommandPayload::CancelUpgrade => overlay.is_upgrading.set(false, frame),
        _ => {}
    }
}
