mod player;
mod prediction;
mod unit;

pub use player::{PlayerData, PlayerView};
pub use prediction::{AccumCell, FrameCell, PlayerOverlay, UnitOverlay};
pub use unit::{TrainingQueue, UnitData, UnitView};

use std::collections::HashMap;

use broodlink_shared::{Frame, PlayerId, UnitId};

struct UnitEntry {
    data: UnitData,
    overlay: UnitOverlay,
}

struct PlayerEntry {
    data: PlayerData,
    overlay: PlayerOverlay,
}

/// Frame-stamped world state: authoritative snapshots refreshed once per
/// exchange, plus the speculative overlays the latency simulator writes.
///
/// Overlays are never deleted when the frame advances; they simply stop
/// being valid and are ignored at the read site.
pub struct World {
    frame: Frame,
    latcom: bool,
    units: HashMap<UnitId, UnitEntry>,
    players: HashMap<PlayerId, PlayerEntry>,
}

impl World {
    pub fn new(latency_compensation: bool) -> Self {
        Self {
            frame: 0,
            latcom: latency_compensation,
            units: HashMap::new(),
            players: HashMap::new(),
        }
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn latency_compensation(&self) -> bool {
        self.latcom
    }

    pub fn set_latency_compensation(&mut self, enabled: bool) {
        self.latcom = enabled;
    }

    /// Replaces the authoritative snapshots for a new frame. Overlays of
    /// surviving entities are kept (their frame stamps gate staleness);
    /// entities absent from the snapshot are dropped entirely.
    pub fn refresh(&mut self, frame: Frame, units: Vec<UnitData>, players: Vec<PlayerData>) {
        self.frame = frame;

        let mut fresh_units = HashMap::with_capacity(units.len());
        for data in units {
            let overlay = self
                .units
                .remove(&data.id)
                .map(|entry| entry.overlay)
                .unwrap_or_default();
            fresh_units.insert(data.id, UnitEntry { data, overlay });
        }
        self.units = fresh_units;

        let mut fresh_players = HashMap::with_capacity(players.len());
        for data in players {
            let overlay = self
                .players
                .remove(&data.id)
                .map(|entry| entry.overlay)
                .unwrap_or_default();
            fresh_players.insert(data.id, PlayerEntry { data, overlay });
        }
        self.players = fresh_players;
    }

    pub fn contains_unit(&self, unit: UnitId) -> bool {
        self.units.contains_key(&unit)
    }

    pub fn unit(&self, unit: UnitId) -> Option<UnitView<'_>> {
        self.units
            .get(&unit)
            .map(|entry| UnitView::new(&entry.data, &entry.overlay, self.frame, self.latcom))
    }

    pub fn player(&self, player: PlayerId) -> Option<PlayerView<'_>> {
        self.players
            .get(&player)
            .map(|entry| PlayerView::new(&entry.data, &entry.overlay, self.frame, self.latcom))
    }

    pub fn unit_ids(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.units.keys().copied()
    }

    pub fn remove_unit(&mut self, unit: UnitId) {
        self.units.remove(&unit);
    }

    pub(crate) fn unit_data(&self, unit: UnitId) -> Option<&UnitData> {
        self.units.get(&unit).map(|entry| &entry.data)
    }

    pub(crate) fn unit_overlay_mut(&mut self, unit: UnitId) -> Option<&mut UnitOverlay> {
        self.units.get_mut(&unit).map(|entry| &mut entry.overlay)
    }

    pub(crate) fn player_overlay_mut(&mut self, player: PlayerId) -> Option<&mut PlayerOverlay> {
        self.players.get_mut(&player).map(|entry| &mut entry.overlay)
    }
}
