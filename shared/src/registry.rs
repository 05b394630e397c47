use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Identifies a unit type in the externally defined catalogue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UnitTypeId(pub u16);

/// Identifies a researchable tech.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TechId(pub u8);

/// Identifies an upgrade line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UpgradeId(pub u8);

/// Order state predicted by the latency simulator, mirroring the engine's
/// per-unit order field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderId {
    #[default]
    Guard,
    Move,
    AttackMove,
    AttackUnit,
    Patrol,
    Stop,
    HoldPosition,
    PlaceBuilding,
    ConstructingBuilding,
    Train,
    ResearchTech,
    Upgrade,
    Burrowing,
    Unburrowing,
    Cloak,
    Decloak,
    MoveToMinerals,
    ReturnMinerals,
    RallyPointTile,
    RallyPointUnit,
    Die,
}

/// Static capabilities and costs of a unit type, mirroring the subset of the
/// engine's own validation data the simulator and placement solver need.
#[derive(Clone, Copy, Debug)]
pub struct UnitTypeInfo {
    pub mineral_price: u32,
    pub gas_price: u32,
    /// Supply in the engine's doubled internal unit.
    pub supply_required: i32,
    pub supply_provided: i32,
    pub tile_width: i32,
    pub tile_height: i32,
    pub can_move: bool,
    pub can_burrow: bool,
    pub can_cloak: bool,
    pub is_worker: bool,
    pub is_building: bool,
    pub is_producer: bool,
    pub is_resource_depot: bool,
    pub is_resource_container: bool,
    pub is_start_location_class: bool,
    pub builds_addon: bool,
    /// Tight placement padding is reserved around these types; everything
    /// else mobile gets the loose tier.
    pub is_placement_blocker: bool,
    /// Types that additionally blank the 8-connected neighborhood of every
    /// cell the unpadded spacing pass excluded.
    pub spread_padding: bool,
}

impl Default for UnitTypeInfo {
    fn default() -> Self {
        Self {
            mineral_price: 0,
            gas_price: 0,
            supply_required: 0,
            supply_provided: 0,
            tile_width: 1,
            tile_height: 1,
            can_move: false,
            can_burrow: false,
            can_cloak: false,
            is_worker: false,
            is_building: false,
            is_producer: false,
            is_resource_depot: false,
            is_resource_container: false,
            is_start_location_class: false,
            builds_addon: false,
            is_placement_blocker: false,
            spread_padding: false,
        }
    }
}

/// Prices of a researchable tech.
#[derive(Clone, Copy, Debug, Default)]
pub struct TechInfo {
    pub mineral_price: u32,
    pub gas_price: u32,
}

/// Prices of an upgrade's first level.
#[derive(Clone, Copy, Debug, Default)]
pub struct UpgradeInfo {
    pub mineral_price: u32,
    pub gas_price: u32,
}

/// Well-known type ids used throughout the runtime and its tests.
pub mod unit_types {
    use super::UnitTypeId;

    pub const WORKER: UnitTypeId = UnitTypeId(7);
    pub const INFANTRY: UnitTypeId = UnitTypeId(0);
    pub const BURROWER: UnitTypeId = UnitTypeId(37);
    pub const SUPPLY_DEPOT: UnitTypeId = UnitTypeId(109);
    pub const RESOURCE_DEPOT: UnitTypeId = UnitTypeId(106);
    pub const BARRACKS: UnitTypeId = UnitTypeId(111);
    pub const FACTORY: UnitTypeId = UnitTypeId(113);
    pub const MACHINE_SHOP: UnitTypeId = UnitTypeId(120);
    pub const TECH_LAB: UnitTypeId = UnitTypeId(112);
    pub const TURRET: UnitTypeId = UnitTypeId(124);
    pub const REFINERY: UnitTypeId = UnitTypeId(110);
    pub const MINERAL_PATCH: UnitTypeId = UnitTypeId(176);
    pub const GAS_GEYSER: UnitTypeId = UnitTypeId(188);
    pub const START_LOCATION: UnitTypeId = UnitTypeId(214);
}

/// Well-known tech ids.
pub mod techs {
    use super::TechId;

    pub const SIEGE_MODE: TechId = TechId(5);
    pub const BURROWING: TechId = TechId(11);
}

/// Well-known upgrade ids.
pub mod upgrades {
    use super::UpgradeId;

    pub const INFANTRY_WEAPONS: UpgradeId = UpgradeId(0);
    pub const VEHICLE_PLATING: UpgradeId = UpgradeId(5);
}

/// Immutable catalogue of type data, built once at first use and shared.
pub struct Registry {
    units: HashMap<UnitTypeId, UnitTypeInfo>,
    techs: HashMap<TechId, TechInfo>,
    upgrades: HashMap<UpgradeId, UpgradeInfo>,
}

impl Registry {
    pub fn unit(&self, id: UnitTypeId) -> Option<&UnitTypeInfo> {
        self.units.get(&id)
    }

    pub fn tech(&self, id: TechId) -> Option<&TechInfo> {
        self.techs.get(&id)
    }

    pub fn upgrade(&self, id: UpgradeId) -> Option<&UpgradeInfo> {
        self.upgrades.get(&id)
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(build_registry);

pub fn registry() -> &'static Registry {
    &REGISTRY
}

fn build_registry() -> Registry {
    use unit_types::*;

    let mut units = HashMap::new();

    units.insert(
        WORKER,
        UnitTypeInfo {
            mineral_price: 50,
            supply_required: 2,
            can_move: true,
            is_worker: true,
            ..Default::default()
        },
    );
    units.insert(
        INFANTRY,
        UnitTypeInfo {
            mineral_price: 50,
            supply_required: 2,
            can_move: true,
            ..Default::default()
        },
    );
    units.insert(
        BURROWER,
        UnitTypeInfo {
            mineral_price: 75,
            gas_price: 25,
            supply_required: 2,
            can_move: true,
            can_burrow: true,
            ..Default::default()
        },
    );
    units.insert(
        SUPPLY_DEPOT,
        UnitTypeInfo {
            mineral_price: 100,
            supply_provided: 16,
            tile_width: 3,
            tile_height: 2,
            is_building: true,
            ..Default::default()
        },
    );
    units.insert(
        RESOURCE_DEPOT,
        UnitTypeInfo {
            mineral_price: 400,
            supply_provided: 20,
            tile_width: 4,
            tile_height: 3,
            is_building: true,
            is_producer: true,
            is_resource_depot: true,
            builds_addon: true,
            ..Default::default()
        },
    );
    units.insert(
        BARRACKS,
        UnitTypeInfo {
            mineral_price: 150,
            tile_width: 4,
            tile_height: 3,
            is_building: true,
            is_producer: true,
            ..Default::default()
        },
    );
    units.insert(
        FACTORY,
        UnitTypeInfo {
            mineral_price: 200,
            gas_price: 100,
            tile_width: 4,
            tile_height: 3,
            is_building: true,
            is_producer: true,
            builds_addon: true,
            ..Default::default()
        },
    );
    units.insert(
        MACHINE_SHOP,
        UnitTypeInfo {
            mineral_price: 50,
            gas_price: 50,
            tile_width: 2,
            tile_height: 2,
            is_building: true,
            ..Default::default()
        },
    );
    units.insert(
        TECH_LAB,
        UnitTypeInfo {
            mineral_price: 150,
            gas_price: 100,
            tile_width: 3,
            tile_height: 2,
            is_building: true,
            ..Default::default()
        },
    );
    units.insert(
        TURRET,
        UnitTypeInfo {
            mineral_price: 75,
            tile_width: 2,
            tile_height: 2,
            is_building: true,
            spread_padding: true,
            ..Default::default()
        },
    );
    units.insert(
        REFINERY,
        UnitTypeInfo {
            mineral_price: 100,
            tile_width: 4,
            tile_height: 2,
            is_building: true,
            is_resource_container: true,
            ..Default::default()
        },
    );
    units.insert(
        MINERAL_PATCH,
        UnitTypeInfo {
            tile_width: 2,
            tile_height: 1,
            is_resource_container: true,
            is_placement_blocker: true,
            ..Default::default()
        },
    );
    units.insert(
        GAS_GEYSER,
        UnitTypeInfo {
            tile_width: 4,
            tile_height: 2,
            is_resource_container: true,
            is_placement_blocker: true,
            ..Default::default()
        },
    );
    units.insert(
        START_LOCATION,
        UnitTypeInfo {
            tile_width: 4,
            tile_height: 3,
            is_start_location_class: true,
            ..Default::default()
        },
    );

    let mut techs = HashMap::new();
    techs.insert(
        techs::SIEGE_MODE,
        TechInfo {
            mineral_price: 150,
            gas_price: 150,
        },
    );
    techs.insert(
        techs::BURROWING,
        TechInfo {
            mineral_price: 100,
            gas_price: 100,
        },
    );

    let mut upgrades = HashMap::new();
    upgrades.insert(
        upgrades::INFANTRY_WEAPONS,
        UpgradeInfo {
            mineral_price: 100,
            gas_price: 100,
        },
    );
    upgrades.insert(
        upgrades::VEHICLE_PLATING,
        UpgradeInfo {
            mineral_price: 100,
            gas_price: 100,
        },
    );

    Registry {
        units,
        techs,
        upgrades,
    }
}
