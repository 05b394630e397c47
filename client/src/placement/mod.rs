mod grid;
mod solver;

pub use grid::PlacementGrid;
pub use solver::{find_build_location, PLACEMENT_WINDOW_TILES};

use broodlink_shared::{TilePosition, UnitTypeId};

/// Axis-aligned rectangle in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl TileRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at(origin: TilePosition, width: i32, height: i32) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    /// One past the rightmost tile.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom tile.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn expand(&self, margin: i32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2,
            self.height + margin * 2,
        )
    }

    pub fn intersects(&self, other: &TileRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// What occupies (part of) the search window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FootprintKind {
    /// Existing friendly or neutral structure.
    Structure,
    /// Mineral patch, gas geyser, refinery: kept clear around depots' paths.
    ResourceContainer,
    /// Tiles reserved for a future addon of an existing structure.
    AddonReservation,
    /// A unit standing in the area; its type selects the padding tier.
    Blocking(UnitTypeId),
}

/// One occupied rectangle reported by the oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    pub kind: FootprintKind,
    pub rect: TileRect,
}

/// Read-only map and entity queries the placement search runs against.
///
/// The solver owns the algorithm; implementations own the data. All queries
/// must be stable for the duration of one `find_build_location` call.
pub trait PlacementOracle {
    /// Map dimensions in tiles.
    fn map_size(&self) -> (i32, i32);

    /// Whether the type's full footprint fits at `at`. Must account for the
    /// addon footprint of addon-capable types.
    fn is_buildable(&self, utype: UnitTypeId, at: TilePosition) -> bool;

    /// Whether ground units can walk from `from` to `to`.
    fn has_ground_path(&self, from: TilePosition, to: TilePosition) -> bool;

    /// Terrain elevation at a tile.
    fn ground_height(&self, at: TilePosition) -> i32;

    /// Everything occupying the given window.
    fn footprints(&self, window: TileRect) -> Vec<Footprint>;

    /// Center of the region containing `near`, when the search is running
    /// relative to a region target. `None` disables the re-centered pass.
    fn region_center(&self, near: TilePosition) -> Option<TilePosition>;
}
