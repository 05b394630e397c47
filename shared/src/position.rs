use std::ops::{Add, Sub};

use crate::constants::TILE_PIXELS;

/// A point in pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// A point in build-tile coordinates (one tile is 32 pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TilePosition {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The engine's integer octile distance approximation.
    ///
    /// This is reproduced bit-for-bit from the engine so that search results
    /// (notably build-location selection) agree with what the engine itself
    /// would pick. It is intentionally not a Euclidean distance.
    pub fn approx_distance(&self, other: &Position) -> u32 {
        approx_distance(
            self.x.abs_diff(other.x),
            self.y.abs_diff(other.y),
        )
    }

    pub fn to_tile(&self) -> TilePosition {
        TilePosition::new(self.x / TILE_PIXELS, self.y / TILE_PIXELS)
    }
}

impl TilePosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Octile approximation in tile units. Same formula as
    /// [`Position::approx_distance`], applied to tile coordinates.
    pub fn approx_distance(&self, other: &TilePosition) -> u32 {
        approx_distance(
            self.x.abs_diff(other.x),
            self.y.abs_diff(other.y),
        )
    }

    /// Pixel position of the tile's top-left corner.
    pub fn to_position(&self) -> Position {
        Position::new(self.x * TILE_PIXELS, self.y * TILE_PIXELS)
    }
}

/// `min <= max/4` degenerates to `max`; otherwise a shift-and-add blend of
/// the two axes. Matches the engine's fixed-point arithmetic exactly.
fn approx_distance(dx: u32, dy: u32) -> u32 {
    let (max, min) = if dx > dy { (dx, dy) } else { (dy, dx) };
    if min <= (max >> 2) {
        return max;
    }
    let min_calc = (3 * min) >> 3;
    (min_calc >> 5) + min_calc + max - (max >> 4) - (max >> 6)
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add for TilePosition {
    type Output = TilePosition;

    fn add(self, rhs: TilePosition) -> TilePosition {
        TilePosition::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for TilePosition {
    type Output = TilePosition;

    fn sub(self, rhs: TilePosition) -> TilePosition {
        TilePosition::new(self.x - rhs.x, self.y - rhs.y)
    }
}
