use log::trace;

use broodlink_shared::{registry, TilePosition, UnitTypeId, UnitTypeInfo};

use crate::placement::grid::PlacementGrid;
use crate::placement::{Footprint, FootprintKind, PlacementOracle, TileRect};

/// Side of the square search window centered on the desired position.
pub const PLACEMENT_WINDOW_TILES: i32 = 64;

/// Padding tiers around blocking units, in tiles.
const TIGHT_PADDING: i32 = 1;
const LOOSE_PADDING: i32 = 2;

/// Directional line templates stepped across the grid to find thin
/// corridors: a candidate flanked by blocked tiles on both ends of any
/// template is a corridor cell. Fixed table; order matters for parity.
const CORRIDOR_TEMPLATES: &[[(i32, i32); 2]] = &[
    [(-1, 0), (1, 0)],
    [(0, -1), (0, 1)],
    [(-1, -1), (1, 1)],
    [(1, -1), (-1, 1)],
];

/// Searches for a buildable location for `utype` near `desired`.
///
/// Runs the ordered filter pipeline over a local grid window; each step only
/// removes candidates, and checkpointed steps roll back rather than empty
/// the set. The best candidate beyond `max_range` (in tiles) is remembered
/// as a fallback and preferred over returning nothing. When the oracle
/// reports a region center for `desired`, one re-centered pass runs before
/// giving up on in-range results.
///
/// Deterministic: identical inputs and map snapshot give identical output.
pub fn find_build_location(
    oracle: &dyn PlacementOracle,
    utype: UnitTypeId,
    desired: TilePosition,
    max_range: u32,
    ground_only: bool,
) -> Option<TilePosition> {
    let Some(info) = registry().unit(utype) else {
        return None;
    };

    let mut fallback = None;
    if let Some(grid) = run_pipeline(oracle, utype, info, desired, desired, ground_only) {
        let selection = select(&grid, desired, max_range);
        if selection.within.is_some() {
            return selection.within;
        }
        fallback = selection.fallback;
    }

    // One more pass re-centered on the region center, when there is one.
    if let Some(center) = oracle.region_center(desired) {
        if center != desired {
            trace!("Re-centering placement search on region center {:?}", center);
            if let Some(grid) = run_pipeline(oracle, utype, info, center, desired, ground_only) {
                let selection = select(&grid, center, max_range);
                if selection.within.is_some() {
                    return selection.within;
                }
                if fallback.is_none() {
                    fallback = selection.fallback;
                }
            }
        }
    }

    fallback
}

struct Selection {
    within: Option<TilePosition>,
    fallback: Option<TilePosition>,
}

/// Minimum approximate tile-distance from the building's top-left tile to
/// the search center, row-major tie-break.
fn select(grid: &PlacementGrid, center: TilePosition, max_range: u32) -> Selection {
    let mut best: Option<(TilePosition, u32)> = None;
    for candidate in grid.candidates() {
        let distance = candidate.approx_distance(&center);
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((candidate, distance)),
        }
    }
    match best {
        Some((tile, distance)) if distance <= max_range => Selection {
            within: Some(tile),
            fallback: None,
        },
        Some((tile, _)) => Selection {
            within: None,
            fallback: Some(tile),
        },
        None => Selection {
            within: None,
            fallback: None,
        },
    }
}

fn run_pipeline(
    oracle: &dyn PlacementOracle,
    utype: UnitTypeId,
    info: &UnitTypeInfo,
    center: TilePosition,
    desired: TilePosition,
    ground_only: bool,
) -> Option<PlacementGrid> {
    let origin = TilePosition::new(
        center.x - PLACEMENT_WINDOW_TILES / 2,
        center.y - PLACEMENT_WINDOW_TILES / 2,
    );
    let mut grid = PlacementGrid::new(origin, PLACEMENT_WINDOW_TILES);
    let window = TileRect::at(origin, PLACEMENT_WINDOW_TILES, PLACEMENT_WINDOW_TILES);
    let footprints = oracle.footprints(window);

    // 1. Seed from the buildability oracle (addon footprint included there).
    for tile in window_tiles(&grid) {
        if oracle.is_buildable(utype, tile) {
            grid.mark(tile);
        }
    }

    // 2. Ground reachability from the desired position.
    if ground_only {
        for tile in collected_candidates(&grid) {
            if !oracle.has_ground_path(desired, tile) {
                grid.clear(tile);
            }
        }
    }

    // 3. World bounds: the whole footprint must fit on the map.
    let (map_width, map_height) = oracle.map_size();
    for tile in collected_candidates(&grid) {
        if tile.x < 0
            || tile.y < 0
            || tile.x + info.tile_width > map_width
            || tile.y + info.tile_height > map_height
        {
            grid.clear(tile);
        }
    }

    // 4. Nothing survived the hard filters: abort with "none".
    if grid.is_empty() {
        return None;
    }

    // 5. Same elevation as the desired position.
    let desired_height = oracle.ground_height(desired);
    checkpointed(&mut grid, |grid| {
        for tile in collected_candidates(grid) {
            if oracle.ground_height(tile) != desired_height {
                grid.clear(tile);
            }
        }
    });

    // 6. Keep clear of existing structures and resource containers; resource
    // depots are exempt so expansions can hug their resources.
    if !info.is_resource_depot {
        checkpointed(&mut grid, |grid| {
            for footprint in &footprints {
                let padded = match footprint.kind {
                    FootprintKind::Structure | FootprintKind::ResourceContainer => {
                        footprint.rect.expand(1)
                    }
                    _ => continue,
                };
                clear_overlapping(grid, info, &padded);
            }
        });
    }

    // 7. Keep off addon-reservation footprints.
    if !info.is_resource_depot {
        checkpointed(&mut grid, |grid| {
            for footprint in &footprints {
                if footprint.kind == FootprintKind::AddonReservation {
                    clear_overlapping(grid, info, &footprint.rect);
                }
            }
        });
    }

    // 8. Tiered padding around blocking units; spread types also blank the
    // 8-connected neighborhood of every cell the unpadded pass excluded.
    // One checkpoint covers the whole step.
    checkpointed(&mut grid, |grid| {
        let mut unpadded_excluded = Vec::new();
        for footprint in &footprints {
            let FootprintKind::Blocking(blocker) = footprint.kind else {
                continue;
            };
            for tile in collected_candidates(grid) {
                let building = TileRect::at(tile, info.tile_width, info.tile_height);
                if building.intersects(&footprint.rect) {
                    unpadded_excluded.push(tile);
                }
            }
            let tight = registry()
                .unit(blocker)
                .map(|blocker_info| blocker_info.is_placement_blocker)
                .unwrap_or(false);
            let padding = if tight { TIGHT_PADDING } else { LOOSE_PADDING };
            clear_overlapping(grid, info, &footprint.rect.expand(padding));
        }
        if info.spread_padding {
            for tile in unpadded_excluded {
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        grid.clear(TilePosition::new(tile.x + dx, tile.y + dy));
                    }
                }
            }
        }
    });

    // 9. Thin corridors; start-location placements skip this so they can
    // occupy the exact ramp-side slots the map author intended.
    if !info.is_start_location_class {
        checkpointed(&mut grid, |grid| {
            let mut corridor_cells = Vec::new();
            for tile in collected_candidates(grid) {
                for template in CORRIDOR_TEMPLATES {
                    let blocked = template.iter().all(|(dx, dy)| {
                        let flank = TilePosition::new(tile.x + dx, tile.y + dy);
                        grid.contains(flank) && !grid.is_candidate(flank)
                    });
                    if blocked {
                        corridor_cells.push(tile);
                        break;
                    }
                }
            }
            for tile in corridor_cells {
                grid.clear(tile);
            }
        });
    }

    Some(grid)
}

/// Runs one removal step under a checkpoint, rolling back if it would
/// empty the candidate set.
fn checkpointed<F: FnOnce(&mut PlacementGrid)>(grid: &mut PlacementGrid, step: F) {
    grid.checkpoint();
    step(grid);
    if grid.is_empty() {
        grid.rollback();
    } else {
        grid.commit();
    }
}

fn clear_overlapping(grid: &mut PlacementGrid, info: &UnitTypeInfo, reserved: &TileRect) {
    for tile in collected_candidates(grid) {
        let building = TileRect::at(tile, info.tile_width, info.tile_height);
        if building.intersects(reserved) {
            grid.clear(tile);
        }
    }
}

fn window_tiles(grid: &PlacementGrid) -> Vec<TilePosition> {
    let origin = grid.origin();
    let size = grid.size();
    let mut tiles = Vec::with_capacity((size * size) as usize);
    for y in 0..size {
        for x in 0..size {
            tiles.push(TilePosition::new(origin.x + x, origin.y + y));
        }
    }
    tiles
}

/// Snapshot of the current candidates so removal passes are evaluated
/// against a stable view instead of their own partial effects.
fn collected_candidates(grid: &PlacementGrid) -> Vec<TilePosition> {
    grid.candidates().collect()
}
