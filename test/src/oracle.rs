use broodlink_client::{Footprint, PlacementOracle, TileRect};
use broodlink_shared::{registry, TilePosition, UnitTypeId};

/// Placement oracle over an ASCII map.
///
/// `'.'` is buildable at elevation 0, `'#'` is unbuildable, a digit is
/// buildable at that elevation, `'x'` is buildable but unreachable by
/// ground. Footprints and the region center are scripted separately.
pub struct GridOracle {
    width: i32,
    height: i32,
    rows: Vec<Vec<char>>,
    pub footprints: Vec<Footprint>,
    pub region_center: Option<TilePosition>,
}

impl GridOracle {
    pub fn from_map(map: &[&str]) -> Self {
        let rows: Vec<Vec<char>> = map.iter().map(|row| row.chars().collect()).collect();
        let height = rows.len() as i32;
        let width = rows.first().map(|row| row.len()).unwrap_or(0) as i32;
        Self {
            width,
            height,
            rows,
            footprints: Vec::new(),
            region_center: None,
        }
    }

    /// A uniform all-buildable map.
    pub fn open(width: i32, height: i32) -> Self {
        let row = ".".repeat(width as usize);
        let rows: Vec<&str> = std::iter::repeat(row.as_str())
            .take(height as usize)
            .collect();
        Self::from_map(&rows)
    }

    fn cell(&self, at: TilePosition) -> Option<char> {
        if at.x < 0 || at.y < 0 || at.x >= self.width || at.y >= self.height {
            return None;
        }
        Some(self.rows[at.y as usize][at.x as usize])
    }

    fn tile_open(&self, at: TilePosition) -> bool {
        matches!(self.cell(at), Some(c) if c != '#')
    }
}

impl PlacementOracle for GridOracle {
    fn map_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn is_buildable(&self, utype: UnitTypeId, at: TilePosition) -> bool {
        let Some(info) = registry().unit(utype) else {
            return false;
        };
        let mut rects = vec![TileRect::at(at, info.tile_width, info.tile_height)];
        if info.builds_addon {
            rects.push(TileRect::new(
                at.x + info.tile_width,
                at.y + info.tile_height - 2,
                2,
                2,
            ));
        }
        rects.iter().all(|rect| {
            (rect.y..rect.bottom()).all(|y| {
                (rect.x..rect.right()).all(|x| self.tile_open(TilePosition::new(x, y)))
            })
        })
    }

    fn has_ground_path(&self, _from: TilePosition, to: TilePosition) -> bool {
        self.cell(to) != Some('x')
    }

    fn ground_height(&self, at: TilePosition) -> i32 {
        match self.cell(at) {
            Some(c) if c.is_ascii_digit() => c as i32 - '0' as i32,
            _ => 0,
        }
    }

    fn footprints(&self, window: TileRect) -> Vec<Footprint> {
        self.footprints
            .iter()
            .copied()
            .filter(|footprint| footprint.rect.intersects(&window))
            .collect()
    }

    fn region_center(&self, _near: TilePosition) -> Option<TilePosition> {
        self.region_center
    }
}
