use broodlink_shared::TilePosition;

/// Candidate grid over a local search window.
///
/// Cells are tri-state in effect: outside the window, blocked, or still a
/// candidate. A single-slot checkpoint buffer supports the pipeline's
/// rollback-or-commit steps; it holds at most one prior state and rollback
/// restores exactly that state.
pub struct PlacementGrid {
    origin: TilePosition,
    size: i32,
    cells: Vec<bool>,
    checkpoint: Option<Vec<bool>>,
}

impl PlacementGrid {
    pub fn new(origin: TilePosition, size: i32) -> Self {
        Self {
            origin,
            size,
            cells: vec![false; (size * size) as usize],
            checkpoint: None,
        }
    }

    pub fn origin(&self) -> TilePosition {
        self.origin
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    fn index(&self, at: TilePosition) -> Option<usize> {
        let x = at.x - self.origin.x;
        let y = at.y - self.origin.y;
        if x < 0 || y < 0 || x >= self.size || y >= self.size {
            return None;
        }
        Some((y * self.size + x) as usize)
    }

    pub fn contains(&self, at: TilePosition) -> bool {
        self.index(at).is_some()
    }

    pub fn mark(&mut self, at: TilePosition) {
        if let Some(index) = self.index(at) {
            self.cells[index] = true;
        }
    }

    pub fn clear(&mut self, at: TilePosition) {
        if let Some(index) = self.index(at) {
            self.cells[index] = false;
        }
    }

    pub fn is_candidate(&self, at: TilePosition) -> bool {
        self.index(at).map(|index| self.cells[index]).unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|cell| *cell)
    }

    pub fn candidate_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell).count()
    }

    /// Remaining candidates in row-major window order. The deterministic
    /// iteration order is what makes tie-breaks reproducible.
    pub fn candidates(&self) -> impl Iterator<Item = TilePosition> + '_ {
        let origin = self.origin;
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(index, cell)| {
            if !*cell {
                return None;
            }
            let index = index as i32;
            Some(TilePosition::new(
                origin.x + index % size,
                origin.y + index / size,
            ))
        })
    }

    /// Copies the current state into the single checkpoint slot, replacing
    /// whatever was there.
    pub fn checkpoint(&mut self) {
        self.checkpoint = Some(self.cells.clone());
    }

    /// Restores the checkpointed state. No deeper history exists: calling
    /// this twice in a row without a new checkpoint restores nothing the
    /// second time.
    pub fn rollback(&mut self) {
        if let Some(saved) = self.checkpoint.take() {
            self.cells = saved;
        }
    }

    /// Discards the checkpoint, keeping the current state.
    pub fn commit(&mut self) {
        self.checkpoint = None;
    }
}
