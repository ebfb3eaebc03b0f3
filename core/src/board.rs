pub const GRID_SIZE: usize = 4;
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub home: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    tiles: Vec<Tile>,
    empty_slot: usize,
    grid_size: usize,
}

impl Board {
    pub fn solved(grid_size: usize) -> Self {
        let total = grid_size * grid_size;
        let tiles = (0..total).map(|home| Tile { home }).collect();
        Self {
            tiles,
            empty_slot: total.saturating_sub(1),
            grid_size,
        }
    }

    pub fn from_order(order: &[usize], grid_size: usize) -> Option<Self> {
        let total = grid_size * grid_size;
        if order.len() != total || total == 0 {
            return None;
        }
        let mut seen = vec![false; total];
        for &home in order {
            if home >= total || seen[home] {
                return None;
            }
            seen[home] = true;
        }
        let empty_slot = order.iter().position(|&home| home == total - 1)?;
        let tiles = order.iter().map(|&home| Tile { home }).collect();
        Some(Self {
            tiles,
            empty_slot,
            grid_size,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, slot: usize) -> Option<Tile> {
        self.tiles.get(slot).copied()
    }

    pub fn empty_slot(&self) -> usize {
        self.empty_slot
    }

    pub fn blank_home(&self) -> usize {
        self.tiles.len().saturating_sub(1)
    }

    pub fn order(&self) -> Vec<usize> {
        self.tiles.iter().map(|tile| tile.home).collect()
    }

    pub fn is_adjacent_to_empty(&self, slot: usize) -> bool {
        if slot >= self.tiles.len() || self.empty_slot >= self.tiles.len() {
            return false;
        }
        let row_delta = (slot / self.grid_size).abs_diff(self.empty_slot / self.grid_size);
        let col_delta = (slot % self.grid_size).abs_diff(self.empty_slot % self.grid_size);
        (row_delta == 1 && col_delta == 0) || (row_delta == 0 && col_delta == 1)
    }

    pub fn try_move(&mut self, clicked: usize) -> bool {
        if !self.is_adjacent_to_empty(clicked) {
            return false;
        }
        self.tiles.swap(clicked, self.empty_slot);
        self.empty_slot = clicked;
        true
    }

    pub fn is_complete(&self) -> bool {
        self.tiles.iter().enumerate().all(|(slot, tile)| tile.home == slot)
    }

    // Parks the empty slot one past the last index so no slot comparison
    // can match it again until the next scramble.
    pub fn park_empty_slot(&mut self) {
        self.empty_slot = self.tiles.len();
    }

    pub fn empty_slot_parked(&self) -> bool {
        self.empty_slot >= self.tiles.len()
    }
}
