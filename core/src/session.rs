use crate::board::{Board, GRID_SIZE};
use crate::catalog::{pick_photo, PhotoEntry};
use crate::shuffle::solvable_order;

pub const PUZZLE_SEED: u32 = 0x5EED_1515;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Rejected,
    Moved,
    Solved,
}

#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    started: bool,
    photo: &'static PhotoEntry,
}

impl GameSession {
    pub fn new(photo: &'static PhotoEntry) -> Self {
        Self {
            board: Board::solved(GRID_SIZE),
            started: false,
            photo,
        }
    }

    pub fn fresh(seed: u32, previous_slug: Option<&str>) -> Self {
        let mut session = Self::new(pick_photo(seed, previous_slug));
        session.scramble(seed);
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn photo(&self) -> &'static PhotoEntry {
        self.photo
    }

    pub fn round_over(&self) -> bool {
        self.board.empty_slot_parked()
    }

    pub fn mark_started(&mut self) {
        self.started = true;
    }

    pub fn scramble(&mut self, seed: u32) {
        let grid_size = self.board.grid_size();
        let (order, _empty_slot) = solvable_order(seed, grid_size);
        if let Some(board) = Board::from_order(&order, grid_size) {
            self.board = board;
        }
        self.started = false;
    }

    pub fn handle_click(&mut self, slot: usize) -> ClickOutcome {
        if slot == self.board.empty_slot() {
            return ClickOutcome::Ignored;
        }
        self.mark_started();
        if !self.board.try_move(slot) {
            return ClickOutcome::Rejected;
        }
        if self.board.is_complete() {
            self.started = false;
            self.board.park_empty_slot();
            ClickOutcome::Solved
        } else {
            ClickOutcome::Moved
        }
    }
}
