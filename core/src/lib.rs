pub mod board;
pub mod catalog;
pub mod session;
pub mod shuffle;

pub use board::{Board, Tile, GRID_SIZE, TILE_COUNT};
pub use catalog::{
    photo_by_slug, pick_photo, PhotoEntry, DEFAULT_PHOTO_SLUG, PHOTO_CATALOG, SOURCE_IMAGE_SIZE,
};
pub use session::{ClickOutcome, GameSession, PUZZLE_SEED};
pub use shuffle::{
    count_inversions, is_solvable, rand_unit, scramble_seed, shuffle_order, solvable_order,
    splitmix32,
};
