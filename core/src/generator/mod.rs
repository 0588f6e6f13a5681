use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

/// Produces the mine positions a new board is built from.
///
/// Implementations must yield distinct, in-range positions so the output can
/// be fed straight into `Board::from_mine_coords`.
pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> Vec<Coord2>;
}
