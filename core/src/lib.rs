#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord, mines: CellCount) -> Self {
        let size = size.clamp(1, Coord::MAX);
        let mines = mines.clamp(1, area(size));
        Self::new_unchecked(size, mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }
}

/// A square grid of tiles, the sole state of one game.
///
/// The board is an immutable value: `toggle_mark` and `reveal` take `&self`
/// and return a new `Board`. The caller keeps the latest value and discards
/// prior ones; there is no in-place mutation across operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: Array2<Tile>,
}

impl Board {
    /// Builds a `size x size` board with all tiles hidden and mines at
    /// exactly the given positions.
    ///
    /// Positions must be in range and distinct; violations are rejected
    /// rather than silently collapsed.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut tiles: Array2<Tile> = Array2::default([size as usize, size as usize]);

        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            let tile = &mut tiles[coords.as_index()];
            if tile.mine {
                return Err(GameError::DuplicateMine);
            }
            tile.mine = true;
        }

        Ok(Self { tiles })
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord {
        self.tiles.dim().0.try_into().unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        area(self.size())
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.tiles[coords.as_index()]
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_tiles(|tile| tile.mine)
    }

    /// Marked-tile count, recomputed by scanning; nothing is cached between
    /// calls.
    pub fn marked_count(&self) -> CellCount {
        self.count_tiles(|tile| tile.status == TileStatus::Marked)
    }

    /// Number of mines among the up-to-8 in-bounds neighbors of `coords`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.neighbors(coords)
            .filter(|&pos| self[pos].mine)
            .count() as u8
    }

    pub(crate) fn neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }

    pub(crate) fn tiles(&self) -> &Array2<Tile> {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut Array2<Tile> {
        &mut self.tiles
    }

    fn count_tiles(&self, predicate: impl Fn(&Tile) -> bool) -> CellCount {
        self.tiles.iter().filter(|tile| predicate(tile)).count() as CellCount
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.as_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_places_exactly_the_given_mines() {
        let board = Board::from_mine_coords(3, &[(0, 1), (2, 2)]).unwrap();

        let mut mines = 0;
        for x in 0..3 {
            for y in 0..3 {
                let tile = board.tile_at((x, y));
                assert_eq!(tile.status, TileStatus::Hidden);
                if tile.mine {
                    mines += 1;
                }
            }
        }
        assert_eq!(mines, 2);
        assert!(board[(0, 1)].mine);
        assert!(board[(2, 2)].mine);
        assert_eq!(board.mine_count(), 2);
    }

    #[test]
    fn factory_rejects_out_of_range_mines() {
        assert_eq!(
            Board::from_mine_coords(3, &[(3, 0)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            Board::from_mine_coords(3, &[(0, 200)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn factory_rejects_duplicate_mines() {
        assert_eq!(
            Board::from_mine_coords(3, &[(1, 1), (1, 1)]),
            Err(GameError::DuplicateMine)
        );
    }

    #[test]
    fn adjacent_mine_count_clips_at_border() {
        let board = Board::from_mine_coords(3, &[(1, 1)]).unwrap();

        assert_eq!(board.adjacent_mine_count((0, 0)), 1);
        assert_eq!(board.adjacent_mine_count((1, 1)), 0);

        let board = Board::from_mine_coords(2, &[(0, 0), (1, 0), (0, 1)]).unwrap();
        assert_eq!(board.adjacent_mine_count((1, 1)), 3);
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let board = Board::from_mine_coords(2, &[]).unwrap();

        assert_eq!(board.validate_coords((1, 1)), Ok((1, 1)));
        assert_eq!(board.validate_coords((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords((0, 2)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn config_clamps_size_and_mines() {
        let config = GameConfig::new(0, 0);
        assert_eq!(config.size, 1);
        assert_eq!(config.mines, 1);

        let config = GameConfig::new(3, 100);
        assert_eq!(config.mines, config.total_cells());
    }
}
