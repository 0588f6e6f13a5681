use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

impl Board {
    /// Toggles the mark on the tile at `coords`, producing a new board.
    ///
    /// Unmarking is always allowed; marking is allowed only while the number
    /// of marked tiles is strictly below `total_mines`. Revealed tiles and an
    /// exhausted budget leave the board unchanged.
    pub fn toggle_mark(&self, coords: Coord2, total_mines: CellCount) -> Result<Board> {
        use TileStatus::*;

        let coords = self.validate_coords(coords)?;

        let status = match self[coords].status {
            Marked => Hidden,
            Hidden if self.marked_count() < total_mines => Marked,
            Hidden => {
                log::debug!("Mark budget of {} exhausted, ignoring {:?}", total_mines, coords);
                return Ok(self.clone());
            }
            Number(_) | Mine => return Ok(self.clone()),
        };

        let mut next = self.clone();
        next.tiles_mut()[coords.as_index()].status = status;
        Ok(next)
    }

    /// Reveals the tile at `coords`, producing a new board.
    ///
    /// Only hidden tiles change: a mined tile is exposed as `Mine`, a safe
    /// tile becomes `Number` with its adjacent-mine count, and a zero count
    /// opens the whole connected zero region. Marked tiles must be unmarked
    /// before they can be revealed.
    pub fn reveal(&self, coords: Coord2) -> Result<Board> {
        let coords = self.validate_coords(coords)?;

        if self[coords].status != TileStatus::Hidden {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        next.reveal_in_place(coords);
        Ok(next)
    }

    /// True iff every tile is either revealed as a `Number` or is a mine that
    /// was never exposed. Flag state on mines is irrelevant.
    pub fn is_won(&self) -> bool {
        self.tiles().iter().all(|tile| {
            matches!(tile.status, TileStatus::Number(_)) || (tile.mine && tile.status.is_unrevealed())
        })
    }

    /// True iff at least one mine has been exposed.
    pub fn is_lost(&self) -> bool {
        self.tiles().iter().any(|tile| tile.status == TileStatus::Mine)
    }

    fn reveal_in_place(&mut self, coords: Coord2) {
        if self[coords].mine {
            self.tiles_mut()[coords.as_index()].status = TileStatus::Mine;
            log::debug!("Mine exposed at {:?}", coords);
            return;
        }

        let count = self.adjacent_mine_count(coords);
        self.tiles_mut()[coords.as_index()].status = TileStatus::Number(count);
        log::debug!("Revealed tile at {:?}, mine count: {}", coords, count);

        if count != 0 {
            return;
        }

        let mut visited = BTreeSet::from([coords]);
        let mut to_visit: VecDeque<_> = self
            .neighbors(coords)
            .filter(|&pos| self[pos].status == TileStatus::Hidden)
            .collect();
        log::trace!(
            "Starting flood fill from {:?}, initial neighbors: {:?}",
            coords,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            // status is re-checked on entry; marked and already numbered
            // tiles stay put
            if self[visit_coords].status != TileStatus::Hidden {
                continue;
            }

            let visit_count = self.adjacent_mine_count(visit_coords);
            self.tiles_mut()[visit_coords.as_index()].status = TileStatus::Number(visit_count);
            log::trace!(
                "Flood revealed tile at {:?}, mine count: {}",
                visit_coords,
                visit_count
            );

            if visit_count == 0 {
                to_visit.extend(
                    self.neighbors(visit_coords)
                        .filter(|&pos| self[pos].status == TileStatus::Hidden)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }
}
