use hashbrown::HashSet;

use super::*;

/// Purely random placement: distinct positions are drawn until the requested
/// mine count is reached. Deterministic for a given seed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> Vec<Coord2> {
        use rand::prelude::*;

        let total_cells = config.total_cells();

        // optimize for full boards
        if config.mines >= total_cells {
            if config.mines > total_cells {
                log::warn!(
                    "Board cannot fit {} mines, placing {} instead",
                    config.mines,
                    total_cells
                );
            }
            return (0..config.size)
                .flat_map(|x| (0..config.size).map(move |y| (x, y)))
                .collect();
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut positions = Vec::with_capacity(config.mines as usize);
        let mut seen: HashSet<Coord2> = HashSet::with_capacity(config.mines as usize);

        while positions.len() < config.mines as usize {
            let coords = (
                rng.random_range(0..config.size),
                rng.random_range(0..config.size),
            );
            if seen.insert(coords) {
                positions.push(coords);
            }
        }

        log::debug!(
            "Placed {} mines on a {size}x{size} board",
            config.mines,
            size = config.size
        );
        positions
    }
}
