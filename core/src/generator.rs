use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

use crate::*;

/// Generation strategy producing the mine positions for a new game.
pub trait LayoutGenerator {
    fn generate(self) -> MineLayout;
}

/// Purely random placement: rejection-samples linear cell indices into a
/// growing set until it holds ten distinct positions, which keeps the result
/// uniform over distinct 10-subsets of the 81 cells.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self) -> MineLayout {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut picked: BTreeSet<CellCount> = BTreeSet::new();
        while (picked.len() as CellCount) < MINE_COUNT {
            picked.insert(rng.random_range(0..TOTAL_CELLS));
        }
        MineLayout::from_cell_indices(picked).expect("sampled indices stay within the grid")
    }
}
