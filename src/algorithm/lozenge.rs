//! Monotone lozenge tiling chain on path systems
//!
//! An update picks a free path, an interior position and a direction, and
//! tries to move that single cell of the path by one unit. The move is applied
//! only when the path keeps unit steps and stays strictly between its
//! neighbours; otherwise the state is left as it was.

use rand::Rng;

use crate::algorithm::chain::MonotoneChain;
use crate::spatial::hexagon::HexagonSize;
use crate::spatial::paths::PathSystem;
use crate::spatial::tiles::{TileSet, extract_tiles};

/// Direction of a local move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Push {
    /// Raise the path by one unit
    Up,
    /// Lower the path by one unit
    Down,
}

/// Candidate move of a single path cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalMove {
    /// Path index, `1..=c` for draws from the chain
    pub path: usize,
    /// Position along the path, `1..a+b` for draws from the chain
    pub position: usize,
    /// Whether to push up or down
    pub direction: Push,
}

/// Markov chain whose stationary distribution is uniform over tilings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LozengeTilingChain {
    size: HexagonSize,
}

impl LozengeTilingChain {
    /// Chain over the tilings of the given hexagon
    pub const fn new(size: HexagonSize) -> Self {
        Self { size }
    }

    /// Hexagon whose tilings this chain samples
    pub const fn size(&self) -> HexagonSize {
        self.size
    }

    /// Lozenges of a state produced by this chain
    pub fn tiles(&self, state: &PathSystem) -> TileSet {
        extract_tiles(state)
    }

    /// Whether `mv` would change `state`
    ///
    /// Pushing up requires a flat step into the cell, a rising step out of it,
    /// and room below the next path. Pushing down is the mirror image. Moves
    /// touching a boundary path or a path endpoint are never legal.
    pub fn is_legal(state: &PathSystem, mv: &LocalMove) -> bool {
        let (k, j) = (mv.path, mv.position);
        if k == 0 || j == 0 {
            return false;
        }

        let (Some(left), Some(here), Some(right), Some(below), Some(above)) = (
            state.height(k, j - 1),
            state.height(k, j),
            state.height(k, j + 1),
            state.height(k - 1, j),
            state.height(k + 1, j),
        ) else {
            return false;
        };

        match mv.direction {
            Push::Up => left == here && here < right && right < above,
            Push::Down => below < left && left < here && here == right,
        }
    }
}

impl MonotoneChain for LozengeTilingChain {
    type State = PathSystem;
    type Update = LocalMove;

    /// Lowest and highest path systems under the pointwise height order
    fn min_max_states(&self) -> (PathSystem, PathSystem) {
        (PathSystem::lowest(self.size), PathSystem::highest(self.size))
    }

    fn new_random_update<R: Rng + ?Sized>(&self, rng: &mut R) -> LocalMove {
        let path = rng.random_range(1..=self.size.c());
        let position = rng.random_range(1..self.size.a() + self.size.b());
        let direction = if rng.random::<bool>() {
            Push::Up
        } else {
            Push::Down
        };
        LocalMove {
            path,
            position,
            direction,
        }
    }

    fn update(&self, state: &mut PathSystem, update: &LocalMove) {
        if Self::is_legal(state, update) {
            let delta = match update.direction {
                Push::Up => 1,
                Push::Down => -1,
            };
            state.shift(update.path, update.position, delta);
        }
    }
}
