//! Brute-force enumeration of all tilings of small hexagons
//!
//! Paths are filled bottom to top, one step at a time, pruning any branch that
//! touches the path below, runs past the fixed top path, or can no longer reach
//! its endpoint. The number of tilings grows very quickly, so this is only
//! practical for hexagons with sides of about four or less.

use ndarray::Array2;

use crate::spatial::hexagon::HexagonSize;
use crate::spatial::paths::PathSystem;

/// Every tiling of the hexagon, in lexicographic order of path steps
pub fn enumerate_tilings(size: HexagonSize) -> Vec<PathSystem> {
    let mut heights = PathSystem::lowest(size).heights().clone();
    let mut tilings = Vec::new();
    extend(size, &mut heights, 1, 1, &mut tilings);
    tilings
}

fn extend(
    size: HexagonSize,
    heights: &mut Array2<i32>,
    k: usize,
    j: usize,
    tilings: &mut Vec<PathSystem>,
) {
    let last_position = size.a() + size.b();
    if k > size.c() {
        tilings.push(PathSystem::from_fn(size, |path, position| {
            heights.get((path, position)).copied().unwrap_or_default()
        }));
        return;
    }
    if j > last_position {
        extend(size, heights, k + 1, 1, tilings);
        return;
    }

    let previous = heights.get((k, j - 1)).copied().unwrap_or_default();
    let below = heights.get((k - 1, j)).copied().unwrap_or_default();
    let target = (k + size.b()) as i32;
    let remaining = (last_position - j) as i32;

    for rise in [0, 1] {
        let height = previous + rise;
        if height <= below || height > target || height + remaining < target {
            continue;
        }
        if k == size.c() {
            let ceiling = heights.get((k + 1, j)).copied().unwrap_or_default();
            if height >= ceiling {
                continue;
            }
        }
        if let Some(cell) = heights.get_mut((k, j)) {
            *cell = height;
        }
        extend(size, heights, k, j + 1, tilings);
    }
}
