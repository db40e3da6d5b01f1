//! Path system encoding of lozenge tilings
//!
//! A tiling of an (a x b x c) hexagon corresponds to c + 2 lattice paths indexed
//! `0..=c+1`. Path `k` starts at height `k`, takes `a + b` steps of size 0 or 1,
//! and ends at height `k + b`. Paths 0 and c + 1 are fixed and only bound the
//! others. Heights are stored in an owned `(c + 2) x (a + b + 1)` array.

use std::cmp::Ordering;

use ndarray::{Array2, ArrayView1, Axis, Zip};

use crate::io::error::{Result, SamplerError};
use crate::spatial::hexagon::HexagonSize;

/// Heights of all paths at all positions
///
/// Valid instances satisfy path monotonicity (steps of 0 or 1), strict
/// non-crossing between neighbouring paths, and fixed boundary paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSystem {
    size: HexagonSize,
    heights: Array2<i32>,
}

impl PathSystem {
    /// Build a path system from a height function without validation
    pub(crate) fn from_fn(size: HexagonSize, height: impl Fn(usize, usize) -> i32) -> Self {
        let heights =
            Array2::from_shape_fn((size.path_count(), size.position_count()), |(k, j)| {
                height(k, j)
            });
        Self { size, heights }
    }

    /// The pointwise lowest tiling: every free path runs flat first, then climbs
    pub fn lowest(size: HexagonSize) -> Self {
        let (a, b, c) = (size.a(), size.b(), size.c());
        Self::from_fn(size, |k, j| {
            if k == c + 1 {
                (k + j.min(b)) as i32
            } else {
                (k + j.saturating_sub(a)) as i32
            }
        })
    }

    /// The pointwise highest tiling: every free path climbs first, then runs flat
    pub fn highest(size: HexagonSize) -> Self {
        let (a, b) = (size.a(), size.b());
        Self::from_fn(size, |k, j| {
            if k == 0 {
                j.saturating_sub(a) as i32
            } else {
                (k + j.min(b)) as i32
            }
        })
    }

    /// Wrap an explicit height array after checking every invariant
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the array has the wrong shape or does not
    /// describe a tiling of the hexagon
    pub fn from_heights(size: HexagonSize, heights: Array2<i32>) -> Result<Self> {
        let system = Self { size, heights };
        system.validate()?;
        Ok(system)
    }

    /// Hexagon this path system tiles
    pub const fn size(&self) -> HexagonSize {
        self.size
    }

    /// Raw height array indexed by `(path, position)`
    pub const fn heights(&self) -> &Array2<i32> {
        &self.heights
    }

    /// Height of path `k` at position `j`
    pub fn height(&self, k: usize, j: usize) -> Option<i32> {
        self.heights.get((k, j)).copied()
    }

    /// Heights along a single path
    pub fn path(&self, k: usize) -> Option<ArrayView1<'_, i32>> {
        (k < self.heights.nrows()).then(|| self.heights.index_axis(Axis(0), k))
    }

    /// Shift the height at `(k, j)` by `delta`
    pub(crate) fn shift(&mut self, k: usize, j: usize, delta: i32) {
        if let Some(height) = self.heights.get_mut((k, j)) {
            *height += delta;
        }
    }

    /// Whether every invariant holds
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check shape, boundary paths, endpoints, step sizes and non-crossing
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` describing the first violated invariant
    pub fn validate(&self) -> Result<()> {
        let size = self.size;
        let expected = (size.path_count(), size.position_count());
        if self.heights.dim() != expected {
            return Err(invalid_state(format!(
                "height array has shape {:?}, expected {expected:?}",
                self.heights.dim()
            )));
        }

        let (lowest, highest) = (Self::lowest(size), Self::highest(size));
        let last = size.c() + 1;
        for k in [0, last] {
            if self.path(k) != lowest.path(k) || self.path(k) != highest.path(k) {
                return Err(invalid_state(format!("boundary path {k} has been moved")));
            }
        }

        for (k, path) in self.heights.outer_iter().enumerate() {
            let start = path.get(0).copied().unwrap_or_default();
            let end = path.get(path.len() - 1).copied().unwrap_or_default();
            if start != k as i32 || end != (k + size.b()) as i32 {
                return Err(invalid_state(format!(
                    "path {k} runs from {start} to {end}, expected {k} to {}",
                    k + size.b()
                )));
            }
            for j in 1..path.len() {
                let rise = path.get(j).copied().unwrap_or_default()
                    - path.get(j - 1).copied().unwrap_or_default();
                if !(0..=1).contains(&rise) {
                    return Err(invalid_state(format!(
                        "path {k} rises by {rise} between positions {} and {j}",
                        j - 1
                    )));
                }
            }
        }

        for k in 0..last {
            for j in 0..size.position_count() {
                let below = self.height(k, j).unwrap_or_default();
                let above = self.height(k + 1, j).unwrap_or_default();
                if below >= above {
                    return Err(invalid_state(format!(
                        "paths {k} and {} touch at position {j}",
                        k + 1
                    )));
                }
            }
        }

        Ok(())
    }
}

impl PartialOrd for PathSystem {
    /// Pointwise comparison of heights; `None` when neither dominates
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.heights.dim() != other.heights.dim() {
            return None;
        }

        let mut below = true;
        let mut above = true;
        Zip::from(&self.heights)
            .and(&other.heights)
            .for_each(|&lhs, &rhs| {
                below &= lhs <= rhs;
                above &= lhs >= rhs;
            });

        match (below, above) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

fn invalid_state(reason: String) -> SamplerError {
    SamplerError::InvalidState { reason }
}
