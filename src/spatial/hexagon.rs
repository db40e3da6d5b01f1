//! Hexagon side lengths with validation and boundary geometry

use crate::io::configuration::MAX_SIDE_LENGTH;
use crate::io::error::{Result, invalid_parameter};

/// Integer point in the oblique (a, c)-plane
pub type Vertex = [i32; 2];

/// Side lengths of an (a x b x c) hexagon
///
/// Always holds three side lengths in `1..=MAX_SIDE_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexagonSize {
    a: usize,
    b: usize,
    c: usize,
}

impl HexagonSize {
    /// Validate and wrap three side lengths
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any side is zero or exceeds `MAX_SIDE_LENGTH`
    pub fn new(a: usize, b: usize, c: usize) -> Result<Self> {
        for (parameter, value) in [("a", a), ("b", b), ("c", c)] {
            if value == 0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"side length must be positive",
                ));
            }
            if value > MAX_SIDE_LENGTH {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("side length must not exceed {MAX_SIDE_LENGTH}"),
                ));
            }
        }
        Ok(Self { a, b, c })
    }

    /// Side length along the a-axis
    pub const fn a(&self) -> usize {
        self.a
    }

    /// Side length along the b-direction
    pub const fn b(&self) -> usize {
        self.b
    }

    /// Side length along the c-axis
    pub const fn c(&self) -> usize {
        self.c
    }

    /// Number of paths including the two fixed boundary paths
    pub const fn path_count(&self) -> usize {
        self.c + 2
    }

    /// Number of positions along each path
    pub const fn position_count(&self) -> usize {
        self.a + self.b + 1
    }

    /// Area in unit lozenges, which is also the number of tiles in any tiling
    pub const fn area(&self) -> usize {
        self.a * self.b + self.b * self.c + self.c * self.a
    }

    /// Corners of the hexagon in the (a, c)-plane, counter-clockwise from the origin
    pub const fn outline(&self) -> [Vertex; 6] {
        let (a, b, c) = (self.a as i32, self.b as i32, self.c as i32);
        [
            [0, 0],
            [a, 0],
            [a + b, b],
            [a + b, b + c],
            [b, b + c],
            [0, c],
        ]
    }
}
