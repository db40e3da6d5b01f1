//! Plane geometry for lozenges in oblique and rectangular coordinates

use crate::spatial::hexagon::Vertex;

/// Half of the square root of three, the horizontal stretch of the a-axis
pub const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Map an (a, c)-plane point to the rectangular (x, y)-plane
///
/// The a-axis points down and to the right at 30 degrees below horizontal,
/// the c-axis points straight up.
pub fn oblique_to_rect(vertex: Vertex) -> [f64; 2] {
    let [a, c] = vertex.map(f64::from);
    [a * HALF_SQRT_3, 0.5f64.mul_add(-a, c)]
}

/// Twice the signed area of a lattice polygon (positive when counter-clockwise)
pub fn double_signed_area(polygon: &[Vertex]) -> i64 {
    polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(p, q)| i64::from(p[0]) * i64::from(q[1]) - i64::from(q[0]) * i64::from(p[1]))
        .sum()
}

/// Unsigned area of a polygon in the plane
pub fn polygon_area(polygon: &[[f64; 2]]) -> f64 {
    let twice: f64 = polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(p, q)| p[0].mul_add(q[1], -(q[0] * p[1])))
        .sum();
    twice.abs() * 0.5
}

/// Whether a point lies inside or on a convex polygon of either orientation
pub fn convex_contains(polygon: &[[f64; 2]], point: [f64; 2]) -> bool {
    let mut positive = false;
    let mut negative = false;
    for (p, q) in polygon.iter().zip(polygon.iter().cycle().skip(1)) {
        let cross = (q[0] - p[0]).mul_add(point[1] - p[1], -((q[1] - p[1]) * (point[0] - p[0])));
        positive |= cross > 0.0;
        negative |= cross < 0.0;
        if positive && negative {
            return false;
        }
    }
    true
}

/// Euclidean distance from a point to the segment `start..end`
pub fn segment_distance(point: [f64; 2], start: [f64; 2], end: [f64; 2]) -> f64 {
    let direction = [end[0] - start[0], end[1] - start[1]];
    let offset = [point[0] - start[0], point[1] - start[1]];
    let length_squared = direction[0].mul_add(direction[0], direction[1] * direction[1]);
    let t = if length_squared > 0.0 {
        (offset[0].mul_add(direction[0], offset[1] * direction[1]) / length_squared).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let dx = t.mul_add(-direction[0], offset[0]);
    let dy = t.mul_add(-direction[1], offset[1]);
    dx.hypot(dy)
}
