//! Mathematical utilities for tiling geometry and sample verification

/// Exact tiling counts via MacMahon's box formula
pub mod counting;
/// Plane geometry for lozenges in oblique and rectangular coordinates
pub mod geometry;
/// Goodness-of-fit statistics for empirical sample distributions
pub mod statistics;
