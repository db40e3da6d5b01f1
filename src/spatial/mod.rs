//! Spatial data structures for lozenge tilings
//!
//! This module contains the state space of the tiling chain:
//! - Validated hexagon side lengths and outline
//! - The path system encoding of a tiling
//! - Extraction of the lozenges a path system describes

/// Hexagon side lengths and boundary geometry
pub mod hexagon;
/// Non-intersecting path systems with pointwise ordering
pub mod paths;
/// Lozenge extraction from path systems
pub mod tiles;

pub use hexagon::HexagonSize;
pub use paths::PathSystem;
