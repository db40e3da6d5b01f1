//! Exact sampling of uniformly random lozenge tilings using coupling from the past
//!
//! A tiling of an (a x b x c) hexagon is encoded as a system of non-intersecting
//! lattice paths. A monotone Markov chain pushes those paths up and down one cell
//! at a time, and the CFTP driver runs it from ever more distant past times until
//! the lowest and highest path systems coalesce, yielding a perfectly uniform sample.

#![forbid(unsafe_code)]

/// Monotone chain abstraction, the CFTP driver and the lozenge tiling chain
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Geometry, exact counting and goodness-of-fit helpers
pub mod math;
/// Hexagon dimensions, path system state and tile extraction
pub mod spatial;

pub use algorithm::cftp::{CftpConfig, CoupledSample, CouplingFromThePast, StepObserver, run_cftp};
pub use algorithm::chain::MonotoneChain;
pub use algorithm::lozenge::{LocalMove, LozengeTilingChain, Push};
pub use io::error::{Result, SamplerError};
pub use spatial::{HexagonSize, PathSystem};
