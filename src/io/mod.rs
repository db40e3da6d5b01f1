/// Command-line interface and sample orchestration
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Rasterisation of tilings to PNG images
pub mod image;
/// Terminal progress reporting for sampling runs
pub mod progress;
