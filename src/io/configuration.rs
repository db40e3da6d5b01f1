//! Sampler constants and runtime configuration defaults

// Hexagon limits
/// Side length used when none is given on the command line
pub const DEFAULT_SIDE_LENGTH: usize = 20;
// Coupling time grows roughly cubically in the side length
/// Largest accepted side length
pub const MAX_SIDE_LENGTH: usize = 512;

// Default values for configurable parameters
/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;
/// Number of tilings drawn per run
pub const DEFAULT_SAMPLE_COUNT: usize = 1;

// Output settings
/// Default output file
pub const DEFAULT_OUTPUT_PATH: &str = "random_lozenge_tiling.png";
/// Default width and height of rendered images in pixels
pub const DEFAULT_IMAGE_SIZE: u32 = 600;
/// Margin around the hexagon in lattice units
pub const IMAGE_MARGIN: f64 = 1.0;
/// Width of lozenge outlines in lattice units
pub const EDGE_WIDTH: f64 = 0.12;

// Tile colours (RGBA)
/// Fill colour of top lozenges
pub const TOP_COLOR: [u8; 4] = [227, 26, 28, 255];
/// Fill colour of left lozenges
pub const LEFT_COLOR: [u8; 4] = [255, 128, 0, 255];
/// Fill colour of right lozenges
pub const RIGHT_COLOR: [u8; 4] = [54, 128, 179, 255];
/// Colour of lozenge outlines
pub const EDGE_COLOR: [u8; 4] = [0, 0, 0, 255];

// Progress bar display settings
/// Updates accumulated before a progress bar is redrawn
pub const PROGRESS_FLUSH_INTERVAL: u64 = 4096;
