//! Command-line interface for drawing and rendering random tilings

use crate::algorithm::cftp::{CftpConfig, CouplingFromThePast};
use crate::algorithm::lozenge::LozengeTilingChain;
use crate::io::configuration::{
    DEFAULT_IMAGE_SIZE, DEFAULT_OUTPUT_PATH, DEFAULT_SAMPLE_COUNT, DEFAULT_SEED,
    DEFAULT_SIDE_LENGTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{RenderStyle, export_tiling_as_png};
use crate::io::progress::{ProgressManager, SampleProgress};
use crate::spatial::hexagon::HexagonSize;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "lozenge-cftp")]
#[command(
    author,
    version,
    about = "Draw perfectly uniform random lozenge tilings of a hexagon"
)]
/// Command-line arguments for the sampler
pub struct Cli {
    /// Side length along the a-axis
    #[arg(short = 'a', long = "side-a", default_value_t = DEFAULT_SIDE_LENGTH)]
    pub side_a: usize,

    /// Side length along the b-direction
    #[arg(short = 'b', long = "side-b", default_value_t = DEFAULT_SIDE_LENGTH)]
    pub side_b: usize,

    /// Side length along the c-axis
    #[arg(short = 'c', long = "side-c", default_value_t = DEFAULT_SIDE_LENGTH)]
    pub side_c: usize,

    /// Random seed for reproducible sampling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of independent tilings to draw
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub samples: usize,

    /// Output PNG path; numbered per sample when drawing more than one
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Width and height of the output image in pixels
    #[arg(long, default_value_t = DEFAULT_IMAGE_SIZE)]
    pub image_size: u32,

    /// Give up on a sample after this many simulated updates
    #[arg(short = 'm', long)]
    pub max_steps: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Validated hexagon dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any side length is out of range
    pub fn hexagon(&self) -> Result<HexagonSize> {
        HexagonSize::new(self.side_a, self.side_b, self.side_c)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Output file for the sample at `index`
    pub fn output_path(&self, index: usize) -> PathBuf {
        if self.samples <= 1 {
            return self.output.clone();
        }

        let stem = self.output.file_stem().unwrap_or_default();
        let name = self.output.extension().map_or_else(
            || format!("{}_{index}", stem.to_string_lossy()),
            |extension| {
                format!(
                    "{}_{index}.{}",
                    stem.to_string_lossy(),
                    extension.to_string_lossy()
                )
            },
        );
        self.output.with_file_name(name)
    }
}

/// Draws the requested samples and writes one image per sample
pub struct SampleRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SampleRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Draw every sample and export it, returning the written paths
    ///
    /// All samples share one seeded generator; each resumes where the
    /// previous coupling left it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a sample exceeds the
    /// step budget, or an image cannot be written
    pub fn run(&mut self) -> Result<Vec<PathBuf>> {
        let size = self.cli.hexagon()?;
        if self.cli.samples == 0 {
            return Err(invalid_parameter(
                "samples",
                &self.cli.samples,
                &"at least one sample must be drawn",
            ));
        }

        let chain = LozengeTilingChain::new(size);
        let driver = CouplingFromThePast::new(CftpConfig {
            max_total_steps: self.cli.max_steps,
        });
        let style = RenderStyle {
            image_size: self.cli.image_size,
            ..RenderStyle::default()
        };
        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.samples);
        }

        let mut written = Vec::with_capacity(self.cli.samples);
        for index in 0..self.cli.samples {
            let start = Instant::now();
            let mut progress = self
                .progress_manager
                .as_ref()
                .map_or_else(SampleProgress::hidden, |pm| pm.start_sample(index));

            let sample = driver.sample(&chain, &mut rng, &mut progress);
            if let Some(ref pm) = self.progress_manager {
                pm.complete_sample(progress, start.elapsed());
            }
            let sample = sample?;

            let output_path = self.cli.output_path(index);
            export_tiling_as_png(&chain.tiles(&sample.state), size, &style, &output_path)?;
            info!(
                sample = index,
                rounds = sample.rounds,
                window = sample.window,
                path = %output_path.display(),
                "tiling written"
            );
            written.push(output_path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }
}
