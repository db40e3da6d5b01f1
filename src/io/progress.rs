//! Progress display for sampling runs with an optional batch bar

use crate::algorithm::cftp::StepObserver;
use crate::io::configuration::PROGRESS_FLUSH_INTERVAL;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {prefix} {pos} steps [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Samples: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates the spinners of a multi-sample run
///
/// Adds a batch bar counting finished samples when more than one is drawn.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    sample_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            sample_count: 0,
        }
    }

    /// Prepare for `sample_count` samples
    pub fn initialize(&mut self, sample_count: usize) {
        self.sample_count = sample_count;
        if sample_count > 1 && self.batch_bar.is_none() {
            let batch_bar = ProgressBar::new(sample_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Spinner for the sample at `index`, to be passed to the driver
    pub fn start_sample(&self, index: usize) -> SampleProgress {
        let bar = self.multi_progress.add(ProgressBar::new_spinner());
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix(format!("sample {}/{}", index + 1, self.sample_count.max(1)));
        bar.enable_steady_tick(Duration::from_millis(120));
        SampleProgress::new(bar)
    }

    /// Close a sample's spinner and advance the batch bar
    pub fn complete_sample(&self, progress: SampleProgress, elapsed: Duration) {
        progress.finish(elapsed);
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All samples drawn");
        }
        let _ = self.multi_progress.clear();
    }
}

/// Step counter for a single CFTP run
///
/// Buffers steps locally and pushes them to the terminal every
/// `PROGRESS_FLUSH_INTERVAL` updates.
pub struct SampleProgress {
    bar: ProgressBar,
    pending: u64,
    steps: u64,
}

impl SampleProgress {
    /// Wrap an existing progress bar
    pub const fn new(bar: ProgressBar) -> Self {
        Self {
            bar,
            pending: 0,
            steps: 0,
        }
    }

    /// A spinner that is never drawn
    pub fn hidden() -> Self {
        Self::new(ProgressBar::hidden())
    }

    /// Updates observed so far
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    fn flush(&mut self) {
        if self.pending > 0 {
            self.bar.inc(self.pending);
            self.pending = 0;
        }
    }

    fn finish(mut self, elapsed: Duration) {
        self.flush();
        self.bar
            .finish_with_message(format!("coalesced in {:.2}s", elapsed.as_secs_f64()));
    }
}

impl StepObserver for SampleProgress {
    fn on_step(&mut self) {
        self.steps += 1;
        self.pending += 1;
        if self.pending >= PROGRESS_FLUSH_INTERVAL {
            self.flush();
        }
    }

    fn on_round(&mut self, round: usize, window: u64, coalesced: bool) {
        self.flush();
        let status = if coalesced { "coalesced" } else { "searching" };
        self.bar
            .set_message(format!("round {round}, window {window}, {status}"));
    }
}
