//! Coupling from the past for monotone Markov chains
//!
//! Each round restarts the minimum and maximum states and replays every
//! recorded epoch, oldest first, feeding the same updates to both. If they
//! meet at time zero every other trajectory has met too, and the common state
//! is an exact draw from the stationary distribution. Otherwise a new epoch,
//! twice as long as the previous oldest one, is prepended further in the past.

use tracing::{debug, info};

use crate::algorithm::chain::MonotoneChain;
use crate::algorithm::epochs::EpochLog;
use crate::algorithm::random::ReplayableRng;
use crate::io::error::{Result, SamplerError};

/// Receives one notification per simulated update
///
/// Observers must not influence control flow or randomness.
pub trait StepObserver {
    /// Called after an update has been applied to both trajectories
    fn on_step(&mut self);

    /// Called after each round once both trajectories have been compared
    fn on_round(&mut self, _round: usize, _window: u64, _coalesced: bool) {}
}

impl StepObserver for () {
    fn on_step(&mut self) {}
}

/// Driver limits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CftpConfig {
    /// Abort once this many updates would be simulated across all rounds
    pub max_total_steps: Option<u64>,
}

/// Result of a successful coupling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoupledSample<S> {
    /// The coalesced state, an exact stationary sample
    pub state: S,
    /// Rounds needed, including the successful one
    pub rounds: usize,
    /// Lookback window of the successful round in steps
    pub window: u64,
    /// Updates simulated across all rounds
    pub steps_simulated: u64,
}

/// Generic CFTP engine
#[derive(Debug, Clone, Copy, Default)]
pub struct CouplingFromThePast {
    config: CftpConfig,
}

impl CouplingFromThePast {
    /// Create a driver with the given limits
    pub const fn new(config: CftpConfig) -> Self {
        Self { config }
    }

    /// Driver limits in effect
    pub const fn config(&self) -> CftpConfig {
        self.config
    }

    /// Draw one exact sample from the stationary distribution of `chain`
    ///
    /// On success `rng` is left just past every block of randomness the
    /// sample depends on, so consecutive calls yield independent samples.
    ///
    /// # Errors
    ///
    /// Returns `StepBudgetExceeded` if the configured step budget would be
    /// exceeded before coalescence. The budget is checked at epoch boundaries.
    pub fn sample<C, R, O>(
        &self,
        chain: &C,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<CoupledSample<C::State>>
    where
        C: MonotoneChain,
        R: ReplayableRng,
        O: StepObserver + ?Sized,
    {
        let mut log = EpochLog::new(rng.snapshot());
        let mut rounds = 0;
        let mut steps_simulated: u64 = 0;

        loop {
            rounds += 1;
            let (mut lower, mut upper) = chain.min_max_states();
            let mut resume = None;

            for epoch in log.iter() {
                if let Some(budget) = self.config.max_total_steps {
                    if steps_simulated.saturating_add(epoch.steps) > budget {
                        return Err(SamplerError::StepBudgetExceeded { budget, rounds });
                    }
                }

                rng.restore(&epoch.snapshot);
                for _ in 0..epoch.steps {
                    let update = chain.new_random_update(rng);
                    chain.update(&mut lower, &update);
                    chain.update(&mut upper, &update);
                    observer.on_step();
                }
                steps_simulated = steps_simulated.saturating_add(epoch.steps);

                // The oldest epoch ends where fresh randomness begins
                if resume.is_none() {
                    resume = Some(rng.snapshot());
                }
            }

            let window = log.total_steps();
            let resume = resume.unwrap_or_else(|| rng.snapshot());
            let coalesced = lower == upper;
            observer.on_round(rounds, window, coalesced);

            if coalesced {
                rng.restore(&resume);
                info!(rounds, window, steps_simulated, "trajectories coalesced");
                return Ok(CoupledSample {
                    state: lower,
                    rounds,
                    window,
                    steps_simulated,
                });
            }

            debug!(round = rounds, window, "no coalescence, extending into the past");
            log.extend_past(resume);
        }
    }
}

/// Sample with default limits and no progress reporting
///
/// # Errors
///
/// Never fails without a step budget; the signature matches `sample`.
pub fn run_cftp<C, R>(chain: &C, rng: &mut R) -> Result<C::State>
where
    C: MonotoneChain,
    R: ReplayableRng,
{
    CouplingFromThePast::default()
        .sample(chain, rng, &mut ())
        .map(|sample| sample.state)
}
