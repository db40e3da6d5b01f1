//! Monotone Markov chain contract consumed by the CFTP driver

use rand::Rng;

/// A Markov chain on a partially ordered state space with a monotone update rule
///
/// Implementors guarantee that for any update `u` and states `s <= t`,
/// applying `u` to both keeps `s <= t`. The driver relies on this to certify
/// coalescence of every trajectory from the two extremal ones alone.
pub trait MonotoneChain {
    /// Chain state; compared for equality to detect coalescence
    type State: Clone + PartialEq;
    /// A single random update descriptor
    type Update;

    /// The unique minimum and maximum states, in that order
    ///
    /// Must be deterministic and free of side effects.
    fn min_max_states(&self) -> (Self::State, Self::State);

    /// Draw one update from the chain's update distribution
    ///
    /// Consumption of `rng` must depend only on its current position so the
    /// same draws are reproduced after restoring a snapshot.
    fn new_random_update<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Update;

    /// Apply `update` to `state` in place, leaving it untouched if illegal
    fn update(&self, state: &mut Self::State, update: &Self::Update);
}
