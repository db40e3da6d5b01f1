//! Ordered log of randomness checkpoints for the doubling schedule
//!
//! Each epoch pairs a saved generator position with the number of steps
//! simulated from it. Epochs are kept oldest first, which is also the order
//! in which they are replayed.

use std::collections::VecDeque;

/// A block of steps replayed from a fixed generator position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Epoch<S> {
    /// Generator position at the start of the block
    pub snapshot: S,
    /// Number of updates drawn from that position
    pub steps: u64,
}

/// Checkpoint log growing into the past by doubling epochs
#[derive(Debug, Clone)]
pub struct EpochLog<S> {
    epochs: VecDeque<Epoch<S>>,
}

impl<S> EpochLog<S> {
    /// Start with a single one-step epoch at the given position
    pub fn new(snapshot: S) -> Self {
        Self {
            epochs: VecDeque::from([Epoch { snapshot, steps: 1 }]),
        }
    }

    /// Prepend an epoch before all existing ones
    ///
    /// The new epoch has `2^n` steps where `n` is the current epoch count,
    /// giving epoch lengths 1, 2, 4, 8, ... and a total of `2^(n+1) - 1`.
    pub fn extend_past(&mut self, snapshot: S) {
        let steps = u32::try_from(self.epochs.len())
            .ok()
            .and_then(|n| 1u64.checked_shl(n))
            .unwrap_or(u64::MAX);
        self.epochs.push_front(Epoch { snapshot, steps });
    }

    /// Epochs in replay order, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Epoch<S>> {
        self.epochs.iter()
    }

    /// Number of epochs recorded
    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    /// Always false; a log holds at least its initial epoch
    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    /// Total steps across all epochs, the current lookback window
    pub fn total_steps(&self) -> u64 {
        self.epochs
            .iter()
            .fold(0u64, |total, epoch| total.saturating_add(epoch.steps))
    }
}
