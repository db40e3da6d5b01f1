//! Random sources whose position can be saved and restored exactly

use rand::RngCore;

/// A random source supporting exact snapshot and restore
///
/// CFTP replays the same randomness every round, so restoring a snapshot must
/// reproduce exactly the draws that followed it. Any `RngCore + Clone`
/// generator qualifies, with the cloned generator as its own snapshot.
pub trait ReplayableRng: RngCore {
    /// Saved position of the generator
    type Snapshot: Clone;

    /// Capture the current position
    fn snapshot(&self) -> Self::Snapshot;

    /// Return to a previously captured position
    fn restore(&mut self, snapshot: &Self::Snapshot);
}

impl<R: RngCore + Clone> ReplayableRng for R {
    type Snapshot = Self;

    fn snapshot(&self) -> Self::Snapshot {
        self.clone()
    }

    fn restore(&mut self, snapshot: &Self::Snapshot) {
        self.clone_from(snapshot);
    }
}
