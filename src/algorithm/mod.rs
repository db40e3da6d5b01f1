/// Coupling-from-the-past driver with replayed randomness
pub mod cftp;
/// Monotone Markov chain contract
pub mod chain;
/// Brute-force enumeration of all tilings of small hexagons
pub mod enumeration;
/// Ordered log of randomness checkpoints for the doubling schedule
pub mod epochs;
/// Monotone lozenge tiling chain on path systems
pub mod lozenge;
/// Random sources whose position can be saved and restored exactly
pub mod random;
