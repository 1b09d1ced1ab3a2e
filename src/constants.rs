//! Constants shared across the crate.

/// Confidence weight assigned to a stump whose weighted training error
/// is zero. Stands in for an infinite vote; any sufficiently large
/// constant behaves the same in the weighted majority.
pub const PERFECT_STUMP_CONFIDENCE: f64 = 10_000f64;

/// Number of boosting rounds run when the caller does not choose.
pub const DEFAULT_STUMP_COUNT: usize = 25;
