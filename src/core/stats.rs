//! Aggregate statistics over whole collections
//!
//! Statistics reflect the entire dataset, not the current filter view: the
//! stats bar and the visible list are computed from different inputs on
//! purpose. Aggregation is a pure function with no side effects.

/// Trait for records that can be summarized into a fixed-shape statistics value
pub trait Summarize: Sized {
    /// The per-domain statistics shape
    type Stats;

    /// Compute statistics over the full (unfiltered) collection.
    ///
    /// Must be total: an empty collection yields zero counts and zero-valued
    /// monetary aggregates, never a division by zero.
    fn aggregate(records: &[Self]) -> Self::Stats;
}
