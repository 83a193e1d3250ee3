//! Result types produced by the proximity filter and the correlation driver.

use serde::{Deserialize, Serialize};

/// Derived data for one object that passed the proximity filter, or for a
/// bare target before aggregation.
///
/// `luminosity` is in solar units. When produced by the proximity filter it
/// has already been rescaled by the line-of-sight weighting factor; for a
/// bare target it is the unweighted intrinsic value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedObjectInfo {
    pub name: String,
    pub velocity_km_s: f64,
    pub luminosity: f64,
}

/// Per-target aggregate: total weighted foreground luminosity against the
/// target's own recession velocity.
///
/// Only targets with at least one close object produce an instance; targets
/// with zero close objects or a failed lookup are omitted from the dataset
/// entirely rather than recorded as zero entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub target_name: String,
    /// Sum of close objects' weighted luminosity plus half the target's own
    /// intrinsic luminosity, in solar units.
    pub total_weighted_luminosity: f64,
    pub target_velocity_km_s: f64,
    pub close_object_count: usize,
}
