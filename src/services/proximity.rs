//! Proximity filter: which candidates are close, in front, and how much
//! weighted light they contribute.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::catalog::CatalogCache;
use crate::geometry::{angular_separation, line_of_sight_weight};
use crate::models::{CatalogRecord, ComputedObjectInfo};
use crate::units::{luminosity_from_magnitude, redshift_to_distance};

/// Tunable knobs of the proximity filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityParams {
    /// Candidates at or beyond this angular separation are excluded
    pub max_separation_deg: f64,
    /// Candidates at or below this redshift are excluded
    pub min_redshift: f64,
}

impl ProximityParams {
    pub fn new(max_separation_deg: f64) -> Self {
        Self {
            max_separation_deg,
            min_redshift: 0.0,
        }
    }

    pub fn with_min_redshift(mut self, min_redshift: f64) -> Self {
        self.min_redshift = min_redshift;
        self
    }
}

/// Find the candidates that sit close to the target's line of sight and in
/// front of it, and attach their line-of-sight-weighted luminosity.
///
/// Candidate lookups fan out through the cache (bounded remote concurrency)
/// and are joined before filtering; the result preserves candidate input
/// order. A candidate is kept only if all of the following hold:
///
/// 1. its lookup resolves to an authoritative record,
/// 2. its redshift exceeds `min_redshift`,
/// 3. its angular separation from the target is below `max_separation_deg`,
/// 4. its line-of-sight distance is strictly less than the target's (only
///    foreground objects are discounted),
/// 5. its magnitude parses, so a base luminosity exists,
/// 6. its weighting factor is finite.
///
/// Every exclusion is logged and skipped; no candidate failure aborts the
/// batch.
pub async fn find_close_objects(
    cache: &CatalogCache,
    target: &CatalogRecord,
    candidate_names: &[String],
    params: &ProximityParams,
) -> Vec<ComputedObjectInfo> {
    let target_distance = redshift_to_distance(target.redshift);

    let evaluations = candidate_names
        .iter()
        .map(|name| evaluate_candidate(cache, target, target_distance, name, params));

    join_all(evaluations).await.into_iter().flatten().collect()
}

async fn evaluate_candidate(
    cache: &CatalogCache,
    target: &CatalogRecord,
    target_distance: f64,
    name: &str,
    params: &ProximityParams,
) -> Option<ComputedObjectInfo> {
    let record = match cache.fetch(name).await {
        Ok(record) => record,
        Err(err) => {
            debug!(candidate = name, error = %err, "skipping candidate: lookup failed");
            return None;
        }
    };

    if record.redshift <= params.min_redshift {
        debug!(
            candidate = name,
            redshift = record.redshift,
            "skipping candidate: below redshift floor"
        );
        return None;
    }

    let separation = angular_separation(&target.position, &record.position);
    if separation >= params.max_separation_deg {
        debug!(
            candidate = name,
            separation_deg = separation,
            "skipping candidate: not angularly close"
        );
        return None;
    }

    let candidate_distance = redshift_to_distance(record.redshift);
    if candidate_distance >= target_distance {
        debug!(
            candidate = name,
            "skipping candidate: not in front of target"
        );
        return None;
    }

    let Some(magnitude) = record.apparent_magnitude.as_deref() else {
        debug!(candidate = name, "skipping candidate: no magnitude");
        return None;
    };
    let base_luminosity = match luminosity_from_magnitude(magnitude, candidate_distance) {
        Ok(luminosity) => luminosity,
        Err(err) => {
            debug!(candidate = name, error = %err, "skipping candidate: no usable luminosity");
            return None;
        }
    };

    let weight = line_of_sight_weight(target_distance, candidate_distance, separation);
    if !weight.is_finite() {
        warn!(
            candidate = name,
            target = target.name.as_str(),
            "skipping candidate: degenerate line-of-sight geometry"
        );
        return None;
    }

    Some(ComputedObjectInfo {
        name: record.name.clone(),
        velocity_km_s: record.velocity_km_s,
        luminosity: base_luminosity * weight,
    })
}
