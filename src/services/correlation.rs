//! Correlation driver: aggregates weighted foreground luminosity against
//! target recession velocity.

use tracing::{debug, info, warn};

use crate::catalog::CatalogCache;
use crate::models::AggregateResult;
use crate::services::proximity::{find_close_objects, ProximityParams};
use crate::units::{luminosity_from_magnitude, redshift_to_distance};

/// Fraction of a target's own intrinsic luminosity counted into its total.
///
/// Historical pipeline constant; preserved exactly, not derived.
pub const SELF_LUMINOSITY_FRACTION: f64 = 0.5;

/// Run the proximity filter for every target and aggregate the results.
///
/// Targets are processed sequentially; parallelism is confined to each
/// target's candidate-lookup batch. A target contributes one
/// [`AggregateResult`] only if its lookup succeeds, the proximity filter
/// yields at least one close object, and its own intrinsic luminosity is
/// computable (parseable magnitude, positive distance). Targets failing any
/// of these are dropped from the dataset, not recorded as zero entries.
pub async fn correlate(
    cache: &CatalogCache,
    target_names: &[String],
    candidate_names: &[String],
    params: &ProximityParams,
) -> Vec<AggregateResult> {
    let mut results = Vec::new();

    for name in target_names {
        let target = match cache.fetch(name).await {
            Ok(target) => target,
            Err(err) => {
                warn!(target = name.as_str(), error = %err, "dropping target: lookup failed");
                continue;
            }
        };

        let close_objects = find_close_objects(cache, &target, candidate_names, params).await;
        if close_objects.is_empty() {
            debug!(target = name.as_str(), "dropping target: no close objects");
            continue;
        }

        let target_distance = redshift_to_distance(target.redshift);
        let own_luminosity = match target
            .apparent_magnitude
            .as_deref()
            .ok_or_else(|| "missing magnitude".to_string())
            .and_then(|mag| {
                luminosity_from_magnitude(mag, target_distance).map_err(|e| e.to_string())
            }) {
            Ok(luminosity) => luminosity,
            Err(reason) => {
                warn!(
                    target = name.as_str(),
                    reason = %reason,
                    "dropping target: own luminosity not computable"
                );
                continue;
            }
        };

        let foreground: f64 = close_objects.iter().map(|c| c.luminosity).sum();
        let total = foreground + SELF_LUMINOSITY_FRACTION * own_luminosity;

        info!(
            target = target.name.as_str(),
            close_objects = close_objects.len(),
            total_weighted_luminosity = total,
            "target aggregated"
        );

        results.push(AggregateResult {
            target_name: target.name.clone(),
            total_weighted_luminosity: total,
            target_velocity_km_s: target.velocity_km_s,
            close_object_count: close_objects.len(),
        });
    }

    results
}
