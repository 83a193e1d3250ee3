//! Unit conversions between redshift, line-of-sight distance and luminosity.
//!
//! The distance scale is a Hubble-law-style linear approximation with a fixed
//! proportionality constant, not a rigorous cosmological distance. Luminosity
//! uses the standard distance-modulus relation with the pipeline's historical
//! magnitude base of 2.512 (not the textbook 2.5); both constants are
//! preserved exactly and must not be rederived.

use thiserror::Error;

/// Linear redshift-to-distance proportionality constant.
pub const DISTANCE_PER_REDSHIFT: f64 = 4.28275e9;

/// Magnitude base used in the luminosity relation `L = 10^(-M / BASE)`.
pub const LUMINOSITY_MAGNITUDE_BASE: f64 = 2.512;

/// Result type for unit conversions.
pub type UnitsResult<T> = Result<T, UnitsError>;

/// Errors from the magnitude-to-luminosity conversion.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UnitsError {
    /// The catalog magnitude field did not parse as a real number
    #[error("unparsable apparent magnitude: {0:?}")]
    UnparsableMagnitude(String),

    /// Distance must be strictly positive for the distance modulus
    #[error("non-positive distance: {0}")]
    NonPositiveDistance(f64),
}

/// Convert a redshift to a line-of-sight distance.
///
/// Pure linear scaling: `distance = redshift * 4.28275e9`.
pub fn redshift_to_distance(redshift: f64) -> f64 {
    redshift * DISTANCE_PER_REDSHIFT
}

/// Compute an object's luminosity in solar units from its raw catalog
/// magnitude string and its line-of-sight distance.
///
/// Applies the distance-modulus relation `M = m - 5 * log10(d / 10)` and
/// `L = 10^(-M / 2.512)`.
///
/// # Errors
///
/// * [`UnitsError::UnparsableMagnitude`] if the magnitude is not numeric
/// * [`UnitsError::NonPositiveDistance`] if `distance <= 0`
pub fn luminosity_from_magnitude(apparent_magnitude: &str, distance: f64) -> UnitsResult<f64> {
    let m: f64 = apparent_magnitude
        .trim()
        .parse()
        .map_err(|_| UnitsError::UnparsableMagnitude(apparent_magnitude.to_string()))?;

    if distance <= 0.0 {
        return Err(UnitsError::NonPositiveDistance(distance));
    }

    let absolute_magnitude = m - 5.0 * (distance / 10.0).log10();
    Ok(10f64.powf(-absolute_magnitude / LUMINOSITY_MAGNITUDE_BASE))
}
