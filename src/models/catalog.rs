//! Catalog-side domain types.
//!
//! A [`CatalogRecord`] is one object's astrometric and photometric data as
//! returned by the external catalog. A single lookup may return several
//! candidate matches for one name; [`select_authoritative`] is the policy
//! that picks the entry the rest of the system treats as authoritative.

use serde::{Deserialize, Serialize};

/// A position on the celestial sphere in the ICRS frame, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyPosition {
    /// Right ascension in degrees [0, 360)
    pub ra_deg: f64,
    /// Declination in degrees [-90, 90]
    pub dec_deg: f64,
}

impl SkyPosition {
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }
}

/// One object's data as returned by the catalog lookup service.
///
/// Immutable once fetched; the catalog cache owns all instances and hands
/// out shared references. The magnitude is kept as the raw catalog string
/// because catalogs report non-numeric placeholders for some objects; it is
/// parsed only at luminosity-computation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Catalog object identifier
    pub name: String,
    /// ICRS sky position
    pub position: SkyPosition,
    /// Dimensionless spectral redshift
    pub redshift: f64,
    /// Recession velocity in km/s
    pub velocity_km_s: f64,
    /// Apparent magnitude as reported by the catalog; may not parse as a number
    pub apparent_magnitude: Option<String>,
}

/// Select the authoritative entry among multiple catalog matches for one name.
///
/// Policy: the entry with the maximum redshift wins. This mirrors the
/// upstream pipeline's behavior for multi-match lookups; name-exact or
/// closest-match selection would arguably be more natural, so the policy is
/// kept in one visible, swappable place rather than inlined at call sites.
///
/// Returns `None` for an empty slice. NaN redshifts lose against any
/// comparable value.
pub fn select_authoritative(records: &[CatalogRecord]) -> Option<&CatalogRecord> {
    records.iter().max_by(|a, b| {
        a.redshift
            .partial_cmp(&b.redshift)
            .unwrap_or(std::cmp::Ordering::Less)
    })
}
