//! Spherical and triangle geometry for the proximity filter.
//!
//! Two operations live here: great-circle angular separation between two sky
//! positions, and the line-of-sight weighting factor that discounts the
//! luminosity of a foreground object sitting only partly in front of a
//! target.

use crate::models::SkyPosition;

/// Great-circle angular separation between two ICRS positions, in degrees.
///
/// Computed via the unit-vector dot product, which is symmetric and stable
/// over the full [0, 180] degree range.
pub fn angular_separation(a: &SkyPosition, b: &SkyPosition) -> f64 {
    let va = unit_vector(a);
    let vb = unit_vector(b);
    let dot = va[0] * vb[0] + va[1] * vb[1] + va[2] * vb[2];
    dot.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Luminosity weighting factor for a foreground object offset from the
/// direct line of sight to a target.
///
/// The candidate is modeled as the vertex of a right triangle whose
/// hypotenuse is the candidate's line-of-sight distance: with
/// `theta1 = 90 - separation`, the leg along the sight line is
/// `B = candidate_distance * sin(theta1)` and the perpendicular leg is
/// `c = sqrt(candidate_distance^2 - B^2)`. The remaining distance to the
/// target along the sight line is `d = target_distance - B`, the slant from
/// candidate to target is `e = sqrt(c^2 + d^2)`, and the far angle is
/// `theta2 = asin(d / e)`. The factor is `(theta1 + theta2) / 180`.
///
/// This is a projection heuristic, not a physical occlusion model. It has an
/// undefined-behavior region: for separations above 90 degrees `theta1` goes
/// negative, degenerate inputs propagate NaN, and extreme geometries can
/// produce factors outside [0, 1]. The formula is applied verbatim here;
/// callers decide how to treat non-finite or out-of-range factors.
pub fn line_of_sight_weight(
    target_distance: f64,
    candidate_distance: f64,
    separation_deg: f64,
) -> f64 {
    let theta1 = 90.0 - separation_deg;
    let b = candidate_distance * theta1.to_radians().sin();
    let c = (candidate_distance * candidate_distance - b * b).sqrt();
    let d = target_distance - b;
    let e = (c * c + d * d).sqrt();
    let theta2 = (d / e).asin().to_degrees();
    (theta1 + theta2) / 180.0
}

fn unit_vector(p: &SkyPosition) -> [f64; 3] {
    let ra = p.ra_deg.to_radians();
    let dec = p.dec_deg.to_radians();
    let cos_dec = dec.cos();
    [cos_dec * ra.cos(), cos_dec * ra.sin(), dec.sin()]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_separation_identical_positions_is_zero() {
        let p = SkyPosition::new(123.4, -56.7);
        assert!(angular_separation(&p, &p).abs() < EPS);
    }

    #[test]
    fn test_separation_symmetric() {
        let a = SkyPosition::new(10.0, 20.0);
        let b = SkyPosition::new(200.0, -45.0);
        let ab = angular_separation(&a, &b);
        let ba = angular_separation(&b, &a);
        assert!((ab - ba).abs() < EPS);
    }

    #[test]
    fn test_separation_along_equator() {
        let a = SkyPosition::new(10.0, 0.0);
        let b = SkyPosition::new(25.0, 0.0);
        assert!((angular_separation(&a, &b) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_separation_antipodal() {
        let a = SkyPosition::new(0.0, 0.0);
        let b = SkyPosition::new(180.0, 0.0);
        assert!((angular_separation(&a, &b) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_separation_pole_to_equator() {
        let pole = SkyPosition::new(0.0, 90.0);
        let equator = SkyPosition::new(137.0, 0.0);
        assert!((angular_separation(&pole, &equator) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_weight_small_separation_near_one() {
        // Candidate halfway to the target and almost exactly on the sight
        // line: both triangle angles approach 90 degrees.
        let w = line_of_sight_weight(2.0e8, 1.0e8, 0.05);
        assert!(w > 0.99 && w < 1.0, "weight = {w}");
    }

    #[test]
    fn test_weight_decreases_with_separation() {
        let near = line_of_sight_weight(2.0e8, 1.0e8, 0.1);
        let far = line_of_sight_weight(2.0e8, 1.0e8, 5.0);
        assert!(near > far);
    }

    #[test]
    fn test_weight_wide_separation_collapses() {
        // Past 90 degrees theta1 goes negative and the factor collapses
        // toward zero.
        let w = line_of_sight_weight(1.0, 1.0e9, 120.0);
        assert!(w.abs() < 0.01, "weight = {w}");
    }

    #[test]
    fn test_weight_propagates_nan_inputs() {
        // Degenerate inputs are not masked; callers apply the skip policy.
        assert!(line_of_sight_weight(f64::NAN, 1.0e8, 0.5).is_nan());
        assert!(line_of_sight_weight(2.0e8, f64::NAN, 0.5).is_nan());
    }
}
