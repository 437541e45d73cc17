use nalgebra::{Point2, Vector2};

/// Distance floor used before dividing by an inter-particle separation.
pub const MIN_DISTANCE: f64 = 1e-3;
/// Coarser floor used in the pairwise non-bonded loop.
pub const MIN_PAIR_DISTANCE: f64 = 1e-2;

/// Separation vector from `a` to `b` and its floor-clamped length.
#[inline]
pub fn separation(a: &Point2<f64>, b: &Point2<f64>, floor: f64) -> (Vector2<f64>, f64) {
    let delta = b - a;
    (delta, delta.norm().max(floor))
}

/// Unit vector from `a` toward `b` and the floor-clamped distance between them.
#[inline]
pub fn unit_toward(a: &Point2<f64>, b: &Point2<f64>, floor: f64) -> (Vector2<f64>, f64) {
    let (delta, dist) = separation(a, b, floor);
    (delta / dist, dist)
}

/// Interior angle at `mid` between the bond vectors toward `prev` and `next`,
/// in radians, clamped into [0, pi].
pub fn interior_angle(prev: &Point2<f64>, mid: &Point2<f64>, next: &Point2<f64>) -> f64 {
    let v1 = prev - mid;
    let v2 = next - mid;
    let l1 = v1.norm().max(MIN_DISTANCE);
    let l2 = v2.norm().max(MIN_DISTANCE);
    let cos = (v1.dot(&v2) / (l1 * l2)).clamp(-1.0, 1.0);
    cos.acos()
}

/// Sum of the unit bond directions at `mid`: the (unnormalized) bisector
/// along which the angular restoring force is applied.
pub fn bond_bisector(prev: &Point2<f64>, mid: &Point2<f64>, next: &Point2<f64>) -> Vector2<f64> {
    let v1 = prev - mid;
    let v2 = next - mid;
    let l1 = v1.norm().max(MIN_DISTANCE);
    let l2 = v2.norm().max(MIN_DISTANCE);
    v1 / l1 + v2 / l2
}
