/// Distance below which the extra short-range repulsion boost engages.
pub const CONTACT_DISTANCE: f64 = 16.0;
/// Coefficient of the short-range boost.
const CONTACT_BOOST: f64 = 3000.0;
/// Squared-distance floor inside the boost term.
const CONTACT_FLOOR_SQ: f64 = 64.0;
/// Range of the polarity-pair interaction.
pub const PAIR_RANGE: f64 = 100.0;

/// Hookean spring force magnitude along the separation direction. Positive
/// values pull the endpoints together (the bond is stretched).
#[inline]
pub fn spring(dist: f64, rest: f64, k: f64) -> f64 {
    k * (dist - rest)
}

/// Soft-core repulsion magnitude: inverse-square with an extra short-range
/// boost below [`CONTACT_DISTANCE`] to prevent collapse.
#[inline]
pub fn soft_core_repulsion(dist: f64, repulsion: f64) -> f64 {
    let dist_sq = dist * dist;
    let mut f = repulsion / dist_sq;
    if dist < CONTACT_DISTANCE {
        f += CONTACT_BOOST / dist_sq.max(CONTACT_FLOOR_SQ);
    }
    f
}

/// Polarity-pair interaction magnitude at distance `dist`: linear falloff to
/// zero at [`PAIR_RANGE`], attenuated by temperature. Positive attracts,
/// negative repels; zero beyond the range.
#[inline]
pub fn pair_interaction(dist: f64, eps: f64, temperature: f64) -> f64 {
    if dist >= PAIR_RANGE {
        return 0.0;
    }
    eps * (1.0 - dist / PAIR_RANGE) * (1.0 - 0.3 * temperature)
}

/// Restoring force magnitude toward a target radius; negative when outside
/// the target (pulling inward along the outward unit vector).
#[inline]
pub fn ring_restore(radius: f64, target: f64, k: f64) -> f64 {
    -k * (radius - target)
}

/// One-dimensional soft wall force for a coordinate in [0, extent]: linear
/// restoring once within `margin` of either edge, zero otherwise.
#[inline]
pub fn wall_containment(coord: f64, extent: f64, margin: f64, k: f64) -> f64 {
    if coord < margin {
        k * (margin - coord)
    } else if coord > extent - margin {
        -k * (coord - (extent - margin))
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn spring_is_zero_at_rest_length() {
        assert_eq!(spring(16.0, 16.0, 0.75), 0.0);
    }

    #[test]
    fn spring_pulls_together_when_stretched_and_apart_when_compressed() {
        assert!(spring(20.0, 16.0, 0.75) > 0.0);
        assert!(spring(10.0, 16.0, 0.75) < 0.0);
        assert!(f64_approx_equal(spring(20.0, 16.0, 0.75), 3.0));
    }

    #[test]
    fn soft_core_repulsion_decays_with_inverse_square() {
        let near = soft_core_repulsion(20.0, 900.0);
        let far = soft_core_repulsion(40.0, 900.0);
        assert!(f64_approx_equal(near, 900.0 / 400.0));
        assert!(f64_approx_equal(far, near / 4.0));
    }

    #[test]
    fn soft_core_repulsion_boost_engages_below_contact_distance() {
        let just_outside = soft_core_repulsion(16.0, 900.0);
        let just_inside = soft_core_repulsion(15.99, 900.0);
        assert!(just_inside > just_outside + 10.0);
    }

    #[test]
    fn soft_core_repulsion_boost_denominator_is_floored() {
        // Below sqrt(64) = 8 units the boost saturates at 3000/64.
        let at_four = soft_core_repulsion(4.0, 900.0);
        let expected = 900.0 / 16.0 + 3000.0 / 64.0;
        assert!(f64_approx_equal(at_four, expected));
    }

    #[test]
    fn pair_interaction_vanishes_at_and_beyond_range() {
        assert_eq!(pair_interaction(PAIR_RANGE, 2.2, 0.0), 0.0);
        assert_eq!(pair_interaction(150.0, 2.2, 0.0), 0.0);
    }

    #[test]
    fn pair_interaction_scales_linearly_with_proximity() {
        let half = pair_interaction(50.0, 2.0, 0.0);
        assert!(f64_approx_equal(half, 1.0));
        let close = pair_interaction(0.0, 2.0, 0.0);
        assert!(f64_approx_equal(close, 2.0));
    }

    #[test]
    fn pair_interaction_attenuates_with_temperature() {
        let cold = pair_interaction(50.0, 2.0, 0.0);
        let hot = pair_interaction(50.0, 2.0, 1.0);
        assert!(f64_approx_equal(hot, cold * 0.7));
    }

    #[test]
    fn pair_interaction_preserves_the_sign_of_eps() {
        assert!(pair_interaction(50.0, -1.2, 0.5) < 0.0);
        assert!(pair_interaction(50.0, 2.2, 0.5) > 0.0);
    }

    #[test]
    fn ring_restore_points_back_toward_the_target_radius() {
        // Outside the ring: force along the outward direction is negative.
        assert!(ring_restore(120.0, 100.0, 0.06) < 0.0);
        // Inside: positive, pushing outward.
        assert!(ring_restore(80.0, 100.0, 0.06) > 0.0);
        assert_eq!(ring_restore(100.0, 100.0, 0.06), 0.0);
    }

    #[test]
    fn wall_containment_is_zero_in_the_interior() {
        assert_eq!(wall_containment(400.0, 800.0, 22.0, 0.6), 0.0);
        assert_eq!(wall_containment(22.0, 800.0, 22.0, 0.6), 0.0);
    }

    #[test]
    fn wall_containment_pushes_back_from_both_edges() {
        let near_low = wall_containment(10.0, 800.0, 22.0, 0.6);
        assert!(f64_approx_equal(near_low, 0.6 * 12.0));
        let near_high = wall_containment(790.0, 800.0, 22.0, 0.6);
        assert!(f64_approx_equal(near_high, -0.6 * 12.0));
    }
}
