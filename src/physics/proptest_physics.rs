//! Property-based tests for the two-body integrator using proptest.
//!
//! These tests verify integration invariants across a wide range of
//! probe states instead of a handful of hand-picked ones.

use bevy::math::DVec2;
use proptest::prelude::*;

use super::integrator::Integrator;
use crate::types::BodyState;

const THRESHOLD: f64 = 1.0e7;
const JUPITER_MASS: f64 = 1.898e27;
const JUPITER_RADIUS: f64 = 69911.0;

fn classic_integrator() -> Integrator {
    Integrator::new(THRESHOLD, 50)
}

fn jupiter() -> BodyState {
    BodyState::new(
        DVec2::new(0.0, 2.25e7),
        DVec2::new(0.0, -13.07),
        JUPITER_MASS,
        JUPITER_RADIUS,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The sub-step count stays inside [1, cap] for any distance,
    /// including a degenerate zero.
    #[test]
    fn prop_substeps_bounded(distance in 0.0f64..1.0e9) {
        let integrator = classic_integrator();
        let n = integrator.substeps(distance);
        prop_assert!(
            (1..=50).contains(&n),
            "Sub-step count {} out of range at distance {}",
            n, distance
        );
    }

    /// At or beyond the threshold a tick is never split.
    #[test]
    fn prop_far_distance_is_single_step(distance in THRESHOLD..1.0e9) {
        let integrator = classic_integrator();
        prop_assert_eq!(integrator.substeps(distance), 1);
    }

    /// Inside the threshold the count grows monotonically with proximity:
    /// moving closer never reduces the number of sub-steps.
    #[test]
    fn prop_substeps_monotonic_in_proximity(
        near in 1.0f64..THRESHOLD,
        factor in 1.0f64..100.0,
    ) {
        let integrator = classic_integrator();
        let far = (near * factor).min(THRESHOLD);
        prop_assert!(
            integrator.substeps(near) >= integrator.substeps(far),
            "{} sub-steps at {} km but {} at {} km",
            integrator.substeps(near), near,
            integrator.substeps(far), far
        );
    }

    /// One tick from anywhere in the region leaves both bodies finite.
    /// Near-misses produce large accelerations but never NaN.
    #[test]
    fn prop_advance_stays_finite(
        x in -2.5e7f64..2.5e7,
        y in -2.5e7f64..2.5e7,
        vx in -60.0f64..60.0,
        vy in -60.0f64..60.0,
    ) {
        let integrator = classic_integrator();
        let mut primary = jupiter();
        let mut probe = BodyState::new(DVec2::new(x, y), DVec2::new(vx, vy), 722.0, 300.0);

        integrator.advance(&mut primary, &mut probe, 17520.0);

        prop_assert!(probe.pos.x.is_finite() && probe.pos.y.is_finite());
        prop_assert!(probe.vel.x.is_finite() && probe.vel.y.is_finite());
        prop_assert!(primary.pos.x.is_finite() && primary.pos.y.is_finite());
    }

    /// Entering a tick inside the primary's radius always collides,
    /// zeroes the probe's velocity, and moves nothing.
    #[test]
    fn prop_entry_inside_radius_collides_frozen(
        angle in 0.0f64..std::f64::consts::TAU,
        depth in 0.0f64..0.99,
        speed in 0.0f64..100.0,
    ) {
        let integrator = classic_integrator();
        let mut primary = BodyState::new(DVec2::ZERO, DVec2::ZERO, JUPITER_MASS, JUPITER_RADIUS);
        let start = DVec2::from_angle(angle) * (JUPITER_RADIUS * depth);
        let mut probe = BodyState::new(start, DVec2::from_angle(angle) * speed, 722.0, 300.0);

        let collided = integrator.advance(&mut primary, &mut probe, 17520.0);

        prop_assert!(collided, "Expected collision at depth {depth}");
        prop_assert_eq!(probe.vel, DVec2::ZERO);
        prop_assert_eq!(probe.pos, start);
        prop_assert_eq!(primary.pos, DVec2::ZERO);
    }

    /// Nothing in a tick ever changes the primary's velocity.
    #[test]
    fn prop_primary_velocity_constant(
        x in -2.5e7f64..2.5e7,
        y in -2.5e7f64..2.5e7,
        drift_x in -20.0f64..20.0,
        drift_y in -20.0f64..20.0,
    ) {
        let integrator = classic_integrator();
        let drift = DVec2::new(drift_x, drift_y);
        let mut primary = BodyState::new(DVec2::ZERO, drift, JUPITER_MASS, JUPITER_RADIUS);
        let mut probe = BodyState::new(DVec2::new(x, y), DVec2::new(10.0, 0.0), 722.0, 300.0);

        integrator.advance(&mut primary, &mut probe, 17520.0);

        prop_assert_eq!(primary.vel, drift);
    }
}
