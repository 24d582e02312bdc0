//! Numerical integration for the two-body encounter.
//!
//! One probe feels the primary's gravity; the primary itself drifts on
//! a straight line and feels nothing back. Integration is semi-implicit
//! Euler (velocity first, then position with the updated velocity) with
//! proximity-based sub-stepping: the closer the probe gets, the more
//! sub-steps a tick is split into, up to a fixed cap.

use bevy::math::DVec2;

use crate::profile::SimProfile;
use crate::types::{BodyState, G};

// =============================================================================
// Integrator
// =============================================================================

/// Fixed-step two-body integrator with proximity sub-stepping.
///
/// The sub-step count is decided once per [`advance`](Integrator::advance)
/// call from the entry distance and is never revised mid-call, even if
/// the probe dives much closer during the tick.
#[derive(Clone, Copy, Debug)]
pub struct Integrator {
    /// Distance in km below which a tick is split into sub-steps.
    pub close_threshold: f64,
    /// Upper bound on sub-steps per tick.
    pub max_substeps: u32,
}

impl Integrator {
    /// Create an integrator with an explicit threshold and cap.
    pub fn new(close_threshold: f64, max_substeps: u32) -> Self {
        Self {
            close_threshold,
            max_substeps,
        }
    }

    /// Create an integrator configured by a profile.
    pub fn from_profile(profile: &SimProfile) -> Self {
        Self::new(profile.close_threshold(), profile.max_substeps)
    }

    /// Sub-steps a tick is split into at a given probe-primary distance.
    ///
    /// At or beyond the threshold a tick is a single step. Inside it,
    /// the count grows as ceil(threshold / distance) up to the cap, so
    /// a coincident probe (distance zero) gets exactly the cap.
    pub fn substeps(&self, distance: f64) -> u32 {
        if distance >= self.close_threshold {
            return 1;
        }
        let ratio = (self.close_threshold / distance).ceil();
        if ratio >= self.max_substeps as f64 {
            self.max_substeps
        } else {
            ratio as u32
        }
    }

    /// Advance both bodies by `total_dt` seconds.
    ///
    /// Returns `true` if the probe hit the primary. On impact the
    /// probe's velocity is zeroed and the call returns immediately:
    /// neither body moves during the impact sub-step or after it.
    pub fn advance(&self, primary: &mut BodyState, probe: &mut BodyState, total_dt: f64) -> bool {
        let entry_distance = probe.distance_to(primary);
        let substeps = self.substeps(entry_distance);
        let dt = total_dt / substeps as f64;

        for _ in 0..substeps {
            let offset = primary.pos - probe.pos;
            let distance = offset.length();

            // 1. Collision check before any motion this sub-step
            if distance < primary.radius {
                probe.vel = DVec2::ZERO;
                return true;
            }

            // 2. Gravitational acceleration toward the primary.
            //    normalize_or_zero keeps a coincident probe at rest
            //    instead of producing NaN.
            let accel = offset.normalize_or_zero() * (G * primary.mass / (distance * distance));

            // 3. Semi-implicit Euler: velocity first, then position
            //    with the already-updated velocity
            probe.vel += accel * dt;
            probe.pos += probe.vel * dt;

            // 4. The primary drifts unaccelerated
            primary.pos += primary.vel * dt;
        }

        false
    }
}
