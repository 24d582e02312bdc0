//! Common test utilities for integration tests.

use bevy::math::DVec2;
use swingby::outcome::RunOutcome;
use swingby::profile::{SimProfile, CLASSIC};
use swingby::session::Session;
use swingby::types::{BodyState, G};

/// Create an idle session on the classic profile.
pub fn classic_session() -> Session {
    Session::new(CLASSIC).expect("bundled profile must validate")
}

/// Create an idle session on a custom profile.
pub fn session_with(profile: SimProfile) -> Session {
    Session::new(profile).expect("test profile must validate")
}

/// Arm a session from the bottom edge with the given x offset, aimed
/// straight up. Offset zero is a head-on course into the primary.
pub fn arm_from_bottom(session: &mut Session, offset_km: f64) {
    let start = DVec2::new(offset_km, -session.profile().half_extents().y);
    session.set_launch(start, DVec2::new(0.0, 1.0));
}

/// Tick until the run ends, with a safety cap.
pub fn run_until_ended(session: &mut Session, max_ticks: usize) -> RunOutcome {
    for _ in 0..max_ticks {
        if let Some(outcome) = session.tick() {
            return outcome;
        }
    }
    panic!("Run did not end within {max_ticks} ticks");
}

/// Specific orbital energy of the probe relative to the primary.
///
/// E = v²/2 - GM/r with v the relative speed. Negative means bound.
pub fn specific_energy(probe: &BodyState, primary: &BodyState) -> f64 {
    let r = probe.distance_to(primary);
    let v = (probe.vel - primary.vel).length();
    0.5 * v * v - G * primary.mass / r
}
