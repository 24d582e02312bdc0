//! Simulation driver: one fixed tick per rendered frame.
//!
//! The session does all the real work; this plugin owns it as a
//! resource, funnels start and reset requests into it, and advances it
//! exactly one tick per frame while a run is live. Frame rate therefore
//! sets the pace of simulated time; the simulated delta per tick stays
//! fixed regardless.

use bevy::prelude::*;

pub mod integrator;

#[cfg(test)]
mod proptest_physics;

pub use integrator::Integrator;

use crate::outcome::RunOutcome;
use crate::session::{RunState, Session};
use crate::types::SECONDS_PER_HOUR;

/// Request to start the armed run (HUD button or keyboard).
#[derive(Event, Clone, Debug)]
pub struct StartRequested;

/// Request to restore the canonical scene.
#[derive(Event, Clone, Debug)]
pub struct ResetRequested;

/// Owns the [`Session`] resource and drives its lifecycle.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Session>()
            .add_event::<StartRequested>()
            .add_event::<ResetRequested>()
            .add_systems(
                Update,
                (
                    handle_start_requests,
                    handle_reset_requests,
                    run_session_tick,
                )
                    .chain(),
            );
    }
}

/// Start the run if a request arrived and the session is armed.
fn handle_start_requests(mut events: EventReader<StartRequested>, mut session: ResMut<Session>) {
    for _ in events.read() {
        if session.start() {
            info!("Run started on profile '{}'", session.profile().id);
        }
    }
}

/// Restore the canonical scene on request, from any state.
fn handle_reset_requests(mut events: EventReader<ResetRequested>, mut session: ResMut<Session>) {
    for _ in events.read() {
        session.reset();
        info!("Session reset to profile '{}'", session.profile().id);
    }
}

/// Advance the session by one fixed tick while a run is live.
fn run_session_tick(mut session: ResMut<Session>) {
    if session.state() != RunState::Running {
        return;
    }

    let Some(outcome) = session.tick() else {
        return;
    };

    let name = session.profile().primary_name;
    let hours = session.clock() / SECONDS_PER_HOUR;
    match outcome {
        RunOutcome::Crash => {
            info!("Probe crashed into {name} after {hours:.0} simulated hours");
        }
        RunOutcome::Captured {
            speed,
            escape_velocity,
        } => {
            info!(
                "Probe captured by {name}: {speed:.2} km/s is below the \
                 {escape_velocity:.2} km/s escape velocity"
            );
        }
        RunOutcome::Escaped {
            speed,
            escape_velocity,
            grade,
        } => {
            info!(
                "Probe escaped {name} at {speed:.2} km/s (needed {escape_velocity:.2} km/s), \
                 grade {grade}"
            );
        }
    }
}
