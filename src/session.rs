//! Owned simulation session: bodies, run state, clock, and history.
//!
//! A [`Session`] holds everything one run touches, as plain values:
//! the active profile, the two bodies, the elapsed simulation time,
//! both history buffers, and the final outcome once the run ends.
//! All lifecycle transitions go through its methods:
//!
//! - `set_launch` arms a run (or disarms it on a degenerate direction)
//! - `start` begins integration from the armed state
//! - `tick` advances one fixed time step and ends the run on impact,
//!   on leaving the region, or on a zeroed speed
//! - `reset` restores the canonical scene from the profile
//!
//! No transition skips a state: a running session never goes back to
//! armed, and an ended one only leaves through `reset`.

use bevy::math::DVec2;
use bevy::prelude::Resource;

use crate::history::{SpeedSample, SpeedSeries, TrailBuffer};
use crate::outcome::{evaluate, RunOutcome};
use crate::physics::Integrator;
use crate::profile::{ProfileError, SimProfile, CLASSIC};
use crate::types::BodyState;

/// Lifecycle of a single run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// No launch chosen. The probe sits at the region center.
    #[default]
    Idle,
    /// Launch position and velocity are set; waiting for start.
    Armed,
    /// Physics is advancing every tick.
    Running,
    /// The run finished; the final scene stays frozen until reset.
    Ended,
}

/// Complete state of one simulation run.
#[derive(Resource, Clone, Debug)]
pub struct Session {
    profile: SimProfile,
    integrator: Integrator,
    primary: BodyState,
    probe: BodyState,
    state: RunState,
    /// Simulation seconds since the run started
    clock: f64,
    trail: TrailBuffer,
    speed_series: SpeedSeries,
    /// Current top of the speed graph axis in km/s
    speed_axis_max: f64,
    outcome: Option<RunOutcome>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(CLASSIC).expect("bundled profiles validate")
    }
}

impl Session {
    /// Create an idle session for a profile.
    ///
    /// Fails fast on a profile the simulation cannot run with, so a bad
    /// configuration never reaches the first tick.
    pub fn new(profile: SimProfile) -> Result<Self, ProfileError> {
        profile.validate()?;
        Ok(Self {
            integrator: Integrator::from_profile(&profile),
            primary: profile.primary_body(),
            probe: profile.probe_body(),
            state: RunState::Idle,
            clock: 0.0,
            trail: TrailBuffer::new(profile.trail_capacity),
            speed_series: SpeedSeries::new(profile.series_capacity),
            speed_axis_max: profile.speed_axis_floor,
            outcome: None,
            profile,
        })
    }

    /// Active profile.
    pub fn profile(&self) -> &SimProfile {
        &self.profile
    }

    /// Current primary body state.
    pub fn primary(&self) -> &BodyState {
        &self.primary
    }

    /// Current probe body state.
    pub fn probe(&self) -> &BodyState {
        &self.probe
    }

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Simulation seconds since the run started.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Probe positions recorded this run, oldest first.
    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    /// Speed samples recorded this run, oldest first.
    pub fn speed_series(&self) -> &SpeedSeries {
        &self.speed_series
    }

    /// Current top of the speed graph axis in km/s. Only rises during a
    /// run and snaps back to the profile floor on start and reset.
    pub fn speed_axis_max(&self) -> f64 {
        self.speed_axis_max
    }

    /// Outcome of the last run, present only in [`RunState::Ended`].
    pub fn outcome(&self) -> Option<&RunOutcome> {
        self.outcome.as_ref()
    }

    /// True if the probe has flown past the region plus its margin.
    pub fn out_of_bounds(&self) -> bool {
        let limit = self.profile.half_extents() + DVec2::splat(self.profile.bounds_margin);
        self.probe.pos.x.abs() > limit.x || self.probe.pos.y.abs() > limit.y
    }

    /// Place the probe at `point` with launch velocity along `direction`.
    ///
    /// A degenerate (zero) direction disarms instead: the session drops
    /// back to idle and the probe keeps its previous state. Ignored
    /// while running or ended. Returns the state after the call.
    pub fn set_launch(&mut self, point: DVec2, direction: DVec2) -> RunState {
        if matches!(self.state, RunState::Idle | RunState::Armed) {
            let dir = direction.normalize_or_zero();
            if dir == DVec2::ZERO {
                self.state = RunState::Idle;
            } else {
                self.probe.pos = point;
                self.probe.vel = dir * self.profile.launch_speed;
                self.state = RunState::Armed;
            }
        }
        self.state
    }

    /// Begin the run. Only an armed session starts; returns whether it did.
    ///
    /// Starting clears both history buffers, zeroes the clock, and drops
    /// the speed axis back to the profile floor, so nothing from an
    /// earlier run leaks into this one.
    pub fn start(&mut self) -> bool {
        if self.state != RunState::Armed {
            return false;
        }
        self.trail.clear();
        self.speed_series.clear();
        self.clock = 0.0;
        self.speed_axis_max = self.profile.speed_axis_floor;
        self.outcome = None;
        self.state = RunState::Running;
        true
    }

    /// Advance one fixed tick. No-op unless running.
    ///
    /// Records one trail and one speed sample per tick, raises the
    /// speed axis in profile-step increments when the probe outruns it,
    /// and ends the run on impact, on leaving the bounded region, or on
    /// a speed of exactly zero. Returns the outcome on the ending tick.
    pub fn tick(&mut self) -> Option<RunOutcome> {
        if self.state != RunState::Running {
            return None;
        }

        let dt = self.profile.tick_dt;
        let collided = self
            .integrator
            .advance(&mut self.primary, &mut self.probe, dt);
        self.clock += dt;

        self.trail.push(self.probe.pos);
        let speed = self.probe.speed();
        self.speed_series.push(SpeedSample {
            time: self.clock,
            speed,
        });

        if speed > self.speed_axis_max {
            let step = self.profile.speed_axis_step;
            self.speed_axis_max = (speed / step).ceil() * step;
        }

        if collided || self.out_of_bounds() || speed == 0.0 {
            let distance = self.probe.distance_to(&self.primary);
            let outcome = evaluate(speed, distance, self.profile.primary_mass, &self.profile.ladder);
            self.outcome = Some(outcome);
            self.state = RunState::Ended;
            return Some(outcome);
        }

        None
    }

    /// Restore the canonical scene: fresh bodies from the profile,
    /// empty history, zero clock, idle state. Valid from any state and
    /// idempotent; a second reset changes nothing.
    pub fn reset(&mut self) {
        self.primary = self.profile.primary_body();
        self.probe = self.profile.probe_body();
        self.trail.clear();
        self.speed_series.clear();
        self.clock = 0.0;
        self.speed_axis_max = self.profile.speed_axis_floor;
        self.outcome = None;
        self.state = RunState::Idle;
    }

    /// Switch to a different profile and reset onto it.
    ///
    /// The new profile is validated before anything changes; on error
    /// the session keeps running on the old one.
    pub fn set_profile(&mut self, profile: SimProfile) -> Result<(), ProfileError> {
        profile.validate()?;
        self.integrator = Integrator::from_profile(&profile);
        self.trail = TrailBuffer::new(profile.trail_capacity);
        self.speed_series = SpeedSeries::new(profile.series_capacity);
        self.profile = profile;
        self.reset();
        Ok(())
    }
}
