//! Simulation profiles: tunable constants bundled per mission variant.
//!
//! A profile fixes everything a run needs up front:
//! - Region extent and the margins derived from it
//! - Integration tick size and sub-step policy
//! - Canonical primary and probe bodies
//! - History capacities, speed axis behavior, and the grade ladder
//!
//! Profiles are plain values. A session takes one at construction and
//! only swaps it for another on an explicit profile change, which also
//! resets the run. Bundled presets live in [`PROFILES`].

use bevy::math::DVec2;
use thiserror::Error;

use crate::outcome::{Grade, GradeLadder, GradeStep};
use crate::types::{BodyState, SECONDS_PER_DAY};

/// One simulated year in seconds (365 days)
const SIMULATED_YEAR: f64 = 365.0 * SECONDS_PER_DAY;

/// Tick size that compresses one simulated year into 30 seconds of
/// real time at 60 ticks per second (17520 s per tick)
const BASE_TICK_DT: f64 = SIMULATED_YEAR / 30.0 / 60.0;

/// Side length of the classic square region in km
const CLASSIC_REGION_KM: f64 = 5.0e7;

/// Jupiter's orbital radius around the Sun in km, used to size the
/// wide-field region at one tenth scale
const JUPITER_ORBIT_RADIUS_KM: f64 = 7.78e8;

/// Side length of the wide-field square region in km
const WIDE_REGION_KM: f64 = JUPITER_ORBIT_RADIUS_KM / 10.0;

/// Jupiter's mass in kg
const JUPITER_MASS: f64 = 1.898e27;

/// Jupiter's mean radius in km
const JUPITER_RADIUS: f64 = 69911.0;

/// Probe mass in kg (Voyager-class)
const PROBE_MASS: f64 = 722.0;

/// Probe collision radius in km (generous, for visibility)
const PROBE_RADIUS: f64 = 300.0;

/// Grade ladder for the classic region: C requires a real assist.
const CLASSIC_LADDER: GradeLadder = GradeLadder::new(&[
    GradeStep {
        min_speed: 20.0,
        grade: Grade::S,
    },
    GradeStep {
        min_speed: 18.0,
        grade: Grade::A,
    },
    GradeStep {
        min_speed: 16.0,
        grade: Grade::B,
    },
    GradeStep {
        min_speed: 14.0,
        grade: Grade::C,
    },
]);

/// Grade ladder for the wide field: the longer approach makes strong
/// assists harder, so C drops to any gain over the launch speed.
const WIDE_LADDER: GradeLadder = GradeLadder::new(&[
    GradeStep {
        min_speed: 20.0,
        grade: Grade::S,
    },
    GradeStep {
        min_speed: 18.0,
        grade: Grade::A,
    },
    GradeStep {
        min_speed: 16.0,
        grade: Grade::B,
    },
    GradeStep {
        min_speed: 10.0,
        grade: Grade::C,
    },
]);

/// Errors from [`SimProfile::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("simulation region must be positive, got {0} x {1} km")]
    InvalidRegion(f64, f64),
    #[error("tick duration must be positive, got {0} s")]
    InvalidTickDuration(f64),
    #[error("sub-step limit must be at least 1")]
    InvalidSubstepLimit,
    #[error("close-approach fraction must be in (0, 1], got {0}")]
    InvalidCloseFraction(f64),
    #[error("launch speed must be positive, got {0} km/s")]
    InvalidLaunchSpeed(f64),
    #[error("margins must be non-negative, got {0} km")]
    NegativeMargin(f64),
    #[error("{0} mass must be positive, got {1} kg")]
    InvalidMass(&'static str, f64),
    #[error("{0} radius must be positive, got {1} km")]
    InvalidRadius(&'static str, f64),
    #[error("history capacity must be nonzero")]
    ZeroHistoryCapacity,
    #[error("speed axis step must be positive, got {0} km/s")]
    InvalidAxisStep(f64),
    #[error("grade ladder must be non-empty and strictly descending")]
    MalformedLadder,
}

/// Full configuration for one mission variant.
#[derive(Clone, Copy, Debug)]
pub struct SimProfile {
    /// Stable identifier (used for lookup and logging)
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// One-line description shown in the profile picker
    pub description: &'static str,

    /// Full extent of the simulated region in km (width, height)
    pub region: DVec2,
    /// Simulated seconds advanced per tick
    pub tick_dt: f64,
    /// Upper bound on integration sub-steps per tick
    pub max_substeps: u32,
    /// Fraction of the region width below which a tick is sub-stepped
    pub close_fraction: f64,
    /// Probe launch speed in km/s
    pub launch_speed: f64,
    /// How far from the boundary (km) a click still counts as edge
    pub edge_margin: f64,
    /// How far past the boundary (km) the probe may fly before the run ends
    pub bounds_margin: f64,

    /// Display name of the primary body
    pub primary_name: &'static str,
    /// Primary mass in kg
    pub primary_mass: f64,
    /// Primary collision radius in km
    pub primary_radius: f64,
    /// Canonical primary position in km
    pub primary_pos: DVec2,
    /// Canonical primary velocity in km/s (straight-line drift)
    pub primary_vel: DVec2,

    /// Probe mass in kg
    pub probe_mass: f64,
    /// Probe radius in km
    pub probe_radius: f64,

    /// Trail buffer capacity in samples
    pub trail_capacity: usize,
    /// Speed series capacity in samples
    pub series_capacity: usize,
    /// Initial top of the speed graph axis in km/s
    pub speed_axis_floor: f64,
    /// Granularity the axis top is rounded up to when exceeded, km/s
    pub speed_axis_step: f64,

    /// Grade ladder applied to escapes
    pub ladder: GradeLadder,
}

impl SimProfile {
    /// Distance below which integration splits into sub-steps, in km.
    pub fn close_threshold(&self) -> f64 {
        self.region.x * self.close_fraction
    }

    /// Half extents of the region in km.
    pub fn half_extents(&self) -> DVec2 {
        self.region * 0.5
    }

    /// Fresh canonical primary state. Every call returns an independent
    /// value copy, so resets cannot alias a mutated body.
    pub fn primary_body(&self) -> BodyState {
        BodyState::new(
            self.primary_pos,
            self.primary_vel,
            self.primary_mass,
            self.primary_radius,
        )
    }

    /// Fresh canonical probe state: at rest at the region center until
    /// a launch overwrites it.
    pub fn probe_body(&self) -> BodyState {
        BodyState::new(DVec2::ZERO, DVec2::ZERO, self.probe_mass, self.probe_radius)
    }

    /// Check the profile for values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.region.x <= 0.0 || self.region.y <= 0.0 {
            return Err(ProfileError::InvalidRegion(self.region.x, self.region.y));
        }
        if self.tick_dt <= 0.0 {
            return Err(ProfileError::InvalidTickDuration(self.tick_dt));
        }
        if self.max_substeps < 1 {
            return Err(ProfileError::InvalidSubstepLimit);
        }
        if self.close_fraction <= 0.0 || self.close_fraction > 1.0 {
            return Err(ProfileError::InvalidCloseFraction(self.close_fraction));
        }
        if self.launch_speed <= 0.0 {
            return Err(ProfileError::InvalidLaunchSpeed(self.launch_speed));
        }
        if self.edge_margin < 0.0 {
            return Err(ProfileError::NegativeMargin(self.edge_margin));
        }
        if self.bounds_margin < 0.0 {
            return Err(ProfileError::NegativeMargin(self.bounds_margin));
        }
        if self.primary_mass <= 0.0 {
            return Err(ProfileError::InvalidMass("primary", self.primary_mass));
        }
        if self.probe_mass <= 0.0 {
            return Err(ProfileError::InvalidMass("probe", self.probe_mass));
        }
        if self.primary_radius <= 0.0 {
            return Err(ProfileError::InvalidRadius("primary", self.primary_radius));
        }
        if self.probe_radius <= 0.0 {
            return Err(ProfileError::InvalidRadius("probe", self.probe_radius));
        }
        if self.trail_capacity == 0 || self.series_capacity == 0 {
            return Err(ProfileError::ZeroHistoryCapacity);
        }
        if self.speed_axis_step <= 0.0 {
            return Err(ProfileError::InvalidAxisStep(self.speed_axis_step));
        }
        if !self.ladder.is_well_formed() {
            return Err(ProfileError::MalformedLadder);
        }
        Ok(())
    }
}

/// Classic mission: Jupiter crossing a 50 Gm square.
pub const CLASSIC: SimProfile = SimProfile {
    id: "classic",
    name: "Classic",
    description: "Jupiter sweeps through a 50 Gm field. Reach 20 km/s for an S grade.",

    region: DVec2::new(CLASSIC_REGION_KM, CLASSIC_REGION_KM),
    tick_dt: BASE_TICK_DT,
    max_substeps: 50,
    close_fraction: 0.2,
    launch_speed: 10.0,
    edge_margin: CLASSIC_REGION_KM / 40.0,
    bounds_margin: CLASSIC_REGION_KM / 8.0,

    primary_name: "Jupiter",
    primary_mass: JUPITER_MASS,
    primary_radius: JUPITER_RADIUS,
    // Starts near the top of the region, drifting straight down
    primary_pos: DVec2::new(0.0, CLASSIC_REGION_KM / 2.0 * 0.9),
    primary_vel: DVec2::new(0.0, -13.07),

    probe_mass: PROBE_MASS,
    probe_radius: PROBE_RADIUS,

    trail_capacity: 500,
    series_capacity: 500,
    speed_axis_floor: 10.0,
    speed_axis_step: 5.0,

    ladder: CLASSIC_LADDER,
};

/// Wide field: the same encounter in a 77.8 Gm region, one tenth of
/// Jupiter's orbital radius, with a forgiving C threshold.
pub const WIDE_FIELD: SimProfile = SimProfile {
    id: "wide_field",
    name: "Wide Field",
    description: "A 77.8 Gm field with a long approach. Any speed gain earns a C.",

    region: DVec2::new(WIDE_REGION_KM, WIDE_REGION_KM),
    tick_dt: BASE_TICK_DT,
    max_substeps: 50,
    close_fraction: 0.2,
    launch_speed: 10.0,
    edge_margin: WIDE_REGION_KM / 40.0,
    bounds_margin: WIDE_REGION_KM / 8.0,

    primary_name: "Jupiter",
    primary_mass: JUPITER_MASS,
    primary_radius: JUPITER_RADIUS,
    primary_pos: DVec2::new(0.0, WIDE_REGION_KM / 2.0 * 0.9),
    primary_vel: DVec2::new(0.0, -13.07),

    probe_mass: PROBE_MASS,
    probe_radius: PROBE_RADIUS,

    trail_capacity: 500,
    series_capacity: 500,
    speed_axis_floor: 10.0,
    speed_axis_step: 5.0,

    ladder: WIDE_LADDER,
};

/// All bundled profiles, default first.
pub static PROFILES: &[SimProfile] = &[CLASSIC, WIDE_FIELD];

/// Look up a bundled profile by id.
pub fn get_profile(id: &str) -> Option<&'static SimProfile> {
    PROFILES.iter().find(|profile| profile.id == id)
}
