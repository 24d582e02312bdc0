//! Run outcome classification and grading.
//!
//! When a run ends, the probe's final state is classified into one of
//! three outcomes:
//! - Crash: the probe hit the primary (speed was zeroed on impact)
//! - Escaped: final speed exceeds the local escape velocity
//! - Captured: the probe left the region too slowly to escape the primary
//!
//! Escapes are additionally graded against a threshold ladder so that a
//! stronger gravity assist earns a better grade.

use crate::types::G;

/// Letter grade for an escape, best to worst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grade {
    S,
    A,
    B,
    C,
    /// Escaped, but without meaningful gain over the launch speed.
    F,
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::F => "F",
        };
        write!(f, "{letter}")
    }
}

/// One rung of a grade ladder: the minimum final speed that earns a grade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradeStep {
    /// Minimum final speed in km/s (inclusive)
    pub min_speed: f64,
    /// Grade awarded at or above that speed
    pub grade: Grade,
}

/// Speed thresholds for grading an escape.
///
/// Steps are ordered best grade first and evaluated top-down; the first
/// step whose threshold the final speed meets wins. A speed below every
/// step falls through to [`Grade::F`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradeLadder {
    /// Ladder rungs, strictly descending by `min_speed`
    pub steps: &'static [GradeStep],
}

impl GradeLadder {
    /// Create a ladder from a static step table.
    pub const fn new(steps: &'static [GradeStep]) -> Self {
        Self { steps }
    }

    /// Grade a final speed (km/s) against the ladder.
    pub fn grade_for(&self, speed: f64) -> Grade {
        for step in self.steps {
            if speed >= step.min_speed {
                return step.grade;
            }
        }
        Grade::F
    }

    /// True if the ladder is non-empty and strictly descending by threshold.
    pub fn is_well_formed(&self) -> bool {
        if self.steps.is_empty() {
            return false;
        }
        self.steps
            .windows(2)
            .all(|pair| pair[0].min_speed > pair[1].min_speed)
    }
}

/// Final classification of a finished run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RunOutcome {
    /// The probe hit the primary. Impact zeroes the probe's velocity, so a
    /// final speed of exactly zero is always a crash.
    Crash,

    /// The probe ended the run below the local escape velocity; the
    /// primary's gravity still binds it.
    Captured {
        /// Final speed (km/s).
        speed: f64,
        /// Escape velocity at the final distance (km/s).
        escape_velocity: f64,
    },

    /// The probe beat the local escape velocity and is leaving for good.
    Escaped {
        /// Final speed (km/s).
        speed: f64,
        /// Escape velocity at the final distance (km/s).
        escape_velocity: f64,
        /// Grade earned on the ladder.
        grade: Grade,
    },
}

impl RunOutcome {
    /// Returns true if this is a crash outcome.
    pub fn is_crash(&self) -> bool {
        matches!(self, RunOutcome::Crash)
    }

    /// Returns true if this is a captured outcome.
    pub fn is_captured(&self) -> bool {
        matches!(self, RunOutcome::Captured { .. })
    }

    /// Returns true if this is an escape outcome.
    pub fn is_escape(&self) -> bool {
        matches!(self, RunOutcome::Escaped { .. })
    }

    /// Grade for escapes, None otherwise.
    pub fn grade(&self) -> Option<Grade> {
        match self {
            RunOutcome::Escaped { grade, .. } => Some(*grade),
            _ => None,
        }
    }
}

/// Escape velocity from a body of `mass` kg at center distance `distance` km.
///
/// v_esc = sqrt(2·G·M / d), in km/s.
pub fn escape_velocity(mass: f64, distance: f64) -> f64 {
    (2.0 * G * mass / distance).sqrt()
}

/// Classify a finished run.
///
/// `speed` is the probe's final speed (km/s), `distance` its final
/// center distance to the primary (km). A speed of exactly zero is a
/// crash regardless of distance, because only an impact zeroes the
/// velocity. Otherwise the speed must strictly exceed the local escape
/// velocity to count as an escape; ties are captures.
pub fn evaluate(speed: f64, distance: f64, primary_mass: f64, ladder: &GradeLadder) -> RunOutcome {
    if speed == 0.0 {
        return RunOutcome::Crash;
    }

    let v_esc = escape_velocity(primary_mass, distance);
    if speed > v_esc {
        RunOutcome::Escaped {
            speed,
            escape_velocity: v_esc,
            grade: ladder.grade_for(speed),
        }
    } else {
        RunOutcome::Captured {
            speed,
            escape_velocity: v_esc,
        }
    }
}
