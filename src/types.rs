//! Core physics types and constants for the gravity assist simulation.

use bevy::math::DVec2;

/// Physical constants (km-based units)

/// Gravitational constant (km³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-20;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Kilometers per gigameter (axis labels are printed in Gm)
pub const KM_PER_GM: f64 = 1.0e6;

/// Which of the two simulated bodies a state describes.
///
/// The simulation is strictly two-body: one massive primary that drifts on a
/// straight line, and one probe that feels the primary's gravity. Rendering
/// and collision rules depend on the role, not on object identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyRole {
    /// The massive body (e.g. Jupiter). Source of gravity, collision target.
    Primary,
    /// The satellite being flung around the primary.
    Probe,
}

/// Physical state of a body in the simulation.
/// Uses f64 (DVec2) for physics accuracy over planetary scales.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyState {
    /// Position in kilometers from the region center
    pub pos: DVec2,
    /// Velocity in kilometers per second
    pub vel: DVec2,
    /// Mass in kilograms (must be positive)
    pub mass: f64,
    /// Physical radius in kilometers (must be positive), used for collision
    pub radius: f64,
}

impl BodyState {
    /// Create a new body state
    pub fn new(pos: DVec2, vel: DVec2, mass: f64, radius: f64) -> Self {
        Self {
            pos,
            vel,
            mass,
            radius,
        }
    }

    /// Speed in km/s
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Center-to-center distance to another body in km
    pub fn distance_to(&self, other: &BodyState) -> f64 {
        (other.pos - self.pos).length()
    }
}
