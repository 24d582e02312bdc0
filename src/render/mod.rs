//! Rendering systems for the gravity assist sandbox.
//!
//! Draws the two bodies as filled discs, the probe's trail, the region
//! axes with Gm tick labels, and the aim overlay while a launch is
//! being chosen.

pub mod axes;
pub mod bodies;
pub mod trail;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Plugin aggregating all world-space rendering.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, bodies::spawn_body_sprites)
            .add_systems(
                Update,
                (
                    bodies::sync_body_sprites,
                    // Gizmos layer in submission order: axes under the
                    // trail, aim overlay on top
                    (axes::draw_axes, trail::draw_trail, bodies::draw_aim_overlay).chain(),
                ),
            )
            .add_systems(EguiPrimaryContextPass, axes::draw_axis_labels);
    }
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// Region axes and tick marks.
    pub const AXES: f32 = 0.0;
    /// Probe trail.
    pub const TRAIL: f32 = 1.0;
    /// Primary and probe discs.
    pub const BODIES: f32 = 2.0;
    /// Aim ghost and direction line.
    pub const AIM: f32 = 3.0;
}
