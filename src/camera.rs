//! Fixed camera fitted to the simulation region.
//!
//! The viewport always frames the active profile's full region; there
//! is no zoom or pan. World geometry renders in scaled-down units so
//! planetary distances fit f32 comfortably.

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::session::Session;

/// Render scale: 1 render unit = 1e5 km (0.1 Gm).
/// The classic 5e7 km region maps to a 500-unit viewport height.
pub const RENDER_SCALE: f64 = 1.0e-5;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Convert a simulation position (km) to render units.
pub fn km_to_render(pos: DVec2) -> Vec2 {
    (pos * RENDER_SCALE).as_vec2()
}

/// Convert a render-unit position back to simulation km.
pub fn render_to_km(pos: Vec2) -> DVec2 {
    pos.as_dvec2() / RENDER_SCALE
}

/// Length in render units for a length in km.
pub fn km_len_to_render(len: f64) -> f32 {
    (len * RENDER_SCALE) as f32
}

/// Plugin providing the fixed region camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, fit_camera_to_region);
    }
}

/// Spawn the camera framing the active profile's region.
fn setup_camera(mut commands: Commands, session: Res<Session>) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: km_len_to_render(session.profile().region.y),
            },
            ..OrthographicProjection::default_2d()
        }),
        MainCamera,
    ));
}

/// Keep the viewport matched to the region after profile switches.
fn fit_camera_to_region(
    session: Res<Session>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
) {
    let Ok(mut projection) = camera_query.single_mut() else {
        return;
    };
    let Projection::Orthographic(ref mut ortho) = *projection else {
        return;
    };

    let target = km_len_to_render(session.profile().region.y);
    let current = match ortho.scaling_mode {
        ScalingMode::FixedVertical { viewport_height } => viewport_height,
        _ => f32::NAN,
    };
    if current != target {
        ortho.scaling_mode = ScalingMode::FixedVertical {
            viewport_height: target,
        };
    }
}
