//! Input handling: keyboard shortcuts and launch aiming.
//!
//! A launch is aimed with the mouse while the session is idle: press
//! near the region boundary to pin the launch point, drag to choose a
//! direction, release to arm. Releasing without any drag distance
//! clears the launch instead.

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::{render_to_km, MainCamera};
use crate::physics::{ResetRequested, StartRequested};
use crate::profile::SimProfile;
use crate::session::{RunState, Session};
use crate::types::KM_PER_GM;

/// Resource tracking the launch aiming gesture.
#[derive(Resource, Default)]
pub struct AimDragState {
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Launch point pinned at drag start, in km.
    pub anchor: Option<DVec2>,
    /// Last known cursor position in km, valid while dragging.
    pub cursor: DVec2,
    /// Boundary point under the cursor while idle and not dragging.
    pub hover: Option<DVec2>,
}

/// Plugin providing keyboard shortcuts and mouse aiming.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AimDragState>()
            .add_systems(Update, (keyboard_shortcuts, handle_aim_drag));
    }
}

/// Keyboard shortcuts for the run lifecycle.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut start_events: EventWriter<StartRequested>,
    mut reset_events: EventWriter<ResetRequested>,
) {
    // Space: start the armed run
    if keys.just_pressed(KeyCode::Space) {
        start_events.write(StartRequested);
    }

    // R: reset to the canonical scene
    if keys.just_pressed(KeyCode::KeyR) {
        reset_events.write(ResetRequested);
    }
}

/// Clamp a cursor position to the region boundary if it lies within the
/// edge margin. Corners resolve in a fixed precedence: left, right,
/// top, bottom.
pub fn position_on_edge(cursor_km: DVec2, profile: &SimProfile) -> Option<DVec2> {
    let half = profile.half_extents();
    let margin = profile.edge_margin;

    // More than one margin outside the region does not count as an edge
    if cursor_km.x.abs() > half.x + margin || cursor_km.y.abs() > half.y + margin {
        return None;
    }

    let near_left = cursor_km.x < -half.x + margin;
    let near_right = cursor_km.x > half.x - margin;
    let near_top = cursor_km.y > half.y - margin;
    let near_bottom = cursor_km.y < -half.y + margin;
    if !(near_left || near_right || near_top || near_bottom) {
        return None;
    }

    let clamped = cursor_km.clamp(-half, half);
    if near_left {
        Some(DVec2::new(-half.x, clamped.y))
    } else if near_right {
        Some(DVec2::new(half.x, clamped.y))
    } else if near_top {
        Some(DVec2::new(clamped.x, half.y))
    } else {
        Some(DVec2::new(clamped.x, -half.y))
    }
}

/// Handle the aim gesture: hover highlight, drag, and release-to-arm.
fn handle_aim_drag(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut session: ResMut<Session>,
    mut drag_state: ResMut<AimDragState>,
    mut contexts: EguiContexts,
) {
    // Aiming only happens in the idle state; once armed or running the
    // gesture is over until a reset
    if session.state() != RunState::Idle && !drag_state.dragging {
        drag_state.hover = None;
        return;
    }

    // IMPORTANT: Only check egui wants pointer when NOT already dragging.
    // A drag that wanders over the HUD must still see its mouse release.
    if !drag_state.dragging {
        if let Ok(ctx) = contexts.ctx_mut() {
            if ctx.wants_pointer_input() {
                drag_state.hover = None;
                return;
            }
        }
    }

    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        drag_state.hover = None;
        return;
    };
    let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor_pos) else {
        return;
    };

    let cursor_km = render_to_km(world_pos);
    let edge_point = position_on_edge(cursor_km, session.profile());
    drag_state.hover = if drag_state.dragging { None } else { edge_point };

    // Press near the boundary pins the launch point
    if mouse.just_pressed(MouseButton::Left) && !drag_state.dragging {
        if let Some(anchor) = edge_point {
            drag_state.dragging = true;
            drag_state.anchor = Some(anchor);
            drag_state.cursor = cursor_km;
        }
    }

    if drag_state.dragging {
        drag_state.cursor = cursor_km;
    }

    // Release arms the launch along the dragged direction; a release
    // with no drag distance clears it
    if mouse.just_released(MouseButton::Left) && drag_state.dragging {
        drag_state.dragging = false;
        let Some(anchor) = drag_state.anchor.take() else {
            return;
        };

        let direction = cursor_km - anchor;
        match session.set_launch(anchor, direction) {
            RunState::Armed => {
                let vel = session.probe().vel;
                info!(
                    "Launch armed at ({:.2}, {:.2}) Gm heading ({:.2}, {:.2}) km/s",
                    anchor.x / KM_PER_GM,
                    anchor.y / KM_PER_GM,
                    vel.x,
                    vel.y
                );
            }
            _ => {
                info!("Aim released with no direction, launch cleared");
            }
        }
    }
}
