//! Body rendering: filled discs for the primary and the probe, plus
//! the aim overlay (ghost probe and direction line) while aiming.
//!
//! Discs are unit circle meshes repositioned and rescaled from the
//! session every frame, so profile switches need no respawning.

use bevy::prelude::*;

use crate::camera::{km_len_to_render, km_to_render};
use crate::input::AimDragState;
use crate::render::z_layers;
use crate::session::{RunState, Session};
use crate::types::BodyRole;

/// Primary disc radius as a fraction of the region width.
const PRIMARY_DRAW_FRACTION: f64 = 1.0 / 80.0;

/// Probe disc radius as a fraction of the region width.
const PROBE_DRAW_FRACTION: f64 = 1.0 / 160.0;

/// Component marking a body disc and its role.
#[derive(Component)]
pub struct BodySprite {
    /// Which session body this disc tracks.
    pub role: BodyRole,
}

/// Disc color per role.
fn body_color(role: BodyRole) -> Color {
    match role {
        BodyRole::Primary => Color::srgb(1.0, 0.65, 0.0),
        BodyRole::Probe => Color::WHITE,
    }
}

/// Spawn one unit disc per body. Position, scale, and visibility are
/// driven from the session by [`sync_body_sprites`].
pub fn spawn_body_sprites(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let disc = meshes.add(Circle::new(1.0));

    for role in [BodyRole::Primary, BodyRole::Probe] {
        commands.spawn((
            Mesh2d(disc.clone()),
            MeshMaterial2d(materials.add(body_color(role))),
            Transform::from_xyz(0.0, 0.0, z_layers::BODIES),
            Visibility::Hidden,
            BodySprite { role },
        ));
    }
}

/// Track the session: move, rescale, and show or hide the discs.
pub fn sync_body_sprites(
    session: Res<Session>,
    mut sprites: Query<(&BodySprite, &mut Transform, &mut Visibility)>,
) {
    let region_width = session.profile().region.x;

    for (sprite, mut transform, mut visibility) in sprites.iter_mut() {
        let (body, fraction) = match sprite.role {
            BodyRole::Primary => (session.primary(), PRIMARY_DRAW_FRACTION),
            BodyRole::Probe => (session.probe(), PROBE_DRAW_FRACTION),
        };

        let pos = km_to_render(body.pos);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
        let radius = km_len_to_render(region_width * fraction);
        transform.scale = Vec3::new(radius, radius, 1.0);

        // The probe only appears once a launch exists
        *visibility = match sprite.role {
            BodyRole::Primary => Visibility::Visible,
            BodyRole::Probe => {
                if session.state() == RunState::Idle {
                    Visibility::Hidden
                } else {
                    Visibility::Visible
                }
            }
        };
    }
}

/// Ghost probe and aim line while a launch is being chosen.
pub fn draw_aim_overlay(session: Res<Session>, drag_state: Res<AimDragState>, mut gizmos: Gizmos) {
    let region_width = session.profile().region.x;
    let ghost_radius = km_len_to_render(region_width * PROBE_DRAW_FRACTION);
    let ghost_color = Color::srgb(0.5, 0.5, 0.5);

    // Hovering the boundary previews where the probe would launch from
    if let Some(hover) = drag_state.hover {
        let center = km_to_render(hover).extend(z_layers::AIM);
        gizmos.circle(center, ghost_radius, ghost_color);
    }

    // While dragging: ghost at the pinned point plus the aim direction
    if drag_state.dragging {
        if let Some(anchor) = drag_state.anchor {
            let from = km_to_render(anchor).extend(z_layers::AIM);
            let to = km_to_render(drag_state.cursor).extend(z_layers::AIM);
            gizmos.circle(from, ghost_radius, ghost_color);
            gizmos.line(from, to, Color::srgba(1.0, 1.0, 1.0, 0.5));
        }
    }
}
