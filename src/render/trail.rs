//! Probe trail: a faded polyline with a dot every few samples.
//!
//! The trail buffer evicts its oldest samples once full, so the line
//! visibly shortens behind a long-lived probe instead of growing
//! without bound.

use bevy::prelude::*;

use crate::camera::{km_len_to_render, km_to_render};
use crate::render::z_layers;
use crate::session::Session;

/// Every n-th trail sample gets a dot marker.
const DOT_INTERVAL: usize = 15;

/// Dot radius as a fraction of the region width.
const DOT_FRACTION: f64 = 1.0 / 400.0;

/// Draw the recorded trail as a polyline with periodic pace dots.
pub fn draw_trail(session: Res<Session>, mut gizmos: Gizmos) {
    let trail = session.trail();
    if trail.is_empty() {
        return;
    }

    let points: Vec<Vec3> = trail
        .iter()
        .map(|pos| km_to_render(*pos).extend(z_layers::TRAIL))
        .collect();

    if points.len() >= 2 {
        gizmos.linestrip(points.iter().copied(), Color::srgba(1.0, 1.0, 1.0, 0.5));
    }

    // Dots every few samples show the probe's pace: wide spacing where
    // it moved fast, tight clusters where it lingered
    let dot_radius = km_len_to_render(session.profile().region.x * DOT_FRACTION);
    for (index, point) in points.iter().enumerate() {
        if index % DOT_INTERVAL == 0 {
            gizmos.circle(*point, dot_radius, Color::WHITE);
        }
    }
}
