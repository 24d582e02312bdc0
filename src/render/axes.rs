//! Region axes: a faint cross through the center with tick marks, and
//! egui-painted distance labels in gigameters.

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::camera::{km_len_to_render, km_to_render, MainCamera};
use crate::render::z_layers;
use crate::session::Session;
use crate::types::KM_PER_GM;

/// Ticks per half axis; spacing is an eighth of the region width.
const TICKS_PER_HALF_AXIS: i32 = 4;

/// Tick mark half-length as a fraction of the region width.
const TICK_FRACTION: f64 = 1.0 / 160.0;

/// Screen offset of tick labels from the axis, in points.
const LABEL_OFFSET: f32 = 6.0;

/// Draw the axis cross and tick marks with gizmos.
pub fn draw_axes(session: Res<Session>, mut gizmos: Gizmos) {
    let half = session.profile().half_extents();
    let color = Color::srgba(1.0, 1.0, 1.0, 0.3);

    // Axis cross through the region center
    gizmos.line(
        km_to_render(DVec2::new(-half.x, 0.0)).extend(z_layers::AXES),
        km_to_render(DVec2::new(half.x, 0.0)).extend(z_layers::AXES),
        color,
    );
    gizmos.line(
        km_to_render(DVec2::new(0.0, -half.y)).extend(z_layers::AXES),
        km_to_render(DVec2::new(0.0, half.y)).extend(z_layers::AXES),
        color,
    );

    let tick_half = km_len_to_render(session.profile().region.x * TICK_FRACTION);
    let spacing = session.profile().region.x / 8.0;

    for i in -TICKS_PER_HALF_AXIS..=TICKS_PER_HALF_AXIS {
        if i == 0 {
            continue;
        }
        let offset = i as f64 * spacing;

        let on_x = km_to_render(DVec2::new(offset, 0.0));
        gizmos.line(
            Vec3::new(on_x.x, -tick_half, z_layers::AXES),
            Vec3::new(on_x.x, tick_half, z_layers::AXES),
            color,
        );

        let on_y = km_to_render(DVec2::new(0.0, offset));
        gizmos.line(
            Vec3::new(-tick_half, on_y.y, z_layers::AXES),
            Vec3::new(tick_half, on_y.y, z_layers::AXES),
            color,
        );
    }
}

/// Draw tick distance labels next to both axes with the egui painter.
pub fn draw_axis_labels(
    mut contexts: EguiContexts,
    session: Res<Session>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let spacing = session.profile().region.x / 8.0;
    let font = egui::FontId::proportional(12.0);
    let color = egui::Color32::from_rgba_unmultiplied(255, 255, 255, 100);

    egui::Area::new(egui::Id::new("axis_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .show(ctx, |ui| {
            let painter = ui.painter();

            for i in -TICKS_PER_HALF_AXIS..=TICKS_PER_HALF_AXIS {
                if i == 0 {
                    continue;
                }
                let offset = i as f64 * spacing;
                let text = format!("{:.1} Gm", offset / KM_PER_GM);

                // Below the x axis tick
                let world = km_to_render(DVec2::new(offset, 0.0)).extend(0.0);
                if let Ok(screen) = camera.world_to_viewport(camera_transform, world) {
                    painter.text(
                        egui::pos2(screen.x, screen.y + LABEL_OFFSET),
                        egui::Align2::CENTER_TOP,
                        &text,
                        font.clone(),
                        color,
                    );
                }

                // Right of the y axis tick
                let world = km_to_render(DVec2::new(0.0, offset)).extend(0.0);
                if let Ok(screen) = camera.world_to_viewport(camera_transform, world) {
                    painter.text(
                        egui::pos2(screen.x + LABEL_OFFSET, screen.y),
                        egui::Align2::LEFT_CENTER,
                        &text,
                        font.clone(),
                        color,
                    );
                }
            }
        });
}
