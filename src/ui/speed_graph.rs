//! Live probe speed graph.
//!
//! A small anchored window plotting speed samples against the mission
//! clock. The vertical axis starts at the profile floor and only widens,
//! in fixed steps, as the probe gains speed.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::session::Session;
use crate::types::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Plot canvas size in points.
const PLOT_WIDTH: f32 = 360.0;
const PLOT_HEIGHT: f32 = 220.0;

/// Margins between the canvas edge and the plot area, in points.
const MARGIN_LEFT: f32 = 50.0;
const MARGIN_RIGHT: f32 = 10.0;
const MARGIN_TOP: f32 = 10.0;
const MARGIN_BOTTOM: f32 = 30.0;

/// Tick positions per axis, endpoints included.
const TICK_COUNT: usize = 5;

/// Colors for the graph.
mod colors {
    use bevy_egui::egui::Color32;

    pub const AXIS: Color32 = Color32::WHITE;
    // White at alpha 20, stored premultiplied: from_rgba_unmultiplied
    // (255, 255, 255, 20) is not a const fn but evaluates to exactly this.
    pub const GRID: Color32 = Color32::from_rgba_premultiplied(20, 20, 20, 20);
    pub const CURVE: Color32 = Color32::from_rgb(0, 255, 0);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
}

/// Pick a display divisor and unit name for a time range in seconds.
fn time_unit(range: f64) -> (f64, &'static str) {
    if range > 240.0 * SECONDS_PER_HOUR {
        (SECONDS_PER_DAY, "days")
    } else if range > SECONDS_PER_HOUR {
        (SECONDS_PER_HOUR, "hours")
    } else if range > SECONDS_PER_MINUTE {
        (SECONDS_PER_MINUTE, "minutes")
    } else {
        (1.0, "seconds")
    }
}

/// System that renders the speed graph once a run has samples.
pub fn speed_graph_system(mut contexts: EguiContexts, session: Res<Session>) {
    let series = session.speed_series();
    let (Some(first), Some(last)) = (series.front(), series.back()) else {
        return;
    };
    let t_start = first.time;
    let range = last.time - t_start;
    let (divisor, unit) = time_unit(range);
    let axis_max = session.speed_axis_max();

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Probe speed")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .show(ctx, |ui| {
            let size = egui::vec2(PLOT_WIDTH, PLOT_HEIGHT);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
            let canvas = response.rect;
            let plot = egui::Rect::from_min_max(
                egui::pos2(canvas.min.x + MARGIN_LEFT, canvas.min.y + MARGIN_TOP),
                egui::pos2(canvas.max.x - MARGIN_RIGHT, canvas.max.y - MARGIN_BOTTOM),
            );

            let axis_stroke = egui::Stroke::new(1.0, colors::AXIS);
            painter.line_segment([plot.left_top(), plot.left_bottom()], axis_stroke);
            painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis_stroke);

            let grid_stroke = egui::Stroke::new(1.0, colors::GRID);
            let label_font = egui::FontId::proportional(11.0);

            for i in 0..TICK_COUNT {
                let f = i as f32 / (TICK_COUNT - 1) as f32;

                // Speed ticks up the left edge
                let y = plot.max.y - f * plot.height();
                if i > 0 {
                    painter.line_segment(
                        [egui::pos2(plot.min.x, y), egui::pos2(plot.max.x, y)],
                        grid_stroke,
                    );
                }
                painter.text(
                    egui::pos2(plot.min.x - 6.0, y),
                    egui::Align2::RIGHT_CENTER,
                    format!("{:.2}", f as f64 * axis_max),
                    label_font.clone(),
                    colors::TEXT,
                );

                // Time ticks along the bottom edge
                let x = plot.min.x + f * plot.width();
                if i > 0 {
                    painter.line_segment(
                        [egui::pos2(x, plot.min.y), egui::pos2(x, plot.max.y)],
                        grid_stroke,
                    );
                }
                painter.text(
                    egui::pos2(x, plot.max.y + 4.0),
                    egui::Align2::CENTER_TOP,
                    format!("{:.1}", (t_start + f as f64 * range) / divisor),
                    label_font.clone(),
                    colors::TEXT,
                );
            }

            painter.text(
                egui::pos2(plot.min.x + 4.0, plot.min.y + 2.0),
                egui::Align2::LEFT_TOP,
                "km/s",
                label_font.clone(),
                colors::TEXT,
            );
            painter.text(
                egui::pos2(plot.center().x, canvas.max.y - 2.0),
                egui::Align2::CENTER_BOTTOM,
                format!("time [{unit}]"),
                label_font,
                colors::TEXT,
            );

            // The curve itself, once there is a span to plot over
            if series.len() >= 2 && range > 0.0 {
                let points: Vec<egui::Pos2> = series
                    .iter()
                    .map(|sample| {
                        let fx = ((sample.time - t_start) / range) as f32;
                        let fy = (sample.speed / axis_max) as f32;
                        egui::pos2(
                            plot.min.x + fx * plot.width(),
                            plot.max.y - fy * plot.height(),
                        )
                    })
                    .collect();
                painter.add(egui::Shape::line(
                    points,
                    egui::Stroke::new(1.5, colors::CURVE),
                ));
            }
        });
}
