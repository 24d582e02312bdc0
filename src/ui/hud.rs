//! Bottom control bar: launch/reset buttons, mission readouts, and the
//! profile picker.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::physics::{ResetRequested, StartRequested};
use crate::profile::PROFILES;
use crate::session::{RunState, Session};
use crate::types::SECONDS_PER_DAY;

/// Colors for the control bar.
mod colors {
    use bevy_egui::egui::Color32;

    pub const READY: Color32 = Color32::from_rgb(85, 221, 136);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
}

/// System that renders the control bar at the bottom.
pub fn hud_system(
    mut contexts: EguiContexts,
    mut session: ResMut<Session>,
    mut start_events: EventWriter<StartRequested>,
    mut reset_events: EventWriter<ResetRequested>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("control_bar").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            // Launch button, only live once a shot is armed
            let armed = session.state() == RunState::Armed;
            let label = if armed {
                egui::RichText::new("Launch").color(colors::READY).strong()
            } else {
                egui::RichText::new("Launch")
            };
            if ui
                .add_enabled(armed, egui::Button::new(label))
                .on_hover_text("Launch (Space)")
                .clicked()
            {
                start_events.write(StartRequested);
            }

            if ui
                .button("\u{21BA}")
                .on_hover_text("Reset (R)")
                .clicked()
            {
                reset_events.write(ResetRequested);
            }

            ui.separator();

            // Mission clock and probe speed readouts
            ui.label(
                egui::RichText::new(format!(
                    "t = {:>6.1} d",
                    session.clock() / SECONDS_PER_DAY
                ))
                .monospace()
                .color(colors::TEXT),
            );
            ui.label(
                egui::RichText::new(format!("{:>6.2} km/s", session.probe().speed()))
                    .monospace()
                    .color(colors::TEXT),
            );

            ui.separator();

            // Profile picker, locked while a shot is armed or in flight
            ui.label("Profile:");
            let idle = session.state() == RunState::Idle;
            ui.add_enabled_ui(idle, |ui| {
                for profile in PROFILES {
                    let is_current = profile.id == session.profile().id;
                    if ui
                        .selectable_label(is_current, profile.name)
                        .on_hover_text(profile.description)
                        .clicked()
                        && !is_current
                    {
                        match session.set_profile(*profile) {
                            Ok(()) => info!("Switched to the {} profile", profile.name),
                            Err(err) => warn!("Profile rejected: {err}"),
                        }
                    }
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if idle {
                    let hint = format!(
                        "Drag outward from the region edge to aim. {}",
                        session.profile().description
                    );
                    ui.label(egui::RichText::new(hint).weak());
                }
            });
        });
    });
}
