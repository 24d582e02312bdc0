//! End-of-run banner.
//!
//! Shows the graded outcome once a run ends:
//! - Crash (red): the probe hit the primary
//! - Captured (orange): final speed below escape velocity
//! - Escaped (green): slingshot complete, with letter grade

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::outcome::{Grade, RunOutcome};
use crate::physics::ResetRequested;
use crate::session::{RunState, Session};

/// System that renders the outcome banner when a run has ended.
pub fn result_banner_system(
    mut contexts: EguiContexts,
    session: Res<Session>,
    mut reset_events: EventWriter<ResetRequested>,
) {
    if session.state() != RunState::Ended {
        return;
    }
    let Some(outcome) = session.outcome() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    // Determine colors and content based on how the run ended
    let (title, color, content) = match outcome {
        RunOutcome::Crash => (
            "MISSION FAILED",
            egui::Color32::from_rgb(220, 50, 50),
            format!(
                "The probe crashed into {}.\nGrade: {}",
                session.profile().primary_name,
                Grade::F
            ),
        ),

        RunOutcome::Captured {
            speed,
            escape_velocity,
        } => (
            "CAPTURED",
            egui::Color32::from_rgb(221, 170, 85),
            format!(
                "Final speed: {speed:.2} km/s\n\
                 Escape velocity: {escape_velocity:.2} km/s\n\
                 The probe stays bound to {}.\nGrade: {}",
                session.profile().primary_name,
                Grade::F
            ),
        ),

        RunOutcome::Escaped {
            speed,
            escape_velocity,
            grade,
        } => (
            "MISSION COMPLETE",
            egui::Color32::from_rgb(85, 221, 136),
            format!(
                "Final speed: {speed:.2} km/s\n\
                 Escape velocity: {escape_velocity:.2} km/s\n\
                 Grade: {grade}"
            ),
        ),
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 50.0))
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(title).size(18.0).color(color).strong());

            ui.add_space(8.0);

            ui.label(content);

            if matches!(
                outcome,
                RunOutcome::Escaped {
                    grade: Grade::S,
                    ..
                }
            ) {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("Flawless assist. Top marks.")
                        .color(egui::Color32::from_rgb(85, 221, 136)),
                );
            }

            ui.add_space(8.0);
            ui.separator();

            if ui.button("Reset (R)").clicked() {
                reset_events.write(ResetRequested);
            }
        });
}
