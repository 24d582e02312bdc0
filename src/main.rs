//! Swingby - Gravity Assist Sandbox
//!
//! A desktop application for flying a probe past a heavy primary and
//! grading the slingshot that results.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use swingby::camera::CameraPlugin;
use swingby::input::InputPlugin;
use swingby::physics::SimulationPlugin;
use swingby::render::RenderPlugin;
use swingby::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Swingby".to_string(),
                ..default()
            }),
            ..default()
        }))
        // All egui systems run in the primary context pass
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
            ..default()
        })
        .add_plugins((
            SimulationPlugin,
            CameraPlugin,
            InputPlugin,
            RenderPlugin,
            UiPlugin,
        ))
        .run();
}
