//! egui interface: bottom control bar, end-of-run banner, and the live
//! speed graph.

mod hud;
mod result_banner;
mod speed_graph;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            (
                hud::hud_system,
                speed_graph::speed_graph_system,
                result_banner::result_banner_system,
            ),
        );
    }
}
