//! Orrery - Interactive Solar System Viewer
//!
//! A desktop application rendering the solar system with hover highlighting,
//! orbit guides, and an information panel for each planet.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod animation;
mod camera;
mod catalog;
mod picking;
mod render;
mod types;
mod ui;

use animation::AnimationPlugin;
use camera::CameraPlugin;
use catalog::PlanetCatalog;
use picking::PickingPlugin;
use render::RenderPlugin;
use ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(PlanetCatalog::default())
        // Add scene and interaction plugins
        .add_plugins((
            CameraPlugin,
            RenderPlugin,
            AnimationPlugin,
            PickingPlugin,
            UiPlugin,
        ))
        .run();
}
