//! Rendering systems for the solar system viewer.
//!
//! Visual representation of celestial bodies, orbit guide rings, and the
//! starfield backdrop.

mod background;
pub mod bodies;
pub mod orbits;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::spawn_solar_system;
use self::orbits::{spawn_orbit_guides, OrbitGuidePlugin};

// Re-export for use in other modules
pub use self::bodies::{BodySpec, CelestialBody, SceneError};
pub use self::orbits::{OrbitGuide, OrbitRegistry};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BackgroundPlugin, OrbitGuidePlugin))
            // Guides need the planet entities, so they spawn after the bodies.
            .add_systems(Startup, (spawn_solar_system, spawn_orbit_guides).chain());
    }
}
