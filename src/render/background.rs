//! Background rendering for the solar system visualization.
//!
//! Provides the starfield backdrop and scene lighting.

use bevy::prelude::*;
use rand::Rng;

/// Number of background stars.
const STAR_COUNT: usize = 500;

/// Inner and outer radius of the spherical shell the stars occupy.
const STARFIELD_INNER: f32 = 60.0;
const STARFIELD_OUTER: f32 = 100.0;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_starfield, spawn_lighting));
    }
}

/// Spawn a starfield on a shell well outside the outermost orbit.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(0.08));

    let mut rng = rand::thread_rng();

    for _ in 0..STAR_COUNT {
        // Uniform direction, radius inside the shell.
        let dir = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        )
        .normalize_or(Vec3::Y);
        let radius = rng.gen_range(STARFIELD_INNER..STARFIELD_OUTER);
        let scale = rng.gen_range(0.5..1.5);

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(dir * radius).with_scale(Vec3::splat(scale)),
        ));
    }

    info!("Spawned {STAR_COUNT} background stars");
}

/// Spawn lighting: a point light at the Sun plus dim ambient fill.
fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 80.0,
        ..default()
    });

    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 200.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));

    info!("Scene lighting initialized");
}
