//! Celestial body spawning.
//!
//! One sphere per body with a consistent material policy: the Sun carries an
//! emissive texture and a fixed glow tint, planets carry a diffuse texture
//! over a fallback base color (a body renders untextured until its texture
//! asset arrives; that is the asset server's concern, not ours).

use bevy::prelude::*;

use crate::animation::{OrbitalMotion, SelfRotation};
use crate::picking::Pickable;
use crate::types::{BodyId, SUN_EMISSIVE_INTENSITY};

/// Angular tessellation for body spheres.
const SPHERE_SUBDIVISIONS: u32 = 32;

/// Spin rate shared by all planets, radians per second.
const PLANET_SPIN_SPEED: f32 = 0.6;

/// Spin rate of the Sun, radians per second.
const SUN_SPIN_SPEED: f32 = 0.3;

/// Error raised by malformed body configuration.
///
/// These are programming errors in the spec table; startup fails fast on them
/// rather than attempting recovery.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SceneError {
    #[error("body {name:?} has non-positive radius {radius}")]
    NonPositiveRadius { name: &'static str, radius: f32 },

    #[error("body {name:?} has negative orbital radius {radius}")]
    NegativeOrbitRadius { name: &'static str, radius: f32 },

    #[error("body spec has an empty name")]
    EmptyName,
}

/// Static description of one celestial body.
#[derive(Clone, Copy, Debug)]
pub struct BodySpec {
    pub id: BodyId,
    /// Display radius of the sphere, scene units.
    pub radius: f32,
    /// Orbit radius around the Sun; zero for the Sun itself.
    pub orbital_radius: f32,
    /// Orbital angular speed, radians per second.
    pub angular_speed: f32,
    /// Inclination of the orbit guide ring, radians. Stored constant.
    pub guide_tilt: f32,
    /// Fallback base color while the texture loads.
    pub color: Color,
    /// Whether the material is emissive (Sun only).
    pub emissive: bool,
}

impl BodySpec {
    /// Texture asset path for this body.
    pub fn texture_path(&self) -> String {
        format!("textures/{}.jpg", self.id.key())
    }

    /// Check construction-time invariants.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.id.name().is_empty() {
            return Err(SceneError::EmptyName);
        }
        if self.radius <= 0.0 {
            return Err(SceneError::NonPositiveRadius {
                name: self.id.name(),
                radius: self.radius,
            });
        }
        if self.orbital_radius < 0.0 {
            return Err(SceneError::NegativeOrbitRadius {
                name: self.id.name(),
                radius: self.orbital_radius,
            });
        }
        Ok(())
    }
}

/// The Sun: emissive, self-rotating about X, never orbiting.
pub fn sun_spec() -> BodySpec {
    BodySpec {
        id: BodyId::Sun,
        radius: 1.0,
        orbital_radius: 0.0,
        angular_speed: 0.0,
        guide_tilt: 0.0,
        color: Color::srgb(1.0, 1.0, 0.0),
        emissive: true,
    }
}

/// The eight planets, ordered by distance from the Sun.
///
/// Radii, orbit radii and angular speeds follow the reference scene; guide
/// tilts are stored constants, not computed from real inclinations.
pub fn planet_specs() -> [BodySpec; 8] {
    [
        BodySpec {
            id: BodyId::Mercury,
            radius: 0.2,
            orbital_radius: 2.5,
            angular_speed: 1.0,
            guide_tilt: 0.12,
            color: Color::srgb(0.53, 0.53, 0.53),
            emissive: false,
        },
        BodySpec {
            id: BodyId::Venus,
            radius: 0.32,
            orbital_radius: 4.0,
            angular_speed: 0.8,
            guide_tilt: 0.06,
            color: Color::srgb(1.0, 0.65, 0.0),
            emissive: false,
        },
        BodySpec {
            id: BodyId::Earth,
            radius: 0.35,
            orbital_radius: 5.5,
            angular_speed: 0.5,
            guide_tilt: 0.0,
            color: Color::srgb(0.0, 0.0, 1.0),
            emissive: false,
        },
        BodySpec {
            id: BodyId::Mars,
            radius: 0.3,
            orbital_radius: 7.0,
            angular_speed: 0.4,
            guide_tilt: 0.03,
            color: Color::srgb(0.8, 0.4, 0.2),
            emissive: false,
        },
        BodySpec {
            id: BodyId::Jupiter,
            radius: 0.7,
            orbital_radius: 9.5,
            angular_speed: 0.25,
            guide_tilt: 0.02,
            color: Color::srgb(0.8, 0.7, 0.6),
            emissive: false,
        },
        BodySpec {
            id: BodyId::Saturn,
            radius: 0.6,
            orbital_radius: 12.0,
            angular_speed: 0.18,
            guide_tilt: 0.04,
            color: Color::srgb(0.9, 0.85, 0.6),
            emissive: false,
        },
        BodySpec {
            id: BodyId::Uranus,
            radius: 0.45,
            orbital_radius: 14.5,
            angular_speed: 0.12,
            guide_tilt: 0.01,
            color: Color::srgb(0.6, 0.8, 0.9),
            emissive: false,
        },
        BodySpec {
            id: BodyId::Neptune,
            radius: 0.45,
            orbital_radius: 17.0,
            angular_speed: 0.1,
            guide_tilt: 0.03,
            color: Color::srgb(0.3, 0.5, 0.9),
            emissive: false,
        },
    ]
}

/// Component marking an entity as a renderable celestial body.
#[derive(Component)]
pub struct CelestialBody {
    pub id: BodyId,
    /// Display radius, used as the picking sphere radius.
    pub radius: f32,
    pub name: &'static str,
}

/// Build the material for a body spec, loading its texture fire-and-forget.
fn body_material(spec: &BodySpec, asset_server: &AssetServer) -> StandardMaterial {
    let texture: Handle<Image> = asset_server.load(spec.texture_path());
    if spec.emissive {
        StandardMaterial {
            base_color: spec.color,
            emissive_texture: Some(texture),
            emissive: spec.color.to_linear() * SUN_EMISSIVE_INTENSITY,
            ..default()
        }
    } else {
        StandardMaterial {
            base_color: spec.color,
            base_color_texture: Some(texture),
            ..default()
        }
    }
}

/// Spawn the Sun and all planets.
pub fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let sun = sun_spec();
    sun.validate().expect("sun spec is statically defined");

    let sun_mesh = meshes.add(
        Sphere::new(sun.radius)
            .mesh()
            .uv(SPHERE_SUBDIVISIONS, SPHERE_SUBDIVISIONS),
    );
    commands.spawn((
        Mesh3d(sun_mesh),
        MeshMaterial3d(materials.add(body_material(&sun, &asset_server))),
        Transform::from_translation(Vec3::ZERO),
        CelestialBody {
            id: sun.id,
            radius: sun.radius,
            name: sun.id.name(),
        },
        SelfRotation {
            axis: Vec3::X,
            speed: SUN_SPIN_SPEED,
        },
    ));

    for spec in planet_specs() {
        spec.validate().expect("planet table is statically defined");

        let mesh = meshes.add(
            Sphere::new(spec.radius)
                .mesh()
                .uv(SPHERE_SUBDIVISIONS, SPHERE_SUBDIVISIONS),
        );
        // Materials are never shared between bodies; hover mutates emissive
        // on exactly one of them.
        let material = materials.add(body_material(&spec, &asset_server));

        let entity = commands
            .spawn((
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::from_translation(Vec3::new(spec.orbital_radius, 0.0, 0.0)),
                CelestialBody {
                    id: spec.id,
                    radius: spec.radius,
                    name: spec.id.name(),
                },
                OrbitalMotion {
                    radius: spec.orbital_radius,
                    angular_speed: spec.angular_speed,
                },
                SelfRotation {
                    axis: Vec3::Y,
                    speed: PLANET_SPIN_SPEED,
                },
                Pickable,
            ))
            .id();

        if spec.id == BodyId::Saturn {
            spawn_saturn_ring(&mut commands, meshes.as_mut(), materials.as_mut(), entity, &spec);
        }
    }

    info!("Spawned the Sun and {} planets", planet_specs().len());
}

/// Attach Saturn's ring as a flattened, tilted torus child.
fn spawn_saturn_ring(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    saturn: Entity,
    spec: &BodySpec,
) {
    let ring_mesh = meshes.add(Torus {
        minor_radius: 0.12,
        major_radius: spec.radius * 1.8,
    });
    let ring_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.76, 0.69, 0.5),
        ..default()
    });

    let ring = commands
        .spawn((
            Mesh3d(ring_mesh),
            MeshMaterial3d(ring_material),
            Transform::from_rotation(Quat::from_rotation_x(0.4))
                .with_scale(Vec3::new(1.0, 0.15, 1.0)),
        ))
        .id();
    commands.entity(saturn).add_child(ring);
}
