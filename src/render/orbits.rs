//! Orbit guide rings and the body/guide registry.
//!
//! Each planet gets one torus ring at its orbit radius, spawned hidden and
//! shown only while the planet is hovered. The pairing between a planet and
//! its guide is kept in an identifier-keyed registry rather than as live
//! references inside scene-graph nodes, so ownership stays acyclic.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::picking::Pickable;
use crate::render::bodies::{planet_specs, CelestialBody};
use crate::types::BodyId;

/// Tube radius of a guide ring, scene units.
const GUIDE_TUBE_RADIUS: f32 = 0.05;

/// Component marking an entity as an orbit guide ring.
#[derive(Component, Clone, Copy, Debug)]
pub struct OrbitGuide {
    /// The planet this guide belongs to.
    pub owner: BodyId,
    /// Ring radius, equal to the owner's orbital radius.
    pub radius: f32,
    /// Inclination of the ring plane, radians about X.
    pub tilt: f32,
}

impl OrbitGuide {
    /// Normal of the ring plane.
    pub fn normal(&self) -> Vec3 {
        Quat::from_rotation_x(self.tilt) * Vec3::Y
    }
}

/// Identifier-keyed association between planets and their orbit guides.
///
/// Built once at startup; immutable afterwards. Exactly one guide per planet,
/// and the pairing is symmetric: `guide_of` and `owner_of` are inverses.
#[derive(Resource, Default)]
pub struct OrbitRegistry {
    bodies: HashMap<BodyId, Entity>,
    guides: HashMap<BodyId, Entity>,
    owners: HashMap<Entity, BodyId>,
}

impl OrbitRegistry {
    /// Record the planet/guide pairing for one body.
    pub fn register(&mut self, id: BodyId, body: Entity, guide: Entity) {
        self.bodies.insert(id, body);
        self.guides.insert(id, guide);
        self.owners.insert(guide, id);
    }

    /// Entity of the planet with this identifier.
    pub fn body_of(&self, id: BodyId) -> Option<Entity> {
        self.bodies.get(&id).copied()
    }

    /// Entity of the guide ring owned by this planet.
    pub fn guide_of(&self, id: BodyId) -> Option<Entity> {
        self.guides.get(&id).copied()
    }

    /// Resolve a guide entity back to its owning planet.
    pub fn owner_of(&self, guide: Entity) -> Option<BodyId> {
        self.owners.get(&guide).copied()
    }

    /// Number of registered pairings.
    pub fn len(&self) -> usize {
        self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }
}

/// Plugin providing orbit guide spawning.
pub struct OrbitGuidePlugin;

impl Plugin for OrbitGuidePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitRegistry>();
    }
}

/// Spawn one hidden guide ring per planet and fill the registry.
///
/// Runs chained after body spawning so planet entities already exist.
pub fn spawn_orbit_guides(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<OrbitRegistry>,
    planets: Query<(Entity, &CelestialBody)>,
) {
    let ring_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.6),
        emissive: LinearRgba::rgb(0.4, 0.4, 0.4),
        unlit: true,
        ..default()
    });

    for spec in planet_specs() {
        let Some((body_entity, _)) = planets.iter().find(|(_, body)| body.id == spec.id) else {
            warn!("No spawned body for {}; skipping its orbit guide", spec.id.name());
            continue;
        };

        let guide = OrbitGuide {
            owner: spec.id,
            radius: spec.orbital_radius,
            tilt: spec.guide_tilt,
        };
        let mesh = meshes.add(Torus {
            minor_radius: GUIDE_TUBE_RADIUS,
            major_radius: guide.radius,
        });

        let guide_entity = commands
            .spawn((
                Mesh3d(mesh),
                MeshMaterial3d(ring_material.clone()),
                Transform::from_rotation(Quat::from_rotation_x(guide.tilt)),
                Visibility::Hidden,
                guide,
                Pickable,
            ))
            .id();

        registry.register(spec.id, body_entity, guide_entity);
    }

    info!("Registered {} orbit guides", registry.len());
}
