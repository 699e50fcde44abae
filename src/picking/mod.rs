//! Mouse picking: hover highlighting and click selection.
//!
//! Every pointer frame a ray is cast from the camera through the cursor and
//! intersected against the pickable set (planet spheres plus orbit guide
//! rings). A guide hit resolves to its owning planet through the registry.
//! The hover state machine keeps at most one planet highlighted and at most
//! one guide visible at any instant.

pub mod ray;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::MainCamera;
use crate::catalog::PlanetCatalog;
use crate::render::orbits::{OrbitGuide, OrbitRegistry};
use crate::render::CelestialBody;
use crate::types::{BodyId, HIGHLIGHT_TINT};
use crate::ui::{apply_selection, PanelState};

use self::ray::{ray_ring, ray_sphere, PickRay};

/// Padding factor on body radii for easier picking.
const PICK_RADIUS_SCALE: f32 = 1.25;

/// Half-width of the pickable band around a guide ring.
const GUIDE_PICK_TUBE: f32 = 0.12;

/// Marker component for meshes eligible for ray intersection.
#[derive(Component)]
pub struct Pickable;

/// Resource tracking the currently hovered planet.
///
/// Invariant: if `current` is `Some(b)`, exactly `b` carries the highlight
/// tint and exactly `b`'s orbit guide is visible.
#[derive(Resource, Default)]
pub struct HoveredBody {
    pub current: Option<BodyId>,
}

/// Hover state change decided by [`hover_transition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTransition {
    /// Hit matches the current state; nothing to do.
    None,
    /// Idle -> Hovering(body).
    Enter(BodyId),
    /// Hovering(from) -> Hovering(to), with no intermediate idle state.
    Switch { from: BodyId, to: BodyId },
    /// Hovering(body) -> Idle.
    Exit(BodyId),
}

/// Decide the hover state change for a resolved hit.
///
/// Pure function of `(current, hit)` so the state machine is testable without
/// a renderer.
pub fn hover_transition(current: Option<BodyId>, hit: Option<BodyId>) -> HoverTransition {
    match (current, hit) {
        (None, None) => HoverTransition::None,
        (None, Some(to)) => HoverTransition::Enter(to),
        (Some(from), None) => HoverTransition::Exit(from),
        (Some(from), Some(to)) if from == to => HoverTransition::None,
        (Some(from), Some(to)) => HoverTransition::Switch { from, to },
    }
}

/// A pickable planet sphere.
#[derive(Clone, Copy, Debug)]
pub struct SphereTarget {
    pub id: BodyId,
    pub center: Vec3,
    pub radius: f32,
}

/// A pickable orbit guide ring, already resolved to its owner.
#[derive(Clone, Copy, Debug)]
pub struct RingTarget {
    pub owner: BodyId,
    pub center: Vec3,
    pub normal: Vec3,
    pub radius: f32,
    pub tube: f32,
}

/// Intersect the ray against the whole pickable set and resolve the nearest
/// hit to a planet. Ties break on smallest ray distance.
pub fn pick_nearest(
    ray: &PickRay,
    spheres: &[SphereTarget],
    rings: &[RingTarget],
) -> Option<BodyId> {
    let mut nearest: Option<(BodyId, f32)> = None;

    for sphere in spheres {
        if let Some(t) = ray_sphere(ray, sphere.center, sphere.radius) {
            if nearest.is_none_or(|(_, best)| t < best) {
                nearest = Some((sphere.id, t));
            }
        }
    }
    for ring in rings {
        if let Some(t) = ray_ring(ray, ring.center, ring.normal, ring.radius, ring.tube) {
            if nearest.is_none_or(|(_, best)| t < best) {
                nearest = Some((ring.owner, t));
            }
        }
    }

    nearest.map(|(id, _)| id)
}

/// Plugin providing hover highlighting and click selection.
pub struct PickingPlugin;

impl Plugin for PickingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredBody>()
            .add_systems(Update, (update_hover, handle_click).chain());
    }
}

/// Build the cursor ray, or `None` when the cursor is unavailable or over UI.
fn cursor_ray(
    contexts: &mut EguiContexts,
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<PickRay> {
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.is_pointer_over_area() {
            return None;
        }
    }

    let cursor = window.cursor_position()?;
    let ray = camera.viewport_to_world(camera_transform, cursor).ok()?;
    Some(PickRay::new(ray.origin, *ray.direction))
}

/// Collect the current pickable set from the scene.
fn collect_targets(
    registry: &OrbitRegistry,
    bodies: &Query<(&GlobalTransform, &CelestialBody), With<Pickable>>,
    guides: &Query<(Entity, &OrbitGuide), With<Pickable>>,
) -> (Vec<SphereTarget>, Vec<RingTarget>) {
    let spheres = bodies
        .iter()
        .map(|(transform, body)| SphereTarget {
            id: body.id,
            center: transform.translation(),
            radius: body.radius * PICK_RADIUS_SCALE,
        })
        .collect();

    let rings = guides
        .iter()
        .filter_map(|(entity, guide)| {
            // Resolve through the registry; a guide nothing owns is skipped.
            let owner = registry.owner_of(entity)?;
            Some(RingTarget {
                owner,
                center: Vec3::ZERO,
                normal: guide.normal(),
                radius: guide.radius,
                tube: GUIDE_PICK_TUBE,
            })
        })
        .collect();

    (spheres, rings)
}

/// Advance the hover state machine from the cursor position.
fn update_hover(
    mut contexts: EguiContexts,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(&GlobalTransform, &CelestialBody), With<Pickable>>,
    guides: Query<(Entity, &OrbitGuide), With<Pickable>>,
    registry: Res<OrbitRegistry>,
    mut hovered: ResMut<HoveredBody>,
    material_handles: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut visibility: Query<&mut Visibility>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let hit = cursor_ray(&mut contexts, window, camera, camera_transform).and_then(|ray| {
        let (spheres, rings) = collect_targets(&registry, &bodies, &guides);
        pick_nearest(&ray, &spheres, &rings)
    });

    match hover_transition(hovered.current, hit) {
        HoverTransition::None => {}
        HoverTransition::Enter(to) => {
            set_highlight(to, true, &registry, &material_handles, &mut materials, &mut visibility);
            hovered.current = Some(to);
        }
        HoverTransition::Switch { from, to } => {
            set_highlight(from, false, &registry, &material_handles, &mut materials, &mut visibility);
            set_highlight(to, true, &registry, &material_handles, &mut materials, &mut visibility);
            hovered.current = Some(to);
        }
        HoverTransition::Exit(from) => {
            set_highlight(from, false, &registry, &material_handles, &mut materials, &mut visibility);
            hovered.current = None;
        }
    }
}

/// Apply or clear the highlight tint and guide visibility for one planet.
fn set_highlight(
    id: BodyId,
    on: bool,
    registry: &OrbitRegistry,
    material_handles: &Query<&MeshMaterial3d<StandardMaterial>>,
    materials: &mut Assets<StandardMaterial>,
    visibility: &mut Query<&mut Visibility>,
) {
    if let Some(body) = registry.body_of(id) {
        if let Ok(handle) = material_handles.get(body) {
            if let Some(material) = materials.get_mut(&handle.0) {
                material.emissive = if on { HIGHLIGHT_TINT } else { LinearRgba::BLACK };
            }
        }
    }

    if let Some(guide) = registry.guide_of(id) {
        if let Ok(mut vis) = visibility.get_mut(guide) {
            *vis = if on {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
        }
    }
}

/// Resolve a click to a planet and feed the selection panel.
///
/// The click target is re-resolved with a fresh ray cast; the cached hover
/// state is never consulted, so a click always registers against what is
/// actually under the cursor.
fn handle_click(
    mut contexts: EguiContexts,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(&GlobalTransform, &CelestialBody), With<Pickable>>,
    guides: Query<(Entity, &OrbitGuide), With<Pickable>>,
    registry: Res<OrbitRegistry>,
    catalog: Res<PlanetCatalog>,
    mut panel: ResMut<PanelState>,
) {
    if !mouse_buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let hit = cursor_ray(&mut contexts, window, camera, camera_transform).and_then(|ray| {
        let (spheres, rings) = collect_targets(&registry, &bodies, &guides);
        pick_nearest(&ray, &spheres, &rings)
    });

    apply_selection(&mut panel, &catalog, hit);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_from_idle() {
        assert_eq!(
            hover_transition(None, Some(BodyId::Earth)),
            HoverTransition::Enter(BodyId::Earth)
        );
    }

    #[test]
    fn same_body_is_a_no_op() {
        assert_eq!(
            hover_transition(Some(BodyId::Earth), Some(BodyId::Earth)),
            HoverTransition::None
        );
    }

    #[test]
    fn switch_has_no_intermediate_idle() {
        assert_eq!(
            hover_transition(Some(BodyId::Earth), Some(BodyId::Mars)),
            HoverTransition::Switch {
                from: BodyId::Earth,
                to: BodyId::Mars,
            }
        );
    }

    #[test]
    fn exit_to_idle() {
        assert_eq!(
            hover_transition(Some(BodyId::Venus), None),
            HoverTransition::Exit(BodyId::Venus)
        );
    }

    #[test]
    fn idle_stays_idle() {
        assert_eq!(hover_transition(None, None), HoverTransition::None);
    }

    #[test]
    fn nearest_sphere_wins_over_farther_ring() {
        // Ray down the -Z axis: Mercury's sphere sits in front of a ring
        // belonging to Neptune that crosses the same line farther away.
        let ray = PickRay::new(Vec3::new(0.0, 0.0, 30.0), Vec3::NEG_Z);
        let spheres = [SphereTarget {
            id: BodyId::Mercury,
            center: Vec3::new(0.0, 0.0, 10.0),
            radius: 0.5,
        }];
        let rings = [RingTarget {
            owner: BodyId::Neptune,
            center: Vec3::ZERO,
            normal: Vec3::Z,
            radius: 17.0,
            tube: 20.0,
        }];
        assert_eq!(pick_nearest(&ray, &spheres, &rings), Some(BodyId::Mercury));
    }

    #[test]
    fn ring_hit_resolves_to_owner() {
        let ray = PickRay::new(Vec3::new(5.5, 10.0, 0.0), Vec3::NEG_Y);
        let rings = [RingTarget {
            owner: BodyId::Earth,
            center: Vec3::ZERO,
            normal: Vec3::Y,
            radius: 5.5,
            tube: 0.1,
        }];
        assert_eq!(pick_nearest(&ray, &[], &rings), Some(BodyId::Earth));
    }

    #[test]
    fn empty_set_yields_no_hit() {
        let ray = PickRay::new(Vec3::Z, Vec3::NEG_Z);
        assert_eq!(pick_nearest(&ray, &[], &[]), None);
    }
}
