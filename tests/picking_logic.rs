//! Picking and hover state machine tests.
//!
//! Drives the pure transition function and the ray resolution against the
//! real planet table, with a test-local world mirroring how the systems
//! apply highlight and guide visibility.

use std::collections::HashMap;

use bevy::math::Vec3;

use orrery::animation::orbital_position;
use orrery::picking::ray::PickRay;
use orrery::picking::{hover_transition, pick_nearest, HoverTransition, RingTarget, SphereTarget};
use orrery::render::bodies::planet_specs;
use orrery::types::BodyId;

// ============================================================================
// Hover invariant under pointer-move sequences
// ============================================================================

/// Test-local mirror of the highlight/visibility side effects.
#[derive(Default)]
struct HoverWorld {
    hovered: Option<BodyId>,
    highlighted: HashMap<BodyId, bool>,
    guide_visible: HashMap<BodyId, bool>,
}

impl HoverWorld {
    /// Apply one pointer-move result the way the picking system does.
    fn pointer_move(&mut self, hit: Option<BodyId>) {
        match hover_transition(self.hovered, hit) {
            HoverTransition::None => {}
            HoverTransition::Enter(to) => {
                self.set(to, true);
                self.hovered = Some(to);
            }
            HoverTransition::Switch { from, to } => {
                self.set(from, false);
                self.set(to, true);
                self.hovered = Some(to);
            }
            HoverTransition::Exit(from) => {
                self.set(from, false);
                self.hovered = None;
            }
        }
    }

    fn set(&mut self, id: BodyId, on: bool) {
        self.highlighted.insert(id, on);
        self.guide_visible.insert(id, on);
    }

    fn highlighted_bodies(&self) -> Vec<BodyId> {
        self.highlighted
            .iter()
            .filter(|&(_, &on)| on)
            .map(|(&id, _)| id)
            .collect()
    }

    fn visible_guides(&self) -> Vec<BodyId> {
        self.guide_visible
            .iter()
            .filter(|&(_, &on)| on)
            .map(|(&id, _)| id)
            .collect()
    }

    /// At most one highlight, at most one visible guide, and they agree.
    fn assert_single_selection(&self) {
        let highlighted = self.highlighted_bodies();
        let visible = self.visible_guides();
        assert!(highlighted.len() <= 1, "multiple highlights: {highlighted:?}");
        assert!(visible.len() <= 1, "multiple visible guides: {visible:?}");
        assert_eq!(highlighted, visible);
        match self.hovered {
            Some(id) => assert_eq!(highlighted, vec![id]),
            None => assert!(highlighted.is_empty()),
        }
    }
}

#[test]
fn hover_invariant_holds_over_arbitrary_sequence() {
    let mut world = HoverWorld::default();
    let sequence = [
        Some(BodyId::Mercury),
        Some(BodyId::Mercury),
        Some(BodyId::Venus),
        None,
        Some(BodyId::Earth),
        Some(BodyId::Mars),
        Some(BodyId::Mars),
        None,
        None,
        Some(BodyId::Neptune),
    ];

    for hit in sequence {
        world.pointer_move(hit);
        world.assert_single_selection();
    }
}

#[test]
fn direct_switch_skips_idle() {
    let mut world = HoverWorld::default();
    world.pointer_move(Some(BodyId::Earth));
    assert_eq!(world.hovered, Some(BodyId::Earth));

    // A -> B in one pointer move: B is hovered, A fully cleared, and the
    // transition itself is a Switch, never Exit-then-Enter.
    assert_eq!(
        hover_transition(world.hovered, Some(BodyId::Mars)),
        HoverTransition::Switch {
            from: BodyId::Earth,
            to: BodyId::Mars,
        }
    );
    world.pointer_move(Some(BodyId::Mars));
    world.assert_single_selection();
    assert_eq!(world.hovered, Some(BodyId::Mars));

    // Off every pickable mesh: nothing highlighted.
    world.pointer_move(None);
    world.assert_single_selection();
    assert_eq!(world.hovered, None);
}

// ============================================================================
// Ray resolution against the real planet table
// ============================================================================

/// Pickable set at time `t`: planet spheres on their orbits plus guide rings.
fn pickable_set_at(t: f32) -> (Vec<SphereTarget>, Vec<RingTarget>) {
    let mut spheres = Vec::new();
    let mut rings = Vec::new();
    for spec in planet_specs() {
        spheres.push(SphereTarget {
            id: spec.id,
            center: orbital_position(t, spec.orbital_radius, spec.angular_speed),
            radius: spec.radius,
        });
        rings.push(RingTarget {
            owner: spec.id,
            center: Vec3::ZERO,
            normal: bevy::math::Quat::from_rotation_x(spec.guide_tilt) * Vec3::Y,
            radius: spec.orbital_radius,
            tube: 0.12,
        });
    }
    (spheres, rings)
}

#[test]
fn ray_at_planet_resolves_to_that_planet() {
    let (spheres, rings) = pickable_set_at(0.0);
    // At t = 0 every planet sits at (R, 0, 0); aim straight down at Jupiter.
    let jupiter_r = planet_specs()[4].orbital_radius;
    let ray = PickRay::new(Vec3::new(jupiter_r, 20.0, 0.0), Vec3::NEG_Y);
    assert_eq!(pick_nearest(&ray, &spheres, &rings), Some(BodyId::Jupiter));
}

#[test]
fn ray_at_empty_space_resolves_to_none() {
    let (spheres, rings) = pickable_set_at(0.0);
    // Between Mars (7.0) and Jupiter (9.5), off to the side of every ring
    // plane crossing, aimed parallel to the ecliptic above it.
    let ray = PickRay::new(Vec3::new(0.0, 50.0, -200.0), Vec3::Z);
    assert_eq!(pick_nearest(&ray, &spheres, &rings), None);
}

#[test]
fn guide_hit_resolves_to_owning_planet() {
    let (_, rings) = pickable_set_at(0.0);
    // Earth has zero tilt; its guide crosses (0, 0, R). Aim down at it with
    // no planet spheres in the set, so only the ring can be hit.
    let earth_r = planet_specs()[2].orbital_radius;
    let ray = PickRay::new(Vec3::new(0.0, 20.0, earth_r), Vec3::NEG_Y);
    assert_eq!(pick_nearest(&ray, &[], &rings), Some(BodyId::Earth));
}

#[test]
fn nearest_planet_along_ray_wins() {
    let (spheres, rings) = pickable_set_at(0.0);
    // Edge-on view along -X: the ray would pass through every planet in
    // turn, and the nearest (Neptune, at x = 17) must win the tie-break.
    let ray = PickRay::new(Vec3::new(40.0, 0.01, 0.0), Vec3::NEG_X);
    assert_eq!(pick_nearest(&ray, &spheres, &rings), Some(BodyId::Neptune));
}
