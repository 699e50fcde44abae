//! Per-frame motion of celestial bodies.
//!
//! Orbital positions are a pure function of absolute elapsed time, so a body's
//! place on its orbit is fully determined by `t` alone and is reproducible for
//! testing. Self-rotation is scaled by the frame delta (radians per second)
//! rather than applied as a fixed per-frame step, so spin rate is independent
//! of display refresh rate.

use bevy::prelude::*;

/// Component driving circular orbital motion around the origin.
#[derive(Component, Clone, Copy, Debug)]
pub struct OrbitalMotion {
    /// Orbit radius in scene units.
    pub radius: f32,
    /// Angular speed in radians per second.
    pub angular_speed: f32,
}

/// Component driving self-rotation about a fixed local axis.
#[derive(Component, Clone, Copy, Debug)]
pub struct SelfRotation {
    /// Spin axis in local space.
    pub axis: Vec3,
    /// Spin speed in radians per second.
    pub speed: f32,
}

/// Position on a circular orbit in the ecliptic (XZ) plane at time `t`.
///
/// Pure function of `(t, radius, angular_speed)`; calling it twice with the
/// same arguments yields identical coordinates.
pub fn orbital_position(t: f32, radius: f32, angular_speed: f32) -> Vec3 {
    let phase = t * angular_speed;
    Vec3::new(phase.cos() * radius, 0.0, phase.sin() * radius)
}

/// Plugin advancing orbits and spins every frame.
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (advance_orbits, spin_bodies));
    }
}

/// Place each orbiting body on its circle from absolute elapsed time.
pub fn advance_orbits(time: Res<Time>, mut query: Query<(&mut Transform, &OrbitalMotion)>) {
    let t = time.elapsed_secs();
    for (mut transform, motion) in query.iter_mut() {
        transform.translation = orbital_position(t, motion.radius, motion.angular_speed);
    }
}

/// Rotate each spinning body about its axis.
pub fn spin_bodies(time: Res<Time>, mut query: Query<(&mut Transform, &SelfRotation)>) {
    let dt = time.delta_secs();
    for (mut transform, spin) in query.iter_mut() {
        let rotation = Quat::from_axis_angle(spin.axis.normalize(), spin.speed * dt);
        transform.rotate_local(rotation);
    }
}
