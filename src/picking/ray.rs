//! Pure ray-intersection geometry for picking.
//!
//! All functions return the parametric distance `t` along the ray to the
//! nearest forward hit, so callers can tie-break overlapping hits by taking
//! the smallest `t`.

use bevy::prelude::*;

/// A picking ray in world space.
#[derive(Clone, Copy, Debug)]
pub struct PickRay {
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl PickRay {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize(),
        }
    }

    /// Point at parametric distance `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Distance to the nearest forward intersection with a sphere, if any.
pub fn ray_sphere(ray: &PickRay, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - ray.origin;
    let t_closest = to_center.dot(ray.dir);
    let d2 = to_center.length_squared() - t_closest * t_closest;
    let r2 = radius * radius;
    if d2 > r2 {
        return None;
    }

    let half_chord = (r2 - d2).sqrt();
    let t_near = t_closest - half_chord;
    let t_far = t_closest + half_chord;

    // Prefer the entry point; fall back to the exit point when the origin is
    // inside the sphere. Both behind the origin means no hit.
    if t_near >= 0.0 {
        Some(t_near)
    } else if t_far >= 0.0 {
        Some(t_far)
    } else {
        None
    }
}

/// Distance to the nearest forward intersection with a flat ring (an inclined
/// circle of radius `major_radius` with tube half-width `tube_radius`), if any.
///
/// The ring is treated as an annulus in its plane; rays nearly parallel to
/// the plane are counted as misses.
pub fn ray_ring(
    ray: &PickRay,
    center: Vec3,
    normal: Vec3,
    major_radius: f32,
    tube_radius: f32,
) -> Option<f32> {
    let denom = ray.dir.dot(normal);
    if denom.abs() < 1e-6 {
        return None;
    }

    let t = (center - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }

    let radial = (ray.at(t) - center).length();
    if (radial - major_radius).abs() <= tube_radius {
        Some(t)
    } else {
        None
    }
}
