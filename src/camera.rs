//! Camera system for the solar system viewer.
//!
//! A perspective camera orbiting the origin: left-drag rotates, the scroll
//! wheel zooms, and every frame the camera eases toward its target
//! orientation so motion settles smoothly instead of snapping.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

/// Initial camera distance from the Sun, scene units.
pub const DEFAULT_DISTANCE: f32 = 15.0;

/// Zoom limits.
pub const MIN_DISTANCE: f32 = 3.0;
pub const MAX_DISTANCE: f32 = 60.0;

/// Radians of rotation per pixel of mouse drag.
const ROTATE_SPEED: f32 = 0.005;

/// Distance change factor per scroll step.
const ZOOM_SPEED: f32 = 0.1;

/// Exponential damping rate; higher settles faster.
const DAMPING: f32 = 8.0;

/// Pitch limit keeping the camera off the poles.
const MAX_PITCH: f32 = 1.5;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Resource tracking orbit camera state.
///
/// `yaw`/`pitch`/`distance` are the rendered values; the `target_*` fields are
/// where input wants them to be. Damping closes the gap each frame.
#[derive(Resource)]
pub struct CameraController {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub target_distance: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.4,
            distance: DEFAULT_DISTANCE,
            target_yaw: 0.0,
            target_pitch: 0.4,
            target_distance: DEFAULT_DISTANCE,
        }
    }
}

/// Move `current` toward `target` with exponential smoothing.
///
/// Frame-rate independent: the remaining gap decays by `exp(-rate * dt)`.
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * (1.0 - (-rate * dt).exp())
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraController>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_input, camera_damping).chain());
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands, controller: Res<CameraController>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        camera_transform(&controller),
        MainCamera,
    ));
}

/// Compose the camera transform from orbit angles and distance.
fn camera_transform(controller: &CameraController) -> Transform {
    let rotation = Quat::from_euler(EulerRot::YXZ, controller.yaw, -controller.pitch, 0.0);
    let translation = rotation * (Vec3::Z * controller.distance);
    Transform::from_translation(translation).looking_at(Vec3::ZERO, Vec3::Y)
}

/// Handle mouse drag for rotation and scroll wheel for zoom.
fn camera_input(
    mut contexts: EguiContexts,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut controller: ResMut<CameraController>,
) {
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.is_pointer_over_area() {
            return;
        }
    }

    if mouse_buttons.pressed(MouseButton::Left) {
        controller.target_yaw -= mouse_motion.delta.x * ROTATE_SPEED;
        controller.target_pitch = (controller.target_pitch + mouse_motion.delta.y * ROTATE_SPEED)
            .clamp(-MAX_PITCH, MAX_PITCH);
    }

    if mouse_scroll.delta.y != 0.0 {
        let zoom_factor = 1.0 - mouse_scroll.delta.y * ZOOM_SPEED;
        controller.target_distance =
            (controller.target_distance * zoom_factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// Settle the camera toward its target orientation and distance.
fn camera_damping(
    time: Res<Time>,
    mut controller: ResMut<CameraController>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let dt = time.delta_secs();
    controller.yaw = approach(controller.yaw, controller.target_yaw, DAMPING, dt);
    controller.pitch = approach(controller.pitch, controller.target_pitch, DAMPING, dt);
    controller.distance = approach(controller.distance, controller.target_distance, DAMPING, dt);

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = camera_transform(&controller);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn approach_converges_monotonically() {
        let mut value = 0.0;
        let mut last_gap = f32::INFINITY;
        for _ in 0..100 {
            value = approach(value, 1.0, DAMPING, 1.0 / 60.0);
            let gap = (1.0_f32 - value).abs();
            assert!(gap < last_gap);
            last_gap = gap;
        }
        assert!(last_gap < 1e-3);
    }

    #[test]
    fn approach_is_stable_at_target() {
        assert_relative_eq!(approach(5.0, 5.0, DAMPING, 0.016), 5.0);
    }

    #[test]
    fn default_camera_looks_at_origin() {
        let controller = CameraController::default();
        let transform = camera_transform(&controller);
        let to_origin = (-transform.translation).normalize();
        let forward = transform.forward();
        assert!(to_origin.dot(*forward) > 0.999);
    }
}
