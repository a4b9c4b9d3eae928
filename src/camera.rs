use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch is kept strictly inside (-90, 90) so `front` never becomes
/// collinear with `world_up`.
pub const PITCH_LIMIT: f32 = 89.0;
pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

/// First-person free-fly camera. Orientation is a yaw/pitch pair in
/// degrees; the orthonormal basis (`front`, `right`, `up`) is derived
/// from the angles and a fixed world-up reference, so the camera cannot
/// roll.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    zoom: f32,
    zoom_max: f32,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::ZERO,
            right: Vec3::ZERO,
            world_up,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            move_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            zoom_max: ZOOM_MAX,
        };
        camera.update_vectors();
        camera
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self::new(Vec3::from_array(config.initial_position));
        camera.move_speed = config.move_speed;
        camera.mouse_sensitivity = config.mouse_sensitivity;
        // Config values are user-editable: floor the upper bound so a
        // bad (or NaN) fov_max can never invert the clamp range.
        camera.zoom_max = config.fov_max.max(ZOOM_MIN);
        camera.zoom = camera.zoom.clamp(ZOOM_MIN, camera.zoom_max);
        camera
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Field-of-view angle in degrees, driven by scroll-wheel zoom.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Advances the position along the camera-relative axis for
    /// `direction`, scaled by `move_speed` and the frame's elapsed time.
    pub fn move_in_direction(&mut self, direction: MoveDirection, elapsed_seconds: f32) {
        let velocity = self.move_speed * elapsed_seconds;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
        }
    }

    /// Applies a mouse-look delta. Pitch is clamped before the basis is
    /// recomputed, so the derived vectors always agree with the stored
    /// angles.
    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw += delta_x * self.mouse_sensitivity;
        self.pitch += delta_y * self.mouse_sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Narrows or widens the field of view. Scrolling up (positive
    /// `delta`) zooms in.
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom - delta).clamp(ZOOM_MIN, self.zoom_max);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();

        // Re-normalize right and up: their lengths shrink as the camera
        // pitches toward straight up or down.
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        assert_relative_eq!(camera.front(), Vec3::NEG_Z, epsilon = EPSILON);
        assert_relative_eq!(camera.right(), Vec3::X, epsilon = EPSILON);
        assert_relative_eq!(camera.up(), Vec3::Y, epsilon = EPSILON);
    }

    #[test]
    fn basis_stays_orthonormal_across_orientations() {
        // Sweep through the public mouse-look path, including deltas
        // large enough to hit the pitch clamp.
        for yaw_step in -6..=6 {
            for pitch_step in -10..=10 {
                let mut camera = Camera::default();
                let delta_x = (yaw_step as f32 * 30.0 - DEFAULT_YAW) / camera.mouse_sensitivity;
                let delta_y = pitch_step as f32 * 11.0 / camera.mouse_sensitivity;
                camera.rotate(delta_x, delta_y);

                assert_relative_eq!(camera.front().length(), 1.0, epsilon = EPSILON);
                assert_relative_eq!(camera.right().length(), 1.0, epsilon = EPSILON);
                assert_relative_eq!(camera.up().length(), 1.0, epsilon = EPSILON);
                assert_relative_eq!(camera.front().dot(camera.right()), 0.0, epsilon = EPSILON);
                assert_relative_eq!(camera.front().dot(camera.up()), 0.0, epsilon = EPSILON);
                assert_relative_eq!(camera.right().dot(camera.up()), 0.0, epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn pitch_clamps_under_repeated_input() {
        let mut camera = Camera::default();
        camera.rotate(0.0, 100.0 / camera.mouse_sensitivity);
        camera.rotate(0.0, 100.0 / camera.mouse_sensitivity);
        assert_relative_eq!(camera.pitch(), PITCH_LIMIT);

        camera.rotate(0.0, -10_000.0);
        assert_relative_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn basis_matches_clamped_pitch() {
        // A clamped rotate must still recompute the vectors; the front
        // vector has to agree with pitch = +89, not the raw sum.
        let mut camera = Camera::default();
        camera.rotate(0.0, 10_000.0);

        let expected_y = PITCH_LIMIT.to_radians().sin();
        assert_relative_eq!(camera.front().y, expected_y, epsilon = EPSILON);
    }

    #[test]
    fn zoom_clamps_at_both_bounds() {
        let mut camera = Camera::default();
        camera.zoom_by(-1000.0);
        assert_relative_eq!(camera.zoom(), ZOOM_MAX);

        camera.zoom_by(1000.0);
        assert_relative_eq!(camera.zoom(), ZOOM_MIN);

        for _ in 0..50 {
            camera.zoom_by(7.3);
        }
        assert_relative_eq!(camera.zoom(), ZOOM_MIN);
    }

    #[test]
    fn forward_then_backward_restores_position() {
        let start = Vec3::new(1.0, 2.0, 3.0);
        let mut camera = Camera::new(start);
        camera.rotate(123.0, 45.0);

        camera.move_in_direction(MoveDirection::Forward, 0.73);
        camera.move_in_direction(MoveDirection::Backward, 0.73);
        assert_relative_eq!(camera.position, start, epsilon = EPSILON);

        camera.move_in_direction(MoveDirection::Left, 1.5);
        camera.move_in_direction(MoveDirection::Right, 1.5);
        assert_relative_eq!(camera.position, start, epsilon = EPSILON);
    }

    #[test]
    fn strafing_is_horizontal_for_level_pitch() {
        let mut camera = Camera::default();
        camera.rotate(500.0, 0.0);
        let before = camera.position.y;
        camera.move_in_direction(MoveDirection::Left, 1.0);
        camera.move_in_direction(MoveDirection::Forward, 1.0);
        // Strafe keeps altitude; forward at pitch 0 does too.
        assert_relative_eq!(camera.position.y, before, epsilon = EPSILON);
    }

    #[test]
    fn view_matrix_maps_position_to_origin() {
        let camera = Camera::new(Vec3::new(4.0, -2.0, 9.0));
        let eye = camera.view_matrix().transform_point3(camera.position);
        assert_relative_eq!(eye, Vec3::ZERO, epsilon = EPSILON);

        // A point one unit ahead of the camera lands on the view-space
        // negative Z axis.
        let ahead = camera
            .view_matrix()
            .transform_point3(camera.position + camera.front());
        assert_relative_eq!(ahead, Vec3::NEG_Z, epsilon = EPSILON);
    }

    #[test]
    fn config_overrides_tuning() {
        let config = CameraConfig {
            move_speed: 4.0,
            mouse_sensitivity: 0.25,
            fov_max: 75.0,
            initial_position: [0.0, 1.0, 5.0],
        };
        let mut camera = Camera::from_config(&config);
        assert_relative_eq!(camera.move_speed, 4.0);
        assert_relative_eq!(camera.position, Vec3::new(0.0, 1.0, 5.0));

        camera.zoom_by(-1000.0);
        assert_relative_eq!(camera.zoom(), 75.0);
    }

    #[test]
    fn out_of_range_fov_max_is_floored() {
        // A user-edited config can carry any float; a bound below the
        // zoom minimum must collapse the range instead of panicking.
        let config = CameraConfig {
            fov_max: 0.5,
            ..Default::default()
        };
        let mut camera = Camera::from_config(&config);
        assert_relative_eq!(camera.zoom(), ZOOM_MIN);

        camera.zoom_by(-1000.0);
        assert_relative_eq!(camera.zoom(), ZOOM_MIN);

        let config = CameraConfig {
            fov_max: f32::NAN,
            ..Default::default()
        };
        let mut camera = Camera::from_config(&config);
        camera.zoom_by(-1.0);
        assert_relative_eq!(camera.zoom(), ZOOM_MIN);
    }
}
