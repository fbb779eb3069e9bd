use glam::{Mat4, Vec2, Vec3};
use voxedit_common::CameraConfig;
use voxedit_input::{Action, FrameInput};

/// Pitch limit in degrees. Past ±90 the look direction flips over.
pub const PITCH_LIMIT: f32 = 89.0;

/// Free-fly editor camera.
///
/// Orientation is stored as yaw/pitch in degrees. The `front`/`right`/`up`
/// basis is derived from them and recomputed on every orientation change, so
/// it is always orthonormal.
#[derive(Debug, Clone)]
pub struct EditorCamera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    aspect_ratio: f32,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// World units per second.
    pub speed: f32,
    /// Degrees of rotation per pixel of cursor motion.
    pub sensitivity: f32,
    /// Previous look sample. `None` until the first update.
    last_cursor: Option<Vec2>,
}

impl EditorCamera {
    pub fn new(position: Vec3, pitch: f32, yaw: f32, aspect_ratio: f32) -> Self {
        let mut camera = Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            aspect_ratio,
            fov: 45.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            speed: 10.0,
            sensitivity: 0.2,
            last_cursor: None,
        };
        camera.set_orientation(yaw, pitch);
        camera
    }

    pub fn from_config(config: &CameraConfig, aspect_ratio: f32) -> Self {
        let mut camera = Self::new(config.position, config.pitch, config.yaw, aspect_ratio);
        camera.fov = config.fov_degrees.to_radians();
        camera.near = config.near;
        camera.far = config.far;
        camera.speed = config.speed;
        camera.sensitivity = config.sensitivity;
        camera
    }

    /// Set yaw and pitch (degrees) together. Pitch is clamped to ±89°, yaw is
    /// stored as given.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(Vec3::Y).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.set_orientation(yaw, self.pitch);
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.set_orientation(self.yaw, pitch);
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
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

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Update the aspect ratio from a viewport size in pixels. A zero-height
    /// viewport (minimized window) keeps the current ratio.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
    }

    /// Advance one frame: mouse look from the cursor delta, then movement.
    ///
    /// The first call only records the cursor baseline. Movement scales with
    /// `elapsed` seconds. Held directions add up without normalization, so
    /// diagonals move faster than a single axis.
    pub fn update(&mut self, elapsed: f32, input: &FrameInput) {
        if let Some(last) = self.last_cursor.replace(input.cursor) {
            let delta = input.cursor - last;
            if delta != Vec2::ZERO {
                self.set_orientation(
                    self.yaw + delta.x * self.sensitivity,
                    // Screen Y grows downward: moving the cursor up looks up.
                    self.pitch - delta.y * self.sensitivity,
                );
            }
        }

        let step = self.speed * elapsed;
        let mut direction = Vec3::ZERO;
        // Fixed summation order keeps float results identical for equal input.
        for action in Action::MOVEMENT.into_iter().filter(|a| input.is_held(*a)) {
            direction += match action {
                Action::MoveForward => self.front,
                Action::MoveBack => -self.front,
                Action::StrafeLeft => -self.right,
                Action::StrafeRight => self.right,
                Action::MoveUp => self.up,
                Action::MoveDown => -self.up,
                Action::ToggleLookLock => Vec3::ZERO,
            };
        }
        self.position += direction * step;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection with OpenGL clip depth (NDC z in [-1, 1]).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, self.aspect_ratio, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for EditorCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default(), 16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec_close(a: Vec3, b: Vec3, tol: f32) {
        assert!((a - b).length() < tol, "{a:?} != {b:?}");
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = EditorCamera::new(Vec3::ZERO, 0.0, 0.0, 1.0);
        for pitch in [-1000.0, -90.0, -89.5, 89.5, 90.0, 120.0, 1000.0] {
            cam.set_pitch(pitch);
            assert!((-PITCH_LIMIT..=PITCH_LIMIT).contains(&cam.pitch()));
        }
        cam.set_pitch(120.0);
        assert_eq!(cam.pitch(), 89.0);
        cam.set_pitch(-120.0);
        assert_eq!(cam.pitch(), -89.0);
        cam.set_pitch(42.0);
        assert_eq!(cam.pitch(), 42.0);
    }

    #[test]
    fn constructor_clamps_pitch() {
        let cam = EditorCamera::new(Vec3::ZERO, -95.0, 0.0, 1.0);
        assert_eq!(cam.pitch(), -89.0);
    }

    #[test]
    fn yaw_is_not_wrapped() {
        let mut cam = EditorCamera::new(Vec3::ZERO, 0.0, 0.0, 1.0);
        cam.set_yaw(725.0);
        assert_eq!(cam.yaw(), 725.0);
        let wrapped = EditorCamera::new(Vec3::ZERO, 0.0, 5.0, 1.0);
        assert_vec_close(cam.front(), wrapped.front(), 1e-4);
    }

    #[test]
    fn basis_is_orthonormal() {
        let mut cam = EditorCamera::new(Vec3::ZERO, 0.0, 0.0, 1.0);
        let mut yaw = -360.0;
        while yaw <= 360.0 {
            let mut pitch = -89.0;
            while pitch <= 89.0 {
                cam.set_orientation(yaw, pitch);
                let (f, r, u) = (cam.front(), cam.right(), cam.up());
                assert!((f.length() - 1.0).abs() < EPS);
                assert!((r.length() - 1.0).abs() < EPS);
                assert!((u.length() - 1.0).abs() < EPS);
                assert!(f.dot(r).abs() < 1e-4, "yaw {yaw} pitch {pitch}");
                assert!(f.dot(u).abs() < 1e-4, "yaw {yaw} pitch {pitch}");
                assert!(r.dot(u).abs() < 1e-4, "yaw {yaw} pitch {pitch}");
                pitch += 11.125;
            }
            yaw += 22.5;
        }
    }

    #[test]
    fn yaw_minus_ninety_looks_down_negative_z() {
        let cam = EditorCamera::new(Vec3::ZERO, 0.0, -90.0, 1.0);
        assert_vec_close(cam.front(), Vec3::NEG_Z, 1e-5);
        assert_vec_close(cam.right(), Vec3::X, 1e-5);
        assert_vec_close(cam.up(), Vec3::Y, 1e-5);
    }

    #[test]
    fn first_sample_does_not_rotate() {
        let mut cam = EditorCamera::new(Vec3::ZERO, 0.0, 0.0, 1.0);
        cam.update(0.0, &FrameInput::new(Vec2::new(640.0, 360.0)));
        assert_eq!(cam.yaw(), 0.0);
        assert_eq!(cam.pitch(), 0.0);
    }

    #[test]
    fn cursor_delta_rotates() {
        let mut cam = EditorCamera::new(Vec3::ZERO, 0.0, 0.0, 1.0);
        cam.update(0.0, &FrameInput::new(Vec2::new(100.0, 100.0)));
        cam.update(0.0, &FrameInput::new(Vec2::new(110.0, 90.0)));
        // 10px right, 10px up at 0.2 deg/px.
        assert!((cam.yaw() - 2.0).abs() < EPS);
        assert!((cam.pitch() - 2.0).abs() < EPS);

        cam.update(0.0, &FrameInput::new(Vec2::new(110.0, 1090.0)));
        assert_eq!(cam.pitch(), -89.0);
    }

    #[test]
    fn movement_is_frame_rate_independent() {
        let keys = [Action::MoveForward, Action::StrafeRight, Action::MoveUp];
        let input = FrameInput::new(Vec2::new(5.0, 5.0)).holding(keys);

        let mut one = EditorCamera::new(Vec3::new(1.0, 2.0, 3.0), -30.0, 45.0, 1.0);
        let mut two = one.clone();

        one.update(0.5, &input);
        two.update(0.25, &input);
        two.update(0.25, &input);

        assert_vec_close(one.position, two.position, 1e-4);
    }

    #[test]
    fn forward_moves_speed_times_elapsed() {
        let mut cam = EditorCamera::new(Vec3::ZERO, 0.0, -90.0, 1.0);
        let input = FrameInput::new(Vec2::ZERO).holding([Action::MoveForward]);
        cam.update(0.5, &input);
        assert_vec_close(cam.position, Vec3::new(0.0, 0.0, -5.0), 1e-4);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut cam = EditorCamera::new(Vec3::ZERO, 10.0, 30.0, 1.0);
        let input = FrameInput::new(Vec2::ZERO)
            .holding([Action::MoveForward, Action::MoveBack, Action::MoveUp, Action::MoveDown]);
        cam.update(1.0, &input);
        assert_vec_close(cam.position, Vec3::ZERO, 1e-4);
    }

    #[test]
    fn diagonal_movement_is_not_normalized() {
        let mut cam = EditorCamera::new(Vec3::ZERO, 0.0, -90.0, 1.0);
        let input =
            FrameInput::new(Vec2::ZERO).holding([Action::MoveForward, Action::StrafeRight]);
        cam.update(1.0, &input);
        let expected = 10.0 * std::f32::consts::SQRT_2;
        assert!((cam.position.length() - expected).abs() < 1e-3);
    }

    #[test]
    fn equal_input_gives_identical_position() {
        let keys = [
            Action::MoveDown,
            Action::StrafeRight,
            Action::MoveForward,
            Action::MoveUp,
            Action::StrafeLeft,
        ];
        let mut reversed = keys;
        reversed.reverse();
        for step in 0..200 {
            let start = EditorCamera::new(Vec3::new(1.0, 2.0, 3.0), -20.0, step as f32 * 1.7, 1.0);
            let mut a = start.clone();
            let mut b = start;
            a.update(0.016, &FrameInput::new(Vec2::ZERO).holding(keys));
            b.update(0.016, &FrameInput::new(Vec2::ZERO).holding(reversed));
            assert_eq!(a.position.to_array(), b.position.to_array(), "yaw step {step}");
        }
    }

    #[test]
    fn up_follows_camera_basis() {
        let mut cam = EditorCamera::new(Vec3::ZERO, -30.0, -90.0, 1.0);
        let up = cam.up();
        cam.update(1.0, &FrameInput::new(Vec2::ZERO).holding([Action::MoveUp]));
        assert_vec_close(cam.position, up * 10.0, 1e-4);
    }

    #[test]
    fn view_matrix_looks_along_front() {
        let cam = EditorCamera::new(Vec3::new(3.0, 4.0, 5.0), -20.0, 70.0, 1.5);
        let ahead = cam.view_matrix().transform_point3(cam.position + cam.front());
        assert_vec_close(ahead, Vec3::NEG_Z, 1e-4);
    }

    #[test]
    fn projection_uses_gl_depth_range() {
        let cam = EditorCamera::new(Vec3::ZERO, 0.0, -90.0, 1.0);
        let proj = cam.projection_matrix();
        let near = proj.project_point3(Vec3::new(0.0, 0.0, -cam.near));
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -cam.far));
        assert!((near.z + 1.0).abs() < 1e-4);
        assert!((far.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn viewport_sets_aspect() {
        let mut cam = EditorCamera::default();
        cam.set_viewport(800, 400);
        assert_eq!(cam.aspect_ratio(), 2.0);
        cam.set_viewport(800, 0);
        assert_eq!(cam.aspect_ratio(), 2.0);
    }

    #[test]
    fn from_config_applies_tuning() {
        let config = CameraConfig {
            speed: 3.0,
            fov_degrees: 90.0,
            ..CameraConfig::default()
        };
        let cam = EditorCamera::from_config(&config, 1.0);
        assert_eq!(cam.speed, 3.0);
        assert!((cam.fov - std::f32::consts::FRAC_PI_2).abs() < EPS);
        assert_eq!(cam.pitch(), -30.0);
        assert_eq!(cam.yaw(), -90.0);
    }
}
