//! Pinhole camera and primary ray generation.
//!
//! Camera space is left-handed: +X right, +Y up, +Z forward.

use luma_core::CameraDescription;
use luma_math::{Mat3, Mat4, Mat4Ext, Ray, Vec3};

/// Upper bound on the frame time fed into camera movement, in seconds.
pub const MAX_FRAME_ELAPSED: f32 = 0.03;

/// Camera translation speed in units per second.
pub const MOVEMENT_SPEED: f32 = 10.0;

/// Per-frame movement request from whatever drives the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraInput {
    /// +1 moves along `forward`, -1 backwards
    pub forward: f32,
    /// +1 moves along `right`, -1 left
    pub right: f32,
    /// Vertical mouse delta, positive looks down
    pub pitch_delta: f32,
    /// Horizontal mouse delta, positive turns right
    pub yaw_delta: f32,
}

/// Pinhole camera.
#[derive(Debug, Clone)]
pub struct Camera {
    pub origin: Vec3,
    /// Vertical field of view in degrees
    pub fov_angle: f32,

    pub forward: Vec3,
    pub up: Vec3,
    pub right: Vec3,

    pub total_pitch: f32,
    pub total_yaw: f32,

    camera_to_world: Mat4,
}

impl Camera {
    pub fn new(origin: Vec3, fov_angle: f32) -> Self {
        Self {
            origin,
            fov_angle,
            forward: Vec3::Z,
            up: Vec3::Y,
            right: Vec3::X,
            total_pitch: 0.0,
            total_yaw: 0.0,
            camera_to_world: Mat4::from_basis(Vec3::X, Vec3::Y, Vec3::Z, origin),
        }
    }

    /// Build a camera from its scene-file description, applying the initial
    /// pitch and yaw.
    pub fn from_description(description: &CameraDescription) -> Self {
        let mut camera = Self::new(description.origin, description.fov_angle);
        camera.total_pitch = description.pitch;
        camera.total_yaw = description.yaw;
        camera.update_orientation();
        camera.calculate_camera_to_world();
        camera
    }

    /// Rebuild the orthonormal basis from `forward` and cache the
    /// camera-to-world transform. Must run once per frame before rays are cast.
    pub fn calculate_camera_to_world(&mut self) -> Mat4 {
        self.right = Vec3::Y.cross(self.forward).normalize_or_zero();
        self.up = self.forward.cross(self.right).normalize_or_zero();
        self.camera_to_world = Mat4::from_basis(self.right, self.up, self.forward, self.origin);
        self.camera_to_world
    }

    /// The transform cached by the last [`Camera::calculate_camera_to_world`].
    pub fn camera_to_world(&self) -> Mat4 {
        self.camera_to_world
    }

    /// Move and turn the camera for one frame.
    ///
    /// `elapsed` is clamped to [`MAX_FRAME_ELAPSED`] so a stall does not turn
    /// into a large jump.
    pub fn apply_input(&mut self, input: &CameraInput, elapsed: f32) {
        let dt = elapsed.clamp(0.0, MAX_FRAME_ELAPSED);
        let step = MOVEMENT_SPEED * dt;

        self.origin += self.forward * input.forward * step;
        self.origin += self.right * input.right * step;

        self.total_pitch -= input.pitch_delta * dt;
        self.total_yaw += input.yaw_delta * dt;

        self.update_orientation();
    }

    fn update_orientation(&mut self) {
        let rotation = Mat3::from_rotation_y(self.total_yaw) * Mat3::from_rotation_x(self.total_pitch);

        self.forward = (rotation * Vec3::Z).normalize_or_zero();
        self.right = (rotation * Vec3::X).normalize_or_zero();
        self.up = (rotation * Vec3::Y).normalize_or_zero();
    }

    /// Snapshot of everything needed to cast primary rays into a
    /// `width` x `height` target.
    pub fn viewport(&self, width: u32, height: u32) -> Viewport {
        Viewport {
            origin: self.origin,
            camera_to_world: self.camera_to_world,
            fov: (self.fov_angle.to_radians() / 2.0).tan(),
            aspect: width as f32 / height as f32,
            width: width as f32,
            height: height as f32,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 90.0)
    }
}

/// Read-only per-frame ray generator, shared by all render workers.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    origin: Vec3,
    camera_to_world: Mat4,
    fov: f32,
    aspect: f32,
    width: f32,
    height: f32,
}

impl Viewport {
    /// World-space unit direction through the center of pixel `(px, py)`.
    #[inline]
    pub fn ray_direction(&self, px: u32, py: u32) -> Vec3 {
        let x = (2.0 * (px as f32 + 0.5) / self.width - 1.0) * self.aspect * self.fov;
        let y = (1.0 - 2.0 * (py as f32 + 0.5) / self.height) * self.fov;

        let camera_space = Vec3::new(x, y, 1.0).normalize();
        self.camera_to_world.transform_direction(camera_space)
    }

    #[inline]
    pub fn primary_ray(&self, px: u32, py: u32) -> Ray {
        Ray::new(self.origin, self.ray_direction(px, py))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_default_basis() {
        let mut camera = Camera::new(Vec3::new(0.0, 1.0, -5.0), 45.0);
        let matrix = camera.calculate_camera_to_world();

        assert!(approx(camera.right, Vec3::X));
        assert!(approx(camera.up, Vec3::Y));
        assert!(approx(matrix.transform_point3(Vec3::ZERO), Vec3::new(0.0, 1.0, -5.0)));
        assert!(approx(matrix.transform_direction(Vec3::Z), Vec3::Z));
    }

    #[test]
    fn test_basis_is_orthonormal_after_turning() {
        let mut camera = Camera::default();
        let input = CameraInput {
            pitch_delta: 10.0,
            yaw_delta: -20.0,
            ..Default::default()
        };
        camera.apply_input(&input, 0.02);
        camera.calculate_camera_to_world();

        assert!((camera.forward.length() - 1.0).abs() < 1e-5);
        assert!(camera.forward.dot(camera.right).abs() < 1e-5);
        assert!(camera.forward.dot(camera.up).abs() < 1e-5);
        assert!(camera.right.dot(camera.up).abs() < 1e-5);
    }

    #[test]
    fn test_yaw_turns_right() {
        let mut camera = Camera::default();
        camera.total_yaw = std::f32::consts::FRAC_PI_2;
        camera.update_orientation();

        // Quarter turn about +Y takes +Z forward to +X
        assert!(approx(camera.forward, Vec3::X));
    }

    #[test]
    fn test_elapsed_is_clamped() {
        let mut camera = Camera::default();
        let input = CameraInput {
            forward: 1.0,
            ..Default::default()
        };

        camera.apply_input(&input, 5.0);
        assert!(approx(camera.origin, Vec3::new(0.0, 0.0, MOVEMENT_SPEED * MAX_FRAME_ELAPSED)));
    }

    #[test]
    fn test_strafe_right() {
        let mut camera = Camera::default();
        let input = CameraInput {
            right: -1.0,
            ..Default::default()
        };

        camera.apply_input(&input, 0.01);
        assert!(approx(camera.origin, Vec3::new(-0.1, 0.0, 0.0)));
    }

    #[test]
    fn test_center_pixel_looks_forward() {
        let mut camera = Camera::new(Vec3::ZERO, 90.0);
        camera.calculate_camera_to_world();

        // Odd dimensions put a pixel center exactly on the optical axis
        let viewport = camera.viewport(101, 51);
        assert!(approx(viewport.ray_direction(50, 25), Vec3::Z));
    }

    #[test]
    fn test_corner_pixels_with_90_degree_fov() {
        let mut camera = Camera::new(Vec3::ZERO, 90.0);
        camera.calculate_camera_to_world();
        let viewport = camera.viewport(2, 2);

        // fov = tan(45°) = 1, aspect 1: pixel (0, 0) maps to (-0.5, 0.5, 1)
        let expected = Vec3::new(-0.5, 0.5, 1.0).normalize();
        assert!(approx(viewport.ray_direction(0, 0), expected));

        let expected = Vec3::new(0.5, -0.5, 1.0).normalize();
        assert!(approx(viewport.ray_direction(1, 1), expected));
    }

    #[test]
    fn test_primary_ray_ignores_translation_for_direction() {
        let mut camera = Camera::new(Vec3::new(3.0, 4.0, 5.0), 60.0);
        camera.calculate_camera_to_world();
        let viewport = camera.viewport(64, 64);

        let ray = viewport.primary_ray(10, 20);
        assert_eq!(ray.origin, Vec3::new(3.0, 4.0, 5.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_from_description() {
        let description = CameraDescription {
            origin: Vec3::new(0.0, 3.0, -9.0),
            fov_angle: 45.0,
            pitch: 0.0,
            yaw: 0.0,
        };
        let camera = Camera::from_description(&description);

        assert_eq!(camera.origin, description.origin);
        assert_eq!(camera.fov_angle, 45.0);
        assert!(approx(camera.camera_to_world().transform_point3(Vec3::ZERO), description.origin));
    }
}
