use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};
use crate::systems::picking::Ray;

/// Perspective orbit camera.
///
/// The eye sits on a sphere of radius `distance` around `target`, addressed
/// by `azimuth` (around +Y, 0 = looking down -Z) and `elevation` (above the
/// XZ plane). Drag input feeds an angular velocity that decays each frame,
/// which gives the rig its inertia.
#[derive(Debug, Clone)]
pub struct Camera3D {
    pub target: Vec3,
    pub azimuth: f32,
    pub elevation: f32,
    pub distance: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Viewport size in CSS pixels (pointer coordinate space).
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of pending angular velocity applied (and removed) per frame.
    /// 1.0 = no inertia.
    pub damping: f32,
    azimuth_velocity: f32,
    elevation_velocity: f32,
    home: (f32, f32, f32),
}

/// GPU-side uniform data for the camera (24 floats).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Eye position (w = 1).
    pub eye: [f32; 4],
    /// fov_y, aspect, near, far.
    pub params: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 24;
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Camera3D {
    /// Radians of orbit per pixel of drag.
    const ROTATE_SPEED: f32 = 0.005;
    /// Multiplicative zoom per 100 units of wheel delta.
    const ZOOM_STEP: f32 = 1.1;
    /// Keeps the eye off the poles where look-at degenerates.
    const MAX_ELEVATION: f32 = 1.5;

    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            azimuth: 0.0,
            elevation: 0.35,
            distance: 300.0,
            fov_y: 60f32.to_radians(),
            near: 0.1,
            far: 5000.0,
            viewport_width: viewport_width.max(1.0),
            viewport_height: viewport_height.max(1.0),
            min_distance: 20.0,
            max_distance: 1500.0,
            damping: 0.1,
            azimuth_velocity: 0.0,
            elevation_velocity: 0.0,
            home: (0.0, 0.35, 300.0),
        }
    }

    /// Place the eye and remember the placement for [`reset`](Self::reset).
    pub fn set_home(&mut self, azimuth: f32, elevation: f32, distance: f32) {
        self.home = (azimuth, elevation, distance);
        self.reset();
    }

    /// Return to the home placement and drop any pending inertia.
    pub fn reset(&mut self) {
        let (azimuth, elevation, distance) = self.home;
        self.azimuth = azimuth;
        self.elevation = elevation.clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
        self.distance = distance.clamp(self.min_distance, self.max_distance);
        self.azimuth_velocity = 0.0;
        self.elevation_velocity = 0.0;
    }

    pub fn aspect(&self) -> f32 {
        self.viewport_width / self.viewport_height
    }

    /// Update viewport size (window resize). Aspect follows.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width.max(1.0);
        self.viewport_height = height.max(1.0);
    }

    /// Feed a pointer drag delta (pixels) into the orbit velocity.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth_velocity -= dx * Self::ROTATE_SPEED;
        self.elevation_velocity += dy * Self::ROTATE_SPEED;
    }

    /// Zoom by a wheel delta. Positive moves the eye away.
    pub fn zoom(&mut self, delta_y: f32) {
        self.distance *= Self::ZOOM_STEP.powf(delta_y / 100.0);
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
    }

    /// Advance damped orbit motion by one frame.
    pub fn update(&mut self) {
        let damping = self.damping.clamp(0.01, 1.0);
        self.azimuth += self.azimuth_velocity * damping;
        self.elevation += self.elevation_velocity * damping;
        self.elevation = self.elevation.clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
        self.azimuth_velocity *= 1.0 - damping;
        self.elevation_velocity *= 1.0 - damping;
        if self.azimuth_velocity.abs() < 1e-6 {
            self.azimuth_velocity = 0.0;
        }
        if self.elevation_velocity.abs() < 1e-6 {
            self.elevation_velocity = 0.0;
        }
    }

    /// Whether inertia is still moving the camera.
    pub fn is_moving(&self) -> bool {
        self.azimuth_velocity != 0.0 || self.elevation_velocity != 0.0
    }

    /// Eye position in world space.
    pub fn eye(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        self.target + self.distance * Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Perspective projection with WebGPU depth range [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect(), self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        let eye = self.eye();
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z, 1.0],
            params: [self.fov_y, self.aspect(), self.near, self.far],
        }
    }

    /// Pointer position (CSS pixels, origin top-left) to normalized device
    /// coordinates (x right, y up, both in [-1, 1] inside the viewport).
    pub fn screen_to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x / self.viewport_width) * 2.0 - 1.0,
            -((y / self.viewport_height) * 2.0 - 1.0),
        )
    }

    /// World-space ray from the eye through a point in NDC.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inverse = self.view_projection().inverse();
        let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        let eye = self.eye();
        Ray::new(eye, far - near)
    }

    /// Project a world point to NDC. `None` if it is behind the eye.
    pub fn world_to_ndc(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}
