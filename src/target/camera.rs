use std::borrow::Cow;

use glam::{Mat4, Vec3, Vec4};
use uuid::Uuid;

use crate::action::ViewDelta;
use crate::target::{MatrixSink, ViewTarget};

/// Smallest and largest field of view a perspective camera accepts (radians).
const MIN_FOV: f32 = 1e-3;
const MAX_FOV: f32 = std::f32::consts::PI - 1e-3;

/// Below this squared distance the eye is considered to sit on the look-at
/// point and the view direction is undefined.
const DEGENERATE_VIEW_EPSILON: f32 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionType {
    Perspective,
    Orthographic,
}

/// A look-at camera driven by incremental view deltas.
///
/// The eye orbits the look-at point when rotated; view, projection and
/// view-projection matrices are refreshed after every applied delta.
#[derive(Debug, Clone)]
pub struct Camera {
    pub uuid: Uuid,
    pub name: Cow<'static, str>,

    // === View ===
    position: Vec3,
    target: Vec3,
    up: Vec3,

    // === Projection ===
    projection_type: ProjectionType,
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    ortho_size: f32,

    // === Cached matrices ===
    view_matrix: Mat4,
    projection_matrix: Mat4,
    view_projection_matrix: Mat4,

    version: u64,
}

impl Camera {
    /// `fov` is given in degrees.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::new(ProjectionType::Perspective, fov.to_radians(), aspect, near, far, 10.0)
    }

    #[must_use]
    pub fn new_orthographic(ortho_size: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::new(
            ProjectionType::Orthographic,
            45.0_f32.to_radians(),
            aspect,
            near,
            far,
            ortho_size,
        )
    }

    fn new(
        projection_type: ProjectionType,
        fov: f32,
        aspect: f32,
        near: f32,
        far: f32,
        ortho_size: f32,
    ) -> Self {
        let mut cam = Self {
            uuid: Uuid::new_v4(),
            name: Cow::Borrowed("Camera"),
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            projection_type,
            fov: fov.clamp(MIN_FOV, MAX_FOV),
            aspect,
            near,
            far,
            ortho_size,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            view_projection_matrix: Mat4::IDENTITY,
            version: 0,
        };

        cam.refresh();
        cam
    }

    /// Places the camera; `up` need not be normalized.
    #[must_use]
    pub fn with_view(mut self, position: Vec3, target: Vec3, up: Vec3) -> Self {
        self.set_view(position, target, up);
        self
    }

    pub fn set_view(&mut self, position: Vec3, target: Vec3, up: Vec3) {
        self.position = position;
        self.target = target;
        self.up = up.normalize_or(Vec3::Y);
        self.refresh();
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    #[must_use]
    pub fn projection_type(&self) -> ProjectionType {
        self.projection_type
    }

    /// Field of view in radians.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.refresh();
    }

    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.view_projection_matrix
    }

    /// Bumped every time the view or projection changes.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn write_matrices(&self, sink: &mut impl MatrixSink) {
        sink.set_view_projection(self.view_matrix, self.projection_matrix);
    }

    fn update_view_matrix(&mut self) {
        // Keep the previous matrix while the eye sits on the look-at point
        if (self.target - self.position).length_squared() < DEGENERATE_VIEW_EPSILON {
            return;
        }
        self.view_matrix = Mat4::look_at_rh(self.position, self.target, self.up);
    }

    fn update_projection_matrix(&mut self) {
        self.projection_matrix = match self.projection_type {
            ProjectionType::Perspective => {
                Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
            }
            ProjectionType::Orthographic => {
                let w = self.ortho_size * self.aspect;
                let h = self.ortho_size;
                Mat4::orthographic_rh(-w, w, -h, h, self.near, self.far)
            }
        };
    }

    fn refresh(&mut self) {
        self.update_view_matrix();
        self.update_projection_matrix();
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
        self.version = self.version.wrapping_add(1);
    }
}

impl ViewTarget for Camera {
    fn apply_incremental_view_transform(&mut self, delta: &ViewDelta) {
        self.position += delta.translation;
        self.target += delta.target_translation;

        // Orbit around the (already moved) look-at point
        let offset = self.position - self.target;
        self.position = self.target + delta.rotation * offset;
        self.up = (delta.rotation * self.up).normalize_or(self.up);

        if let Some(fov_delta) = delta.field_of_view {
            match self.projection_type {
                ProjectionType::Perspective => {
                    self.fov = (self.fov + fov_delta).clamp(MIN_FOV, MAX_FOV);
                }
                ProjectionType::Orthographic => {
                    log::trace!("Ignoring field-of-view change on orthographic camera {}", self.name);
                }
            }
        }

        self.refresh();
    }
}

/// Per-view uniform block, the usual consumer of [`Camera::write_matrices`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
    pub camera_position: Vec4,
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            view_projection: Mat4::IDENTITY,
            camera_position: Vec4::W,
        }
    }
}

impl MatrixSink for CameraUniforms {
    fn set_view_projection(&mut self, view: Mat4, projection: Mat4) {
        self.view = view;
        self.projection = projection;
        self.view_projection = projection * view;
        self.camera_position = view.inverse().w_axis;
    }
}
