use glam::Vec3;

use crate::action::{CameraAction, CameraPerspectiveAction, OrbitRotation};
use crate::errors::{MotionError, Result};

/// Fluent builder for [`CameraAction`] and [`CameraPerspectiveAction`].
///
/// Offsets accumulate across calls; the orbit is replaced by the last call.
///
/// ```rust,ignore
/// let action = CameraActionBuilder::new()
///     .translate(Vec3::new(0.0, 2.0, 0.0))
///     .orbit(Vec3::Y, std::f32::consts::FRAC_PI_2)
///     .build()?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CameraActionBuilder {
    translation: Vec3,
    target_translation: Vec3,
    orbit_axis: Vec3,
    orbit_angle: f32,
    field_of_view: f32,
}

impl Default for CameraActionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraActionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            translation: Vec3::ZERO,
            target_translation: Vec3::ZERO,
            orbit_axis: Vec3::Y,
            orbit_angle: 0.0,
            field_of_view: 0.0,
        }
    }

    // --- Translation ---
    #[must_use]
    pub fn translate(mut self, offset: Vec3) -> Self { self.translation += offset; self }
    #[must_use]
    pub fn translate_target(mut self, offset: Vec3) -> Self { self.target_translation += offset; self }
    /// Moves eye and look-at point together, keeping the view direction.
    #[must_use]
    pub fn translate_view(mut self, offset: Vec3) -> Self {
        self.translation += offset;
        self.target_translation += offset;
        self
    }

    // --- Rotation ---
    /// Orbits the eye around the look-at point by `angle` radians.
    #[must_use]
    pub fn orbit(mut self, axis: Vec3, angle: f32) -> Self { self.orbit_axis = axis; self.orbit_angle = angle; self }

    // --- Projection ---
    /// Field-of-view change in radians. Only used by [`Self::build_perspective`].
    #[must_use]
    pub fn field_of_view(mut self, delta: f32) -> Self { self.field_of_view += delta; self }

    /// Snapshots the configuration into an immutable [`CameraAction`].
    ///
    /// Fails on non-finite offsets and on orbits around an axis that cannot
    /// be normalized.
    pub fn build(self) -> Result<CameraAction> {
        if !self.translation.is_finite() {
            return Err(MotionError::NonFiniteParameter("translation"));
        }
        if !self.target_translation.is_finite() {
            return Err(MotionError::NonFiniteParameter("target translation"));
        }
        if !self.orbit_angle.is_finite() {
            return Err(MotionError::NonFiniteParameter("orbit angle"));
        }

        let rotation = if self.orbit_angle == 0.0 {
            OrbitRotation::IDENTITY
        } else {
            let axis = self
                .orbit_axis
                .try_normalize()
                .ok_or(MotionError::InvalidRotationAxis { axis: self.orbit_axis })?;
            OrbitRotation::from_normalized_axis(axis, self.orbit_angle)
        };

        Ok(CameraAction::new(self.translation, self.target_translation, rotation))
    }

    /// Like [`Self::build`], keeping the field-of-view change as well.
    pub fn build_perspective(self) -> Result<CameraPerspectiveAction> {
        if !self.field_of_view.is_finite() {
            return Err(MotionError::NonFiniteParameter("field of view"));
        }
        let field_of_view = self.field_of_view;
        Ok(CameraPerspectiveAction::new(self.build()?, field_of_view))
    }
}
