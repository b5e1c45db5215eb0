use glam::{Quat, Vec3};

use crate::action::{OrbitRotation, ViewAction, ViewDelta};

/// Moves a camera's eye and look-at point and orbits the eye around the
/// look-at point.
///
/// Build one with [`CameraActionBuilder`](crate::action::CameraActionBuilder).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraAction {
    translation: Vec3,
    target_translation: Vec3,
    rotation: OrbitRotation,
}

impl CameraAction {
    pub(crate) fn new(translation: Vec3, target_translation: Vec3, rotation: OrbitRotation) -> Self {
        Self {
            translation,
            target_translation,
            rotation,
        }
    }

    /// Total eye offset over the whole action.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Total look-at offset over the whole action.
    #[must_use]
    pub fn target_translation(&self) -> Vec3 {
        self.target_translation
    }

    #[must_use]
    pub fn rotation(&self) -> OrbitRotation {
        self.rotation
    }

    #[inline]
    #[must_use]
    pub fn translation_delta(&self, increment_fraction: f32) -> Vec3 {
        self.translation * increment_fraction
    }

    #[inline]
    #[must_use]
    pub fn target_translation_delta(&self, increment_fraction: f32) -> Vec3 {
        self.target_translation * increment_fraction
    }

    #[inline]
    #[must_use]
    pub fn rotation_delta(&self, elapsed_fraction: f32, increment_fraction: f32) -> Quat {
        self.rotation.increment(elapsed_fraction, increment_fraction)
    }
}

impl ViewAction for CameraAction {
    fn view_delta(&self, elapsed_fraction: f32, increment_fraction: f32) -> ViewDelta {
        ViewDelta {
            translation: self.translation_delta(increment_fraction),
            target_translation: self.target_translation_delta(increment_fraction),
            rotation: self.rotation_delta(elapsed_fraction, increment_fraction),
            field_of_view: None,
        }
    }
}

/// A [`CameraAction`] that also changes the field of view of a
/// perspective camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPerspectiveAction {
    camera: CameraAction,
    field_of_view: f32,
}

impl CameraPerspectiveAction {
    pub(crate) fn new(camera: CameraAction, field_of_view: f32) -> Self {
        Self {
            camera,
            field_of_view,
        }
    }

    #[must_use]
    pub fn camera(&self) -> &CameraAction {
        &self.camera
    }

    /// Total field-of-view change in radians.
    #[must_use]
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    #[inline]
    #[must_use]
    pub fn field_of_view_delta(&self, increment_fraction: f32) -> f32 {
        self.field_of_view * increment_fraction
    }
}

impl ViewAction for CameraPerspectiveAction {
    fn view_delta(&self, elapsed_fraction: f32, increment_fraction: f32) -> ViewDelta {
        ViewDelta {
            field_of_view: Some(self.field_of_view_delta(increment_fraction)),
            ..self.camera.view_delta(elapsed_fraction, increment_fraction)
        }
    }
}
