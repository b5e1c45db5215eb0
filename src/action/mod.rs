//! Actions
//!
//! An action is an immutable description of a total view change spread over
//! the normalized `[0, 1]` timeline. It never accumulates anything itself:
//! asked for the slice `[elapsed, elapsed + increment]` it returns the part of
//! its total change that falls inside that slice, and the same question
//! always gets the same answer.
//!
//! Translations and field-of-view changes are linear in the slice length.
//! Rotations are not: the increment for a slice is derived from the two
//! absolute orientations at its ends (see [`OrbitRotation::increment`]), so
//! composing the increments of any partition reproduces the total rotation.

pub mod builder;
pub mod camera;

use glam::{Quat, Vec3};

pub use builder::CameraActionBuilder;
pub use camera::{CameraAction, CameraPerspectiveAction};

/// The incremental view change for one slice of time.
///
/// This is what leaf runners hand to a [`ViewTarget`](crate::target::ViewTarget)
/// in a single call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewDelta {
    /// Offset added to the eye position.
    pub translation: Vec3,
    /// Offset added to the look-at point.
    pub target_translation: Vec3,
    /// Rotation of the eye around the look-at point.
    pub rotation: Quat,
    /// Field-of-view change in radians, for perspective actions only.
    pub field_of_view: Option<f32>,
}

impl ViewDelta {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        target_translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        field_of_view: None,
    };
}

impl Default for ViewDelta {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// An immutable view change that can be sampled slice by slice.
pub trait ViewAction: 'static {
    /// Returns the part of the total change that occurs between
    /// `elapsed_fraction` and `elapsed_fraction + increment_fraction`.
    fn view_delta(&self, elapsed_fraction: f32, increment_fraction: f32) -> ViewDelta;
}

/// Total rotation stored as a normalized axis and an angle in radians.
///
/// Angles beyond a half turn are kept as-is, so a full orbit around the
/// look-at point is expressible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRotation {
    axis: Vec3,
    angle: f32,
}

impl OrbitRotation {
    pub const IDENTITY: Self = Self {
        axis: Vec3::Y,
        angle: 0.0,
    };

    /// `axis` must already be normalized.
    pub(crate) fn from_normalized_axis(axis: Vec3, angle: f32) -> Self {
        Self { axis, angle }
    }

    #[must_use]
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// The full rotation.
    #[must_use]
    pub fn total(&self) -> Quat {
        self.at(1.0)
    }

    /// Absolute orientation reached at `fraction` of the timeline,
    /// i.e. `slerp(identity, total, fraction)` along the stored angle.
    #[must_use]
    pub fn at(&self, fraction: f32) -> Quat {
        Quat::from_axis_angle(self.axis, self.angle * fraction)
    }

    /// Rotation that takes the orientation at `elapsed_fraction` to the
    /// orientation at `elapsed_fraction + increment_fraction`.
    #[must_use]
    pub fn increment(&self, elapsed_fraction: f32, increment_fraction: f32) -> Quat {
        if self.angle == 0.0 || increment_fraction == 0.0 {
            return Quat::IDENTITY;
        }
        let from = self.at(elapsed_fraction);
        let to = self.at(elapsed_fraction + increment_fraction);
        (from.inverse() * to).normalize()
    }
}

impl Default for OrbitRotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}
