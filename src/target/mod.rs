//! View Targets
//!
//! Targets own the absolute view state (eye, look-at point, orientation,
//! projection). Runners only ever hand them incremental [`ViewDelta`]s; the
//! target composes them into its cumulative state and refreshes whatever
//! depends on it.
//!
//! A target is shared between the runner that animates it and whoever reads
//! it for rendering, hence the [`ViewTargetRef`] handle. Only one runner
//! should drive a given target at a time.

pub mod camera;

use std::sync::Arc;

use glam::Mat4;
pub use parking_lot::RwLock;

use crate::action::ViewDelta;

pub use camera::{Camera, CameraUniforms, ProjectionType};

/// Anything that can absorb incremental view changes.
pub trait ViewTarget {
    /// Applies one slice's translation, look-at translation, rotation around
    /// the look-at point and (optional) field-of-view change as a single
    /// update.
    fn apply_incremental_view_transform(&mut self, delta: &ViewDelta);
}

/// Shared handle to a target, as held by leaf runners.
pub type ViewTargetRef = Arc<RwLock<dyn ViewTarget>>;

/// Wraps a target so it can be handed to runners and still read afterwards.
///
/// ```rust,ignore
/// let camera = target::shared(Camera::new_perspective(45.0, 16.0 / 9.0, 0.1, 100.0));
/// sequence.add_action_with_target(action, camera.clone(), 2.0)?;
/// let view = camera.read().view_matrix();
/// ```
pub fn shared<T: ViewTarget>(target: T) -> Arc<RwLock<T>> {
    Arc::new(RwLock::new(target))
}

/// Receives the matrices a target produced, e.g. a uniform block on its way
/// to the GPU.
pub trait MatrixSink {
    fn set_view_projection(&mut self, view: Mat4, projection: Mat4);
}
