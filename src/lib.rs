//! Myth Motion
//!
//! Time-sliced camera animation for the Myth engine.
//!
//! An animation is a tree of runners. Leaves ([`CameraRunner`]) sample an
//! immutable camera action and push incremental deltas into a
//! [`ViewTarget`]; collections ([`ParallelRunner`], [`SequenceRunner`])
//! split each frame's time between their children. A driver calls
//! [`Runner::update`] once per frame on the root, or hands roots to an
//! [`Animator`].
//!
//! ```rust,ignore
//! use glam::Vec3;
//! use myth_motion::prelude::*;
//!
//! let camera = target::shared(Camera::new_perspective(45.0, 16.0 / 9.0, 0.1, 100.0));
//!
//! let mut shot = SequenceRunner::new(6.0)?;
//! shot.add_action_with_target(
//!     CameraActionBuilder::new().translate_view(Vec3::X * 4.0).build()?,
//!     camera.clone(),
//!     2.0,
//! )?;
//! shot.add_action_with_target(
//!     CameraActionBuilder::new().orbit(Vec3::Y, std::f32::consts::PI).build()?,
//!     camera.clone(),
//!     4.0,
//! )?;
//!
//! let mut animator = Animator::new();
//! animator.play(shot);
//! animator.update(1.0 / 60.0);
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::float_cmp)]

pub mod action;
pub mod animator;
pub mod errors;
pub mod runner;
pub mod settings;
pub mod target;
pub mod utils;

pub use action::{CameraAction, CameraActionBuilder, CameraPerspectiveAction, ViewAction, ViewDelta};
pub use animator::Animator;
pub use errors::{MotionError, Result};
pub use runner::{
    ActionRunner, CameraRunner, ParallelRunner, Runner, RunnerAction, RunnerHandle,
    SequenceRunner,
};
pub use settings::SchedulerSettings;
pub use target::{Camera, ViewTarget, ViewTargetRef};

pub mod prelude {
    pub use crate::action::{CameraActionBuilder, ViewAction};
    pub use crate::animator::Animator;
    pub use crate::runner::{CameraRunner, ParallelRunner, Runner, SequenceRunner};
    pub use crate::target::{self, Camera, ViewTarget};
}
