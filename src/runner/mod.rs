//! Runners
//!
//! A runner drives an action (or a composition of runners) against real
//! time. Every runner is an [`ActionRunner`]: a [`RunnerClock`] holding the
//! elapsed/duration bookkeeping plus a variant implementing
//! [`RunnerAction`]. The clock turns each frame's `dt` into a
//! [`TimeSlice`] of the runner's normalized timeline, and the variant
//! applies exactly that slice.
//!
//! The variants are:
//! - [`CameraDriver`]: leaf, pushes camera action deltas into a target
//! - [`ParallelComposition`]: every child sees the same window
//! - [`SequenceComposition`]: children own consecutive sub-windows
//!
//! Collections own their children as boxed [`Runner`] trait objects, so
//! trees can be nested arbitrarily.

pub mod camera;
pub mod clock;
pub mod collection;
pub mod parallel;
pub mod sequence;

use crate::action::ViewAction;
use crate::errors::{MotionError, Result};
use crate::settings::SchedulerSettings;
use crate::target::ViewTargetRef;

pub use camera::{CameraDriver, CameraRunner};
pub use clock::{RunnerClock, TimeSlice};
pub use collection::{ChildRunners, Composition, RunnerHandle};
pub use parallel::{ParallelComposition, ParallelRunner};
pub use sequence::{SequenceComposition, SequenceRunner, SequenceWindow};

/// Object-safe interface the scheduler uses to drive any runner.
pub trait Runner {
    /// Advances the runner by `dt` of real time. No-op once complete.
    fn update(&mut self, dt: f32);

    fn duration(&self) -> f32;

    fn elapsed(&self) -> f32;

    fn is_complete(&self) -> bool;

    /// Elapsed fraction of the runner's own timeline.
    fn progress(&self) -> f32 {
        self.elapsed() / self.duration()
    }
}

pub type BoxedRunner = Box<dyn Runner>;

/// Variant behaviour of a runner.
pub trait RunnerAction: 'static {
    /// Applies the slice `[elapsed_fraction, elapsed_fraction + increment_fraction]`
    /// of the runner's normalized timeline.
    fn update_action(&mut self, elapsed_fraction: f32, increment_fraction: f32);
}

/// A clock paired with the variant it drives.
#[derive(Debug)]
pub struct ActionRunner<A> {
    clock: RunnerClock,
    action: A,
}

impl<A: RunnerAction> ActionRunner<A> {
    pub fn with_action(duration: f32, action: A) -> Result<Self> {
        Self::with_action_and_settings(duration, action, SchedulerSettings::default())
    }

    pub fn with_action_and_settings(
        duration: f32,
        action: A,
        settings: SchedulerSettings,
    ) -> Result<Self> {
        Ok(Self {
            clock: RunnerClock::new(duration, settings)?,
            action,
        })
    }

    #[must_use]
    pub fn clock(&self) -> &RunnerClock {
        &self.clock
    }

    #[must_use]
    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn action_mut(&mut self) -> &mut A {
        &mut self.action
    }

    #[must_use]
    pub fn settings(&self) -> SchedulerSettings {
        self.clock.settings()
    }
}

impl<A: RunnerAction> Runner for ActionRunner<A> {
    fn update(&mut self, dt: f32) {
        let Some(slice) = self.clock.advance(dt) else {
            return;
        };

        self.action
            .update_action(slice.elapsed_fraction, slice.increment_fraction);

        if self.clock.is_complete() {
            log::debug!("Runner completed after {}s", self.clock.duration());
        }
    }

    fn duration(&self) -> f32 {
        self.clock.duration()
    }

    fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    fn is_complete(&self) -> bool {
        self.clock.is_complete()
    }
}

// ============================================================================
// Collection API
// ============================================================================

impl<C: Composition> ActionRunner<C> {
    /// Schedules `action` against `target` for `duration` seconds.
    ///
    /// Durations that are not positive and finite are rejected before the
    /// collection is touched.
    pub fn add_action_with_target<V: ViewAction>(
        &mut self,
        action: V,
        target: ViewTargetRef,
        duration: f32,
    ) -> Result<RunnerHandle> {
        let runner = CameraRunner::with_settings(action, target, duration, self.settings())?;
        self.action.insert(Box::new(runner))
    }

    /// Adds an already constructed runner, e.g. a nested collection.
    pub fn add_runner<R: Runner + 'static>(&mut self, runner: R) -> Result<RunnerHandle> {
        self.action.insert(Box::new(runner))
    }

    pub fn add_boxed(&mut self, runner: BoxedRunner) -> Result<RunnerHandle> {
        self.action.insert(runner)
    }

    /// Detaches a child before its next update and hands it back.
    pub fn remove(&mut self, handle: RunnerHandle) -> Result<BoxedRunner> {
        self.action.remove(handle).ok_or(MotionError::RunnerNotFound)
    }

    #[must_use]
    pub fn child(&self, handle: RunnerHandle) -> Option<&dyn Runner> {
        self.action.children().get(handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.action.children().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.action.children().is_empty()
    }
}
