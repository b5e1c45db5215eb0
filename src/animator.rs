use crate::errors::{MotionError, Result};
use crate::runner::{BoxedRunner, ChildRunners, Runner, RunnerHandle};

/// Frame driver for root runners.
///
/// Every [`update`](Self::update) advances all playing roots by the same
/// `dt`, then drops the ones that completed.
#[derive(Default)]
pub struct Animator {
    runners: ChildRunners<()>,
}

impl Animator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts driving `runner` from the next update on.
    pub fn play<R: Runner + 'static>(&mut self, runner: R) -> RunnerHandle {
        self.runners.push(Box::new(runner), ())
    }

    /// Stops a runner wherever it currently is.
    pub fn stop(&mut self, handle: RunnerHandle) -> Result<BoxedRunner> {
        let Some(child) = self.runners.remove(handle) else {
            log::warn!("Animator asked to stop unknown runner {handle:?}");
            return Err(MotionError::RunnerNotFound);
        };
        Ok(child.runner)
    }

    #[must_use]
    pub fn is_playing(&self, handle: RunnerHandle) -> bool {
        self.runners.get(handle).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.runners.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.runners.is_empty()
    }

    pub fn update(&mut self, dt: f32) {
        self.runners.for_each_mut(|child| child.runner.update(dt));

        self.runners.retain(|child| {
            let done = child.runner.is_complete();
            if done {
                log::debug!("Animator finished a {}s runner", child.runner.duration());
            }
            !done
        });
    }
}
