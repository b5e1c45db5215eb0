use crate::errors::Result;
use crate::runner::collection::{ChildRunners, Composition, RunnerHandle, check_child};
use crate::runner::{ActionRunner, BoxedRunner, RunnerAction};
use crate::settings::SchedulerSettings;

/// Fans every frame out to all children.
///
/// Each child receives the same real-time step as the collection. Children
/// sharing the collection's duration therefore see exactly its window;
/// shorter children finish early and ignore later frames, longer ones are
/// left part-way when the collection completes.
pub struct ParallelComposition {
    duration: f32,
    settings: SchedulerSettings,
    children: ChildRunners<()>,
}

pub type ParallelRunner = ActionRunner<ParallelComposition>;

impl ActionRunner<ParallelComposition> {
    pub fn new(duration: f32) -> Result<Self> {
        Self::with_settings(duration, SchedulerSettings::default())
    }

    pub fn with_settings(duration: f32, settings: SchedulerSettings) -> Result<Self> {
        let composition = ParallelComposition {
            duration,
            settings,
            children: ChildRunners::new(),
        };
        Self::with_action_and_settings(duration, composition, settings)
    }
}

impl RunnerAction for ParallelComposition {
    fn update_action(&mut self, _elapsed_fraction: f32, increment_fraction: f32) {
        let dt = increment_fraction * self.duration;
        self.children.for_each_mut(|child| child.runner.update(dt));
    }
}

impl Composition for ParallelComposition {
    type Meta = ();

    fn settings(&self) -> SchedulerSettings {
        self.settings
    }

    fn children(&self) -> &ChildRunners<()> {
        &self.children
    }

    fn insert(&mut self, runner: BoxedRunner) -> Result<RunnerHandle> {
        let duration = check_child(runner.as_ref())?;
        if duration > self.duration * (1.0 + self.settings.fraction_epsilon) {
            log::warn!(
                "Parallel child ({duration}s) outlasts its collection ({}s) and will not complete",
                self.duration
            );
        }
        let handle = self.children.push(runner, ());
        log::debug!("Added parallel child {handle:?} ({duration}s)");
        Ok(handle)
    }

    fn remove(&mut self, handle: RunnerHandle) -> Option<BoxedRunner> {
        self.children.remove(handle).map(|child| child.runner)
    }
}
