use std::ops::ControlFlow;

use crate::errors::Result;
use crate::runner::collection::{ChildRunners, Composition, RunnerHandle, check_child};
use crate::runner::{ActionRunner, BoxedRunner, RunnerAction};
use crate::settings::SchedulerSettings;

/// A child's share of its sequence's normalized timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceWindow {
    /// Where the window begins on the parent timeline.
    pub start: f32,
    /// Window length, `child_duration / parent_duration`.
    pub span: f32,
}

impl SequenceWindow {
    #[inline]
    #[must_use]
    pub fn end(&self) -> f32 {
        self.start + self.span
    }

    /// Maps a parent fraction into the child's own `[0, 1]` domain.
    #[inline]
    #[must_use]
    pub fn local(&self, parent_fraction: f32) -> f32 {
        (parent_fraction - self.start) / self.span
    }
}

/// Plays children one after another.
///
/// Each child owns the window `[start, start + span]` of the parent's
/// timeline, laid out back to back in insertion order. A frame's slice is
/// handed out window by window: a child only receives time once every
/// earlier window has been exhausted.
pub struct SequenceComposition {
    duration: f32,
    settings: SchedulerSettings,
    offset: f32,
    children: ChildRunners<SequenceWindow>,
}

pub type SequenceRunner = ActionRunner<SequenceComposition>;

impl ActionRunner<SequenceComposition> {
    pub fn new(duration: f32) -> Result<Self> {
        Self::with_settings(duration, SchedulerSettings::default())
    }

    pub fn with_settings(duration: f32, settings: SchedulerSettings) -> Result<Self> {
        let composition = SequenceComposition {
            duration,
            settings,
            offset: 0.0,
            children: ChildRunners::new(),
        };
        Self::with_action_and_settings(duration, composition, settings)
    }

    /// The window assigned to `handle` when it was added.
    #[must_use]
    pub fn window(&self, handle: RunnerHandle) -> Option<SequenceWindow> {
        self.action().children.meta(handle).copied()
    }

    /// End of the last window handed out so far.
    #[must_use]
    pub fn scheduled_fraction(&self) -> f32 {
        self.action().offset
    }
}

impl RunnerAction for SequenceComposition {
    fn update_action(&mut self, elapsed_fraction: f32, increment_fraction: f32) {
        let epsilon = self.settings.fraction_epsilon;
        let parent_duration = self.duration;

        let mut cursor = elapsed_fraction;
        let mut remaining = increment_fraction;

        // Every positive remainder is handed out. Epsilon only decides whether
        // a window touches the cursor or has been run to its end.
        self.children.try_for_each_mut(|child| {
            if remaining <= 0.0 {
                return ControlFlow::Break(());
            }

            let window = child.meta;
            if window.end() < cursor - epsilon {
                return ControlFlow::Continue(());
            }

            // Idle time left behind by removed children.
            if window.start > cursor + epsilon {
                let idle = (window.start - cursor).min(remaining);
                cursor += idle;
                remaining -= idle;
                if remaining <= 0.0 {
                    return ControlFlow::Break(());
                }
            }

            // A window reaching the end of the timeline absorbs whatever
            // drift the accumulated spans left behind.
            let take = if window.end() >= 1.0 - epsilon {
                remaining
            } else {
                (window.end() - cursor).min(remaining)
            };
            if take <= 0.0 {
                return ControlFlow::Continue(());
            }

            let finishes = cursor + take >= window.end() - epsilon;
            let dt = if finishes {
                child.runner.duration() - child.runner.elapsed()
            } else {
                take * parent_duration
            };

            log::trace!(
                "Sequence slice [{:.5}, {:.5}] -> child local [{:.5}, {:.5}]",
                cursor,
                cursor + take,
                window.local(cursor),
                window.local(cursor + take),
            );

            child.runner.update(dt);
            cursor += take;
            remaining -= take;
            ControlFlow::Continue(())
        });
    }
}

impl Composition for SequenceComposition {
    type Meta = SequenceWindow;

    fn settings(&self) -> SchedulerSettings {
        self.settings
    }

    fn children(&self) -> &ChildRunners<SequenceWindow> {
        &self.children
    }

    fn insert(&mut self, runner: BoxedRunner) -> Result<RunnerHandle> {
        let duration = check_child(runner.as_ref())?;

        let window = SequenceWindow {
            start: self.offset,
            span: duration / self.duration,
        };
        self.offset += window.span;

        if self.offset > 1.0 + self.settings.fraction_epsilon {
            log::warn!(
                "Sequence children now span {:.5} of the timeline; time past 1.0 is never reached",
                self.offset
            );
        }

        let handle = self.children.push(runner, window);
        log::debug!(
            "Added sequence child {handle:?} ({duration}s): start {:.5}, span {:.5}",
            window.start,
            window.span
        );
        Ok(handle)
    }

    fn remove(&mut self, handle: RunnerHandle) -> Option<BoxedRunner> {
        self.children.remove(handle).map(|child| child.runner)
    }
}
