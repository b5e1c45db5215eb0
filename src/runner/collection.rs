use std::ops::ControlFlow;

use slotmap::{SlotMap, new_key_type};

use crate::errors::{MotionError, Result};
use crate::runner::{BoxedRunner, Runner, RunnerAction};
use crate::settings::SchedulerSettings;

new_key_type! {
    /// Identifies a child inside the collection that scheduled it.
    pub struct RunnerHandle;
}

/// A child runner together with its per-collection bookkeeping.
pub struct ChildRunner<M> {
    pub runner: BoxedRunner,
    pub meta: M,
}

/// Owned, ordered child list.
///
/// Children are kept in insertion order; handles stay valid across removals
/// of other children.
pub struct ChildRunners<M> {
    slots: SlotMap<RunnerHandle, ChildRunner<M>>,
    order: Vec<RunnerHandle>,
}

impl<M> Default for ChildRunners<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> ChildRunners<M> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    pub fn push(&mut self, runner: BoxedRunner, meta: M) -> RunnerHandle {
        let handle = self.slots.insert(ChildRunner { runner, meta });
        self.order.push(handle);
        handle
    }

    pub fn remove(&mut self, handle: RunnerHandle) -> Option<ChildRunner<M>> {
        let child = self.slots.remove(handle)?;
        self.order.retain(|h| *h != handle);
        Some(child)
    }

    #[must_use]
    pub fn get(&self, handle: RunnerHandle) -> Option<&dyn Runner> {
        self.slots.get(handle).map(|child| child.runner.as_ref())
    }

    #[must_use]
    pub fn meta(&self, handle: RunnerHandle) -> Option<&M> {
        self.slots.get(handle).map(|child| &child.meta)
    }

    /// Handles in insertion order.
    #[must_use]
    pub fn handles(&self) -> &[RunnerHandle] {
        &self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visits children in insertion order until `f` breaks.
    pub fn try_for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut ChildRunner<M>) -> ControlFlow<()>,
    {
        for handle in &self.order {
            if let Some(child) = self.slots.get_mut(*handle) {
                if f(child).is_break() {
                    break;
                }
            }
        }
    }

    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut ChildRunner<M>),
    {
        self.try_for_each_mut(|child| {
            f(child);
            ControlFlow::Continue(())
        });
    }

    /// Drops every child for which `keep` returns false.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&ChildRunner<M>) -> bool,
    {
        let slots = &mut self.slots;
        self.order.retain(|handle| {
            let keep_child = slots.get(*handle).is_some_and(&mut keep);
            if !keep_child {
                slots.remove(*handle);
            }
            keep_child
        });
    }
}

/// A runner variant that owns children.
pub trait Composition: RunnerAction {
    type Meta;

    fn settings(&self) -> SchedulerSettings;

    fn children(&self) -> &ChildRunners<Self::Meta>;

    /// Takes ownership of `runner`, rejecting unusable durations.
    fn insert(&mut self, runner: BoxedRunner) -> Result<RunnerHandle>;

    /// Detaches a child; the remaining schedule is left as it was.
    fn remove(&mut self, handle: RunnerHandle) -> Option<BoxedRunner>;
}

/// Validates a child's duration before it joins a collection.
pub(crate) fn check_child(runner: &dyn Runner) -> Result<f32> {
    MotionError::check_duration("child runner", runner.duration())
}
