use crate::action::ViewAction;
use crate::errors::Result;
use crate::runner::{ActionRunner, RunnerAction};
use crate::settings::SchedulerSettings;
use crate::target::ViewTargetRef;

/// Leaf variant: samples a camera action and applies the result to a target.
///
/// The target is only ever written to, never read, so the runner holds no
/// opinion about the target's absolute state.
pub struct CameraDriver<V> {
    action: V,
    target: ViewTargetRef,
}

pub type CameraRunner<V> = ActionRunner<CameraDriver<V>>;

impl<V: ViewAction> ActionRunner<CameraDriver<V>> {
    pub fn new(action: V, target: ViewTargetRef, duration: f32) -> Result<Self> {
        Self::with_settings(action, target, duration, SchedulerSettings::default())
    }

    pub fn with_settings(
        action: V,
        target: ViewTargetRef,
        duration: f32,
        settings: SchedulerSettings,
    ) -> Result<Self> {
        Self::with_action_and_settings(duration, CameraDriver { action, target }, settings)
    }

    #[must_use]
    pub fn view_action(&self) -> &V {
        &self.action().action
    }
}

impl<V: ViewAction> RunnerAction for CameraDriver<V> {
    fn update_action(&mut self, elapsed_fraction: f32, increment_fraction: f32) {
        let delta = self.action.view_delta(elapsed_fraction, increment_fraction);
        self.target.write().apply_incremental_view_transform(&delta);
    }
}
