use crate::errors::{MotionError, Result};
use crate::settings::SchedulerSettings;

/// One frame's worth of a runner's normalized timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSlice {
    /// Position on the timeline before this frame, in `[0, 1)`.
    pub elapsed_fraction: f32,
    /// Portion of the timeline consumed by this frame.
    pub increment_fraction: f32,
}

impl TimeSlice {
    #[inline]
    #[must_use]
    pub fn end(&self) -> f32 {
        self.elapsed_fraction + self.increment_fraction
    }
}

/// Elapsed/duration bookkeeping shared by every runner variant.
///
/// Two states: running (`elapsed < duration`) and complete
/// (`elapsed == duration`). Nothing leaves the complete state.
///
/// Elapsed time is accumulated in `f64` so long timelines driven at frame
/// rate do not drift away from the sum of their steps. Slice increments are
/// differences of consecutive elapsed fractions, so the slices of a runner
/// always tile its timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunnerClock {
    duration: f32,
    elapsed: f64,
    settings: SchedulerSettings,
}

impl RunnerClock {
    pub fn new(duration: f32, settings: SchedulerSettings) -> Result<Self> {
        let duration = MotionError::check_duration("runner", duration)?;
        Ok(Self {
            duration,
            elapsed: 0.0,
            settings,
        })
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    #[inline]
    #[must_use]
    pub fn elapsed_fraction(&self) -> f32 {
        (self.elapsed / f64::from(self.duration)) as f32
    }

    /// Real time left before completion.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> f32 {
        (f64::from(self.duration) - self.elapsed) as f32
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= f64::from(self.duration)
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> SchedulerSettings {
        self.settings
    }

    /// Consumes `dt` of real time and returns the slice it covers.
    ///
    /// Returns `None` once complete and for `dt` values that cannot advance
    /// time (zero, negative, NaN). A `dt` that reaches or overshoots the end
    /// (within `fraction_epsilon`) completes the clock and yields exactly the
    /// remaining fraction.
    ///
    /// A step too small to move the `f32` elapsed fraction is still counted
    /// but yields no slice; the next slice starts where the last one ended.
    pub fn advance(&mut self, dt: f32) -> Option<TimeSlice> {
        if self.is_complete() {
            return None;
        }
        if dt.is_nan() || dt < 0.0 {
            log::warn!("Ignoring invalid time step {dt}");
            return None;
        }
        if dt == 0.0 {
            return None;
        }

        let elapsed_fraction = self.elapsed_fraction();
        let duration = f64::from(self.duration);
        let remaining = duration - self.elapsed;
        let dt = f64::from(dt);

        if dt >= remaining || remaining - dt <= duration * f64::from(self.settings.fraction_epsilon) {
            self.elapsed = duration;
            return Some(TimeSlice {
                elapsed_fraction,
                increment_fraction: 1.0 - elapsed_fraction,
            });
        }

        self.elapsed += dt;
        let increment_fraction = self.elapsed_fraction() - elapsed_fraction;
        (increment_fraction > 0.0).then_some(TimeSlice {
            elapsed_fraction,
            increment_fraction,
        })
    }
}
