#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Turns wall-clock frames into the `dt` values runner trees are driven with.
///
/// Two adjustments are made before a step reaches the runners:
/// - a stalled frame (window drag, breakpoint, tab in background) is clamped
///   to `max_delta`, so one hitch cannot jump a shot to its end;
/// - the clamped step is multiplied by `time_scale` for slow motion or
///   fast forward.
///
/// ```rust,ignore
/// let mut timer = FrameTimer::with_max_delta(Duration::from_millis(100));
/// loop {
///     animator.update(timer.tick());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last_frame: Instant,
    max_delta: Duration,
    time_scale: f32,
    /// Scaled step produced by the last tick, in seconds
    dt: f32,
    /// Sum of every step handed out so far, in seconds
    animated: f64,
    frame_count: u64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    pub const DEFAULT_MAX_DELTA: Duration = Duration::from_millis(250);

    #[must_use]
    pub fn new() -> Self {
        Self::with_max_delta(Self::DEFAULT_MAX_DELTA)
    }

    #[must_use]
    pub fn with_max_delta(max_delta: Duration) -> Self {
        Self {
            last_frame: Instant::now(),
            max_delta,
            time_scale: 1.0,
            dt: 0.0,
            animated: 0.0,
            frame_count: 0,
        }
    }

    /// `0.0` pauses; negative or non-finite scales are treated as a pause.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = if scale.is_finite() && scale >= 0.0 {
            scale
        } else {
            log::warn!("Time scale {scale} is not usable, pausing");
            0.0
        };
    }

    #[must_use]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    #[must_use]
    pub fn max_delta(&self) -> Duration {
        self.max_delta
    }

    /// Samples the clock and returns the step to feed the runners.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let raw = now.saturating_duration_since(self.last_frame);
        if raw > self.max_delta {
            log::debug!(
                "Frame took {:.1}ms, clamping to {:.1}ms",
                raw.as_secs_f64() * 1000.0,
                self.max_delta.as_secs_f64() * 1000.0
            );
        }

        self.last_frame = now;
        self.dt = raw.min(self.max_delta).as_secs_f32() * self.time_scale;
        self.animated += f64::from(self.dt);
        self.frame_count += 1;
        self.dt
    }

    /// Step produced by the last tick.
    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.dt
    }

    /// Animation time handed out so far, i.e. the sum of all ticks.
    #[must_use]
    pub fn animated_seconds(&self) -> f64 {
        self.animated
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
