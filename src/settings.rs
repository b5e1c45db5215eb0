//! Scheduler Settings
//!
//! Tolerances shared by every runner in an action tree.
//!
//! ```rust,ignore
//! use myth_motion::{SchedulerSettings, SequenceRunner};
//!
//! let settings = SchedulerSettings {
//!     fraction_epsilon: 1e-6,
//! };
//! let sequence = SequenceRunner::with_settings(4.0, settings)?;
//! ```

/// Numeric configuration for time slicing.
///
/// Collections hand their settings down to every runner they construct, so a
/// tree only needs to be configured at its root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchedulerSettings {
    /// Tolerance on the normalized `[0, 1]` timeline.
    ///
    /// A runner whose elapsed fraction is within this distance of `1.0`
    /// snaps to complete, and sequence windows closer than this to the
    /// current position are treated as touching it.
    pub fraction_epsilon: f32,
}

impl SchedulerSettings {
    pub const DEFAULT_FRACTION_EPSILON: f32 = 1e-5;
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            fraction_epsilon: Self::DEFAULT_FRACTION_EPSILON,
        }
    }
}
