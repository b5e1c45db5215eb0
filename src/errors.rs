//! Error Types
//!
//! This module defines the error types used throughout the sequencer.
//!
//! # Overview
//!
//! The main error type [`MotionError`] covers configuration failures that
//! must be caught while an action tree is being assembled:
//! - Non-positive or non-finite runner durations
//! - Degenerate rotation axes on camera actions
//! - Removal of runners a collection does not own
//!
//! Numeric drift while slicing time is recovered locally by the runners and
//! never surfaces as an error. Updating a finished runner is a no-op.
//!
//! # Usage
//!
//! All fallible APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, MotionError>`.
//!
//! ```rust,ignore
//! use myth_motion::errors::Result;
//! use myth_motion::runner::SequenceRunner;
//!
//! fn build() -> Result<SequenceRunner> {
//!     let sequence = SequenceRunner::new(10.0)?;
//!     Ok(sequence)
//! }
//! ```

use glam::Vec3;
use thiserror::Error;

/// The main error type for the sequencer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    // ========================================================================
    // Scheduling Errors
    // ========================================================================
    /// A runner was constructed or added with a duration that is not a
    /// positive, finite number.
    #[error("Invalid duration for {context}: {duration} (must be positive and finite)")]
    InvalidDuration {
        /// What was being configured
        context: &'static str,
        /// The rejected duration
        duration: f32,
    },

    /// The handle does not refer to a child of this collection.
    #[error("Runner not found in collection")]
    RunnerNotFound,

    // ========================================================================
    // Action Errors
    // ========================================================================
    /// A rotation was requested around an axis that cannot be normalized.
    #[error("Invalid rotation axis: {axis} (must be non-zero and finite)")]
    InvalidRotationAxis {
        /// The rejected axis
        axis: Vec3,
    },

    /// A total change component is NaN or infinite.
    #[error("Non-finite action parameter: {0}")]
    NonFiniteParameter(&'static str),
}

impl MotionError {
    /// Validates a duration, returning it unchanged when usable.
    pub(crate) fn check_duration(context: &'static str, duration: f32) -> Result<f32> {
        if duration.is_finite() && duration > 0.0 {
            Ok(duration)
        } else {
            Err(MotionError::InvalidDuration { context, duration })
        }
    }
}

/// Alias for `Result<T, MotionError>`.
pub type Result<T> = std::result::Result<T, MotionError>;
