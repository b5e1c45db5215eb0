//! Utility Module
//!
//! - [`FrameTimer`]: per-frame `dt` source for drivers

pub mod time;

pub use time::FrameTimer;
