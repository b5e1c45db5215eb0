//! Runner Base Tests
//!
//! Tests for:
//! - Clock-driven slicing of real time into normalized fractions
//! - Completion and post-completion no-ops
//! - Duration validation at construction time
//! - Leaf camera runners delivering deltas to targets

mod common;

use std::sync::Arc;

use glam::Vec3;

use common::{EPSILON, Probe, approx, assert_full_coverage, new_log, probe, slices_of};
use myth_motion::action::{CameraActionBuilder, ViewDelta};
use myth_motion::errors::MotionError;
use myth_motion::runner::{ActionRunner, CameraRunner, ParallelRunner, Runner, SequenceRunner};
use myth_motion::settings::SchedulerSettings;
use myth_motion::target::{RwLock, ViewTarget};

#[derive(Default)]
struct Recorder {
    deltas: Vec<ViewDelta>,
}

impl ViewTarget for Recorder {
    fn apply_incremental_view_transform(&mut self, delta: &ViewDelta) {
        self.deltas.push(*delta);
    }
}

// ============================================================================
// Time Bookkeeping
// ============================================================================

#[test]
fn steps_summing_to_duration_complete_the_runner() {
    let log = new_log();
    let mut runner = probe(0, 2.0, &log);

    for _ in 0..20 {
        assert!(!runner.is_complete());
        runner.update(0.1);
    }

    assert!(runner.is_complete());
    assert_eq!(runner.elapsed(), runner.duration());
    assert_full_coverage(&slices_of(&log, 0));
}

#[test]
fn elapsed_fraction_is_taken_before_advancing() {
    let log = new_log();
    let mut runner = probe(0, 4.0, &log);

    runner.update(1.0);
    runner.update(2.0);

    let slices = slices_of(&log, 0);
    assert_eq!(slices.len(), 2);
    assert!(approx(slices[0].elapsed_fraction, 0.0));
    assert!(approx(slices[0].increment_fraction, 0.25));
    assert!(approx(slices[1].elapsed_fraction, 0.25));
    assert!(approx(slices[1].increment_fraction, 0.5));
    assert!(approx(runner.progress(), 0.75));
}

#[test]
fn updates_after_completion_are_noops() {
    let log = new_log();
    let mut runner = probe(0, 1.0, &log);

    runner.update(1.0);
    assert!(runner.is_complete());

    runner.update(0.5);
    runner.update(100.0);

    assert_eq!(slices_of(&log, 0).len(), 1);
    assert_eq!(runner.elapsed(), 1.0);
}

#[test]
fn overshooting_step_delivers_only_the_remainder() {
    let log = new_log();
    let mut runner = probe(0, 3.0, &log);

    runner.update(2.0);
    runner.update(5.0);

    let slices = slices_of(&log, 0);
    assert!(approx(slices[1].increment_fraction, 1.0 / 3.0));
    assert!(runner.is_complete());
    assert_full_coverage(&slices);
}

#[test]
fn invalid_steps_leave_the_clock_untouched() {
    let log = new_log();
    let mut runner = probe(0, 1.0, &log);

    runner.update(-1.0);
    runner.update(f32::NAN);
    runner.update(0.0);

    assert!(slices_of(&log, 0).is_empty());
    assert_eq!(runner.elapsed(), 0.0);
}

#[test]
fn custom_epsilon_controls_completion_snapping() {
    let log = new_log();
    let settings = SchedulerSettings {
        fraction_epsilon: 0.01,
    };
    let mut runner =
        ActionRunner::with_action_and_settings(1.0, Probe::from_log(0, &log), settings).unwrap();

    runner.update(0.995);
    assert!(runner.is_complete());
    assert!(approx(slices_of(&log, 0)[0].increment_fraction, 1.0));
}

// ============================================================================
// Construction Validation
// ============================================================================

#[test]
fn non_positive_durations_are_rejected_at_construction() {
    let target = Arc::new(RwLock::new(Recorder::default()));
    let action = CameraActionBuilder::new().build().unwrap();

    for duration in [0.0, -2.0, f32::NAN, f32::INFINITY] {
        let leaf = CameraRunner::new(action, target.clone(), duration);
        assert!(matches!(leaf, Err(MotionError::InvalidDuration { .. })));
        assert!(SequenceRunner::new(duration).is_err());
        assert!(ParallelRunner::new(duration).is_err());
    }
}

// ============================================================================
// Leaf Camera Runner
// ============================================================================

#[test]
fn camera_runner_pushes_deltas_without_reading_target() {
    let target = Arc::new(RwLock::new(Recorder::default()));
    let action = CameraActionBuilder::new()
        .translate(Vec3::new(4.0, 0.0, 0.0))
        .translate_target(Vec3::new(0.0, 2.0, 0.0))
        .build_perspective()
        .unwrap();

    let mut runner = CameraRunner::new(action, target.clone(), 2.0).unwrap();
    for _ in 0..8 {
        runner.update(0.25);
    }
    assert!(runner.is_complete());

    let recorder = target.read();
    assert_eq!(recorder.deltas.len(), 8);

    let translation: Vec3 = recorder.deltas.iter().map(|d| d.translation).sum();
    let target_translation: Vec3 = recorder.deltas.iter().map(|d| d.target_translation).sum();
    assert!((translation - Vec3::new(4.0, 0.0, 0.0)).length() < EPSILON);
    assert!((target_translation - Vec3::new(0.0, 2.0, 0.0)).length() < EPSILON);
    assert!(recorder.deltas.iter().all(|d| d.field_of_view == Some(0.0)));
}

#[test]
fn completed_camera_runner_produces_no_more_deltas() {
    let target = Arc::new(RwLock::new(Recorder::default()));
    let action = CameraActionBuilder::new()
        .translate(Vec3::X)
        .build()
        .unwrap();

    let mut runner = CameraRunner::new(action, target.clone(), 1.0).unwrap();
    runner.update(1.0);
    runner.update(1.0);
    runner.update(1.0);

    assert_eq!(target.read().deltas.len(), 1);
    assert_eq!(target.read().deltas[0].translation, Vec3::X);
}
