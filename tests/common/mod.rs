//! Shared helpers for runner tests.
//!
//! A [`Probe`] is a runner variant that records every slice it receives into
//! a log shared by all probes of a test, tagged with the probe's id. The log
//! therefore shows both what each child saw on its own timeline and the order
//! in which children were served.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use myth_motion::runner::{ActionRunner, RunnerAction, TimeSlice};

pub const EPSILON: f32 = 1e-5;

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

pub type SliceLog = Rc<RefCell<Vec<(usize, TimeSlice)>>>;

pub struct Probe {
    id: usize,
    log: SliceLog,
}

impl Probe {
    pub fn from_log(id: usize, log: &SliceLog) -> Self {
        Self {
            id,
            log: log.clone(),
        }
    }
}

impl RunnerAction for Probe {
    fn update_action(&mut self, elapsed_fraction: f32, increment_fraction: f32) {
        self.log.borrow_mut().push((
            self.id,
            TimeSlice {
                elapsed_fraction,
                increment_fraction,
            },
        ));
    }
}

pub fn new_log() -> SliceLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn probe(id: usize, duration: f32, log: &SliceLog) -> ActionRunner<Probe> {
    ActionRunner::with_action(duration, Probe::from_log(id, log)).unwrap()
}

pub fn slices_of(log: &SliceLog, id: usize) -> Vec<TimeSlice> {
    log.borrow()
        .iter()
        .filter(|(probe, _)| *probe == id)
        .map(|(_, slice)| *slice)
        .collect()
}

/// Asserts the slices tile `[0, 1]` without gaps or overlap.
pub fn assert_full_coverage(slices: &[TimeSlice]) {
    assert!(!slices.is_empty(), "no time was delivered");

    let mut expected_start = 0.0;
    let mut total = 0.0_f64;
    for slice in slices {
        assert!(
            (slice.elapsed_fraction - expected_start).abs() < EPSILON,
            "slice starts at {} but previous ended at {expected_start}",
            slice.elapsed_fraction
        );
        assert!(slice.increment_fraction > 0.0);
        expected_start = slice.end();
        total += f64::from(slice.increment_fraction);
    }

    assert!((total - 1.0).abs() < f64::from(EPSILON), "coverage summed to {total}");
    assert!(approx(expected_start, 1.0), "coverage ended at {expected_start}");
}
