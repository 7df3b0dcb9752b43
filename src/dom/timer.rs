//! `Scheduler` backed by `gloo-timers` callbacks.
//!
//! Timers are forgotten: nothing on the page tears them down.

use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};

use crate::util::timer::{Scheduler, timer_millis};

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        Timeout::new(timer_millis(delay), task).forget();
    }

    fn every(&self, period: Duration, mut task: Box<dyn FnMut()>) {
        Interval::new(timer_millis(period), move || task()).forget();
    }
}
