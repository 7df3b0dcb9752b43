//! Timer seam for delayed and periodic work.
//!
//! In the browser `GlooScheduler` (see `dom::timer`) backs this with
//! `gloo-timers`; tests drive a virtual clock instead.

use std::time::Duration;

pub trait Scheduler {
    /// Run `task` once after `delay`.
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>);

    /// Run `task` every `period`, for the lifetime of the page.
    fn every(&self, period: Duration, task: Box<dyn FnMut()>);
}

/// Clamp a duration to the `u32` millisecond range browser timers accept.
pub fn timer_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
