//! Auto-dismiss for flash alerts.
//!
//! Only alerts present when the page boots are managed; alerts inserted later
//! stay until the user closes them.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use std::time::Duration;

use crate::util::timer::Scheduler;
use crate::util::widget::Dismissible;

/// Close each alert once after `delay`. Returns the number scheduled.
pub fn schedule_alert_dismissal<D>(alerts: Vec<D>, delay: Duration, scheduler: &impl Scheduler) -> usize
where
    D: Dismissible + 'static,
{
    let count = alerts.len();
    for alert in alerts {
        scheduler.after(delay, Box::new(move || alert.close()));
    }
    log::debug!("scheduled dismissal for {count} alerts");
    count
}
