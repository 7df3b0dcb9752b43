//! Staggered entrance animation for `.fade-in` elements.

#[cfg(test)]
#[path = "fade_test.rs"]
mod fade_test;

use std::time::Duration;

use crate::util::timer::Scheduler;
use crate::util::widget::Reveal;

/// Delay before the element at `index` is revealed.
pub fn fade_delay(step: Duration, index: usize) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// Reveal each element once, `step` apart, in document order.
pub fn schedule_fade_in<E>(elements: Vec<E>, step: Duration, scheduler: &impl Scheduler)
where
    E: Reveal + 'static,
{
    for (index, element) in elements.into_iter().enumerate() {
        scheduler.after(fade_delay(step, index), Box::new(move || element.reveal()));
    }
}
