//! Transient success toasts.
//!
//! DESIGN
//! ======
//! Toasts go into one fixed-position container that is created on first use
//! and reused afterwards. Each toast removes its own element once the toolkit
//! reports it hidden. There is no cap and no eviction; overlapping toasts
//! stack in append order.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use uuid::Uuid;

use crate::config::MarkupPolicy;
use crate::util::markup::toast_markup;
use crate::util::widget::Dismissible;

/// Page-side operations the notifier needs. Clones must address the same page.
pub trait ToastSurface: Clone + 'static {
    type Toast: Dismissible;

    fn has_container(&self) -> bool;
    fn create_container(&self);
    /// Append a toast element with `id` and inner `markup` to the container.
    fn append_toast(&self, id: &str, markup: &str) -> Option<Self::Toast>;
    /// Run `callback` once when the toast with `id` finishes hiding.
    fn on_hidden(&self, id: &str, callback: Box<dyn FnOnce()>);
    fn remove_toast(&self, id: &str);
}

pub struct ToastNotifier<S> {
    surface: S,
    policy: MarkupPolicy,
}

impl<S: ToastSurface> ToastNotifier<S> {
    pub fn new(surface: S, policy: MarkupPolicy) -> Self {
        Self { surface, policy }
    }

    /// Show a toast with `message`. Returns the new toast's element id.
    pub fn notify(&self, message: &str) -> Option<String> {
        if !self.surface.has_container() {
            self.surface.create_container();
        }
        let id = format!("toast-{}", Uuid::new_v4().simple());
        let Some(toast) = self.surface.append_toast(&id, &toast_markup(message, self.policy)) else {
            log::warn!("toast container unavailable; dropping notice");
            return None;
        };

        let surface = self.surface.clone();
        let hidden_id = id.clone();
        self.surface
            .on_hidden(&id, Box::new(move || surface.remove_toast(&hidden_id)));
        toast.show();
        Some(id)
    }
}
