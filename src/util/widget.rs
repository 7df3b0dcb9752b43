//! Capability traits for toolkit widgets.
//!
//! DESIGN
//! ======
//! Controllers never touch Bootstrap or `window` directly. Alerts and toasts
//! are driven through `Dismissible`; native prompts go through `Dialogs`.

/// A widget that can be shown and closed by the UI toolkit.
pub trait Dismissible {
    fn show(&self);
    fn close(&self);
}

/// An element that can play its entrance transition.
pub trait Reveal {
    fn reveal(&self);
}

/// Blocking native dialogs.
pub trait Dialogs {
    fn alert(&self, message: &str);

    /// Returns `true` when the user accepts.
    fn confirm(&self, message: &str) -> bool;
}
