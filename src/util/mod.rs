//! Utility helpers shared across controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate markup building, cookie parsing, and the timer and
//! widget seams from controller logic so each can be tested without a browser.

pub mod cookie;
pub mod markup;
pub mod timer;
pub mod widget;
