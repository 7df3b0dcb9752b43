//! Page behavior controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per behavior. Each controller owns its logic and reaches the
//! page only through traits, which `dom` implements for the browser and the
//! tests implement with fakes.

pub mod alerts;
pub mod chat;
pub mod clipboard;
pub mod composer;
pub mod fade;
pub mod guard;
pub mod toast;
