//! Browser bindings for the controller traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with `hydrate`. `boot` wires everything once the DOM is
//! ready. The other modules implement `state`/`util` traits on top of
//! web-sys, gloo, and the page's global `bootstrap` object.

pub mod boot;
pub mod bootstrap;
pub mod browser;
pub mod chat;
pub mod page;
pub mod timer;
pub mod toast;
