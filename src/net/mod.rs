//! Networking modules for the chat REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` declares the transport seam and its gloo-net implementation, and
//! `types` defines the JSON wire schema shared with the server views.

pub mod api;
pub mod types;
