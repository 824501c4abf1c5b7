//! Networking modules for the catalog listing endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP request, `fetch` wraps it with cancellation and
//! diagnostics, and `types` defines the wire schema.

pub mod api;
pub mod fetch;
pub mod types;
