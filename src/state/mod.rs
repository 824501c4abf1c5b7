//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`catalog`, `cart`, `toast`) so components
//! depend on small focused models provided through Leptos context.

pub mod cart;
pub mod catalog;
pub mod toast;
