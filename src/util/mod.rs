//! Utility helpers shared across client UI modules.

pub mod currency;
pub mod diagnostics;
