//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render listing chrome and product cards; shared state comes
//! from Leptos context providers installed by `app::App`.

pub mod category_bar;
pub mod loading_skeleton;
pub mod nav;
pub mod product_card;
pub mod toast_host;
