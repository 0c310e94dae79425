//! # UI Components Module
//!
//! Leptos components composed by the dashboard root.

pub mod data_panel;
pub mod header;
pub mod icons;
pub mod login_dialog;
pub mod map;
pub mod recovery;
pub mod vehicle_selector;

pub use data_panel::*;
pub use header::*;
pub use login_dialog::*;
pub use map::*;
pub use recovery::*;
pub use vehicle_selector::*;
