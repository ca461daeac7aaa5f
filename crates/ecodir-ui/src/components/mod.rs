//! Reusable UI components
//!
//! Pills and badges share the `.pill` / `.badge` classes from the global
//! stylesheet.

mod status_badge;
mod tag_selector;

pub use status_badge::*;
pub use tag_selector::*;
