//! Ecosystem Directory UI Components
//!
//! Dioxus components shared by the directory pages.
//!
//! - [`TagSelector`]: single-choice row of tag pills
//! - [`StatusBadge`]: live / testnet marker for a project

pub mod components;

pub use components::*;
