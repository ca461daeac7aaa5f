//! Core types for Ecosystem Directory
//!
//! Tags and projects are static records loaded once at startup.
//! [`DisplayProject`] is derived per listing pass and never stored.

mod project;
mod status;
mod tag;

pub use project::{DisplayProject, Project};
pub use status::{status_tags, Status};
pub use tag::Tag;
