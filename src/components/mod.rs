//! UI components for the Ecosystem Directory.

pub mod cards;
mod empty_state;
pub mod viewport;

pub use cards::ProjectCard;
pub use empty_state::EmptyState;
