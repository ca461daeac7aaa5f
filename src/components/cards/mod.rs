//! Directory cards.

mod project_card;

pub use project_card::ProjectCard;
