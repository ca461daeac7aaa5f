//! Single-choice tag selection behind the tag menus.

use crate::types::Tag;

/// Radio-style selection seeded from an initial tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSelection {
    selected: Tag,
}

impl TagSelection {
    pub fn new(initial_value: Tag) -> Self {
        Self {
            selected: initial_value,
        }
    }

    pub fn selected(&self) -> &Tag {
        &self.selected
    }

    pub fn is_selected(&self, tag: &Tag) -> bool {
        &self.selected == tag
    }

    /// Replace the selection and return the tag to report to the owner
    pub fn click(&mut self, tag: Tag) -> Tag {
        self.selected = tag.clone();
        tag
    }
}
