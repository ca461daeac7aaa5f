//! Category tags

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A category label projects can belong to.
///
/// Tags compare by `value`; `label` is the built-in display text used when
/// no translation exists for the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Stable identifier referenced by [`Project::tags`](super::Project::tags)
    pub value: String,
    /// Fallback display label
    pub label: String,
}

impl Tag {
    /// Identifier of the "no filter" sentinel
    pub const ALL_VALUE: &'static str = "all";

    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The sentinel tag shown as the default menu entry
    pub fn all() -> Self {
        Self::new(Self::ALL_VALUE, "All")
    }

    /// True for the sentinel, which never appears on a project
    pub fn is_all(&self) -> bool {
        self.value == Self::ALL_VALUE
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
