//! Deployment status filter

use serde::{Deserialize, Serialize};

use super::Tag;

/// Status filter applied on top of the tag filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No status filtering
    #[default]
    All,
    /// Live on mainnet
    Live,
    /// Live on testnet only
    Testnet,
}

impl Status {
    /// Identifier used by the tag-like status menu
    pub fn tag_value(self) -> &'static str {
        match self {
            Status::All => Tag::ALL_VALUE,
            Status::Live => "live",
            Status::Testnet => "testnet",
        }
    }

    /// Map a status menu selection back to a filter.
    ///
    /// Unknown identifiers select [`Status::All`].
    pub fn from_tag_value(value: &str) -> Self {
        match value {
            "live" => Status::Live,
            "testnet" => Status::Testnet,
            _ => Status::All,
        }
    }

    /// Build the menu tag for this status
    pub fn to_tag(self) -> Tag {
        let label = match self {
            Status::All => "All",
            Status::Live => "Live",
            Status::Testnet => "Testnet",
        };
        Tag::new(self.tag_value(), label)
    }
}

/// Tags rendered by the status menu, sentinel first
pub fn status_tags() -> Vec<Tag> {
    [Status::All, Status::Live, Status::Testnet]
        .into_iter()
        .map(Status::to_tag)
        .collect()
}
