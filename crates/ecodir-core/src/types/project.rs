//! Catalog projects

use serde::{Deserialize, Serialize};

use super::{Status, Tag};

/// A directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Tag identifiers this project belongs to
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub is_testnet_live: bool,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    /// Logo URL; cards fall back to the name's initial
    #[serde(default)]
    pub logo: Option<String>,
}

impl Project {
    /// Minimal project, mainly for tests and fixtures
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            tags: Vec::new(),
            is_live: false,
            is_testnet_live: false,
            website: None,
            twitter: None,
            github: None,
            logo: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn live(mut self, is_live: bool, is_testnet_live: bool) -> Self {
        self.is_live = is_live;
        self.is_testnet_live = is_testnet_live;
        self
    }

    pub fn has_tag(&self, value: &str) -> bool {
        self.tags.iter().any(|t| t == value)
    }

    /// Deployment classification.
    ///
    /// Live wins over testnet, so a project is never counted under both.
    /// Returns `None` for projects that are neither.
    pub fn status(&self) -> Option<Status> {
        if self.is_live {
            Some(Status::Live)
        } else if self.is_testnet_live {
            Some(Status::Testnet)
        } else {
            None
        }
    }

    /// First character of the name, uppercased, for logo placeholders
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// A project enriched with its resolved tags for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayProject {
    pub project: Project,
    /// Catalog tags whose identifier appears in `project.tags`, in catalog order
    pub tags_ref: Vec<Tag>,
}

impl DisplayProject {
    /// Resolve a project's tag identifiers against the catalog tags
    pub fn resolve(project: &Project, catalog_tags: &[Tag]) -> Self {
        let tags_ref = catalog_tags
            .iter()
            .filter(|tag| !tag.is_all() && project.has_tag(&tag.value))
            .cloned()
            .collect();
        Self {
            project: project.clone(),
            tags_ref,
        }
    }
}
