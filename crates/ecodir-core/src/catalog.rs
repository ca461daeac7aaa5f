//! Static project catalog.
//!
//! The catalog is loaded once at startup, validated, and shared read-only
//! for the rest of the process.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::{Project, Tag};

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Tags and projects making up the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Menu tags, the "all" sentinel first
    pub tags: Vec<Tag>,
    pub projects: Vec<Project>,
}

impl Catalog {
    /// Build and validate a catalog from in-memory records
    pub fn new(tags: Vec<Tag>, projects: Vec<Project>) -> Result<Self, CatalogError> {
        let catalog = Self { tags, projects };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Catalog shipped with the application
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        tracing::info!(
            tags = catalog.tags.len(),
            projects = catalog.projects.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Read a catalog override from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Reading catalog from {:?}", path);
        Self::from_json(&json)
    }

    /// Check the catalog invariants.
    ///
    /// Unknown tag references are tolerated and logged; they never resolve
    /// into a project's display tags.
    pub fn validate(&self) -> Result<(), CatalogError> {
        match self.tags.first() {
            Some(tag) if tag.is_all() => {}
            _ => return Err(CatalogError::MissingSentinel),
        }

        let mut seen = HashSet::new();
        for tag in &self.tags {
            if !seen.insert(tag.value.as_str()) {
                return Err(CatalogError::DuplicateTag(tag.value.clone()));
            }
        }

        for project in &self.projects {
            if project.has_tag(Tag::ALL_VALUE) {
                return Err(CatalogError::SentinelInProject(project.name.clone()));
            }
            for value in &project.tags {
                if !seen.contains(value.as_str()) {
                    tracing::warn!(
                        project = %project.name,
                        tag = %value,
                        "Project references unknown tag"
                    );
                }
            }
        }

        Ok(())
    }

    /// The "no filter" tag
    pub fn all_tag(&self) -> &Tag {
        // validate() guarantees the sentinel leads the list
        &self.tags[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> Vec<Tag> {
        vec![Tag::all(), Tag::new("defi", "DeFi"), Tag::new("nft", "NFT")]
    }

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.all_tag().is_all());
        assert!(catalog.projects.len() > 20);
        assert!(catalog
            .projects
            .iter()
            .all(|p| !p.has_tag(Tag::ALL_VALUE)));
    }

    #[test]
    fn rejects_missing_sentinel() {
        let result = Catalog::new(vec![Tag::new("defi", "DeFi")], vec![]);
        assert!(matches!(result, Err(CatalogError::MissingSentinel)));

        let result = Catalog::new(vec![], vec![]);
        assert!(matches!(result, Err(CatalogError::MissingSentinel)));
    }

    #[test]
    fn rejects_duplicate_tags() {
        let mut tags = tags();
        tags.push(Tag::new("nft", "Collectibles"));
        let result = Catalog::new(tags, vec![]);
        assert!(matches!(result, Err(CatalogError::DuplicateTag(v)) if v == "nft"));
    }

    #[test]
    fn rejects_sentinel_on_project() {
        let projects = vec![Project::new("Acme").with_tags(["defi", "all"])];
        let result = Catalog::new(tags(), projects);
        assert!(matches!(result, Err(CatalogError::SentinelInProject(n)) if n == "Acme"));
    }

    #[test]
    fn tolerates_unknown_tag_reference() {
        let projects = vec![Project::new("Acme").with_tags(["defi", "ghost"])];
        assert!(Catalog::new(tags(), projects).is_ok());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"tags":[{"value":"all","label":"All"}],"projects":[{"name":"Solo"}]}"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.projects.len(), 1);
        assert_eq!(catalog.projects[0].name, "Solo");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load(dir.path().join("nope.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn load_reports_bad_json() {
        let result = Catalog::from_json("{ not json");
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }
}
