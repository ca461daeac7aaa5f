//! Filter, sort and paginate the catalog into the rendered list.
//!
//! Everything here is a pure function of the catalog and a [`ListingQuery`];
//! the catalog is only borrowed and the result is rebuilt from scratch on
//! every call.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

use crate::catalog::Catalog;
use crate::types::{DisplayProject, Project, Status, Tag};

/// Inputs of one listing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub tag: Tag,
    pub status: Status,
    /// Maximum number of items to return
    pub cursor: usize,
}

impl ListingQuery {
    pub fn new(tag: Tag, status: Status, cursor: usize) -> Self {
        Self { tag, status, cursor }
    }
}

/// Result of one listing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// Sorted, paginated and enriched projects
    pub items: Vec<DisplayProject>,
    /// Number of projects matching the filters before pagination
    pub total_matches: usize,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another page can still be loaded
    pub fn has_more(&self) -> bool {
        self.items.len() < self.total_matches
    }
}

/// Tag filter: the sentinel keeps everything
pub fn filter_by_tag(project: &Project, tag: &Tag) -> bool {
    tag.is_all() || project.has_tag(&tag.value)
}

/// Status filter.
///
/// Live and testnet are exclusive: a project live on both networks only
/// matches [`Status::Live`], and one live on neither only matches
/// [`Status::All`].
pub fn matches_status(project: &Project, status: Status) -> bool {
    match status {
        Status::All => true,
        Status::Live => project.is_live,
        Status::Testnet => !project.is_live && project.is_testnet_live,
    }
}

/// Case-insensitive, locale-aware name ordering.
///
/// Names are lowercased and then compared with the root Unicode collation,
/// so accented names sort next to their base letters. If the collation data
/// cannot be loaded, lowercased names compare by code point.
pub struct NameOrder {
    collator: Option<Collator>,
}

impl NameOrder {
    pub fn new() -> Self {
        let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                tracing::warn!("Collation unavailable, sorting by code point: {}", err);
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.compare_folded(&a.to_lowercase(), &b.to_lowercase())
    }

    fn compare_folded(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

impl Default for NameOrder {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two names with a one-off [`NameOrder`]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameOrder::new().compare(a, b)
}

/// Projects matching both filters, sorted by name.
///
/// The sort is stable, so names equal up to case keep catalog order.
pub fn matching_projects<'a>(catalog: &'a Catalog, tag: &Tag, status: Status) -> Vec<&'a Project> {
    let mut keyed: Vec<(String, &Project)> = catalog
        .projects
        .iter()
        .filter(|p| filter_by_tag(p, tag))
        .filter(|p| matches_status(p, status))
        .map(|p| (p.name.to_lowercase(), p))
        .collect();

    let order = NameOrder::new();
    keyed.sort_by(|(a, _), (b, _)| order.compare_folded(a, b));
    keyed.into_iter().map(|(_, p)| p).collect()
}

/// Run the full pipeline: filter, sort, take `cursor` items, resolve tags.
pub fn derive_listing(catalog: &Catalog, query: &ListingQuery) -> Listing {
    let matches = matching_projects(catalog, &query.tag, query.status);
    let total_matches = matches.len();
    let items = matches
        .into_iter()
        .take(query.cursor)
        .map(|project| DisplayProject::resolve(project, &catalog.tags))
        .collect();

    Listing {
        items,
        total_matches,
    }
}
