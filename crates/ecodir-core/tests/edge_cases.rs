//! Edge case and boundary condition tests
//!
//! Concrete scenarios for the listing page: ordering, pagination limits,
//! status boundaries and the empty state.

use ecodir_core::{Catalog, ListingState, ListingView, ObserveTicket, Project, Status, Tag};

fn tags() -> Vec<Tag> {
    vec![
        Tag::all(),
        Tag::new("defi", "DeFi"),
        Tag::new("nft", "NFT"),
        Tag::new("oracle", "Oracle"),
    ]
}

fn numbered_catalog(count: usize) -> Catalog {
    let projects = (0..count)
        .map(|i| Project::new(format!("Project {:02}", i)).with_tags(["defi"]))
        .collect();
    Catalog::new(tags(), projects).unwrap()
}

/// Page loop: re-arm only when the derived view changes
struct Page {
    state: ListingState,
    last: Option<ListingView>,
    armed: Option<ObserveTicket>,
}

impl Page {
    fn new(page_size: usize) -> Self {
        Self {
            state: ListingState::new(page_size),
            last: None,
            armed: None,
        }
    }

    /// Returns whether the observer was re-armed
    fn render(&mut self, catalog: &Catalog) -> bool {
        let view = self.state.snapshot(catalog);
        if self.last.as_ref() == Some(&view) {
            return false;
        }
        self.armed = self.state.observe(&view.listing);
        self.last = Some(view);
        true
    }
}

/// Scroll once: arm the observer and fire it
fn scroll(state: &mut ListingState, catalog: &Catalog) -> bool {
    let listing = state.view(catalog);
    match state.observe(&listing) {
        Some(ticket) => state.on_last_item_visible(ticket),
        None => false,
    }
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_sort_ignores_case() {
    let catalog = Catalog::new(
        tags(),
        vec![
            Project::new("Bravo"),
            Project::new("alpha"),
            Project::new("Charlie"),
        ],
    )
    .unwrap();

    let listing = ListingState::new(10).view(&catalog);
    let names: Vec<_> = listing.items.iter().map(|d| d.project.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "Bravo", "Charlie"]);
}

#[test]
fn test_sort_is_stable_for_case_variants() {
    let catalog = Catalog::new(
        tags(),
        vec![
            Project::new("acme").with_tags(["defi"]),
            Project::new("ACME").with_tags(["nft"]),
        ],
    )
    .unwrap();

    let listing = ListingState::new(10).view(&catalog);
    assert_eq!(listing.items[0].project.tags, vec!["defi"]);
    assert_eq!(listing.items[1].project.tags, vec!["nft"]);
}

#[test]
fn test_sort_is_locale_aware() {
    let catalog = Catalog::new(
        tags(),
        vec![
            Project::new("Zeta"),
            Project::new("Émile"),
            Project::new("éclair"),
        ],
    )
    .unwrap();

    let listing = ListingState::new(10).view(&catalog);
    let names: Vec<_> = listing.items.iter().map(|d| d.project.name.as_str()).collect();
    assert_eq!(names, vec!["éclair", "Émile", "Zeta"]);
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_pagination_steps_to_filtered_size() {
    let catalog = numbered_catalog(25);
    let mut state = ListingState::new(10);

    assert_eq!(state.view(&catalog).len(), 10);

    assert!(scroll(&mut state, &catalog));
    assert_eq!(state.view(&catalog).len(), 20);

    assert!(scroll(&mut state, &catalog));
    assert_eq!(state.view(&catalog).len(), 25);

    // Everything is rendered, further scrolling is inert
    let cursor = state.cursor();
    assert!(!scroll(&mut state, &catalog));
    assert!(!scroll(&mut state, &catalog));
    assert_eq!(state.cursor(), cursor);
    assert_eq!(state.view(&catalog).len(), 25);
}

#[test]
fn test_repeated_notification_before_render_is_inert() {
    let catalog = numbered_catalog(40);
    let mut state = ListingState::new(10);

    let ticket = state.observe(&state.view(&catalog)).unwrap();
    assert!(state.on_last_item_visible(ticket));
    assert!(!state.on_last_item_visible(ticket));
    assert!(!state.on_last_item_visible(ticket));
    assert_eq!(state.cursor(), 20);
}

#[test]
fn test_filter_change_resets_from_any_cursor() {
    let catalog = numbered_catalog(60);
    let mut state = ListingState::new(10);
    for _ in 0..4 {
        scroll(&mut state, &catalog);
    }
    state.expand_or_collapse(37);
    assert_eq!(state.cursor(), 50);

    state.select_tag(Tag::new("defi", "DeFi"));
    assert_eq!(state.cursor(), 10);
    assert_eq!(state.expanded(), None);

    for _ in 0..2 {
        scroll(&mut state, &catalog);
    }
    state.expand_or_collapse(4);

    state.select_status(Status::Testnet);
    assert_eq!(state.cursor(), 10);
    assert_eq!(state.expanded(), None);
}

#[test]
fn test_ticket_from_previous_filter_is_ignored() {
    let catalog = numbered_catalog(30);
    let mut state = ListingState::new(10);

    let stale = state.observe(&state.view(&catalog)).unwrap();
    state.select_tag(Tag::new("defi", "DeFi"));
    let fresh = state.observe(&state.view(&catalog)).unwrap();

    assert_ne!(stale, fresh);
    assert!(!state.on_last_item_visible(stale));
    assert!(state.on_last_item_visible(fresh));
    assert_eq!(state.cursor(), 20);
}

#[test]
fn test_clicking_selected_pill_keeps_scroll_alive() {
    let catalog = numbered_catalog(25);
    let mut page = Page::new(10);
    page.render(&catalog);
    let pending = page.armed.unwrap();

    // The pill click lands while the first page is watched
    page.state.select_tag(Tag::all());
    page.state.select_status(Status::All);
    assert!(!page.render(&catalog));

    // The observer installed by the first render still fires
    assert!(page.state.on_last_item_visible(pending));
    assert!(page.render(&catalog));
    assert_eq!(page.state.view(&catalog).len(), 20);
}

#[test]
fn test_filter_change_with_same_listing_rearms() {
    // Every project is tagged defi, so switching to it renders the same items
    let catalog = numbered_catalog(25);
    let mut page = Page::new(10);
    page.render(&catalog);
    let stale = page.armed.unwrap();

    assert!(page.state.select_tag(Tag::new("defi", "DeFi")));
    assert!(page.render(&catalog));
    let fresh = page.armed.unwrap();

    assert!(!page.state.on_last_item_visible(stale));
    assert!(page.state.on_last_item_visible(fresh));
    assert_eq!(page.state.cursor(), 20);
}

// ============================================================================
// Status Boundaries
// ============================================================================

#[test]
fn test_unreleased_project_only_under_all() {
    let catalog = Catalog::new(
        tags(),
        vec![Project::new("Dormant").live(false, false)],
    )
    .unwrap();
    let mut state = ListingState::new(10);

    assert_eq!(state.view(&catalog).len(), 1);

    state.select_status(Status::Live);
    assert!(state.view(&catalog).is_empty());

    state.select_status(Status::Testnet);
    assert!(state.view(&catalog).is_empty());
}

#[test]
fn test_live_and_testnet_project_counts_as_live_only() {
    let catalog = Catalog::new(tags(), vec![Project::new("Both").live(true, true)]).unwrap();
    let mut state = ListingState::new(10);

    state.select_status(Status::Live);
    assert_eq!(state.view(&catalog).len(), 1);

    state.select_status(Status::Testnet);
    assert!(state.view(&catalog).is_empty());
}

// ============================================================================
// Empty State
// ============================================================================

#[test]
fn test_tag_without_projects_is_empty() {
    let catalog = numbered_catalog(15);
    let mut state = ListingState::new(10);
    state.select_tag(Tag::new("oracle", "Oracle"));

    let listing = state.view(&catalog);
    assert!(listing.is_empty());
    assert_eq!(listing.total_matches, 0);
    assert!(state.observe(&listing).is_none());
}

#[test]
fn test_empty_catalog() {
    let catalog = Catalog::new(tags(), vec![]).unwrap();
    let listing = ListingState::default().view(&catalog);
    assert!(listing.is_empty());
    assert!(!listing.has_more());
}

#[test]
fn test_bundled_catalog_first_page() {
    let catalog = Catalog::bundled().unwrap();
    let listing = ListingState::default().view(&catalog);
    assert_eq!(listing.len(), 10);
    assert_eq!(listing.total_matches, catalog.projects.len());
}
