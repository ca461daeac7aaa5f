//! Listing page state.
//!
//! Owns the active filters, the pagination cursor, the expanded card and the
//! infinite-scroll observer. Every filter change starts a new session: the
//! cursor returns to one page, the expanded card is cleared and any armed
//! observer is dropped, so notifications from an earlier render are ignored.
//! Re-selecting the active filter changes nothing.
//!
//! The page renders from a [`ListingView`]. A new view is produced whenever
//! the session or cursor moves, even if the rendered items are identical, and
//! the observer has to be re-armed exactly when the view changes.

use crate::catalog::Catalog;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::listing::{derive_listing, Listing, ListingQuery};
use crate::types::{Status, Tag};

/// Handle for one armed "last item became visible" observation.
///
/// Valid only for the session and cursor it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserveTicket {
    session: u64,
    cursor: usize,
}

/// Rendered listing tagged with the state it was derived from.
///
/// Two views compare equal only when nothing needs re-arming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub listing: Listing,
    session: u64,
    cursor: usize,
}

/// State of the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    tag: Tag,
    status: Status,
    cursor: usize,
    page_size: usize,
    expanded: Option<usize>,
    session: u64,
    watching: Option<ObserveTicket>,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListingState {
    /// Fresh state: no filter, first page, nothing expanded.
    ///
    /// A zero page size is bumped to one.
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            tag: Tag::all(),
            status: Status::All,
            cursor: page_size,
            page_size,
            expanded: None,
            session: 0,
            watching: None,
        }
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Whether an observation is currently armed
    pub fn is_watching(&self) -> bool {
        self.watching.is_some()
    }

    pub fn query(&self) -> ListingQuery {
        ListingQuery::new(self.tag.clone(), self.status, self.cursor)
    }

    /// Derive the list to render
    pub fn view(&self, catalog: &Catalog) -> Listing {
        derive_listing(catalog, &self.query())
    }

    /// Derive the list together with the current session and cursor
    pub fn snapshot(&self, catalog: &Catalog) -> ListingView {
        ListingView {
            listing: self.view(catalog),
            session: self.session,
            cursor: self.cursor,
        }
    }

    /// Switch the tag filter and start a new session.
    ///
    /// Returns `false` and leaves the state untouched when `tag` is already
    /// the active filter.
    pub fn select_tag(&mut self, tag: Tag) -> bool {
        if self.tag == tag {
            return false;
        }
        tracing::debug!(tag = %tag, "Tag filter changed");
        self.tag = tag;
        self.reset_session();
        true
    }

    /// Switch the status filter and start a new session.
    ///
    /// Returns `false` when `status` is already active.
    pub fn select_status(&mut self, status: Status) -> bool {
        if self.status == status {
            return false;
        }
        tracing::debug!(?status, "Status filter changed");
        self.status = status;
        self.reset_session();
        true
    }

    fn reset_session(&mut self) {
        self.cursor = self.page_size;
        self.expanded = None;
        self.watching = None;
        self.session = self.session.wrapping_add(1);
    }

    /// Arm the observer on the last rendered item of `listing`.
    ///
    /// Returns `None` when everything matching is already rendered, in which
    /// case nothing is watched.
    pub fn observe(&mut self, listing: &Listing) -> Option<ObserveTicket> {
        if !listing.has_more() {
            self.watching = None;
            return None;
        }
        let ticket = ObserveTicket {
            session: self.session,
            cursor: self.cursor,
        };
        self.watching = Some(ticket);
        Some(ticket)
    }

    /// The last rendered item entered the viewport.
    ///
    /// Disarms the observer before advancing the cursor by one page, so
    /// further notifications are inert until the next [`observe`]. Returns
    /// whether the cursor advanced.
    ///
    /// [`observe`]: ListingState::observe
    pub fn on_last_item_visible(&mut self, ticket: ObserveTicket) -> bool {
        if self.watching != Some(ticket) {
            tracing::trace!(?ticket, "Ignoring stale visibility notification");
            return false;
        }
        self.watching = None;
        self.cursor += self.page_size;
        tracing::debug!(cursor = self.cursor, "Loading next page");
        true
    }

    /// Expand the card at `index`, or collapse it if it is the expanded one.
    ///
    /// At most one card is expanded at a time. A second click on the flipped
    /// card turns it back over instead of leaving it expanded.
    pub fn expand_or_collapse(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}
