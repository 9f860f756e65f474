//! Entity list page state
//!
//! One instance per mounted page. `derived_items` is never stored; it is
//! recomputed from `raw_items` and `filters` on every read.

use admin_client::{Record, Resource};

use crate::domain_models::{apply_filters, ListFilters};

/// Identity of one page mount
///
/// Fetch results carry the mount they were issued for and are dropped once
/// the page has been replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MountId(pub u64);

impl MountId {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Server-reported pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based current page
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_count: 0,
        }
    }

    /// `ceil(total_count / page_size)`, saturating at `u32::MAX`
    pub fn total_pages(&self) -> u32 {
        let size = u64::from(self.page_size.max(1));
        u32::try_from(self.total_count.div_ceil(size)).unwrap_or(u32::MAX)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Loading state of the list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Error(String),
}

/// State of the mounted entity list page
#[derive(Debug, Clone, PartialEq)]
pub struct EntityListState {
    pub mount: MountId,
    pub resource: Resource,
    /// Last fetched page, server order preserved
    pub raw_items: Vec<Record>,
    pub filters: ListFilters,
    pub pagination: Pagination,
    pub loading: LoadingState,
    /// Index into the derived items
    pub cursor: usize,
    /// Whether the search box has keyboard focus
    pub search_editing: bool,
    /// Page of the most recent request, used by Retry
    pub requested_page: u32,
}

impl Default for EntityListState {
    fn default() -> Self {
        Self::mounted(MountId::default(), Resource::default(), 10)
    }
}

impl EntityListState {
    /// Fresh state for a newly mounted page
    pub fn mounted(mount: MountId, resource: Resource, page_size: u32) -> Self {
        Self {
            mount,
            resource,
            raw_items: Vec::new(),
            filters: ListFilters::default(),
            pagination: Pagination::new(page_size),
            loading: LoadingState::Idle,
            cursor: 0,
            search_editing: false,
            requested_page: 1,
        }
    }

    /// Loaded items that pass the current filters
    pub fn derived_items(&self) -> Vec<Record> {
        apply_filters(&self.raw_items, &self.filters)
    }

    /// The item under the cursor
    pub fn selected(&self) -> Option<Record> {
        self.derived_items().into_iter().nth(self.cursor)
    }

    /// Keep the cursor inside the derived list
    pub fn clamp_cursor(&mut self) {
        let len = self.derived_items().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}
