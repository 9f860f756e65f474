//! Entity list actions
//!
//! Fetch, filter and paginate one resource collection, and request gated
//! mutations on the item under the cursor.

use admin_client::{Page, Record, Resource};

use crate::domain_models::MutationKind;
use crate::state::MountId;

/// Actions for the entity list page
#[derive(Debug, Clone)]
pub enum ListAction {
    /// Mount a fresh list page for a resource (discarding the current one)
    Mount(Resource),
    /// Switch to the next resource tab
    ResourceNext,
    /// Switch to the previous resource tab
    ResourcePrevious,

    // Retrieval
    /// Issue one request for the given page (handled by middleware)
    FetchPage(u32),
    /// A page arrived for the mount it was requested from
    Loaded { mount: MountId, page: Page<Record> },
    /// A fetch failed for the mount it was requested from
    LoadFailed { mount: MountId, error: String },

    // Pagination
    /// Next page, only when one exists
    NextPage,
    /// Previous page, only when one exists
    PreviousPage,
    /// Jump to a page; out-of-range values are left to the server
    GoToPage(u32),
    /// Re-issue the last requested page after a failure
    Retry,
    /// Re-fetch the current page (after a successful mutation)
    Refresh,

    // Local filters
    /// Start editing the search query
    StartSearch,
    /// Stop editing the search query (query is kept)
    EndSearch,
    /// Character typed into the search query
    SearchChar(char),
    /// Remove the last search character
    SearchBackspace,
    /// Clear the search query
    ClearSearch,
    /// Cycle the category/status filter through the resource's options
    CycleFilter,
    /// Reset search and category/status filter
    ClearFilters,

    // Cursor
    /// Move the cursor down
    CursorNext,
    /// Move the cursor up
    CursorPrevious,

    /// Ask for confirmation of a mutation on the item under the cursor
    RequestMutation(MutationKind),
}
