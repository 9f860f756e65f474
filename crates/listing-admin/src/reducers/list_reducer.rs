//! Entity list reducer
//!
//! Fetch results are applied wholesale. A result is dropped only when its
//! page has been unmounted; overlapping fetches within one mount are not
//! fenced, so the last response to arrive wins.

use crate::actions::ListAction;
use crate::domain_models::filter_options;
use crate::state::{EntityListState, LoadingState};

/// Reduce the mounted list page
pub fn reduce_list(
    mut list: EntityListState,
    action: &ListAction,
    page_size: u32,
) -> EntityListState {
    match action {
        ListAction::Mount(resource) => {
            let mount = list.mount.next();
            log::debug!("Mounting {:?} list as {:?}", resource, mount);
            return EntityListState::mounted(mount, *resource, page_size);
        }

        ListAction::FetchPage(page) => {
            list.loading = LoadingState::Loading;
            list.requested_page = *page;
        }

        ListAction::Loaded { mount, page } => {
            if *mount != list.mount {
                log::debug!(
                    "Dropping page for unmounted list {:?} (current {:?})",
                    mount,
                    list.mount
                );
                return list;
            }
            list.raw_items = page.items.clone();
            list.pagination.page = page.page.max(1);
            list.pagination.total_count = page.total;
            if page.limit > 0 {
                list.pagination.page_size = page.limit;
            }
            list.loading = LoadingState::Idle;
            list.clamp_cursor();
        }

        ListAction::LoadFailed { mount, error } => {
            if *mount != list.mount {
                log::debug!("Dropping failure for unmounted list {:?}", mount);
                return list;
            }
            list.loading = LoadingState::Error(error.clone());
        }

        ListAction::StartSearch => {
            list.search_editing = true;
        }
        ListAction::EndSearch => {
            list.search_editing = false;
        }
        ListAction::SearchChar(c) => {
            list.filters.search_query.push(*c);
            list.cursor = 0;
        }
        ListAction::SearchBackspace => {
            list.filters.search_query.pop();
            list.clamp_cursor();
        }
        ListAction::ClearSearch => {
            list.filters.search_query.clear();
            list.clamp_cursor();
        }
        ListAction::CycleFilter => {
            list.filters.cycle_category(filter_options(list.resource));
            list.cursor = 0;
        }
        ListAction::ClearFilters => {
            list.filters = Default::default();
            list.search_editing = false;
            list.clamp_cursor();
        }

        ListAction::CursorNext => {
            if list.cursor + 1 < list.derived_items().len() {
                list.cursor += 1;
            }
        }
        ListAction::CursorPrevious => {
            list.cursor = list.cursor.saturating_sub(1);
        }

        // Handled by middleware
        ListAction::ResourceNext
        | ListAction::ResourcePrevious
        | ListAction::NextPage
        | ListAction::PreviousPage
        | ListAction::GoToPage(_)
        | ListAction::Retry
        | ListAction::Refresh
        | ListAction::RequestMutation(_) => {}
    }

    list
}
