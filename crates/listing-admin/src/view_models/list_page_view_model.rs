//! View model for the entity list page
//!
//! Pre-computes table rows, the filter line and the pagination footer from
//! the mounted list state.

use listing_admin_theme::Theme;
use ratatui::style::{Color, Style};

use crate::command_id::CommandId;
use crate::domain_models::{column_headers, ListEntity};
use crate::state::{AppState, EntityListState, LoadingState, Pagination};

/// View model for the list page body
#[derive(Debug, Clone)]
pub struct ListPageViewModel {
    /// "Amenities" etc.
    pub title: String,
    /// Loading/error indicator shown in the block title
    pub status_text: String,
    pub status_color: Color,
    pub headers: Vec<String>,
    /// Cell texts of the derived (filtered) items
    pub rows: Vec<Vec<String>>,
    pub selected_index: Option<usize>,
    /// Shown instead of the table when there are no rows
    pub empty_message: Option<String>,
    pub filter_line: String,
    pub filter_style: Style,
    pub pagination: PaginationViewModel,
}

/// Footer with page controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationViewModel {
    pub label: String,
    /// Prev control is disabled on the first page
    pub prev_enabled: bool,
    /// Next control is disabled on the last page
    pub next_enabled: bool,
    pub prev_hint: String,
    pub next_hint: String,
}

impl PaginationViewModel {
    pub fn from_pagination(pagination: &Pagination, prev_hint: String, next_hint: String) -> Self {
        let pages = pagination.total_pages().max(1);
        Self {
            label: format!(
                "Page {} of {} · {} total",
                pagination.page, pages, pagination.total_count
            ),
            prev_enabled: pagination.has_prev(),
            next_enabled: pagination.has_next(),
            prev_hint,
            next_hint,
        }
    }
}

impl ListPageViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let list = &state.list;
        let theme = &state.theme;
        let derived = list.derived_items();

        let (status_text, status_color) = Self::format_loading_state(list, state, theme);

        let rows: Vec<Vec<String>> = derived.iter().map(|record| record.cells()).collect();
        let selected_index = rows.len().checked_sub(1).map(|last| list.cursor.min(last));

        let empty_message = rows.is_empty().then(|| {
            if matches!(list.loading, LoadingState::Loading) {
                "Loading...".to_string()
            } else if list.raw_items.is_empty() {
                format!("No {} found", list.resource.label().to_lowercase())
            } else {
                "No items match the current filters".to_string()
            }
        });

        let (filter_line, filter_style) = Self::format_filters(list, theme);

        let hint = |cmd| state.keymap.compact_hint_for_command(cmd).unwrap_or_default();
        let pagination = PaginationViewModel::from_pagination(
            &list.pagination,
            hint(CommandId::PagePrevious),
            hint(CommandId::PageNext),
        );

        Self {
            title: format!(" {} ", list.resource.label()),
            status_text,
            status_color,
            headers: column_headers(list.resource)
                .iter()
                .map(|h| h.to_string())
                .collect(),
            rows,
            selected_index,
            empty_message,
            filter_line,
            filter_style,
            pagination,
        }
    }

    fn format_loading_state(
        list: &EntityListState,
        state: &AppState,
        theme: &Theme,
    ) -> (String, Color) {
        match &list.loading {
            LoadingState::Idle => (String::new(), theme.text_muted),
            LoadingState::Loading => (
                format!("Loading page {}...", list.requested_page),
                theme.status_running,
            ),
            LoadingState::Error(err) => {
                let retry = state
                    .keymap
                    .hint_for_command(CommandId::ListRetry)
                    .unwrap_or("r");
                (format!("{} [{} to retry]", err, retry), theme.status_error)
            }
        }
    }

    fn format_filters(list: &EntityListState, theme: &Theme) -> (String, Style) {
        let query = if list.search_editing {
            format!("{}▌", list.filters.search_query)
        } else if list.filters.search_query.is_empty() {
            "-".to_string()
        } else {
            list.filters.search_query.clone()
        };
        let category = list.filters.category.as_deref().unwrap_or("all");
        let line = format!(" Search: {}   Filter: {}", query, category);

        let style = if list.search_editing || list.filters.is_active() {
            theme.text()
        } else {
            theme.muted()
        };
        (line, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_client::{Amenity, Record};
    use pretty_assertions::assert_eq;

    fn pagination(page: u32, total_count: u64) -> Pagination {
        Pagination {
            page,
            page_size: 10,
            total_count,
        }
    }

    #[test]
    fn test_next_disabled_on_last_page() {
        let vm = PaginationViewModel::from_pagination(&pagination(3, 23), "p".into(), "n".into());
        assert_eq!(vm.label, "Page 3 of 3 · 23 total");
        assert!(vm.prev_enabled);
        assert!(!vm.next_enabled);
    }

    #[test]
    fn test_prev_disabled_on_first_page() {
        let vm = PaginationViewModel::from_pagination(&pagination(1, 23), "p".into(), "n".into());
        assert!(!vm.prev_enabled);
        assert!(vm.next_enabled);
    }

    #[test]
    fn test_rows_follow_filters() {
        let mut state = AppState::default();
        state.list.resource = admin_client::Resource::Amenities;
        state.list.raw_items = ["high_speed_wifi", "parking"]
            .iter()
            .enumerate()
            .map(|(i, key)| {
                Record::Amenity(Amenity {
                    id: i.to_string(),
                    key: key.to_string(),
                    label: String::new(),
                    icon: None,
                })
            })
            .collect();
        state.list.filters.search_query = "wifi".to_string();

        let vm = ListPageViewModel::from_state(&state);
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0][0], "high_speed_wifi");
        assert_eq!(vm.selected_index, Some(0));

        state.list.filters.search_query = "sauna".to_string();
        let vm = ListPageViewModel::from_state(&state);
        assert_eq!(
            vm.empty_message.as_deref(),
            Some("No items match the current filters")
        );
        assert_eq!(vm.selected_index, None);
    }

    #[test]
    fn test_empty_page_has_no_selection() {
        let mut state = AppState::default();
        state.list.cursor = 4;
        state.list.loading = LoadingState::Loading;

        let vm = ListPageViewModel::from_state(&state);
        assert!(vm.rows.is_empty());
        assert_eq!(vm.selected_index, None);
        assert_eq!(vm.empty_message.as_deref(), Some("Loading..."));
    }

    #[test]
    fn test_error_shows_retry_hint() {
        let mut state = AppState::default();
        state.list.loading = LoadingState::Error("Could not reach the server.".to_string());
        let vm = ListPageViewModel::from_state(&state);
        assert_eq!(vm.status_text, "Could not reach the server. [r to retry]");
    }
}
