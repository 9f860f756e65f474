//! Client-side list filters
//!
//! Filters only ever narrow the currently loaded page; they never trigger a
//! request and do not span pages.

use admin_client::Record;

use super::entity::ListEntity;

/// Search text plus an optional category/status value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    pub search_query: String,
    pub category: Option<String>,
}

impl ListFilters {
    /// Whether any filter narrows the list
    pub fn is_active(&self) -> bool {
        !self.search_query.trim().is_empty() || self.category.is_some()
    }

    /// Check if a record passes both filters
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_search(record) && self.matches_category(record)
    }

    fn matches_search(&self, record: &Record) -> bool {
        let query = self.search_query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    fn matches_category(&self, record: &Record) -> bool {
        match &self.category {
            None => true,
            Some(wanted) => record
                .category()
                .is_some_and(|value| value.eq_ignore_ascii_case(wanted)),
        }
    }

    /// Cycle the category through `options`: none, first, ..., last, none
    pub fn cycle_category(&mut self, options: &[&str]) {
        let position = self
            .category
            .as_deref()
            .and_then(|current| options.iter().position(|o| *o == current));

        self.category = match position {
            None if self.category.is_none() => options.first().map(|o| o.to_string()),
            None => None,
            Some(i) => options.get(i + 1).map(|o| o.to_string()),
        };
    }
}

/// Records passing `filters`, in server order
pub fn apply_filters(items: &[Record], filters: &ListFilters) -> Vec<Record> {
    items
        .iter()
        .filter(|record| filters.matches(record))
        .cloned()
        .collect()
}
