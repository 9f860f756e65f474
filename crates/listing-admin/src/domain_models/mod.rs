//! Domain models
//!
//! Core domain types used throughout the application.
//! These are pure domain concepts, separate from UI state.

pub mod entity;
pub mod list_filter;
pub mod mutation_intent;

pub use entity::{column_headers, filter_options, ListEntity};
pub use list_filter::{apply_filters, ListFilters};
pub use mutation_intent::{MutationIntent, MutationKind};
