//! Reducers - pure functions producing new state from state + action

pub mod alert_reducer;
pub mod amenity_form_reducer;
pub mod app_reducer;
pub mod list_reducer;
pub mod mutation_reducer;
pub mod status_bar_reducer;
