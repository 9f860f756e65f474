//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod alert;
mod amenity_form;
mod app;
mod list_page;
mod mutation;
mod status_bar;

pub use alert::{AlertContext, AlertId, ControllerPhase, GatedActionController, Severity};
pub use amenity_form::{AmenityFormState, FormField, FormMode};
pub use app::AppState;
pub use list_page::{EntityListState, LoadingState, MountId, Pagination};
pub use mutation::MutationPhase;
pub use status_bar::{StatusBarState, StatusEntry, StatusKind, HISTORY_LIMIT};
