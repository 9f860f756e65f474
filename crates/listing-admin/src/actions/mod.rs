//! Actions module
//!
//! Actions are organized by:
//! - Generic actions (Navigation, TextInput) that the active view translates
//! - Global actions that affect the entire application
//! - Screen-specific actions already targeted at one reducer

// Shared action types
pub mod global;
pub mod navigation;
pub mod text_input;

// Screen-specific action types
pub mod alert;
pub mod amenity_form;
pub mod list;
pub mod mutation;

pub use alert::{AlertAction, DialogControl};
pub use amenity_form::AmenityFormAction;
pub use global::GlobalAction;
pub use list::ListAction;
pub use mutation::MutationAction;
pub use navigation::NavigationAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),

    // Global actions (no translation needed)
    /// Global application actions
    Global(GlobalAction),

    // Screen-specific actions (already targeted)
    /// Entity list page actions (fetch, filter, paginate)
    List(ListAction),
    /// Alert / confirmation dialog actions
    Alert(AlertAction),
    /// Gated mutation lifecycle
    Mutation(MutationAction),
    /// Amenity create/update form actions
    AmenityForm(AmenityFormAction),
}
