pub mod amenity_form_view_model;
pub mod confirmation_dialog_view_model;
pub mod list_page_view_model;
pub mod resource_tabs_view_model;
pub mod status_bar;

pub use amenity_form_view_model::{AmenityFormViewModel, FormFieldViewModel};
pub use confirmation_dialog_view_model::{ConfirmationDialogProps, DialogEvent};
pub use list_page_view_model::{ListPageViewModel, PaginationViewModel};
pub use resource_tabs_view_model::ResourceTabsViewModel;
pub use status_bar::StatusBarViewModel;
