//! Command identifiers
//!
//! All commands as an enum for type-safe command references that can be
//! serialized/deserialized in keybinding configuration.

use serde::{Deserialize, Serialize};

use crate::actions::{
    Action, AlertAction, AmenityFormAction, DialogControl, GlobalAction, ListAction,
    NavigationAction,
};
use crate::domain_models::MutationKind;

/// Unique identifier for each command in the application.
///
/// The enum is serialized as snake_case (e.g., `PageNext` -> `"page_next"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Navigation ===
    NavigateNext,
    NavigatePrevious,

    // === Resource tabs ===
    ResourceNext,
    ResourcePrevious,

    // === Pagination ===
    PageNext,
    PagePrevious,
    /// Re-issue the last requested page
    ListRetry,

    // === Filters ===
    SearchStart,
    FilterCycle,
    FiltersClear,

    // === Gated mutations ===
    EntityDelete,
    EnquiryMarkSeen,
    AmenityCreate,
    AmenityEdit,

    // === Dialog ===
    DialogConfirm,
    DialogCancel,

    // === General ===
    /// Close the current view/panel
    GlobalClose,
    /// Quit the application
    GlobalQuit,
}

impl CommandId {
    /// Convert this command ID to an Action
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),

            Self::ResourceNext => Action::List(ListAction::ResourceNext),
            Self::ResourcePrevious => Action::List(ListAction::ResourcePrevious),

            Self::PageNext => Action::List(ListAction::NextPage),
            Self::PagePrevious => Action::List(ListAction::PreviousPage),
            Self::ListRetry => Action::List(ListAction::Retry),

            Self::SearchStart => Action::List(ListAction::StartSearch),
            Self::FilterCycle => Action::List(ListAction::CycleFilter),
            Self::FiltersClear => Action::List(ListAction::ClearFilters),

            Self::EntityDelete => Action::List(ListAction::RequestMutation(MutationKind::Delete)),
            Self::EnquiryMarkSeen => {
                Action::List(ListAction::RequestMutation(MutationKind::MarkSeen))
            }
            Self::AmenityCreate => Action::AmenityForm(AmenityFormAction::OpenCreate),
            Self::AmenityEdit => Action::AmenityForm(AmenityFormAction::EditSelected),

            Self::DialogConfirm => Action::Alert(AlertAction::Activate(DialogControl::Confirm)),
            Self::DialogCancel => Action::Alert(AlertAction::Activate(DialogControl::Cancel)),

            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }
}
