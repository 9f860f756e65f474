//! Alert Reducer
//!
//! Opens and closes the single alert slot and keeps the dialog view on the
//! stack in sync with it.

use crate::actions::AlertAction;
use crate::state::AppState;
use crate::views::{ConfirmationDialogView, ViewId};

/// Reduce alert state, including view stack management
pub fn reduce_alert(mut state: AppState, action: &AlertAction) -> AppState {
    match action {
        AlertAction::Show {
            title,
            message,
            severity,
            intent,
        } => {
            let id = state
                .alert
                .show_alert(title.clone(), message.clone(), *severity, intent.clone());

            // Single slot: a replaced dialog is not stacked underneath
            state.remove_views(ViewId::ConfirmationDialog);
            state.view_stack.push(Box::new(ConfirmationDialogView::new()));

            log::debug!("Showing alert {:?} ({:?}): {}", id, severity, title);
        }

        AlertAction::Close(id) => match state.alert.current().map(|alert| alert.id) {
            Some(open) if open == *id => {
                state.alert.close();
                state.remove_views(ViewId::ConfirmationDialog);
                log::debug!("Alert {:?} closed", id);
            }
            Some(open) => log::debug!("Close for {:?} but {:?} is open, ignoring", id, open),
            None => {}
        },

        // Handled by middleware - should not reach reducer
        AlertAction::Activate(_) | AlertAction::Confirm(_) => {}
    }

    state
}
