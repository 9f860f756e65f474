//! Status line reducer
//!
//! Derives history entries from domain actions; nothing dispatches to the
//! status line directly.

use crate::actions::{Action, AlertAction, MutationAction};
use crate::state::{StatusBarState, StatusKind};

pub fn reduce_status_bar(mut state: StatusBarState, action: &Action) -> StatusBarState {
    match action {
        Action::Alert(AlertAction::Show {
            title,
            message,
            severity,
            ..
        }) => {
            state.record((*severity).into(), format!("{}: {}", title, message), "Alert");
        }
        Action::Mutation(MutationAction::Execute(intent)) => {
            state.record(
                StatusKind::Running,
                format!("{} {}...", intent.verb(), intent.target()),
                "Mutation",
            );
        }
        _ => {}
    }
    state
}
