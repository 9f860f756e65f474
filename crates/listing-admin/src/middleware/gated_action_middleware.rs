//! Gated Action Middleware
//!
//! Resolves the open alert. Dialog control activations are turned into
//! dialog events through [`ConfirmationDialogProps`], and an explicit confirm
//! runs the deferred intent by dispatching it, then closes the alert.
//!
//! Confirm and close name the alert they were issued for. API results can
//! open a new alert while one of them is still queued; the new alert is
//! never resolved by it.
//!
//! Each alert's intent fires at most once: the id of the last alert whose
//! intent was dispatched is remembered, so a second confirm that arrives
//! before the close has been reduced is ignored.

use crate::actions::{Action, AlertAction, GlobalAction, MutationAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AlertId, AppState};
use crate::view_models::{ConfirmationDialogProps, DialogEvent};
use crate::views::ViewId;

pub struct GatedActionMiddleware {
    last_fired: Option<AlertId>,
}

impl GatedActionMiddleware {
    pub fn new() -> Self {
        Self { last_fired: None }
    }

    fn resolve_confirm(&mut self, id: AlertId, state: &AppState, dispatcher: &Dispatcher) {
        let Some(alert) = state.alert.current() else {
            log::debug!("Confirm for {:?} with no open alert, ignoring", id);
            return;
        };

        if alert.id != id {
            log::debug!("Confirm for {:?} but {:?} is open, ignoring", id, alert.id);
            return;
        }

        if self.last_fired == Some(id) {
            log::debug!("Alert {:?} already confirmed, ignoring", id);
            return;
        }

        if let Some(intent) = &alert.intent {
            log::info!("Confirmed {:?}: {:?}", id, intent);
            self.last_fired = Some(id);
            dispatcher.dispatch(Action::Mutation(MutationAction::Execute(intent.clone())));
        }
        dispatcher.dispatch(Action::Alert(AlertAction::Close(id)));
    }
}

impl Default for GatedActionMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for GatedActionMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            // Resolved right away, against the alert that is on screen now
            Action::Alert(AlertAction::Activate(control)) => {
                let props = ConfirmationDialogProps::from_state(state);
                match props.activate(*control) {
                    Some(DialogEvent::Confirm(id)) => self.resolve_confirm(id, state, dispatcher),
                    Some(DialogEvent::Close(id)) => {
                        dispatcher.dispatch(Action::Alert(AlertAction::Close(id)));
                    }
                    None => log::debug!("Dialog is closed, ignoring {:?}", control),
                }
                false
            }

            Action::Alert(AlertAction::Confirm(id)) => {
                self.resolve_confirm(*id, state, dispatcher);
                false
            }

            // Esc on the dialog dismisses the alert without running its intent
            Action::Global(GlobalAction::Close)
                if state.active_view_id() == Some(ViewId::ConfirmationDialog) =>
            {
                if let Some(alert) = state.alert.current() {
                    dispatcher.dispatch(Action::Alert(AlertAction::Close(alert.id)));
                }
                false
            }

            _ => true,
        }
    }
}
