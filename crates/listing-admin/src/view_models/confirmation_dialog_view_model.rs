//! Confirmation dialog props
//!
//! The dialog is presentational: it is fully described by these props and
//! only reports which event a control activation produces. The caller decides
//! what to do with the event; confirming does not close the dialog by itself.

use crate::actions::DialogControl;
use crate::state::{AlertId, AppState, GatedActionController, Severity};

/// Event reported by the dialog for one control activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    /// The user explicitly confirmed a gated action
    Confirm(AlertId),
    /// Cancel, dismissal, or acknowledgement of an informational alert
    Close(AlertId),
}

/// Display data and event semantics of the confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationDialogProps {
    pub is_open: bool,
    /// Alert the props were built from; `None` while closed
    pub alert_id: Option<AlertId>,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub require_explicit_confirm: bool,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmationDialogProps {
    /// Props for the alert currently held by the controller
    pub fn from_controller(controller: &GatedActionController) -> Self {
        match controller.current() {
            Some(alert) => {
                let require_explicit_confirm =
                    alert.severity.requires_explicit_confirm() && alert.intent.is_some();
                let confirm_label = if require_explicit_confirm {
                    "Confirm"
                } else {
                    "OK"
                };
                Self {
                    is_open: true,
                    alert_id: Some(alert.id),
                    title: alert.title.clone(),
                    message: alert.message.clone(),
                    severity: alert.severity,
                    require_explicit_confirm,
                    confirm_label: confirm_label.to_string(),
                    cancel_label: "Cancel".to_string(),
                }
            }
            None => Self::closed(),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::from_controller(&state.alert)
    }

    fn closed() -> Self {
        Self {
            is_open: false,
            alert_id: None,
            title: String::new(),
            message: String::new(),
            severity: Severity::Info,
            require_explicit_confirm: false,
            confirm_label: String::new(),
            cancel_label: String::new(),
        }
    }

    /// The event fired when a control is activated
    ///
    /// A closed dialog fires nothing. Confirm only reports `Confirm` when the
    /// dialog gates an action; for acknowledge-only alerts it is the OK button
    /// and reports `Close`.
    pub fn activate(&self, control: DialogControl) -> Option<DialogEvent> {
        let id = self.alert_id?;
        match control {
            DialogControl::Confirm if self.require_explicit_confirm => Some(DialogEvent::Confirm(id)),
            DialogControl::Confirm | DialogControl::Cancel => Some(DialogEvent::Close(id)),
        }
    }
}
