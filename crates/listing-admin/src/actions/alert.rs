//! Alert actions
//!
//! Actions of the gated-action controller and its confirmation dialog.

use crate::domain_models::MutationIntent;
use crate::state::{AlertId, Severity};

/// Dialog control activated by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogControl {
    /// The confirm (or OK) button
    Confirm,
    /// The cancel button, Esc or backdrop dismissal
    Cancel,
}

/// Actions for the alert controller
#[derive(Debug, Clone, PartialEq)]
pub enum AlertAction {
    /// Open an alert, replacing any alert that is already open
    Show {
        title: String,
        message: String,
        severity: Severity,
        /// Deferred mutation, executed only on explicit confirmation
        intent: Option<MutationIntent>,
    },
    /// A dialog control was activated on whatever alert is on screen
    Activate(DialogControl),
    /// Run the deferred intent of this alert, if any (handled by middleware)
    Confirm(AlertId),
    /// Close this alert without running anything
    Close(AlertId),
}

impl AlertAction {
    /// The alert a `Confirm`/`Close` was issued for
    ///
    /// API results can open a new alert while one of these is queued; the
    /// action must then leave the new alert alone.
    pub fn target(&self) -> Option<AlertId> {
        match self {
            Self::Confirm(id) | Self::Close(id) => Some(*id),
            Self::Show { .. } | Self::Activate(_) => None,
        }
    }

    /// A warning that needs explicit confirmation before `intent` runs
    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        intent: MutationIntent,
    ) -> Self {
        Self::Show {
            title: title.into(),
            message: message.into(),
            severity: Severity::Warning,
            intent: Some(intent),
        }
    }

    /// An acknowledge-only success alert
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::notify(Severity::Success, title, message)
    }

    /// An acknowledge-only error alert
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::notify(Severity::Error, title, message)
    }

    /// An acknowledge-only informational alert
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::notify(Severity::Info, title, message)
    }

    fn notify(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Show {
            title: title.into(),
            message: message.into(),
            severity,
            intent: None,
        }
    }
}
