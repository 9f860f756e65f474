//! Gated action controller state
//!
//! Owns the single alert slot of the console. Opening an alert while one is
//! open replaces it; there is no queue.

use crate::domain_models::MutationIntent;

/// Alert severity; drives dialog styling and button semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Warnings are two-button confirm/cancel dialogs, the rest only acknowledge
    pub fn requires_explicit_confirm(&self) -> bool {
        matches!(self, Self::Warning)
    }
}

/// Identity of one dialog lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(pub u64);

/// The open alert
#[derive(Debug, Clone, PartialEq)]
pub struct AlertContext {
    pub id: AlertId,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    /// Deferred mutation; `None` means acknowledge only
    pub intent: Option<MutationIntent>,
}

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    Idle,
    AwaitingDecision,
}

/// Single-slot alert controller
#[derive(Debug, Clone, Default)]
pub struct GatedActionController {
    current: Option<AlertContext>,
    next_id: u64,
}

impl GatedActionController {
    /// Open an alert, replacing the current one (last write wins)
    pub fn show_alert(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        intent: Option<MutationIntent>,
    ) -> AlertId {
        self.next_id += 1;
        let id = AlertId(self.next_id);
        if let Some(replaced) = self.current.take() {
            log::debug!("Alert {:?} replaced by {:?}", replaced.id, id);
        }
        self.current = Some(AlertContext {
            id,
            title: title.into(),
            message: message.into(),
            severity,
            intent,
        });
        id
    }

    /// Return to idle, dropping any deferred intent. Closing while idle is a no-op.
    pub fn close(&mut self) {
        self.current = None;
    }

    /// The open alert, if any
    pub fn current(&self) -> Option<&AlertContext> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn phase(&self) -> ControllerPhase {
        if self.current.is_some() {
            ControllerPhase::AwaitingDecision
        } else {
            ControllerPhase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_client::Resource;
    use pretty_assertions::assert_eq;

    fn delete_intent() -> MutationIntent {
        MutationIntent::Delete {
            resource: Resource::Amenities,
            id: "a1".to_string(),
            label: "Parking".to_string(),
        }
    }

    #[test]
    fn test_starts_idle() {
        let controller = GatedActionController::default();
        assert_eq!(controller.phase(), ControllerPhase::Idle);
        assert!(controller.current().is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let mut controller = GatedActionController::default();
        controller.show_alert("First", "one", Severity::Warning, Some(delete_intent()));
        let second = controller.show_alert("Second", "two", Severity::Info, None);

        let current = controller.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.title, "Second");
        assert_eq!(current.intent, None);
        assert_eq!(controller.phase(), ControllerPhase::AwaitingDecision);
    }

    #[test]
    fn test_each_alert_gets_a_fresh_id() {
        let mut controller = GatedActionController::default();
        let a = controller.show_alert("A", "", Severity::Info, None);
        controller.close();
        let b = controller.show_alert("B", "", Severity::Info, None);
        assert!(b > a);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut controller = GatedActionController::default();
        controller.close();
        controller.close();
        assert_eq!(controller.phase(), ControllerPhase::Idle);

        controller.show_alert("Delete", "sure?", Severity::Warning, Some(delete_intent()));
        controller.close();
        controller.close();
        assert!(!controller.is_open());
    }

    #[test]
    fn test_only_warnings_require_explicit_confirm() {
        assert!(Severity::Warning.requires_explicit_confirm());
        assert!(!Severity::Success.requires_explicit_confirm());
        assert!(!Severity::Error.requires_explicit_confirm());
        assert!(!Severity::Info.requires_explicit_confirm());
    }
}
