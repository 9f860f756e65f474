//! Entity List Middleware
//!
//! Drives the list cycle: mounting fetches page 1, pagination turns into
//! fetches, mutation requests are routed through a confirmation alert, and
//! mutation results are reported and followed by a re-fetch on success.

use admin_client::Resource;

use crate::actions::{
    Action, AlertAction, AmenityFormAction, ListAction, MutationAction,
};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{ListEntity, MutationIntent, MutationKind};
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct EntityListMiddleware;

impl EntityListMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Build the intent for a mutation on the item under the cursor
    fn intent_for(kind: MutationKind, state: &AppState) -> Option<MutationIntent> {
        let list = &state.list;
        let Some(record) = list.selected() else {
            log::debug!("No item selected for {:?}", kind);
            return None;
        };
        let label = record.display_name().to_string();
        let id = record.id().to_string();

        match kind {
            MutationKind::Delete => Some(MutationIntent::Delete {
                resource: list.resource,
                id,
                label,
            }),
            MutationKind::MarkSeen if list.resource == Resource::Enquiries => {
                Some(MutationIntent::MarkSeen { id, label })
            }
            MutationKind::MarkSeen => {
                log::warn!("Mark as seen is not available for {:?}", list.resource);
                None
            }
        }
    }

    fn handle_list(&self, action: &ListAction, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let list = &state.list;
        let fetch = |page| dispatcher.dispatch(Action::List(ListAction::FetchPage(page)));

        match action {
            ListAction::ResourceNext => {
                dispatcher.dispatch(Action::List(ListAction::Mount(list.resource.next())));
                false
            }
            ListAction::ResourcePrevious => {
                dispatcher.dispatch(Action::List(ListAction::Mount(list.resource.prev())));
                false
            }

            // A fresh page is fetched as soon as it is mounted
            ListAction::Mount(_) => {
                fetch(1);
                true
            }

            ListAction::NextPage => {
                if list.pagination.has_next() {
                    fetch(list.pagination.page + 1);
                } else {
                    log::debug!("Already on the last page");
                }
                false
            }
            ListAction::PreviousPage => {
                if list.pagination.has_prev() {
                    fetch(list.pagination.page - 1);
                } else {
                    log::debug!("Already on the first page");
                }
                false
            }
            // Not range-checked; the server decides what an out-of-range page means
            ListAction::GoToPage(page) => {
                fetch(*page);
                false
            }
            ListAction::Retry => {
                fetch(list.requested_page);
                false
            }
            ListAction::Refresh => {
                fetch(list.pagination.page);
                false
            }

            ListAction::LoadFailed { mount, error } if *mount == list.mount => {
                dispatcher.dispatch(Action::Alert(AlertAction::error(
                    format!("Could not load {}", list.resource.label().to_lowercase()),
                    error.clone(),
                )));
                true
            }

            ListAction::RequestMutation(kind) => {
                if let Some(intent) = Self::intent_for(*kind, state) {
                    let message = intent.confirm_message(&state.config);
                    dispatcher.dispatch(Action::Alert(AlertAction::confirm(
                        intent.confirm_title(),
                        message,
                        intent,
                    )));
                }
                false
            }

            _ => true,
        }
    }

    fn handle_mutation(&self, action: &MutationAction, state: &AppState, dispatcher: &Dispatcher) {
        match action {
            MutationAction::Execute(intent) => {
                log::info!("{} {}", intent.verb(), intent.target());
            }

            MutationAction::Succeeded { intent, message } => {
                log::info!("{} {} succeeded", intent.verb(), intent.target());
                if intent.is_form_submission() && state.amenity_form.is_some() {
                    dispatcher.dispatch(Action::AmenityForm(AmenityFormAction::Close));
                }
                let message = if message.trim().is_empty() {
                    intent.default_success_message()
                } else {
                    message.clone()
                };
                dispatcher.dispatch(Action::Alert(AlertAction::success(
                    intent.confirm_title(),
                    message,
                )));
                // Converge with the server instead of patching the list locally
                dispatcher.dispatch(Action::List(ListAction::Refresh));
            }

            MutationAction::Failed { intent, message } => {
                log::warn!("{} {} failed: {}", intent.verb(), intent.target(), message);
                dispatcher.dispatch(Action::Alert(AlertAction::error(
                    format!("{} failed", intent.confirm_title()),
                    message.clone(),
                )));
            }
        }
    }
}

impl Default for EntityListMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for EntityListMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::List(list_action) => self.handle_list(list_action, state, dispatcher),
            Action::Mutation(mutation_action) => {
                self.handle_mutation(mutation_action, state, dispatcher);
                true
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Severity;
    use admin_client::{Enquiry, Record, Requirement};
    use pretty_assertions::assert_eq;
    use std::sync::mpsc;

    fn run(state: &AppState, action: Action) -> (bool, Vec<Action>) {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let passed = EntityListMiddleware::new().handle(&action, state, &dispatcher);
        (passed, rx.try_iter().collect())
    }

    fn requirement(id: &str, name: &str) -> Record {
        Record::Requirement(Requirement {
            id: id.to_string(),
            name: name.to_string(),
            email: String::new(),
            city: String::new(),
            seats: 4,
            status: "open".to_string(),
        })
    }

    fn paged_state(page: u32, total: u64) -> AppState {
        let mut state = AppState::default();
        state.list.pagination.page = page;
        state.list.pagination.total_count = total;
        state
    }

    fn fetched_page(actions: &[Action]) -> Option<u32> {
        actions.iter().find_map(|a| match a {
            Action::List(ListAction::FetchPage(p)) => Some(*p),
            _ => None,
        })
    }

    #[test]
    fn test_next_page_is_blocked_on_last_page() {
        let (passed, actions) = run(&paged_state(3, 23), Action::List(ListAction::NextPage));
        assert!(!passed);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_go_to_page_is_not_range_checked() {
        let (_, actions) = run(&paged_state(3, 23), Action::List(ListAction::GoToPage(4)));
        assert_eq!(fetched_page(&actions), Some(4));
    }

    #[test]
    fn test_previous_page_fetches() {
        let (_, actions) = run(&paged_state(2, 23), Action::List(ListAction::PreviousPage));
        assert_eq!(fetched_page(&actions), Some(1));
    }

    #[test]
    fn test_retry_refetches_requested_page() {
        let mut state = paged_state(1, 23);
        state.list.requested_page = 2;
        let (_, actions) = run(&state, Action::List(ListAction::Retry));
        assert_eq!(fetched_page(&actions), Some(2));
    }

    #[test]
    fn test_tab_switch_mounts_next_resource() {
        let (passed, actions) = run(&AppState::default(), Action::List(ListAction::ResourceNext));
        assert!(!passed);
        assert!(matches!(
            actions.as_slice(),
            [Action::List(ListAction::Mount(Resource::Amenities))]
        ));
    }

    #[test]
    fn test_delete_request_opens_warning() {
        let mut state = AppState::default();
        state.list.resource = Resource::Requirements;
        state.list.raw_items = vec![requirement("7", "Acme")];

        let (passed, actions) = run(
            &state,
            Action::List(ListAction::RequestMutation(MutationKind::Delete)),
        );
        assert!(!passed);
        match actions.as_slice() {
            [Action::Alert(AlertAction::Show {
                title,
                severity,
                intent: Some(intent),
                ..
            })] => {
                assert_eq!(title, "Delete Requirement");
                assert_eq!(*severity, Severity::Warning);
                assert_eq!(
                    *intent,
                    MutationIntent::Delete {
                        resource: Resource::Requirements,
                        id: "7".to_string(),
                        label: "Acme".to_string(),
                    }
                );
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_mark_seen_only_on_enquiries() {
        let mut state = AppState::default();
        state.list.resource = Resource::Requirements;
        state.list.raw_items = vec![requirement("7", "Acme")];
        let (_, actions) = run(
            &state,
            Action::List(ListAction::RequestMutation(MutationKind::MarkSeen)),
        );
        assert!(actions.is_empty());

        state.list.resource = Resource::Enquiries;
        state.list.raw_items = vec![Record::Enquiry(Enquiry {
            id: "e1".to_string(),
            name: "Ada".to_string(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            property_name: String::new(),
            seen: false,
        })];
        let (_, actions) = run(
            &state,
            Action::List(ListAction::RequestMutation(MutationKind::MarkSeen)),
        );
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn test_request_without_selection_does_nothing() {
        let (_, actions) = run(
            &AppState::default(),
            Action::List(ListAction::RequestMutation(MutationKind::Delete)),
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn test_success_alerts_then_refreshes() {
        let intent = MutationIntent::Delete {
            resource: Resource::Requirements,
            id: "7".to_string(),
            label: "Acme".to_string(),
        };
        let (passed, actions) = run(
            &AppState::default(),
            Action::Mutation(MutationAction::Succeeded {
                intent,
                message: String::new(),
            }),
        );
        assert!(passed);
        match actions.as_slice() {
            [Action::Alert(AlertAction::Show {
                severity, message, ..
            }), Action::List(ListAction::Refresh)] => {
                assert_eq!(*severity, Severity::Success);
                assert_eq!(message, "Requirement deleted.");
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_failure_alerts_without_refresh() {
        let (_, actions) = run(
            &AppState::default(),
            Action::Mutation(MutationAction::Failed {
                intent: MutationIntent::MarkSeen {
                    id: "e1".to_string(),
                    label: "Ada".to_string(),
                },
                message: "already seen".to_string(),
            }),
        );
        match actions.as_slice() {
            [Action::Alert(AlertAction::Show {
                severity, message, ..
            })] => {
                assert_eq!(*severity, Severity::Error);
                assert_eq!(message, "already seen");
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_stale_load_failure_is_not_reported() {
        let state = AppState::default();
        let stale = crate::state::MountId(state.list.mount.0 + 7);
        let (_, actions) = run(
            &state,
            Action::List(ListAction::LoadFailed {
                mount: stale,
                error: "boom".to_string(),
            }),
        );
        assert!(actions.is_empty());
    }
}
