//! Amenity Form Middleware
//!
//! Opening the form is limited to the amenities page. Submitting validates
//! locally first; an invalid form is reported without any request, a valid
//! one becomes a gated create/update intent.

use admin_client::Resource;

use crate::actions::{Action, AlertAction, AmenityFormAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{ListEntity, MutationIntent};
use crate::middleware::Middleware;
use crate::state::{AppState, FormMode};

pub struct AmenityFormMiddleware;

impl AmenityFormMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn submit(state: &AppState, dispatcher: &Dispatcher) {
        let Some(form) = &state.amenity_form else {
            log::debug!("Submit without an open form, ignoring");
            return;
        };

        let input = form.to_input();
        if let Err(e) = input.validate() {
            log::debug!("Amenity form invalid: {}", e);
            dispatcher.dispatch(Action::Alert(AlertAction::error(
                "Invalid amenity",
                e.user_message(),
            )));
            return;
        }

        let intent = match &form.mode {
            FormMode::Create => MutationIntent::CreateAmenity(input),
            FormMode::Edit { id } => MutationIntent::UpdateAmenity {
                id: id.clone(),
                input,
            },
        };
        dispatcher.dispatch(Action::Alert(AlertAction::confirm(
            intent.confirm_title(),
            intent.confirm_message(&state.config),
            intent,
        )));
    }
}

impl Default for AmenityFormMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for AmenityFormMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::AmenityForm(form_action) = action else {
            return true;
        };

        match form_action {
            AmenityFormAction::OpenCreate | AmenityFormAction::EditSelected
                if state.list.resource != Resource::Amenities =>
            {
                log::warn!("Amenity form is not available on {:?}", state.list.resource);
                false
            }

            AmenityFormAction::EditSelected => {
                match state.list.selected() {
                    Some(record) => {
                        log::debug!("Editing {}", record.display_name());
                        dispatcher.dispatch(Action::AmenityForm(AmenityFormAction::OpenEdit(
                            record.id().to_string(),
                        )));
                    }
                    None => log::debug!("No amenity selected"),
                }
                false
            }

            AmenityFormAction::Submit => {
                Self::submit(state, dispatcher);
                false
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::amenity_form_reducer::reduce_amenity_form;
    use crate::state::Severity;
    use admin_client::{Amenity, AmenityInput, Record};
    use pretty_assertions::assert_eq;
    use std::sync::mpsc;

    fn run(state: &AppState, action: AmenityFormAction) -> (bool, Vec<Action>) {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let passed =
            AmenityFormMiddleware::new().handle(&Action::AmenityForm(action), state, &dispatcher);
        (passed, rx.try_iter().collect())
    }

    fn amenities_page() -> AppState {
        let mut state = AppState::default();
        state.list.resource = Resource::Amenities;
        state.list.raw_items = vec![Record::Amenity(Amenity {
            id: "a1".to_string(),
            key: "parking".to_string(),
            label: "Parking".to_string(),
            icon: None,
        })];
        state
    }

    fn open_form(mode: FormMode, input: AmenityInput) -> AppState {
        reduce_amenity_form(amenities_page(), &AmenityFormAction::Opened { mode, input })
    }

    #[test]
    fn test_form_only_opens_on_amenities() {
        let (passed, _) = run(&AppState::default(), AmenityFormAction::OpenCreate);
        assert!(!passed);

        let (passed, _) = run(&amenities_page(), AmenityFormAction::OpenCreate);
        assert!(passed);
    }

    #[test]
    fn test_edit_selected_looks_up_by_id() {
        let (_, actions) = run(&amenities_page(), AmenityFormAction::EditSelected);
        match actions.as_slice() {
            [Action::AmenityForm(AmenityFormAction::OpenEdit(id))] => assert_eq!(id, "a1"),
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_form_reports_error_without_request() {
        let state = open_form(FormMode::Create, AmenityInput::default());
        let (passed, actions) = run(&state, AmenityFormAction::Submit);
        assert!(!passed);
        match actions.as_slice() {
            [Action::Alert(AlertAction::Show {
                severity,
                message,
                intent: None,
                ..
            })] => {
                assert_eq!(*severity, Severity::Error);
                assert_eq!(message, "Amenity key is required.");
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_valid_edit_asks_for_confirmation() {
        let input = AmenityInput {
            key: "parking".to_string(),
            label: "Covered parking".to_string(),
            icon: None,
        };
        let state = open_form(
            FormMode::Edit {
                id: "a1".to_string(),
            },
            input.clone(),
        );
        let (_, actions) = run(&state, AmenityFormAction::Submit);
        match actions.as_slice() {
            [Action::Alert(AlertAction::Show {
                severity,
                intent: Some(intent),
                ..
            })] => {
                assert_eq!(*severity, Severity::Warning);
                assert_eq!(
                    *intent,
                    MutationIntent::UpdateAmenity {
                        id: "a1".to_string(),
                        input,
                    }
                );
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }
}
