//! View Translation Middleware
//!
//! `Navigate` and `TextInput` carry no target. The view on top of the stack
//! turns them into its own actions: j/k move the list cursor or the form
//! focus, typed characters go to the search box or the focused form field.
//! Untranslated generic actions are dropped here so they never reach a
//! reducer.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct ViewTranslationMiddleware;

impl ViewTranslationMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn translate(action: &Action, state: &AppState) -> Option<Action> {
        let view = state.view_stack.last()?;
        match action {
            Action::Navigate(nav) => view.translate_navigation(*nav),
            Action::TextInput(input) => view.translate_text_input(input.clone()),
            _ => None,
        }
    }
}

impl Default for ViewTranslationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for ViewTranslationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if !matches!(action, Action::Navigate(_) | Action::TextInput(_)) {
            return true;
        }

        match Self::translate(action, state) {
            Some(translated) => {
                log::debug!("{:?} -> {:?}", action, translated);
                dispatcher.dispatch(translated);
            }
            None => log::debug!("{:?} ignored by {:?}", action, state.active_view_id()),
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{
        AlertAction, AmenityFormAction, ListAction, NavigationAction, TextInputAction,
    };
    use crate::reducers::{alert_reducer::reduce_alert, amenity_form_reducer::reduce_amenity_form};
    use std::sync::mpsc;

    fn run(state: &AppState, action: Action) -> Vec<Action> {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        assert!(!ViewTranslationMiddleware::new().handle(&action, state, &dispatcher));
        rx.try_iter().collect()
    }

    #[test]
    fn test_list_page_moves_cursor() {
        let actions = run(&AppState::default(), Action::Navigate(NavigationAction::Next));
        assert!(matches!(
            actions.as_slice(),
            [Action::List(ListAction::CursorNext)]
        ));
    }

    #[test]
    fn test_form_moves_focus() {
        let state = reduce_amenity_form(AppState::default(), &AmenityFormAction::OpenCreate);
        let actions = run(&state, Action::Navigate(NavigationAction::Previous));
        assert!(matches!(
            actions.as_slice(),
            [Action::AmenityForm(AmenityFormAction::PreviousField)]
        ));
    }

    #[test]
    fn test_search_box_receives_chars() {
        let mut state = AppState::default();
        state.list.search_editing = true;
        let actions = run(&state, Action::TextInput(TextInputAction::Char('w')));
        assert!(matches!(
            actions.as_slice(),
            [Action::List(ListAction::SearchChar('w'))]
        ));
    }

    #[test]
    fn test_enter_submits_the_form() {
        let state = reduce_amenity_form(AppState::default(), &AmenityFormAction::OpenCreate);
        let actions = run(&state, Action::TextInput(TextInputAction::Confirm));
        assert!(matches!(
            actions.as_slice(),
            [Action::AmenityForm(AmenityFormAction::Submit)]
        ));
    }

    #[test]
    fn test_dialog_swallows_generic_actions() {
        let state = reduce_alert(AppState::default(), &AlertAction::info("Heads up", "Saved"));
        assert!(run(&state, Action::Navigate(NavigationAction::Next)).is_empty());
    }

    #[test]
    fn test_other_actions_pass_through() {
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        assert!(ViewTranslationMiddleware::new().handle(
            &Action::List(ListAction::NextPage),
            &AppState::default(),
            &dispatcher
        ));
    }
}
