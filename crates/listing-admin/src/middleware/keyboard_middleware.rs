//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! ## Layer 1: Priority Keys
//! Ctrl+C and Esc work regardless of context.
//!
//! ## Layer 2: Capabilities
//! Views with TEXT_INPUT capability (the search box, the amenity form) get
//! character keys as text input rather than as keybindings.
//!
//! ## Layer 3: Keymap + Gating
//! Look up keys in the keymap, then check if the active view accepts the action.
//! A key bound to several commands (`n` is next page and cancel) resolves to
//! the first one the active view accepts.

use crate::actions::{Action, GlobalAction, NavigationAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles keyboard input using a three-layer approach
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Handle a key event using the three-layer approach
    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let view = state.view_stack.last();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return false;
        }

        // Esc: the view decides what Escape means while typing (end search, close form)
        if key.code == KeyCode::Esc {
            if capabilities.accepts_text_input() {
                log::debug!("Layer 1: Esc - routing to TextInput::Escape");
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                log::debug!("Layer 1: Esc - dispatching Close");
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return false;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Capability-based routing
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            if let KeyCode::Char(c) = key.code {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Char(c)));
                    return false;
                }

                // Ctrl+U - Unix line kill
                if key.modifiers.contains(KeyModifiers::CONTROL) && c == 'u' {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                    return false;
                }
            }

            match key.code {
                KeyCode::Backspace => {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Backspace));
                    return false;
                }
                KeyCode::Enter => {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Confirm));
                    return false;
                }
                _ => {}
            }

            // Field navigation in forms
            if capabilities.supports_item_navigation() {
                let nav = match key.code {
                    KeyCode::Down => Some(NavigationAction::Next),
                    KeyCode::Up | KeyCode::BackTab => Some(NavigationAction::Previous),
                    KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                        Some(NavigationAction::Previous)
                    }
                    KeyCode::Tab => Some(NavigationAction::Next),
                    _ => None,
                };
                if let Some(nav) = nav {
                    dispatcher.dispatch(Action::Navigate(nav));
                    return false;
                }
            }

            // Anything else falls through to the keymap (arrows, Tab on the list)
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Keymap lookup + Gating
        // ═══════════════════════════════════════════════════════════════════

        for cmd_id in state.keymap.match_key(&key) {
            let action = cmd_id.to_action();

            if let Some(view) = view {
                if view.accepts_action(&action) {
                    log::debug!("Layer 3: Command {:?} accepted by view", cmd_id);
                    dispatcher.dispatch(action);
                    return false;
                }
                log::debug!(
                    "Layer 3: Command {:?} rejected by view {:?}, trying next",
                    cmd_id,
                    view.view_id()
                );
            } else {
                dispatcher.dispatch(action);
                return false;
            }
        }

        // Unhandled keys are consumed
        false
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            return self.handle_key(*key, state, dispatcher);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{AlertAction, AmenityFormAction, DialogControl, ListAction};
    use crate::domain_models::MutationIntent;
    use crate::reducers::{alert_reducer::reduce_alert, amenity_form_reducer::reduce_amenity_form};
    use admin_client::Resource;
    use std::sync::mpsc;

    fn press(state: &AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<Action> {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();
        let key = KeyEvent::new(code, modifiers);
        assert!(!middleware.handle(
            &Action::Global(GlobalAction::KeyPressed(key)),
            state,
            &dispatcher
        ));
        rx.try_iter().collect()
    }

    fn char_key(state: &AppState, c: char) -> Vec<Action> {
        press(state, KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn with_confirm_dialog() -> AppState {
        reduce_alert(
            AppState::default(),
            &AlertAction::confirm(
                "Delete Amenity",
                "Delete Parking?",
                MutationIntent::Delete {
                    resource: Resource::Amenities,
                    id: "a1".to_string(),
                    label: "Parking".to_string(),
                },
            ),
        )
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let state = reduce_amenity_form(AppState::default(), &AmenityFormAction::OpenCreate);
        let actions = press(&state, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Quit)]
        ));
    }

    #[test]
    fn test_n_pages_on_list_and_cancels_in_dialog() {
        let actions = char_key(&AppState::default(), 'n');
        assert!(matches!(
            actions.as_slice(),
            [Action::List(ListAction::NextPage)]
        ));

        let actions = char_key(&with_confirm_dialog(), 'n');
        assert!(matches!(
            actions.as_slice(),
            [Action::Alert(AlertAction::Activate(DialogControl::Cancel))]
        ));
    }

    #[test]
    fn test_dialog_gates_list_commands() {
        // `d` on the list would request a delete; behind a dialog it does nothing
        assert!(char_key(&with_confirm_dialog(), 'd').is_empty());
    }

    #[test]
    fn test_enter_confirms_dialog() {
        let actions = press(&with_confirm_dialog(), KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Alert(AlertAction::Activate(DialogControl::Confirm))]
        ));
    }

    #[test]
    fn test_form_takes_characters_as_text() {
        let state = reduce_amenity_form(AppState::default(), &AmenityFormAction::OpenCreate);
        let actions = char_key(&state, 'q');
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::Char('q'))]
        ));

        let actions = press(&state, KeyCode::Tab, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Navigate(NavigationAction::Next)]
        ));
    }

    #[test]
    fn test_esc_closes_without_text_input() {
        let actions = press(&with_confirm_dialog(), KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Close)]
        ));
    }

    #[test]
    fn test_esc_while_searching_is_text_input() {
        let mut state = AppState::default();
        state.list.search_editing = true;
        let actions = press(&state, KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::Escape)]
        ));
    }

    #[test]
    fn test_tab_switches_resource_on_list() {
        let actions = press(&AppState::default(), KeyCode::Tab, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::List(ListAction::ResourceNext)]
        ));
    }
}
