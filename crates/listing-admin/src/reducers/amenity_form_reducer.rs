//! Amenity form reducer

use admin_client::AmenityInput;

use crate::actions::AmenityFormAction;
use crate::state::{AmenityFormState, AppState, FormMode};
use crate::views::{AmenityFormView, ViewId};

/// Reduce amenity form state, including view stack management
pub fn reduce_amenity_form(mut state: AppState, action: &AmenityFormAction) -> AppState {
    match action {
        AmenityFormAction::OpenCreate => {
            open(&mut state, FormMode::Create, AmenityInput::default());
        }
        AmenityFormAction::Opened { mode, input } => {
            open(&mut state, mode.clone(), input.clone());
        }

        AmenityFormAction::Char(c) => {
            if let Some(form) = state.amenity_form.as_mut() {
                form.focused_value_mut().push(*c);
            }
        }
        AmenityFormAction::Backspace => {
            if let Some(form) = state.amenity_form.as_mut() {
                form.focused_value_mut().pop();
            }
        }
        AmenityFormAction::ClearField => {
            if let Some(form) = state.amenity_form.as_mut() {
                form.focused_value_mut().clear();
            }
        }
        AmenityFormAction::NextField => {
            if let Some(form) = state.amenity_form.as_mut() {
                form.focused = form.focused.next();
            }
        }
        AmenityFormAction::PreviousField => {
            if let Some(form) = state.amenity_form.as_mut() {
                form.focused = form.focused.prev();
            }
        }

        AmenityFormAction::Close => {
            state.amenity_form = None;
            state.remove_views(ViewId::AmenityForm);
        }

        // Handled by middleware
        AmenityFormAction::EditSelected
        | AmenityFormAction::OpenEdit(_)
        | AmenityFormAction::Submit => {}
    }

    state
}

fn open(state: &mut AppState, mode: FormMode, input: AmenityInput) {
    log::debug!("Opening amenity form: {:?}", mode);
    state.amenity_form = Some(AmenityFormState::new(mode, input));
    state.remove_views(ViewId::AmenityForm);
    state.view_stack.push(Box::new(AmenityFormView::new()));
}
