//! View model for the amenity form

use ratatui::style::Style;

use crate::command_id::CommandId;
use crate::state::{AmenityFormState, AppState, FormField};

/// One labelled input of the form
#[derive(Debug, Clone)]
pub struct FormFieldViewModel {
    pub label: String,
    pub value: String,
    pub focused: bool,
    pub style: Style,
}

/// View model for the amenity form popup
#[derive(Debug, Clone)]
pub struct AmenityFormViewModel {
    pub title: String,
    pub fields: Vec<FormFieldViewModel>,
    pub submit_hint: String,
    pub cancel_hint: String,
}

impl AmenityFormViewModel {
    pub fn from_form(form: &AmenityFormState, state: &AppState) -> Self {
        let theme = &state.theme;
        let fields = FormField::ALL
            .iter()
            .map(|field| {
                let focused = *field == form.focused;
                FormFieldViewModel {
                    label: format!("{:>6}:", field.label()),
                    value: form.value(*field).to_string(),
                    focused,
                    style: if focused {
                        theme.table_selected()
                    } else {
                        theme.text()
                    },
                }
            })
            .collect();

        Self {
            title: form.title().to_string(),
            fields,
            submit_hint: "Enter".to_string(),
            cancel_hint: state
                .keymap
                .hint_for_command(CommandId::GlobalClose)
                .unwrap_or("Esc")
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormMode;

    #[test]
    fn test_only_focused_field_is_marked() {
        let state = AppState::default();
        let mut form = AmenityFormState::new(FormMode::Create, Default::default());
        form.focused = FormField::Label;

        let vm = AmenityFormViewModel::from_form(&form, &state);
        let focused: Vec<bool> = vm.fields.iter().map(|f| f.focused).collect();
        assert_eq!(focused, vec![false, true, false]);
        assert_eq!(vm.title, "New amenity");
        assert_eq!(vm.cancel_hint, "Esc");
    }
}
