//! Amenity Form View
//!
//! Floating form for creating or editing an amenity.

use crate::actions::{Action, AmenityFormAction, GlobalAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::AmenityFormViewModel;
use crate::views::{centered, View, ViewId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct AmenityFormView;

impl AmenityFormView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmenityFormView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for AmenityFormView {
    fn view_id(&self) -> ViewId {
        ViewId::AmenityForm
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        if let Some(form) = &state.amenity_form {
            let vm = AmenityFormViewModel::from_form(form, state);
            render_form(f, &vm, state, area);
        }
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT | PanelCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => AmenityFormAction::NextField,
            NavigationAction::Previous => AmenityFormAction::PreviousField,
        };
        Some(Action::AmenityForm(action))
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => AmenityFormAction::Char(c),
            TextInputAction::Backspace => AmenityFormAction::Backspace,
            TextInputAction::ClearLine => AmenityFormAction::ClearField,
            TextInputAction::Escape => AmenityFormAction::Close,
            TextInputAction::Confirm => AmenityFormAction::Submit,
        };
        Some(Action::AmenityForm(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::AmenityForm(_)
                | Action::Navigate(_)
                | Action::TextInput(_)
                | Action::Global(GlobalAction::Close | GlobalAction::Quit)
        )
    }
}

fn render_form(f: &mut Frame, vm: &AmenityFormViewModel, state: &AppState, area: Rect) {
    let theme = &state.theme;

    let popup_area = centered(area, (area.width / 5 * 3).clamp(40, 70), 9);
    f.render_widget(Clear, popup_area);

    let footer = Line::from(vec![
        Span::styled(" ", theme.muted()),
        Span::styled(vm.submit_hint.as_str(), theme.key_hint().bold()),
        Span::styled(" save  ", theme.muted()),
        Span::styled("Tab", theme.key_hint().bold()),
        Span::styled(" next field  ", theme.muted()),
        Span::styled(vm.cancel_hint.as_str(), theme.key_hint().bold()),
        Span::styled(" cancel ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", vm.title))
        .title_style(theme.panel_title().add_modifier(Modifier::BOLD))
        .title_bottom(footer)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 2,
    });
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vm.fields.iter().map(|_| Constraint::Length(1)))
        .split(inner);

    for (field, row) in vm.fields.iter().zip(rows.iter()) {
        let mut spans = vec![
            Span::styled(format!("{} ", field.label), theme.key_description()),
            Span::styled(field.value.as_str(), field.style),
        ];
        if field.focused {
            spans.push(Span::styled("▌", theme.key_hint()));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), *row);
    }
}
