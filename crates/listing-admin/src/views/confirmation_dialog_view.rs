//! Confirmation Dialog View
//!
//! Floating modal for the single open alert. Warnings with a deferred intent
//! show Confirm/Cancel; every other alert shows a single OK.

use crate::actions::{Action, GlobalAction};
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::state::{AppState, Severity};
use crate::view_models::ConfirmationDialogProps;
use crate::views::{centered, View, ViewId};
use listing_admin_theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct ConfirmationDialogView;

impl ConfirmationDialogView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfirmationDialogView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ConfirmationDialogView {
    fn view_id(&self) -> ViewId {
        ViewId::ConfirmationDialog
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let props = ConfirmationDialogProps::from_state(state);
        // A closed dialog renders nothing
        if props.is_open {
            render_dialog(f, &props, state, area);
        }
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Alert(_) | Action::Global(GlobalAction::Close | GlobalAction::Quit)
        )
    }
}

fn severity_color(severity: Severity, theme: &Theme) -> Color {
    match severity {
        Severity::Success => theme.status_success,
        Severity::Error => theme.status_error,
        Severity::Warning => theme.status_warning,
        Severity::Info => theme.status_info,
    }
}

fn render_dialog(f: &mut Frame, props: &ConfirmationDialogProps, state: &AppState, area: Rect) {
    let theme = &state.theme;
    let accent = severity_color(props.severity, theme);

    // Dim everything underneath
    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_overlay).add_modifier(Modifier::DIM)),
        area,
    );

    let width = (area.width / 5 * 3).clamp(40, 70);
    let popup_area = centered(area, width, 9);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", props.title))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(accent))
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    f.render_widget(
        Paragraph::new(props.message.as_str())
            .style(theme.text())
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    f.render_widget(Paragraph::new(buttons(props, state)).alignment(Alignment::Center), chunks[1]);
}

fn buttons<'a>(props: &'a ConfirmationDialogProps, state: &AppState) -> Line<'a> {
    let theme = &state.theme;
    let hint = |cmd: CommandId| {
        state
            .keymap
            .compact_hint_for_command(cmd)
            .unwrap_or_default()
    };

    let confirm = Span::styled(
        format!(" {} [{}] ", props.confirm_label, hint(CommandId::DialogConfirm)),
        theme.button(if props.require_explicit_confirm {
            theme.action_danger
        } else {
            theme.action_confirm
        }),
    );

    if !props.require_explicit_confirm {
        return Line::from(confirm);
    }

    let cancel = Span::styled(
        format!(" {} [{}] ", props.cancel_label, hint(CommandId::DialogCancel)),
        theme.button(theme.action_cancel),
    );
    Line::from(vec![confirm, Span::raw("   "), cancel.bold()])
}
