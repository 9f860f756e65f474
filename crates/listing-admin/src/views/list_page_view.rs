//! Entity list page
//!
//! Renders the resource tabs, the filter line, the entity table, the
//! pagination footer and the status bar.

use crate::actions::{Action, ListAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::{
    ListPageViewModel, PaginationViewModel, ResourceTabsViewModel, StatusBarViewModel,
};
use crate::views::resource_tabs_view::ResourceTabsWidget;
use crate::views::status_bar::StatusBarWidget;
use crate::views::{View, ViewId};
use listing_admin_theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// The base view: one mounted resource list
#[derive(Debug, Clone)]
pub struct ListPageView;

impl ListPageView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ListPageView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ListPageView {
    fn view_id(&self) -> ViewId {
        ViewId::ListPage
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, state: &AppState) -> PanelCapabilities {
        if state.list.search_editing {
            PanelCapabilities::TEXT_INPUT
        } else {
            PanelCapabilities::ITEM_NAVIGATION | PanelCapabilities::VIM_NAVIGATION_BINDINGS
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => ListAction::CursorNext,
            NavigationAction::Previous => ListAction::CursorPrevious,
        };
        Some(Action::List(action))
    }

    // Only reached while the search box has focus
    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => ListAction::SearchChar(c),
            TextInputAction::Backspace => ListAction::SearchBackspace,
            TextInputAction::ClearLine => ListAction::ClearSearch,
            TextInputAction::Escape | TextInputAction::Confirm => ListAction::EndSearch,
        };
        Some(Action::List(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::List(_) | Action::AmenityForm(_) | Action::Navigate(_) | Action::Global(_)
        )
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Resource tabs
            Constraint::Length(1), // Search / filter line
            Constraint::Min(0),    // Table
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let tabs_vm = ResourceTabsViewModel::from_state(state);
    f.render_widget(ResourceTabsWidget(&tabs_vm), chunks[0]);

    let vm = ListPageViewModel::from_state(state);
    f.render_widget(
        Paragraph::new(vm.filter_line.clone()).style(vm.filter_style),
        chunks[1],
    );

    match &vm.empty_message {
        Some(message) => render_empty(&vm, message, &state.theme, chunks[2], f),
        None => render_table(&vm, &state.theme, chunks[2], f),
    }

    f.render_widget(pagination_line(&vm.pagination, &state.theme), chunks[3]);

    let status_vm = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&status_vm), chunks[4]);
}

fn block<'a>(vm: &'a ListPageViewModel, theme: &Theme) -> Block<'a> {
    let status_line = Line::from(vm.status_text.as_str())
        .style(Style::default().fg(vm.status_color))
        .right_aligned();

    Block::bordered()
        .border_type(BorderType::QuadrantOutside)
        .border_style(Style::default().fg(theme.accent_primary))
        .title(vm.title.as_str())
        .title(status_line)
}

fn render_table(vm: &ListPageViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let header_style = theme.table_header();
    let header = Row::new(
        vm.headers
            .iter()
            .map(|h| Cell::from(h.as_str()).style(header_style)),
    )
    .style(header_style)
    .height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .enumerate()
        .map(|(index, cells)| {
            Row::new(cells.iter().map(|c| Cell::from(c.as_str())))
                .style(theme.table_row(index))
                .height(1)
        })
        .collect();

    let column_count = vm.headers.len().max(1) as u32;
    let widths = vec![Constraint::Ratio(1, column_count); column_count as usize];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block(vm, theme))
        .row_highlight_style(theme.table_selected())
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    table_state.select(vm.selected_index);

    f.render_stateful_widget(table, area, &mut table_state);
}

fn render_empty(vm: &ListPageViewModel, message: &str, theme: &Theme, area: Rect, f: &mut Frame) {
    let paragraph = Paragraph::new(message)
        .block(block(vm, theme))
        .style(theme.muted())
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

/// Footer with prev/next controls; a control at the boundary is disabled
fn pagination_line<'a>(vm: &'a PaginationViewModel, theme: &Theme) -> Line<'a> {
    let control = |enabled: bool, hint: &'a str, label: &'a str| {
        if enabled {
            vec![
                Span::styled(hint, theme.key_hint()),
                Span::styled(label, theme.key_description()),
            ]
        } else {
            vec![Span::styled(hint, theme.disabled()), Span::styled(label, theme.disabled())]
        }
    };

    let mut spans = vec![Span::raw(" ")];
    spans.extend(control(vm.prev_enabled, vm.prev_hint.as_str(), " prev  "));
    spans.push(Span::styled(vm.label.as_str(), theme.text()));
    spans.push(Span::raw("  "));
    spans.extend(control(vm.next_enabled, vm.next_hint.as_str(), " next"));

    Line::from(spans).alignment(Alignment::Center)
}
