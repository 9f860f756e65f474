//! Status line at the bottom of the list page
//!
//! `[14:32:05] ✅ Deleted: Requirement deleted.            [Alert]`

use crate::view_models::StatusBarViewModel;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;
        let background = Style::default().bg(vm.bg_color);

        let origin = if vm.source.is_empty() {
            String::new()
        } else {
            format!("[{}] ", vm.source)
        };
        let [text_area, origin_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(origin.chars().count() as u16),
        ])
        .areas(area);

        let mut spans = vec![Span::raw(" ")];
        if !vm.timestamp.is_empty() {
            spans.push(Span::styled(format!("[{}] ", vm.timestamp), vm.metadata_style));
        }
        spans.push(Span::styled(format!("{} ", vm.emoji), vm.message_style));
        spans.push(Span::styled(vm.message.as_str(), vm.message_style));

        // Long server messages are clipped at the origin tag
        Paragraph::new(Line::from(spans))
            .style(background)
            .render(text_area, buf);
        Paragraph::new(Span::styled(origin, vm.metadata_style))
            .style(background)
            .render(origin_area, buf);
    }
}
