use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::view_models::ResourceTabsViewModel;

/// Left separator - lower right triangle
const LEFT_SEP: &str = "◢";
/// Right separator - lower left triangle
const RIGHT_SEP: &str = "◣";

/// Widget wrapper for rendering resource tabs from view model
pub struct ResourceTabsWidget<'a>(pub &'a ResourceTabsViewModel);

impl Widget for ResourceTabsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 10 {
            return;
        }

        let vm = self.0;

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.line_bg);
        }

        let badge_width = vm.user_badge.chars().count() as u16;
        let tabs_end = (area.x + area.width).saturating_sub(badge_width);
        let mut x = area.x;

        for tab in &vm.tabs {
            if x + tab.width > tabs_end {
                break;
            }

            buf.set_string(x, area.y, LEFT_SEP, tab.separator_style);
            x += 1;

            let padded_text = format!("  {}  ", tab.display_text);
            buf.set_string(x, area.y, &padded_text, tab.style);
            x += padded_text.chars().count() as u16;

            buf.set_string(x, area.y, RIGHT_SEP, tab.separator_style);
            x += 1;
        }

        if x <= tabs_end {
            buf.set_string(tabs_end, area.y, &vm.user_badge, vm.user_style);
        }
    }
}
