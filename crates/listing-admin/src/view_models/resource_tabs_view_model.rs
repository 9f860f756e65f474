//! Resource Tabs View Model
//!
//! Pre-computes the tab bar: one tab per managed resource, plus the signed-in
//! user on the right.

use admin_client::Resource;
use ratatui::style::{Color, Modifier, Style};

use crate::state::{AppState, LoadingState};

/// Hourglass icon for loading state
const HOURGLASS_ICON: &str = "⏳";

/// View model for a single tab
#[derive(Debug, Clone)]
pub struct TabViewModel {
    pub display_text: String,
    pub style: Style,
    pub separator_style: Style,
    /// Width in cells: separators, padding and text
    pub width: u16,
}

/// View model for the resource tab bar
#[derive(Debug, Clone)]
pub struct ResourceTabsViewModel {
    pub tabs: Vec<TabViewModel>,
    /// Right-aligned user badge, e.g. "ada (admin)"
    pub user_badge: String,
    pub user_style: Style,
    pub line_bg: Color,
}

impl ResourceTabsViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let active = state.list.resource;
        let loading = matches!(state.list.loading, LoadingState::Loading);

        let tabs = Resource::ALL
            .iter()
            .map(|resource| {
                let is_active = *resource == active;
                let display_text = if is_active && loading {
                    format!("{} {}", HOURGLASS_ICON, resource.label())
                } else {
                    resource.label().to_string()
                };
                let (style, tab_bg) = if is_active {
                    (theme.tab_active(), theme.accent_primary)
                } else {
                    (
                        Style::default().fg(theme.text_secondary).bg(theme.bg_secondary),
                        theme.bg_secondary,
                    )
                };
                let width = display_text.chars().count() as u16 + 6;

                TabViewModel {
                    display_text,
                    style,
                    separator_style: Style::default().fg(tab_bg).bg(theme.bg_primary),
                    width,
                }
            })
            .collect();

        let user_badge = match &state.user {
            Some(user) if user.user_type.is_empty() => format!(" {} ", user.name),
            Some(user) => format!(" {} ({}) ", user.name, user.user_type),
            None => " anonymous ".to_string(),
        };

        Self {
            tabs,
            user_badge,
            user_style: Style::default()
                .fg(theme.text_muted)
                .add_modifier(Modifier::ITALIC),
            line_bg: theme.bg_primary,
        }
    }
}
