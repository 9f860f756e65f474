//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub emoji: &'static str,
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05")
    pub timestamp: String,
    /// "Alert" or "Mutation"
    pub source: String,
    pub message_style: Style,
    pub bg_color: Color,
    /// Style for metadata (timestamp, source)
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let metadata_style = Style::default().fg(theme.text_muted);

        let Some(msg) = state.status_bar.latest() else {
            let greeting = match &state.user {
                Some(user) => format!("Signed in as {}", user.name),
                None => "Not signed in".to_string(),
            };
            return Self {
                emoji: "👋",
                message: greeting,
                timestamp: String::new(),
                source: String::new(),
                message_style: Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_primary,
                metadata_style,
            };
        };

        let fg_color = match msg.kind {
            StatusKind::Running => theme.status_running,
            StatusKind::Success => theme.status_success,
            StatusKind::Error => theme.status_error,
            StatusKind::Warning => theme.status_warning,
            StatusKind::Info => theme.status_info,
        };

        Self {
            emoji: msg.kind.icon(),
            message: msg.text.clone(),
            timestamp: msg.at.format("%H:%M:%S").to_string(),
            source: msg.origin.to_string(),
            message_style: Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
            bg_color: theme.bg_primary,
            metadata_style,
        }
    }
}
