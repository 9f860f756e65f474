use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_panel: Color,
    pub bg_overlay: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Alert severities
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,
    pub status_running: Color,

    // Action colors (dialog buttons, key badges)
    pub action_confirm: Color,
    pub action_cancel: Color,
    pub action_danger: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Table colors
    pub table_header_bg: Color,
    pub table_header_fg: Color,
    pub table_row_fg: Color,
    pub table_row_bg_normal: Color,
    pub table_row_bg_alt: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_secondary: tailwind::SLATE.c900,
            bg_panel: tailwind::SLATE.c800,
            bg_overlay: tailwind::SLATE.c900,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,
            text_disabled: tailwind::SLATE.c600,

            accent_primary: tailwind::TEAL.c400,
            accent_secondary: tailwind::TEAL.c600,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::AMBER.c400,
            status_info: tailwind::SKY.c400,
            status_running: tailwind::YELLOW.c400,

            action_confirm: tailwind::GREEN.c700,
            action_cancel: tailwind::SLATE.c600,
            action_danger: tailwind::RED.c600,

            selected_bg: tailwind::TEAL.c700,
            selected_fg: Color::White,

            table_header_bg: tailwind::SLATE.c700,
            table_header_fg: tailwind::SLATE.c100,
            table_row_fg: tailwind::SLATE.c200,
            table_row_bg_normal: tailwind::SLATE.c950,
            table_row_bg_alt: tailwind::SLATE.c900,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for panel backgrounds (dialogs, forms)
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "d" in "d delete")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for dialog buttons
    pub fn button(&self, bg_color: Color) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(bg_color)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the active resource tab
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for table headers
    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for selected table rows
    pub fn table_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for table rows, alternating background
    pub fn table_row(&self, index: usize) -> Style {
        let bg = if index % 2 == 0 {
            self.table_row_bg_normal
        } else {
            self.table_row_bg_alt
        };
        Style::default().fg(self.table_row_fg).bg(bg)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for warning messages
    pub fn warning(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for informational messages
    pub fn info(&self) -> Style {
        Style::default().fg(self.status_info)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for controls that cannot be activated (e.g. "next" on the last page)
    pub fn disabled(&self) -> Style {
        Style::default()
            .fg(self.text_disabled)
            .add_modifier(Modifier::DIM)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}
