//! Actions not owned by a page

use ratatui::crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw terminal key press, routed by the keyboard middleware
    KeyPressed(KeyEvent),
    /// Dismiss the top overlay; the list page itself stays
    Close,
    Quit,
}
