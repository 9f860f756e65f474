//! Keys typed while a text field has focus (the search box, the amenity form)
//!
//! The focused view translates these into its own actions.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    Char(char),
    Backspace,
    /// Ctrl+U
    ClearLine,
    /// Esc: ends the search, cancels the form
    Escape,
    /// Enter: ends the search, submits the form
    Confirm,
}
