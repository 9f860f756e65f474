pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        // Resource tabs
        KeyBinding::new("tab", "Tab", ResourceNext),
        KeyBinding::new("shift+tab", "Shift+Tab", ResourcePrevious),
        KeyBinding::new("backtab", "Shift+Tab", ResourcePrevious),
        // Pagination
        KeyBinding::new("n", "n", PageNext),
        KeyBinding::new("right", "→", PageNext),
        KeyBinding::new("p", "p", PagePrevious),
        KeyBinding::new("left", "←", PagePrevious),
        KeyBinding::new("r", "r", ListRetry),
        // Filter & Search
        KeyBinding::new("/", "/", SearchStart),
        KeyBinding::new("f", "f", FilterCycle),
        KeyBinding::new("c", "c", FiltersClear),
        // Gated mutations
        KeyBinding::new("d", "d", EntityDelete),
        KeyBinding::new("s", "s", EnquiryMarkSeen),
        KeyBinding::new("a", "a", AmenityCreate),
        KeyBinding::new("e", "e", AmenityEdit),
        // Dialog (view-specific - gated by the dialog view)
        KeyBinding::new("y", "y", DialogConfirm),
        KeyBinding::new("enter", "Enter", DialogConfirm),
        KeyBinding::new("n", "n", DialogCancel),
        // General
        KeyBinding::new("q", "q", GlobalQuit),
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}
