//! Input routing flags
//!
//! The list page navigates rows unless its search line is being edited; the
//! amenity form takes text and moves between fields. The keyboard middleware
//! only looks at these flags, never at the concrete view.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// Character keys go to a text field instead of the keymap
        const TEXT_INPUT = 1 << 0;

        /// Up/down move a row cursor or field focus
        const ITEM_NAVIGATION = 1 << 1;

        /// j/k act as down/up; off while typing
        const VIM_NAVIGATION_BINDINGS = 1 << 2;
    }
}

impl PanelCapabilities {
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}
