use crate::actions::{Action, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod amenity_form_view;
pub mod confirmation_dialog_view;
pub mod list_page_view;
pub mod resource_tabs_view;
pub mod status_bar;

pub use amenity_form_view::AmenityFormView;
pub use confirmation_dialog_view::ConfirmationDialogView;
pub use list_page_view::ListPageView;

/// Which screen or overlay is on top of the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    ListPage,
    ConfirmationDialog,
    AmenityForm,
}

/// A screen or overlay on the view stack
///
/// The list page sits at the bottom; the amenity form and the confirmation
/// dialog are pushed on top of it. Only the top view receives keys.
pub trait View: std::fmt::Debug + Send {
    fn view_id(&self) -> ViewId;

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Input kinds the keyboard middleware may route here
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    fn clone_box(&self) -> Box<dyn View>;

    /// Meaning of up/down for this view, if any
    fn translate_navigation(&self, _nav: NavigationAction) -> Option<Action> {
        None
    }

    /// Where typed characters go, if this view has a text field
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }

    /// Keymap commands outside this filter are dropped while the view is on top
    fn accepts_action(&self, action: &Action) -> bool;
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Draw the stack bottom-up; overlays clear only the area they cover
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        view.render(state, area, f);
    }
}

/// Centered rectangle of the given size, clamped to `area`
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
