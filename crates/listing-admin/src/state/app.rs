//! Application State

use admin_config::{AppConfig, SessionUser};
use listing_admin_theme::Theme;

use crate::keymap::{default_keymap, Keymap};
use crate::views::{ListPageView, View, ViewId};

use super::{
    AmenityFormState, EntityListState, GatedActionController, MutationPhase, StatusBarState,
};

/// Application state
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the list page, top views are floating overlays
    pub view_stack: Vec<Box<dyn View>>,
    /// The mounted entity list page
    pub list: EntityListState,
    /// The single alert slot
    pub alert: GatedActionController,
    /// Most recent gated mutation
    pub mutation: MutationPhase,
    /// Amenity form (present only while open)
    pub amenity_form: Option<AmenityFormState>,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
    /// Application configuration
    pub config: AppConfig,
    /// Signed-in user, shown in the tab bar
    pub user: Option<SessionUser>,
}

impl AppState {
    /// State for the given configuration and session user
    pub fn new(config: AppConfig, user: Option<SessionUser>) -> Self {
        let mut state = Self {
            config,
            user,
            ..Self::default()
        };
        state.list = EntityListState::mounted(
            state.list.mount,
            state.list.resource,
            state.config.page_size,
        );
        state
    }

    /// Id of the top-most (active) view
    pub fn active_view_id(&self) -> Option<ViewId> {
        self.view_stack.last().map(|v| v.view_id())
    }

    /// Remove every view with the given id (the base view is never removed)
    pub fn remove_views(&mut self, id: ViewId) {
        let base = self.view_stack.first().map(|v| v.view_id());
        if base == Some(id) {
            return;
        }
        self.view_stack.retain(|v| v.view_id() != id);
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("list", &self.list)
            .field("alert", &self.alert)
            .field("mutation", &self.mutation)
            .field("amenity_form", &self.amenity_form)
            .field("status_bar", &self.status_bar)
            .field("theme", &"<theme>")
            .field("config", &self.config)
            .field("user", &self.user)
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            list: self.list.clone(),
            alert: self.alert.clone(),
            mutation: self.mutation.clone(),
            amenity_form: self.amenity_form.clone(),
            status_bar: self.status_bar.clone(),
            theme: self.theme.clone(),
            keymap: self.keymap.clone(),
            config: self.config.clone(),
            user: self.user.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(ListPageView::new())],
            list: EntityListState::default(),
            alert: GatedActionController::default(),
            mutation: MutationPhase::default(),
            amenity_form: None,
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
            config: AppConfig::default(),
            user: None,
        }
    }
}
