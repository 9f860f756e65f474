use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod amenity_form_middleware;
pub mod api_middleware;
pub mod entity_list_middleware;
pub mod gated_action_middleware;
pub mod keyboard_middleware;
pub mod logging_middleware;
pub mod view_translation_middleware;

/// A step between dispatch and the root reducer
///
/// Runs on the store's thread with a read-only view of the state. Network
/// work is spawned by [`api_middleware::ApiMiddleware`] and reports back as
/// new actions. Returning `false` consumes the action: later middleware and
/// the reducer never see it.
pub trait Middleware: Send {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
