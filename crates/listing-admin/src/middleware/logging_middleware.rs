//! Action trace for the debug log
//!
//! Actions that change what the admin sees (list loads, mutations, alerts)
//! are logged at debug, everything else at trace.

use crate::actions::{Action, GlobalAction, ListAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

/// One line per action; page payloads are reduced to their size
fn summarize(action: &Action) -> Option<String> {
    match action {
        Action::List(ListAction::Loaded { mount, page }) => Some(format!(
            "Loaded page {} ({} items, total {}) for {:?}",
            page.page,
            page.items.len(),
            page.total,
            mount
        )),
        Action::List(_) | Action::Mutation(_) | Action::Alert(_) => Some(format!("{:?}", action)),
        _ => None,
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Raw keys are logged by the keyboard middleware
            Action::Global(GlobalAction::KeyPressed(_)) => {}
            _ => match summarize(action) {
                Some(line) => log::debug!("[{:?}] {}", state.list.resource, line),
                None => log::trace!("{:?}", action),
            },
        }
        true
    }
}
