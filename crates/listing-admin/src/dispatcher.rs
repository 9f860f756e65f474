//! Action queue shared by middleware and spawned API tasks
//!
//! Anything dispatched here is processed later by the store, from the top of
//! the middleware chain, on the store's thread.

use crate::actions::Action;
use std::sync::mpsc::Sender;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    queue: Sender<Action>,
}

impl Dispatcher {
    pub fn new(queue: Sender<Action>) -> Self {
        Self { queue }
    }

    /// Queue an action; dropped with an error log once the store is gone
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.queue.send(action) {
            log::error!("Store is gone, dropping {:?}", e.0);
        }
    }
}
