use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver};

/// Owner of the admin state
///
/// Follow-up actions queued on the [`Dispatcher`], including API results,
/// are drained after each dispatch and on every tick of the main loop.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Middleware runs in the order it was added
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action and everything it queues
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);
        self.process_pending();
    }

    /// Drain actions queued by middleware or background tasks
    pub fn process_pending(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.process(action);
        }
    }

    /// Middleware first; the reducer only sees actions nobody consumed
    fn process(&mut self, action: Action) {
        let state = &self.state;
        let dispatcher = &self.dispatcher;
        let passed = self
            .middleware
            .iter_mut()
            .all(|middleware| middleware.handle(&action, state, dispatcher));

        if passed {
            self.state = reduce(self.state.clone(), &action);
        }
    }

    /// Process queued actions until `done` holds or `timeout` elapses
    ///
    /// Blocks on the action channel, so results of spawned tasks are picked
    /// up as they arrive. Returns whether the condition was reached.
    #[cfg(test)]
    pub fn run_until(
        &mut self,
        timeout: std::time::Duration,
        done: impl Fn(&AppState) -> bool,
    ) -> bool {
        let deadline = std::time::Instant::now() + timeout;
        loop {
            if done(&self.state) {
                return true;
            }
            let remaining = deadline.saturating_duration_since(std::time::Instant::now());
            match self.action_rx.recv_timeout(remaining) {
                Ok(action) => self.process(action),
                Err(_) => return done(&self.state),
            }
        }
    }
}
