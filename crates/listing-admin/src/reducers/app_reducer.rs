use crate::actions::{Action, GlobalAction};
use crate::reducers::{
    alert_reducer::reduce_alert, amenity_form_reducer::reduce_amenity_form,
    list_reducer::reduce_list, mutation_reducer::reduce_mutation,
    status_bar_reducer::reduce_status_bar,
};
use crate::state::AppState;
use crate::views::ViewId;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    // A close queued for an alert that has since been replaced touches nothing
    if let Action::Alert(alert_action) = action {
        let open = state.alert.current().map(|alert| alert.id);
        if alert_action.target().is_some_and(|id| Some(id) != open) {
            log::debug!("Dropping {:?}, open alert is {:?}", alert_action, open);
            return state;
        }
    }

    state.mutation = reduce_mutation(state.mutation, action);
    state.status_bar = reduce_status_bar(state.status_bar, action);

    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::Close) => {
            // The list page at the bottom of the stack is never popped
            if state.view_stack.len() > 1 {
                if let Some(view) = state.view_stack.pop() {
                    log::debug!("Closed view: {:?}", view.view_id());
                    match view.view_id() {
                        ViewId::ConfirmationDialog => state.alert.close(),
                        ViewId::AmenityForm => state.amenity_form = None,
                        ViewId::ListPage => {}
                    }
                }
            }
        }
        Action::Global(GlobalAction::KeyPressed(_)) => {}
        Action::List(list_action) => {
            let page_size = state.config.page_size;
            state.list = reduce_list(state.list, list_action, page_size);
        }
        Action::Alert(alert_action) => {
            state = reduce_alert(state, alert_action);
        }
        Action::AmenityForm(form_action) => {
            state = reduce_amenity_form(state, form_action);
        }
        Action::Mutation(_) | Action::Navigate(_) | Action::TextInput(_) => {}
    }

    state
}
