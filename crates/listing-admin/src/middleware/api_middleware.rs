//! Admin API Middleware
//!
//! Central middleware for all backend calls:
//! - Page fetches (tagged with the mount they were issued for)
//! - Confirmed mutations (delete, mark seen, amenity create/update)
//! - Amenity lookup by id for the edit form
//!
//! Calls run on a tokio runtime owned by this middleware. Results come back
//! as actions through the dispatcher, so state is only touched by the store.

use std::sync::Arc;

use admin_client::{AdminClient, ApiError, ApiResult, Record, Resource};
use tokio::runtime::Runtime;

use crate::actions::{Action, AlertAction, AmenityFormAction, ListAction, MutationAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::MutationIntent;
use crate::middleware::Middleware;
use crate::state::{AppState, FormMode};

/// Middleware for all admin API operations
pub struct ApiMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    client: Arc<dyn AdminClient>,
}

impl ApiMiddleware {
    pub fn new(client: Arc<dyn AdminClient>) -> std::io::Result<Self> {
        Ok(Self {
            runtime: Runtime::new()?,
            client,
        })
    }

    fn fetch_page(&self, page: u32, state: &AppState, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let mount = state.list.mount;
        let resource = state.list.resource;
        let limit = state.list.pagination.page_size;

        self.runtime.spawn(async move {
            log::debug!("Fetching {:?} page {} (limit {})", resource, page, limit);
            match client.fetch_page(resource, page, limit).await {
                Ok(page) => {
                    log::info!(
                        "Loaded {} {:?} (page {}, total {})",
                        page.items.len(),
                        resource,
                        page.page,
                        page.total
                    );
                    dispatcher.dispatch(Action::List(ListAction::Loaded { mount, page }));
                }
                Err(e) => {
                    log::warn!("Fetching {:?} page {} failed: {}", resource, page, e);
                    dispatcher.dispatch(Action::List(ListAction::LoadFailed {
                        mount,
                        error: e.user_message(),
                    }));
                }
            }
        });
    }

    fn execute(&self, intent: &MutationIntent, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let intent = intent.clone();

        self.runtime.spawn(async move {
            match run_mutation(client.as_ref(), &intent).await {
                Ok(message) => {
                    dispatcher.dispatch(Action::Mutation(MutationAction::Succeeded {
                        intent,
                        message,
                    }));
                }
                Err(e) => {
                    log::warn!("Mutation {:?} failed: {}", intent, e);
                    dispatcher.dispatch(Action::Mutation(MutationAction::Failed {
                        intent,
                        message: e.user_message(),
                    }));
                }
            }
        });
    }

    fn open_edit(&self, id: &str, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let id = id.to_string();

        self.runtime.spawn(async move {
            match find_amenity(client.as_ref(), &id).await {
                Ok(input) => {
                    dispatcher.dispatch(Action::AmenityForm(AmenityFormAction::Opened {
                        mode: FormMode::Edit { id },
                        input,
                    }));
                }
                Err(e) => {
                    log::warn!("Could not open amenity {}: {}", id, e);
                    dispatcher.dispatch(Action::Alert(AlertAction::error(
                        "Edit amenity",
                        e.user_message(),
                    )));
                }
            }
        });
    }
}

/// Call the endpoint behind a confirmed intent
async fn run_mutation(client: &dyn AdminClient, intent: &MutationIntent) -> ApiResult<String> {
    match intent {
        MutationIntent::Delete { resource, id, .. } => client.delete(*resource, id).await,
        MutationIntent::MarkSeen { id, .. } => client.mark_seen(id).await,
        MutationIntent::CreateAmenity(input) => client.create_amenity(input).await,
        MutationIntent::UpdateAmenity { id, input } => client.update_amenity(id, input).await,
    }
}

/// Look an amenity up in the full collection
async fn find_amenity(client: &dyn AdminClient, id: &str) -> ApiResult<admin_client::AmenityInput> {
    client
        .fetch_all(Resource::Amenities)
        .await?
        .iter()
        .find_map(|record| match record {
            Record::Amenity(amenity) if amenity.id == id => Some(amenity.into()),
            _ => None,
        })
        .ok_or_else(|| ApiError::NotFound(format!("Amenity {}", id)))
}

impl Middleware for ApiMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::List(ListAction::FetchPage(page)) => {
                self.fetch_page(*page, state, dispatcher);
            }
            Action::Mutation(MutationAction::Execute(intent)) => {
                self.execute(intent, dispatcher);
            }
            Action::AmenityForm(AmenityFormAction::OpenEdit(id)) => {
                self.open_edit(id, dispatcher);
            }
            _ => {}
        }

        true
    }
}
