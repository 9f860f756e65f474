//! In-memory admin backend for store-level tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use admin_client::{
    AdminClient, Amenity, AmenityInput, ApiError, ApiResult, Enquiry, Page, Property, Record,
    Requirement, Resource,
};
use async_trait::async_trait;

/// A call received by [`FakeAdminClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchPage {
        resource: Resource,
        page: u32,
        limit: u32,
    },
    FetchAll(Resource),
    Delete {
        resource: Resource,
        id: String,
    },
    MarkSeen(String),
    CreateAmenity(AmenityInput),
    UpdateAmenity {
        id: String,
        input: AmenityInput,
    },
}

#[derive(Debug, Default)]
struct Backend {
    records: HashMap<Resource, Vec<Record>>,
    calls: Vec<Call>,
    mutation_error: Option<ApiError>,
    fetch_delay: HashMap<Resource, Duration>,
}

/// Fake backend: pages over an in-memory dataset and records every call
#[derive(Debug, Clone, Default)]
pub struct FakeAdminClient {
    backend: Arc<Mutex<Backend>>,
}

impl FakeAdminClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(self, resource: Resource, records: Vec<Record>) -> Self {
        self.lock().records.insert(resource, records);
        self
    }

    /// Every following mutation is rejected with `error`
    pub fn reject_mutations(self, error: ApiError) -> Self {
        self.lock().mutation_error = Some(error);
        self
    }

    /// Page fetches of `resource` answer only after `delay`
    pub fn delay_fetches(self, resource: Resource, delay: Duration) -> Self {
        self.lock().fetch_delay.insert(resource, delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn records(&self, resource: Resource) -> Vec<Record> {
        self.lock().records.get(&resource).cloned().unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, Backend> {
        self.backend.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record a mutation call, returning the injected rejection if any
    fn begin_mutation(&self, call: Call) -> ApiResult<MutexGuard<'_, Backend>> {
        let mut backend = self.lock();
        backend.calls.push(call);
        if let Some(error) = backend.mutation_error.clone() {
            return Err(error);
        }
        Ok(backend)
    }
}

#[async_trait]
impl AdminClient for FakeAdminClient {
    async fn fetch_page(
        &self,
        resource: Resource,
        page: u32,
        limit: u32,
    ) -> ApiResult<Page<Record>> {
        let delay = {
            let mut backend = self.lock();
            backend.calls.push(Call::FetchPage {
                resource,
                page,
                limit,
            });
            backend.fetch_delay.get(&resource).copied()
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let records = self.records(resource);
        let start = (page.saturating_sub(1) * limit) as usize;
        let items = records
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(Page {
            total: records.len() as u64,
            page,
            limit,
            items,
        })
    }

    async fn fetch_all(&self, resource: Resource) -> ApiResult<Vec<Record>> {
        self.lock().calls.push(Call::FetchAll(resource));
        Ok(self.records(resource))
    }

    async fn delete(&self, resource: Resource, id: &str) -> ApiResult<String> {
        let mut backend = self.begin_mutation(Call::Delete {
            resource,
            id: id.to_string(),
        })?;
        let records = backend.records.entry(resource).or_default();
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(ApiError::NotFound(format!("{} {}", resource.singular(), id)));
        }
        Ok(format!("{} deleted successfully", resource.singular()))
    }

    async fn mark_seen(&self, enquiry_id: &str) -> ApiResult<String> {
        let mut backend = self.begin_mutation(Call::MarkSeen(enquiry_id.to_string()))?;
        let enquiry = backend
            .records
            .entry(Resource::Enquiries)
            .or_default()
            .iter_mut()
            .find_map(|r| match r {
                Record::Enquiry(e) if e.id == enquiry_id => Some(e),
                _ => None,
            })
            .ok_or_else(|| ApiError::NotFound(format!("Enquiry {}", enquiry_id)))?;
        enquiry.seen = true;
        Ok("Enquiry marked as seen".to_string())
    }

    async fn create_amenity(&self, input: &AmenityInput) -> ApiResult<String> {
        let mut backend = self.begin_mutation(Call::CreateAmenity(input.clone()))?;
        let amenities = backend.records.entry(Resource::Amenities).or_default();
        let id = format!("a{}", amenities.len() + 1);
        amenities.push(amenity(&id, &input.key, &input.label));
        Ok(String::new())
    }

    async fn update_amenity(&self, id: &str, input: &AmenityInput) -> ApiResult<String> {
        let mut backend = self.begin_mutation(Call::UpdateAmenity {
            id: id.to_string(),
            input: input.clone(),
        })?;
        let existing = backend
            .records
            .entry(Resource::Amenities)
            .or_default()
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ApiError::NotFound(format!("Amenity {}", id)))?;
        *existing = amenity(id, &input.key, &input.label);
        Ok("Amenity updated".to_string())
    }
}

pub fn amenity(id: &str, key: &str, label: &str) -> Record {
    Record::Amenity(Amenity {
        id: id.to_string(),
        key: key.to_string(),
        label: label.to_string(),
        icon: None,
    })
}

/// `count` requirements with ids 1..=count
pub fn requirements(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|n| {
            Record::Requirement(Requirement {
                id: n.to_string(),
                name: format!("Company {}", n),
                email: format!("contact{}@example.com", n),
                city: "Pune".to_string(),
                seats: 10,
                status: "open".to_string(),
            })
        })
        .collect()
}

/// `count` unseen enquiries with ids e1..=e{count}
pub fn enquiries(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|n| {
            Record::Enquiry(Enquiry {
                id: format!("e{}", n),
                name: format!("Visitor {}", n),
                email: String::new(),
                phone: String::new(),
                message: "Is a day pass available?".to_string(),
                property_name: "Harbour Hub".to_string(),
                seen: false,
            })
        })
        .collect()
}

pub fn properties(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|n| {
            Record::Property(Property {
                id: format!("p{}", n),
                name: format!("Space {}", n),
                city: "Goa".to_string(),
                category: "coworking".to_string(),
                status: "active".to_string(),
            })
        })
        .collect()
}
