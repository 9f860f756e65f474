//! Admin API data transfer objects
//!
//! These types represent the data returned from the backend. They are
//! intentionally separate from the console's view state.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;
use crate::resource::Resource;

/// Response envelope used by every endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub status: bool,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// `data` payload of list endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageData<T> {
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    pub data: Vec<T>,
}

fn first_page() -> u32 {
    1
}

/// One page of decoded records, as reported by the server
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub items: Vec<T>,
}

/// Accept ids encoded either as strings or as numbers
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// A listed workspace property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    /// Workspace category (e.g. "coworking", "private_office")
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: String,
}

/// An amenity a property can offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    /// Machine key (e.g. "high_speed_wifi")
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A corporate customer account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateUser {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub status: String,
}

/// An enquiry submitted for a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub property_name: String,
    #[serde(default)]
    pub seen: bool,
}

/// A workspace requirement posted by a prospective tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub seats: u32,
    #[serde(default)]
    pub status: String,
}

/// A record of any managed resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Property(Property),
    Amenity(Amenity),
    CorporateUser(CorporateUser),
    Enquiry(Enquiry),
    Requirement(Requirement),
}

impl Record {
    /// Decode a raw JSON item of the given resource
    pub fn decode(resource: Resource, value: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match resource {
            Resource::Properties => Self::Property(serde_json::from_value(value)?),
            Resource::Amenities => Self::Amenity(serde_json::from_value(value)?),
            Resource::CorporateUsers => Self::CorporateUser(serde_json::from_value(value)?),
            Resource::Enquiries => Self::Enquiry(serde_json::from_value(value)?),
            Resource::Requirements => Self::Requirement(serde_json::from_value(value)?),
        })
    }

    /// Server-assigned id
    pub fn id(&self) -> &str {
        match self {
            Self::Property(p) => &p.id,
            Self::Amenity(a) => &a.id,
            Self::CorporateUser(u) => &u.id,
            Self::Enquiry(e) => &e.id,
            Self::Requirement(r) => &r.id,
        }
    }

    /// The resource this record belongs to
    pub fn resource(&self) -> Resource {
        match self {
            Self::Property(_) => Resource::Properties,
            Self::Amenity(_) => Resource::Amenities,
            Self::CorporateUser(_) => Resource::CorporateUsers,
            Self::Enquiry(_) => Resource::Enquiries,
            Self::Requirement(_) => Resource::Requirements,
        }
    }
}

/// Payload for creating or updating an amenity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityInput {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl AmenityInput {
    /// Check required fields locally, before any request is made
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.key.trim().is_empty() {
            return Err(ApiError::Validation("Amenity key is required.".to_string()));
        }
        if self.label.trim().is_empty() {
            return Err(ApiError::Validation(
                "Amenity label is required.".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<&Amenity> for AmenityInput {
    fn from(amenity: &Amenity) -> Self {
        Self {
            key: amenity.key.clone(),
            label: amenity.label.clone(),
            icon: amenity.icon.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_list_envelope_deserialize() {
        let body = json!({
            "status": true,
            "statusCode": 200,
            "message": "ok",
            "data": {
                "total": 23,
                "page": 2,
                "limit": 10,
                "data": [{ "_id": "a1", "key": "parking", "label": "Parking" }]
            }
        });

        let envelope: Envelope<PageData<serde_json::Value>> =
            serde_json::from_value(body).unwrap();
        assert!(envelope.status);
        assert_eq!(envelope.status_code, 200);
        let data = envelope.data.unwrap();
        assert_eq!((data.total, data.page, data.limit), (23, 2, 10));

        let record = Record::decode(Resource::Amenities, data.data[0].clone()).unwrap();
        assert_eq!(
            record,
            Record::Amenity(Amenity {
                id: "a1".to_string(),
                key: "parking".to_string(),
                label: "Parking".to_string(),
                icon: None,
            })
        );
    }

    #[test]
    fn test_numeric_ids_are_accepted() {
        let record = Record::decode(
            Resource::Requirements,
            json!({ "id": 7, "name": "Acme", "seats": 12, "status": "open" }),
        )
        .unwrap();
        assert_eq!(record.id(), "7");
        assert_eq!(record.resource(), Resource::Requirements);
    }

    #[test]
    fn test_mutation_envelope_without_data() {
        let envelope: Envelope<serde_json::Value> = serde_json::from_value(json!({
            "status": false,
            "statusCode": 409,
            "message": "already seen"
        }))
        .unwrap();
        assert!(!envelope.status);
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.message, "already seen");
    }

    #[test]
    fn test_amenity_input_validation() {
        let mut input = AmenityInput::default();
        assert_eq!(
            input.validate(),
            Err(ApiError::Validation("Amenity key is required.".to_string()))
        );

        input.key = "wifi".to_string();
        input.label = " ".to_string();
        assert!(input.validate().is_err());

        input.label = "WiFi".to_string();
        assert!(input.validate().is_ok());
    }
}
