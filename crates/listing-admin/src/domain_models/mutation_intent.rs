//! Mutation intents
//!
//! A confirmed alert carries its side effect as data rather than as a
//! closure. The intent is interpreted by the API middleware once, after the
//! user confirms.

use admin_client::{AmenityInput, Resource};
use admin_config::AppConfig;

/// Kind of mutation requested on the item under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Delete,
    MarkSeen,
}

/// A deferred mutation, executed only on explicit confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationIntent {
    /// Delete one entity of a resource
    Delete {
        resource: Resource,
        id: String,
        label: String,
    },
    /// Mark an enquiry as seen
    MarkSeen { id: String, label: String },
    /// Create an amenity from the form
    CreateAmenity(AmenityInput),
    /// Update an existing amenity from the form
    UpdateAmenity { id: String, input: AmenityInput },
}

impl MutationIntent {
    /// Title of the confirmation dialog
    pub fn confirm_title(&self) -> String {
        match self {
            Self::Delete { resource, .. } => format!("Delete {}", resource.singular()),
            Self::MarkSeen { .. } => "Mark as seen".to_string(),
            Self::CreateAmenity(_) => "Create amenity".to_string(),
            Self::UpdateAmenity { .. } => "Update amenity".to_string(),
        }
    }

    /// Question shown in the confirmation alert
    pub fn confirm_message(&self, config: &AppConfig) -> String {
        match self {
            Self::Delete { label, .. } => config.delete_confirmation(label),
            Self::MarkSeen { label, .. } => config.mark_seen_confirmation(label),
            Self::CreateAmenity(input) => {
                format!("Create amenity \"{}\" ({})?", input.label, input.key)
            }
            Self::UpdateAmenity { input, .. } => {
                format!("Save changes to amenity \"{}\"?", input.label)
            }
        }
    }

    /// Present-progressive verb for the status bar (e.g. "Deleting")
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Delete { .. } => "Deleting",
            Self::MarkSeen { .. } => "Marking as seen",
            Self::CreateAmenity(_) => "Creating",
            Self::UpdateAmenity { .. } => "Updating",
        }
    }

    /// Name of the affected entity
    pub fn target(&self) -> &str {
        match self {
            Self::Delete { label, .. } | Self::MarkSeen { label, .. } => label,
            Self::CreateAmenity(input) | Self::UpdateAmenity { input, .. } => &input.label,
        }
    }

    /// Message shown when the server confirms without one of its own
    pub fn default_success_message(&self) -> String {
        match self {
            Self::Delete { resource, .. } => format!("{} deleted.", resource.singular()),
            Self::MarkSeen { .. } => "Enquiry marked as seen.".to_string(),
            Self::CreateAmenity(_) => "Amenity created.".to_string(),
            Self::UpdateAmenity { .. } => "Amenity updated.".to_string(),
        }
    }

    /// Whether the intent came from the amenity form
    pub fn is_form_submission(&self) -> bool {
        matches!(self, Self::CreateAmenity(_) | Self::UpdateAmenity { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_titles_use_singular_resource() {
        let intent = MutationIntent::Delete {
            resource: Resource::CorporateUsers,
            id: "9".to_string(),
            label: "Initech".to_string(),
        };
        assert_eq!(intent.confirm_title(), "Delete Corporate user");
        assert_eq!(intent.default_success_message(), "Corporate user deleted.");
        assert_eq!(intent.target(), "Initech");
        assert!(!intent.is_form_submission());
    }

    #[test]
    fn test_form_intents() {
        let input = AmenityInput {
            key: "wifi".to_string(),
            label: "WiFi".to_string(),
            icon: None,
        };
        let intent = MutationIntent::UpdateAmenity {
            id: "a1".to_string(),
            input,
        };
        assert!(intent.is_form_submission());
        assert_eq!(intent.target(), "WiFi");
    }
}
