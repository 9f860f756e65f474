//! Managed resources and their REST paths

use serde::{Deserialize, Serialize};

/// A collection managed by the admin console
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    #[default]
    Properties,
    Amenities,
    CorporateUsers,
    Enquiries,
    Requirements,
}

impl Resource {
    /// All resources in tab order
    pub const ALL: [Resource; 5] = [
        Resource::Properties,
        Resource::Amenities,
        Resource::CorporateUsers,
        Resource::Enquiries,
        Resource::Requirements,
    ];

    /// Path segment under the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::Amenities => "amenities",
            Self::CorporateUsers => "corporate-users",
            Self::Enquiries => "enquiries",
            Self::Requirements => "requirements",
        }
    }

    /// Plural display label (tab title)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Properties => "Properties",
            Self::Amenities => "Amenities",
            Self::CorporateUsers => "Corporate Users",
            Self::Enquiries => "Enquiries",
            Self::Requirements => "Requirements",
        }
    }

    /// Singular display label
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Properties => "Property",
            Self::Amenities => "Amenity",
            Self::CorporateUsers => "Corporate user",
            Self::Enquiries => "Enquiry",
            Self::Requirements => "Requirement",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|r| r == self).unwrap_or(0)
    }

    /// Next resource in tab order (wraps)
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous resource in tab order (wraps)
    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}
