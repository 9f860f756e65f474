//! List entity model
//!
//! How each managed resource is searched, categorized and shown in a table.

use admin_client::{Amenity, CorporateUser, Enquiry, Property, Record, Requirement, Resource};

/// An entity that can be listed, searched and filtered
pub trait ListEntity {
    /// Human-readable name used in confirmations
    fn display_name(&self) -> &str;

    /// Fields matched (case-insensitively, by substring) by the search box
    fn search_fields(&self) -> Vec<&str>;

    /// Value matched by the category/status filter
    fn category(&self) -> Option<&str>;

    /// Table cells, in the order of [`column_headers`]
    fn cells(&self) -> Vec<String>;
}

impl ListEntity for Property {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.city.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.city.clone(),
            self.category.clone(),
            self.status.clone(),
        ]
    }
}

impl ListEntity for Amenity {
    fn display_name(&self) -> &str {
        if self.label.is_empty() {
            &self.key
        } else {
            &self.label
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.key.as_str(), self.label.as_str()]
    }

    fn category(&self) -> Option<&str> {
        None
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.key.clone(),
            self.label.clone(),
            self.icon.clone().unwrap_or_default(),
        ]
    }
}

impl ListEntity for CorporateUser {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.company_name.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.company_name.clone(),
            self.status.clone(),
        ]
    }
}

impl ListEntity for Enquiry {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.property_name.as_str(),
        ]
    }

    fn category(&self) -> Option<&str> {
        Some(if self.seen { "seen" } else { "unseen" })
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.property_name.clone(),
            if self.seen { "✓" } else { "•" }.to_string(),
        ]
    }
}

impl ListEntity for Requirement {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.city.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.city.clone(),
            self.seats.to_string(),
            self.status.clone(),
        ]
    }
}

fn as_entity(record: &Record) -> &dyn ListEntity {
    match record {
        Record::Property(p) => p,
        Record::Amenity(a) => a,
        Record::CorporateUser(u) => u,
        Record::Enquiry(e) => e,
        Record::Requirement(r) => r,
    }
}

impl ListEntity for Record {
    fn display_name(&self) -> &str {
        as_entity(self).display_name()
    }

    fn search_fields(&self) -> Vec<&str> {
        as_entity(self).search_fields()
    }

    fn category(&self) -> Option<&str> {
        as_entity(self).category()
    }

    fn cells(&self) -> Vec<String> {
        as_entity(self).cells()
    }
}

/// Table column headers of a resource
pub fn column_headers(resource: Resource) -> &'static [&'static str] {
    match resource {
        Resource::Properties => &["Name", "City", "Category", "Status"],
        Resource::Amenities => &["Key", "Label", "Icon"],
        Resource::CorporateUsers => &["Name", "Email", "Company", "Status"],
        Resource::Enquiries => &["Name", "Email", "Property", "Seen"],
        Resource::Requirements => &["Name", "City", "Seats", "Status"],
    }
}

/// Category/status filter options of a resource, in cycling order
pub fn filter_options(resource: Resource) -> &'static [&'static str] {
    match resource {
        Resource::Properties => &["coworking", "private_office", "meeting_room", "virtual_office"],
        Resource::Amenities => &[],
        Resource::CorporateUsers => &["active", "inactive", "pending"],
        Resource::Enquiries => &["unseen", "seen"],
        Resource::Requirements => &["open", "in_progress", "closed"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enquiry(seen: bool) -> Record {
        Record::Enquiry(Enquiry {
            id: "e1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            message: String::new(),
            property_name: "Harbour Hub".to_string(),
            seen,
        })
    }

    #[test]
    fn test_enquiry_category_reflects_seen_flag() {
        assert_eq!(enquiry(false).category(), Some("unseen"));
        assert_eq!(enquiry(true).category(), Some("seen"));
    }

    #[test]
    fn test_cells_match_headers() {
        let record = enquiry(false);
        assert_eq!(
            record.cells().len(),
            column_headers(Resource::Enquiries).len()
        );
    }

    #[test]
    fn test_amenity_display_name_falls_back_to_key() {
        let amenity = Amenity {
            id: "a1".to_string(),
            key: "parking".to_string(),
            label: String::new(),
            icon: None,
        };
        assert_eq!(amenity.display_name(), "parking");
    }

    #[test]
    fn test_amenities_have_no_filter_options() {
        assert!(filter_options(Resource::Amenities).is_empty());
        assert_eq!(filter_options(Resource::Enquiries), &["unseen", "seen"]);
    }
}
