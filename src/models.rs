//! Domain models for service requests.

use serde::{Deserialize, Serialize};

/// Kind of work a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    Maintenance,
    Gardening,
    Cleaning,
}

/// Workflow status of a request, including how the UI renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    pub letter: String,
    pub name: String,
    pub system_name: String,
    pub color: String,
    pub fore_color: String,
}

impl Status {
    /// Initial status of a freshly drafted request.
    pub fn pending() -> Self {
        Self {
            id: String::new(),
            letter: "P".to_string(),
            name: "Pending".to_string(),
            system_name: "Pending".to_string(),
            color: String::new(),
            fore_color: String::new(),
        }
    }
}

/// List-level summary of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    pub id: String,
    pub subject: String,
    pub subtitle: String,
    pub status: Status,
}

/// Full request record as shown in the details and edit views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedItem {
    pub id: String,
    pub subject: String,
    pub subtitle: String,
    pub description: String,
    pub contact_name: String,
    pub contact: String,
    pub service: Option<ServiceType>,
    pub status: Status,
    pub future_status: Vec<Status>,
}

impl DetailedItem {
    /// Blank record for a new request of the given service type, starting
    /// in Pending status.
    pub fn empty(service: ServiceType) -> Self {
        Self {
            id: String::new(),
            subject: String::new(),
            subtitle: String::new(),
            description: String::new(),
            contact_name: String::new(),
            contact: String::new(),
            service: Some(service),
            status: Status::pending(),
            future_status: Vec::new(),
        }
    }

    /// Overlay a list summary onto a blank record. Detail-only fields stay
    /// empty until a full load fills them in.
    pub fn from_summary(summary: RequestItem) -> Self {
        Self {
            id: summary.id,
            subject: summary.subject,
            subtitle: summary.subtitle,
            description: String::new(),
            contact_name: String::new(),
            contact: String::new(),
            service: None,
            status: summary.status,
            future_status: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_item_is_pending_and_tagged() {
        let item = DetailedItem::empty(ServiceType::Gardening);
        assert_eq!(item.service, Some(ServiceType::Gardening));
        assert_eq!(item.status.system_name, "Pending");
        assert_eq!(item.status.letter, "P");
        assert!(item.id.is_empty());
    }

    #[test]
    fn from_summary_keeps_identity_and_status() {
        let summary = RequestItem {
            id: "42".to_string(),
            subject: "Broken sprinkler".to_string(),
            subtitle: "Garden, north side".to_string(),
            status: Status::pending(),
        };
        let item = DetailedItem::from_summary(summary.clone());
        assert_eq!(item.id, summary.id);
        assert_eq!(item.subject, summary.subject);
        assert_eq!(item.status, summary.status);
        assert!(item.description.is_empty());
        assert_eq!(item.service, None);
    }
}
