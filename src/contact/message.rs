//! Envelope for submitted contact form values

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A validated contact form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    /// Field wire name -> entered value
    pub fields: BTreeMap<String, String>,
}

impl ContactMessage {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            fields,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContactMessage {
        let mut fields = BTreeMap::new();
        fields.insert("firstName".to_string(), "Ada".to_string());
        fields.insert("email".to_string(), "ada@example.com".to_string());
        ContactMessage::new(fields)
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn test_get_returns_field_value() {
        let message = sample();
        assert_eq!(message.get("firstName"), Some("Ada"));
        assert_eq!(message.get("phone"), None);
    }

    #[test]
    fn test_serializes_fields_as_object() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["fields"]["email"], "ada@example.com");
        assert!(json["id"].is_string());
        assert!(json["submitted_at"].is_string());
    }
}
