use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};

/// A blessing left by a visitor. Stored newest-first in browser-local
/// storage as a JSON array; the id is the creation timestamp in epoch
/// milliseconds, so list order matches insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestWish {
    pub id: i64,
    pub name: String,
    pub message: String,
    #[serde(default)]
    pub relationship: String,
    pub date: String,
}

impl GuestWish {
    /// Build a wish from form input. A blank name becomes "Anonymous";
    /// the message is assumed non-empty (the service validates it).
    pub fn new(name: &str, message: &str, relationship: &str) -> Self {
        let name = name.trim();
        Self {
            id: Utc::now().timestamp_millis(),
            name: if name.is_empty() {
                "Anonymous".to_string()
            } else {
                name.to_string()
            },
            message: message.trim().to_string(),
            relationship: relationship.trim().to_string(),
            date: Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_defaults_to_anonymous() {
        let wish = GuestWish::new("   ", "So happy for you both!", "");
        assert_eq!(wish.name, "Anonymous");
        assert_eq!(wish.message, "So happy for you both!");
        assert_eq!(wish.relationship, "");
    }

    #[test]
    fn test_given_name_is_kept() {
        let wish = GuestWish::new(" Meera ", "Congrats!", "Friend");
        assert_eq!(wish.name, "Meera");
        assert_eq!(wish.relationship, "Friend");
        assert_eq!(wish.date.len(), 10);
    }

    #[test]
    fn test_parses_stored_record_without_relationship() {
        let raw = r#"{"id": 1700000000000, "name": "Ravi", "message": "Bless you", "date": "2025-08-30"}"#;
        let wish: GuestWish = serde_json::from_str(raw).unwrap();
        assert_eq!(wish.relationship, "");
        assert_eq!(wish.id, 1_700_000_000_000);
    }
}
