use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored text payload. Items are created and listed, never updated or
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// `content` must already be trimmed and non-empty.
    pub fn new(content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_items_get_distinct_ids() {
        let a = Item::new("first".to_string());
        let b = Item::new("second".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn new_stamps_creation_time() {
        let before = Utc::now();
        let item = Item::new("hello".to_string());
        let after = Utc::now();
        assert!(item.created_at >= before && item.created_at <= after);
    }
}
