//! Request and response types for history operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted lookup. Owned by exactly one user from creation until
/// deletion, never updated in place.
#[derive(ToSchema, Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ip: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub loc: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for saving a lookup. Only the ip is required.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct NewHistory {
    #[serde(default)]
    pub ip: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub loc: Option<String>,
}

/// Payload for bulk deletion.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct DeleteHistory {
    pub ids: Vec<Uuid>,
}

/// Bulk deletion outcome. `deleted` counts the records actually removed,
/// ids owned by other users do not contribute.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Deleted {
    pub message: String,
    pub deleted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_defaults_optional_fields() {
        let new: NewHistory = serde_json::from_str(r#"{"ip":"1.2.3.4"}"#).unwrap();

        assert_eq!(new.ip, "1.2.3.4");
        assert!(new.city.is_none());
        assert!(new.country.is_none());
        assert!(new.region.is_none());
        assert!(new.loc.is_none());
    }

    #[test]
    fn test_new_history_missing_ip_deserializes_empty() {
        // The handler rejects the empty ip, the payload itself still parses
        let new: NewHistory = serde_json::from_str(r#"{"city":"Paris"}"#).unwrap();

        assert!(new.ip.is_empty());
        assert_eq!(new.city.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_delete_history_requires_a_collection() {
        assert!(serde_json::from_str::<DeleteHistory>(r#"{"ids":"abc"}"#).is_err());
        assert!(serde_json::from_str::<DeleteHistory>(r#"{}"#).is_err());
        assert!(serde_json::from_str::<DeleteHistory>(r#"{"ids":[]}"#).is_ok());
    }

    #[test]
    fn test_history_record_serializes_all_fields() {
        let record = HistoryRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            ip: "1.2.3.4".to_string(),
            city: Some("Paris".to_string()),
            country: None,
            region: None,
            loc: Some("48.8534,2.3488".to_string()),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["ip"], "1.2.3.4");
        assert_eq!(value["city"], "Paris");
        assert!(value["country"].is_null());
        assert!(value.get("created_at").is_some());
    }
}
