use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A focus session as logged by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusSessionRecord {
    pub id: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<i64>,
    #[serde(default)]
    pub blocked_notifications: bool,
}

impl FocusSessionRecord {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.end_time.is_none()
    }
}

/// Body of `POST /focus/start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusStartRequest {
    pub blocked_notifications: bool,
    pub start_time: DateTime<Utc>,
}

/// Body of `POST /focus/end`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusEndRequest {
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_start_response() {
        let json = r#"{
            "id": "66f0",
            "user_id": "u1",
            "start_time": "2024-05-01T09:00:00",
            "end_time": null,
            "duration_seconds": null,
            "blocked_notifications": true
        }"#;
        let record: FocusSessionRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_open());
        assert!(record.blocked_notifications);
    }

    #[test]
    fn test_record_from_end_response() {
        let json = r#"{"id": "66f0", "end_time": "2024-05-01T09:25:00", "duration_seconds": 1500}"#;
        let record: FocusSessionRecord = serde_json::from_str(json).unwrap();
        assert!(!record.is_open());
        assert_eq!(record.duration_seconds, Some(1500));
    }

    #[test]
    fn test_start_request_wire_shape() {
        let start_time = DateTime::parse_from_rfc3339("2024-05-01T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let req = FocusStartRequest {
            blocked_notifications: false,
            start_time,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["blocked_notifications"], false);
        assert_eq!(json["start_time"], "2024-05-01T09:00:00Z");
    }
}
