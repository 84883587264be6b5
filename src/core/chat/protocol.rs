//! Wire types for project chat threads.
//!
//! Shared between the Axum handlers and the browser panel, so every type
//! here is serde round-trippable and stable: field changes are wire
//! changes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One message in a project thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub project_id: Uuid,
    /// Display name of the author
    pub sender: String,
    pub body: String,
    /// RFC 3339 creation time, assigned by the server
    pub sent_at: String,
}

/// Body of `POST /api/projects/{project_id}/messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub sender: String,
    pub body: String,
}

/// Response of `GET /api/projects/{project_id}/messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedHistoryResponse {
    pub project_id: Uuid,
    pub messages: Vec<ChatMessage>,
}

// ============================================================================
// Feed events (WebSocket)
// ============================================================================

/// Event pushed to every feed subscriber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum FeedEvent {
    /// A message was inserted into the thread. Delivery is at-least-once;
    /// subscribers append every event they receive without deduplicating.
    Inserted { message: ChatMessage },

    /// The subscriber fell behind and events were dropped
    Error { code: FeedErrorCode, message: String },
}

impl FeedEvent {
    pub fn inserted(message: ChatMessage) -> Self {
        Self::Inserted { message }
    }

    pub fn error(code: FeedErrorCode, message: impl Into<String>) -> Self {
        Self::Error {
            code,
            message: message.into(),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Feed error codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeedErrorCode {
    EmptyBody,
    BodyTooLong,
    BadRequest,
    FeedLagged,
}

/// REST error payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedError {
    pub error: String,
    pub code: FeedErrorCode,
}

impl FeedError {
    pub fn empty_body() -> Self {
        Self {
            error: "Message body must not be empty".to_string(),
            code: FeedErrorCode::EmptyBody,
        }
    }

    pub fn body_too_long(limit: usize) -> Self {
        Self {
            error: format!("Message body exceeds {limit} bytes"),
            code: FeedErrorCode::BodyTooLong,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: FeedErrorCode::BadRequest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_message() -> ChatMessage {
        ChatMessage {
            id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            sender: "sarahcreates".to_string(),
            body: "Can you trim the intro to 5 seconds?".to_string(),
            sent_at: "2025-11-04T12:30:00Z".to_string(),
        }
    }

    // ========================================================================
    // FeedEvent Tests
    // ========================================================================

    #[test]
    fn test_inserted_event_round_trip() {
        let message = sample_message();
        let event = FeedEvent::inserted(message.clone());

        let json = serde_json::to_string(&event).unwrap();
        let parsed: FeedEvent = serde_json::from_str(&json).unwrap();

        match parsed {
            FeedEvent::Inserted { message: got } => {
                assert_eq!(got, message);
            }
            _ => panic!("Wrong event type"),
        }
    }

    #[test]
    fn test_events_are_externally_tagged() {
        let event = FeedEvent::inserted(sample_message());
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains("\"type\":\"Inserted\""));
        assert!(json.contains("\"payload\""));
    }

    #[test]
    fn test_error_event_serialization() {
        let event = FeedEvent::error(FeedErrorCode::FeedLagged, "events dropped");
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains("feed_lagged"));
        assert!(json.contains("events dropped"));
    }

    // ========================================================================
    // FeedError Tests
    // ========================================================================

    #[test]
    fn test_error_codes_serialize_snake_case() {
        let err = FeedError::empty_body();
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("empty_body"));

        let err = FeedError::body_too_long(1000);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("body_too_long"));
        assert!(json.contains("1000 bytes"));
    }

    #[test]
    fn test_history_response_round_trip() {
        let message = sample_message();
        let response = FeedHistoryResponse {
            project_id: message.project_id,
            messages: vec![message.clone()],
        };

        let json = serde_json::to_string(&response).unwrap();
        let parsed: FeedHistoryResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.project_id, message.project_id);
        assert_eq!(parsed.messages.len(), 1);
        assert_eq!(parsed.messages[0].sender, "sarahcreates");
    }

    #[test]
    fn test_send_request_deserializes_from_client_json() {
        let json = r#"{"sender":"brandhouse","body":"Looks great, approved."}"#;
        let request: SendMessageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.sender, "brandhouse");
        assert_eq!(request.body, "Looks great, approved.");
    }
}
