//! REST API handlers for project chat threads
//!
//! - GET  /api/projects/{project_id}/messages - Thread history
//! - POST /api/projects/{project_id}/messages - Insert a message
//!
//! Sending returns the created record; the sender's own panel renders it
//! when the insert event comes back over the feed socket.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use uuid::Uuid;

use crate::core::config::{Config, DEFAULT_CHAT_HISTORY_LIMIT, DEFAULT_CHAT_MAX_BODY_LEN};

use super::feed::FeedManager;
use super::protocol::*;

// ============================================================================
// Application State
// ============================================================================

/// Shared chat state handed to the REST and WebSocket routers.
#[derive(Clone)]
pub struct ChatState {
    pub feeds: Arc<FeedManager>,
    /// Longest accepted message body, in bytes
    pub max_body_len: usize,
}

impl ChatState {
    /// State with the built-in limits.
    pub fn new() -> Self {
        Self {
            feeds: Arc::new(FeedManager::new(DEFAULT_CHAT_HISTORY_LIMIT)),
            max_body_len: DEFAULT_CHAT_MAX_BODY_LEN,
        }
    }

    /// State with limits read from the environment.
    pub fn from_config(config: &Config) -> Self {
        Self {
            feeds: Arc::new(FeedManager::new(config.chat_history_limit)),
            max_body_len: config.chat_max_body_len,
        }
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Router
// ============================================================================

/// Create the chat API router.
pub fn chat_router(state: ChatState) -> Router {
    Router::new()
        .route(
            "/api/projects/{project_id}/messages",
            get(get_history).post(post_message),
        )
        .with_state(state)
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/projects/{project_id}/messages
///
/// Response: FeedHistoryResponse (200). Unknown projects respond with an
/// empty history; threads exist from the moment someone looks at them.
async fn get_history(
    State(state): State<ChatState>,
    Path(project_id): Path<Uuid>,
) -> impl IntoResponse {
    let feed = state.feeds.feed(project_id);
    let messages = feed.history().await;

    (
        StatusCode::OK,
        Json(FeedHistoryResponse {
            project_id,
            messages,
        }),
    )
        .into_response()
}

/// POST /api/projects/{project_id}/messages
///
/// Request body: SendMessageRequest
/// Response: ChatMessage (201 Created) or FeedError (400)
async fn post_message(
    State(state): State<ChatState>,
    Path(project_id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> impl IntoResponse {
    let sender = request.sender.trim();
    if sender.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(FeedError::bad_request("Sender must not be empty")),
        )
            .into_response();
    }

    let body = request.body.trim();
    if body.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(FeedError::empty_body())).into_response();
    }
    if body.len() > state.max_body_len {
        return (
            StatusCode::BAD_REQUEST,
            Json(FeedError::body_too_long(state.max_body_len)),
        )
            .into_response();
    }

    let feed = state.feeds.feed(project_id);
    let message = feed.insert(sender.to_string(), body.to_string()).await;

    (StatusCode::CREATED, Json(message)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        let state = ChatState::new();
        chat_router(state)
    }

    fn post_request(project_id: Uuid, payload: &SendMessageRequest) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/api/projects/{}/messages", project_id))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(payload).unwrap()))
            .unwrap()
    }

    async fn response_json<T: serde::de::DeserializeOwned>(
        response: axum::response::Response,
    ) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_post_then_get_history() {
        let app = create_test_app();
        let project_id = Uuid::new_v4();

        let request = SendMessageRequest {
            sender: "sarahcreates".to_string(),
            body: "Can we get a vertical crop too?".to_string(),
        };
        let response = app
            .clone()
            .oneshot(post_request(project_id, &request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created: ChatMessage = response_json(response).await;
        assert_eq!(created.project_id, project_id);
        assert_eq!(created.sender, "sarahcreates");

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/projects/{}/messages", project_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let history: FeedHistoryResponse = response_json(response).await;
        assert_eq!(history.project_id, project_id);
        assert_eq!(history.messages, vec![created]);
    }

    #[tokio::test]
    async fn test_unknown_project_has_empty_history() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/projects/{}/messages", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let history: FeedHistoryResponse = response_json(response).await;
        assert!(history.messages.is_empty());
    }

    #[tokio::test]
    async fn test_empty_body_is_rejected() {
        let app = create_test_app();
        let request = SendMessageRequest {
            sender: "sarahcreates".to_string(),
            body: "   ".to_string(),
        };

        let response = app
            .oneshot(post_request(Uuid::new_v4(), &request))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: FeedError = response_json(response).await;
        assert_eq!(error.code, FeedErrorCode::EmptyBody);
    }

    #[tokio::test]
    async fn test_missing_sender_is_rejected() {
        let app = create_test_app();
        let request = SendMessageRequest {
            sender: "".to_string(),
            body: "hello".to_string(),
        };

        let response = app
            .oneshot(post_request(Uuid::new_v4(), &request))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: FeedError = response_json(response).await;
        assert_eq!(error.code, FeedErrorCode::BadRequest);
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let state = ChatState {
            feeds: Arc::new(FeedManager::new(10)),
            max_body_len: 16,
        };
        let app = chat_router(state);

        let request = SendMessageRequest {
            sender: "sarahcreates".to_string(),
            body: "x".repeat(17),
        };
        let response = app
            .oneshot(post_request(Uuid::new_v4(), &request))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: FeedError = response_json(response).await;
        assert_eq!(error.code, FeedErrorCode::BodyTooLong);
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_client_error() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/projects/{}/messages", Uuid::new_v4()))
                    .header("Content-Type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
