//! WebSocket endpoint streaming feed events to chat panels
//!
//! Subscribers are read-only: messages are created over the REST endpoint
//! and arrive here as insert events. A panel that falls behind the
//! broadcast buffer gets a `FeedLagged` error event instead of the dropped
//! messages.
//!
//! WebSocket URL: ws(s)://{host}/chat/{project_id}

use axum::{
    extract::{
        Path, State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use super::api::ChatState;
use super::protocol::{FeedErrorCode, FeedEvent};

/// WebSocket upgrade handler
///
/// Feeds are created on first use, so any project id upgrades.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Path(project_id): Path<Uuid>,
    State(state): State<ChatState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, project_id, state))
}

/// Forward feed events to one socket until either side hangs up.
async fn handle_socket(socket: WebSocket, project_id: Uuid, state: ChatState) {
    let feed = state.feeds.feed(project_id);
    let mut events = feed.subscribe();

    let (mut ws_sender, mut ws_receiver) = socket.split();

    tracing::info!(project_id = %project_id, "chat subscriber connected");

    loop {
        tokio::select! {
            event = events.recv() => {
                let event = match event {
                    Ok(event) => event,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            project_id = %project_id,
                            skipped,
                            "feed subscriber lagged"
                        );
                        FeedEvent::error(
                            FeedErrorCode::FeedLagged,
                            format!("{skipped} events dropped"),
                        )
                    }
                    Err(RecvError::Closed) => break,
                };

                match serde_json::to_string(&event) {
                    Ok(json) => {
                        if ws_sender.send(Message::Text(json.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to serialize feed event: {}", e);
                    }
                }
            }
            incoming = ws_receiver.next() => {
                match incoming {
                    // Inbound traffic is only pings and the close handshake.
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(project_id = %project_id, "WebSocket error: {}", e);
                        break;
                    }
                }
            }
        }
    }

    tracing::info!(project_id = %project_id, "chat subscriber disconnected");
}
