//! Per-project message feeds: history plus a live broadcast of inserts.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{RwLock, broadcast};
use uuid::Uuid;

use super::protocol::{ChatMessage, FeedEvent};

/// Broadcast capacity per feed. A subscriber that falls further behind
/// than this starts losing events; delivery is at-least-once, not
/// guaranteed-complete.
const BROADCAST_CAPACITY: usize = 256;

/// One project's thread: the retained history and its live subscribers.
pub struct ProjectFeed {
    pub project_id: Uuid,
    /// Oldest first, trimmed to `history_limit`
    messages: RwLock<Vec<ChatMessage>>,
    history_limit: usize,
    broadcast_tx: broadcast::Sender<FeedEvent>,
}

impl ProjectFeed {
    pub fn new(project_id: Uuid, history_limit: usize) -> Self {
        let (broadcast_tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            project_id,
            messages: RwLock::new(Vec::new()),
            history_limit,
            broadcast_tx,
        }
    }

    /// Creates the record server-side (id and timestamp), appends it to
    /// history and fans an insert event out to every subscriber.
    pub async fn insert(&self, sender: String, body: String) -> ChatMessage {
        let message = ChatMessage {
            id: Uuid::new_v4(),
            project_id: self.project_id,
            sender,
            body,
            sent_at: chrono::Utc::now().to_rfc3339(),
        };

        {
            let mut messages = self.messages.write().await;
            messages.push(message.clone());
            if messages.len() > self.history_limit {
                let excess = messages.len() - self.history_limit;
                messages.drain(..excess);
            }
        }

        // send() errs only when there are no subscribers, which is fine:
        // history already has the record.
        let _ = self.broadcast_tx.send(FeedEvent::inserted(message.clone()));

        tracing::debug!(
            project_id = %self.project_id,
            message_id = %message.id,
            "message inserted"
        );

        message
    }

    /// Snapshot of the retained history, oldest first.
    pub async fn history(&self) -> Vec<ChatMessage> {
        self.messages.read().await.clone()
    }

    /// New live subscription. Events inserted after this call are
    /// delivered in insertion order.
    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.broadcast_tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.broadcast_tx.receiver_count()
    }
}

/// All live feeds, keyed by project id.
pub struct FeedManager {
    feeds: DashMap<Uuid, Arc<ProjectFeed>>,
    history_limit: usize,
}

impl FeedManager {
    pub fn new(history_limit: usize) -> Self {
        Self {
            feeds: DashMap::new(),
            history_limit,
        }
    }

    /// The feed for a project, created on first use.
    pub fn feed(&self, project_id: Uuid) -> Arc<ProjectFeed> {
        self.feeds
            .entry(project_id)
            .or_insert_with(|| {
                tracing::info!(project_id = %project_id, "creating project feed");
                Arc::new(ProjectFeed::new(project_id, self.history_limit))
            })
            .clone()
    }

    pub fn feed_count(&self) -> usize {
        self.feeds.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_feed() -> ProjectFeed {
        ProjectFeed::new(Uuid::new_v4(), 50)
    }

    #[tokio::test]
    async fn test_insert_creates_the_record() {
        let feed = create_test_feed();
        let message = feed
            .insert("sarahcreates".to_string(), "First cut looks great".to_string())
            .await;

        assert_eq!(message.project_id, feed.project_id);
        assert_eq!(message.sender, "sarahcreates");
        assert!(chrono::DateTime::parse_from_rfc3339(&message.sent_at).is_ok());

        let history = feed.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0], message);
    }

    #[tokio::test]
    async fn test_history_keeps_insertion_order() {
        let feed = create_test_feed();
        feed.insert("a".to_string(), "one".to_string()).await;
        feed.insert("b".to_string(), "two".to_string()).await;
        feed.insert("a".to_string(), "three".to_string()).await;

        let bodies: Vec<_> = feed
            .history()
            .await
            .into_iter()
            .map(|m| m.body)
            .collect();
        assert_eq!(bodies, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_history_trims_to_limit() {
        let feed = ProjectFeed::new(Uuid::new_v4(), 3);
        for n in 1..=5 {
            feed.insert("a".to_string(), format!("msg {n}")).await;
        }

        let bodies: Vec<_> = feed
            .history()
            .await
            .into_iter()
            .map(|m| m.body)
            .collect();
        assert_eq!(bodies, vec!["msg 3", "msg 4", "msg 5"]);
    }

    #[tokio::test]
    async fn test_subscribers_receive_insert_events() {
        let feed = create_test_feed();
        let mut rx = feed.subscribe();
        assert_eq!(feed.subscriber_count(), 1);

        let inserted = feed
            .insert("alexcuts".to_string(), "uploading v2 now".to_string())
            .await;

        match rx.recv().await.unwrap() {
            FeedEvent::Inserted { message } => assert_eq!(message, inserted),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_insert_without_subscribers_still_lands_in_history() {
        let feed = create_test_feed();
        assert_eq!(feed.subscriber_count(), 0);
        feed.insert("a".to_string(), "nobody listening".to_string())
            .await;
        assert_eq!(feed.history().await.len(), 1);
    }

    #[tokio::test]
    async fn test_manager_reuses_feeds_per_project() {
        let manager = FeedManager::new(50);
        let project_id = Uuid::new_v4();

        let first = manager.feed(project_id);
        let second = manager.feed(project_id);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(manager.feed_count(), 1);

        manager.feed(Uuid::new_v4());
        assert_eq!(manager.feed_count(), 2);
    }
}
