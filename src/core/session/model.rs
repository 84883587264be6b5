//! Session and credential types shared by the auth state machine and the
//! identity providers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which side of the marketplace an account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Brand side: posts projects and books creators.
    Booker,
    /// Creator side: takes on clipping and editing work.
    Creator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Booker => "booker",
            Role::Creator => "creator",
        }
    }

    /// Human-facing label used in navigation and headings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Booker => "Brand",
            Role::Creator => "Creator",
        }
    }
}

/// A channel linked to a creator account, with its public stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelLink {
    pub id: String,
    pub title: String,
    pub subscribers: u64,
    pub total_views: u64,
    pub video_count: u32,
}

/// The signed-in identity as the client sees it. This is the exact value
/// serialized into localStorage, so field changes are wire changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub avatar_url: Option<String>,
    /// Linked channels in the order the account added them.
    pub channels: Vec<ChannelLink>,
}

/// Client auth state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Initial state, rehydration from storage has not finished
    #[default]
    Unknown,
    /// No session
    Unauthenticated,
    /// Signed in, carries the session value
    Authenticated(Session),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Booker).unwrap();
        assert_eq!(json, "\"booker\"");
        let json = serde_json::to_string(&Role::Creator).unwrap();
        assert_eq!(json, "\"creator\"");
    }

    #[test]
    fn test_role_round_trip() {
        let role: Role = serde_json::from_str("\"booker\"").unwrap();
        assert_eq!(role, Role::Booker);
    }

    #[test]
    fn test_session_state_accessors() {
        let session = Session {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            username: "tester".to_string(),
            role: Role::Creator,
            avatar_url: None,
            channels: vec![],
        };

        let state = SessionState::Authenticated(session.clone());
        assert!(state.is_authenticated());
        assert_eq!(state.session().map(|s| s.username.as_str()), Some("tester"));

        assert!(!SessionState::Unauthenticated.is_authenticated());
        assert!(SessionState::Unknown.session().is_none());
        assert_eq!(SessionState::default(), SessionState::Unknown);
    }

    #[test]
    fn test_session_serialization_keeps_channel_order() {
        let session = Session {
            id: Uuid::new_v4(),
            email: "creator@example.com".to_string(),
            username: "channels".to_string(),
            role: Role::Creator,
            avatar_url: Some("https://cdn.example.com/a.png".to_string()),
            channels: vec![
                ChannelLink {
                    id: "ch-1".to_string(),
                    title: "First".to_string(),
                    subscribers: 10,
                    total_views: 100,
                    video_count: 1,
                },
                ChannelLink {
                    id: "ch-2".to_string(),
                    title: "Second".to_string(),
                    subscribers: 20,
                    total_views: 200,
                    video_count: 2,
                },
            ],
        };

        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
        assert_eq!(parsed.channels[0].id, "ch-1");
        assert_eq!(parsed.channels[1].id, "ch-2");
    }
}
