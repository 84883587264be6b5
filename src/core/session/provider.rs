//! Identity providers: where credentials are checked.
//!
//! The manager talks to an [`IdentityProvider`] and never to a concrete
//! backend. [`MockIdentityProvider`] carries the seeded credential records
//! the product ships with; [`RemoteIdentityProvider`] speaks to an HTTP
//! identity service with the same contract.

use serde::{Deserialize, Serialize};
use uuid::{Uuid, uuid};

use super::error::SessionError;
use super::model::{ChannelLink, Role, Session};

/// A seeded account in the mock backend. Records are read-only: sign-up
/// never inserts into this set.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialRecord {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub username: String,
    pub role: Role,
    pub avatar_url: Option<String>,
    pub channels: Vec<ChannelLink>,
}

impl CredentialRecord {
    /// The session handed out on a successful sign-in. Same id as the
    /// record; the password never leaves the provider.
    pub fn to_session(&self) -> Session {
        Session {
            id: self.id,
            email: self.email.clone(),
            username: self.username.clone(),
            role: self.role,
            avatar_url: self.avatar_url.clone(),
            channels: self.channels.clone(),
        }
    }
}

/// Payload for a sign-up, local or over the wire.
#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    pub role: Role,
}

#[allow(dead_code)]
#[derive(Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Error body the identity service responds with on failure.
#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
struct RemoteErrorBody {
    error: String,
    code: String,
}

/// Credential checking behind the session manager.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    /// Case-insensitive email lookup, exact password match.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SessionError>;

    /// Duplicate-checks the email, then synthesizes a fresh account.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Session, SessionError>;

    /// Best-effort notification that the user signed out.
    async fn sign_out(&self) -> Result<(), SessionError>;
}

// ============================================================================
// Mock provider
// ============================================================================

/// The seeded, in-process identity backend the site ships with.
#[derive(Debug, Clone)]
pub struct MockIdentityProvider {
    records: Vec<CredentialRecord>,
}

impl MockIdentityProvider {
    /// Provider over the product's seed accounts.
    pub fn seeded() -> Self {
        Self {
            records: seed_records(),
        }
    }

    /// Provider over a custom record set.
    pub fn with_records(records: Vec<CredentialRecord>) -> Self {
        Self { records }
    }

    fn find_by_email(&self, email: &str) -> Option<&CredentialRecord> {
        self.records
            .iter()
            .find(|record| record.email.eq_ignore_ascii_case(email))
    }
}

impl IdentityProvider for MockIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        // Unknown email and wrong password report the same error so the
        // form cannot be used to probe which addresses exist.
        match self.find_by_email(email) {
            Some(record) if record.password == password => Ok(record.to_session()),
            _ => Err(SessionError::InvalidCredentials),
        }
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Session, SessionError> {
        if self.find_by_email(&request.email).is_some() {
            return Err(SessionError::DuplicateEmail);
        }

        Ok(Session {
            id: Uuid::new_v4(),
            email: request.email.clone(),
            username: request.username.clone(),
            role: request.role,
            avatar_url: None,
            channels: vec![],
        })
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        Ok(())
    }
}

/// Accounts available out of the box. Stable ids so a persisted session
/// survives rebuilds of the seed set.
pub fn seed_records() -> Vec<CredentialRecord> {
    vec![
        CredentialRecord {
            id: uuid!("5b2a7c1e-4f3d-4b8a-9c6e-1d2f3a4b5c6d"),
            email: "sarah@creator.com".to_string(),
            password: "password123".to_string(),
            username: "sarahcreates".to_string(),
            role: Role::Booker,
            avatar_url: None,
            channels: vec![],
        },
        CredentialRecord {
            id: uuid!("8e4d9f2a-6b1c-4e7d-8a3f-2c5b6d7e8f9a"),
            email: "alex@editor.com".to_string(),
            password: "editpass456".to_string(),
            username: "alexcuts".to_string(),
            role: Role::Creator,
            avatar_url: Some("https://cdn.clipbridge.io/avatars/alexcuts.png".to_string()),
            channels: vec![ChannelLink {
                id: "UC-alexcuts-daily".to_string(),
                title: "AlexCuts Daily".to_string(),
                subscribers: 48_200,
                total_views: 9_400_000,
                video_count: 312,
            }],
        },
        CredentialRecord {
            id: uuid!("3c6e1a9b-7d2f-4c5a-b8e4-9f0a1b2c3d4e"),
            email: "jordan@clipworks.io".to_string(),
            password: "shipitfriday".to_string(),
            username: "jordanclips".to_string(),
            role: Role::Creator,
            avatar_url: None,
            channels: vec![
                ChannelLink {
                    id: "UC-clipworks-main".to_string(),
                    title: "ClipWorks".to_string(),
                    subscribers: 112_000,
                    total_views: 31_200_000,
                    video_count: 540,
                },
                ChannelLink {
                    id: "UC-clipworks-shorts".to_string(),
                    title: "ClipWorks Shorts".to_string(),
                    subscribers: 27_400,
                    total_views: 6_800_000,
                    video_count: 198,
                },
            ],
        },
    ]
}

// ============================================================================
// Remote provider
// ============================================================================

/// Identity backend over HTTP, for deployments with a real auth service.
/// The wire contract matches the mock: a session body on success, an
/// `{error, code}` body on failure.
#[derive(Debug, Clone)]
pub struct RemoteIdentityProvider {
    base_url: String,
}

impl RemoteIdentityProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl IdentityProvider for RemoteIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        self.login(email, password).await
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Session, SessionError> {
        self.register(request).await
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        self.logout().await
    }
}

impl RemoteIdentityProvider {
    #[cfg(not(feature = "ssr"))]
    async fn login(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        use gloo_net::http::Request;

        let body = SignInRequest { email, password };
        match Request::post(&self.endpoint("/api/auth/login"))
            .header("Content-Type", "application/json")
            .json(&body)
        {
            Ok(request) => match request.send().await {
                Ok(response) => {
                    if response.ok() {
                        response.json::<Session>().await.map_err(|_| {
                            SessionError::remote("Malformed response from identity service")
                        })
                    } else {
                        Err(remote_error(response).await)
                    }
                }
                Err(_) => Err(SessionError::remote("Network error. Please try again.")),
            },
            Err(_) => Err(SessionError::remote("Failed to encode sign-in request")),
        }
    }

    #[cfg(feature = "ssr")]
    async fn login(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        let _ = (email, password);
        Err(SessionError::remote(
            "Identity service is only reachable from the browser",
        ))
    }

    #[cfg(not(feature = "ssr"))]
    async fn register(&self, request: &SignUpRequest) -> Result<Session, SessionError> {
        use gloo_net::http::Request;

        match Request::post(&self.endpoint("/api/auth/register"))
            .header("Content-Type", "application/json")
            .json(request)
        {
            Ok(request) => match request.send().await {
                Ok(response) => {
                    if response.ok() {
                        response.json::<Session>().await.map_err(|_| {
                            SessionError::remote("Malformed response from identity service")
                        })
                    } else {
                        Err(remote_error(response).await)
                    }
                }
                Err(_) => Err(SessionError::remote("Network error. Please try again.")),
            },
            Err(_) => Err(SessionError::remote("Failed to encode sign-up request")),
        }
    }

    #[cfg(feature = "ssr")]
    async fn register(&self, request: &SignUpRequest) -> Result<Session, SessionError> {
        let _ = request;
        Err(SessionError::remote(
            "Identity service is only reachable from the browser",
        ))
    }

    #[cfg(not(feature = "ssr"))]
    async fn logout(&self) -> Result<(), SessionError> {
        use gloo_net::http::Request;

        match Request::post(&self.endpoint("/api/auth/logout")).send().await {
            Ok(response) if response.ok() => Ok(()),
            Ok(response) => Err(SessionError::remote(format!(
                "Identity service returned {}",
                response.status()
            ))),
            Err(_) => Err(SessionError::remote("Network error during sign-out")),
        }
    }

    #[cfg(feature = "ssr")]
    async fn logout(&self) -> Result<(), SessionError> {
        Err(SessionError::remote(
            "Identity service is only reachable from the browser",
        ))
    }
}

#[cfg(not(feature = "ssr"))]
async fn remote_error(response: gloo_net::http::Response) -> SessionError {
    let status = response.status();
    match response.json::<RemoteErrorBody>().await {
        Ok(body) => match body.code.as_str() {
            "invalid_credentials" => SessionError::InvalidCredentials,
            "duplicate_email" => SessionError::DuplicateEmail,
            _ => SessionError::remote(body.error),
        },
        Err(_) => SessionError::remote(format!("Identity service returned {status}")),
    }
}

// ============================================================================
// Backend dispatch
// ============================================================================

/// The concrete provider a manager is constructed with.
#[derive(Debug, Clone)]
pub enum IdentityBackend {
    Mock(MockIdentityProvider),
    Remote(RemoteIdentityProvider),
}

impl IdentityBackend {
    pub fn mock() -> Self {
        IdentityBackend::Mock(MockIdentityProvider::seeded())
    }

    pub fn remote(base_url: impl Into<String>) -> Self {
        IdentityBackend::Remote(RemoteIdentityProvider::new(base_url))
    }
}

impl IdentityProvider for IdentityBackend {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        match self {
            IdentityBackend::Mock(provider) => provider.sign_in(email, password).await,
            IdentityBackend::Remote(provider) => provider.sign_in(email, password).await,
        }
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Session, SessionError> {
        match self {
            IdentityBackend::Mock(provider) => provider.sign_up(request).await,
            IdentityBackend::Remote(provider) => provider.sign_up(request).await,
        }
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        match self {
            IdentityBackend::Mock(provider) => provider.sign_out().await,
            IdentityBackend::Remote(provider) => provider.sign_out().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_in_matches_seeded_record() {
        let provider = MockIdentityProvider::seeded();
        let session = provider
            .sign_in("sarah@creator.com", "password123")
            .await
            .unwrap();

        assert_eq!(session.username, "sarahcreates");
        assert_eq!(session.role, Role::Booker);
        assert!(session.channels.is_empty());
    }

    #[tokio::test]
    async fn test_sign_in_email_is_case_insensitive() {
        let provider = MockIdentityProvider::seeded();
        let session = provider
            .sign_in("SARAH@Creator.COM", "password123")
            .await
            .unwrap();
        assert_eq!(session.email, "sarah@creator.com");
    }

    #[tokio::test]
    async fn test_sign_in_password_is_exact() {
        let provider = MockIdentityProvider::seeded();
        let err = provider
            .sign_in("sarah@creator.com", "PASSWORD123")
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_unknown_email_reports_invalid_credentials() {
        let provider = MockIdentityProvider::seeded();
        let err = provider
            .sign_in("nobody@example.com", "password123")
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_session_never_carries_the_password() {
        let record = seed_records().remove(1);
        let session = record.to_session();
        assert_eq!(session.id, record.id);
        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("editpass456"));
    }

    #[tokio::test]
    async fn test_sign_up_rejects_seeded_email_case_insensitively() {
        let provider = MockIdentityProvider::seeded();
        let request = SignUpRequest {
            email: "Alex@Editor.com".to_string(),
            password: "newpass".to_string(),
            username: "someone".to_string(),
            role: Role::Creator,
        };
        let err = provider.sign_up(&request).await.unwrap_err();
        assert_eq!(err, SessionError::DuplicateEmail);
    }

    #[tokio::test]
    async fn test_sign_up_synthesizes_a_fresh_account() {
        let provider = MockIdentityProvider::seeded();
        let request = SignUpRequest {
            email: "new@brand.com".to_string(),
            password: "secret".to_string(),
            username: "newbrand".to_string(),
            role: Role::Booker,
        };

        let session = provider.sign_up(&request).await.unwrap();
        assert_eq!(session.email, "new@brand.com");
        assert_eq!(session.role, Role::Booker);
        assert!(session.channels.is_empty());
        assert!(session.avatar_url.is_none());
        for record in seed_records() {
            assert_ne!(session.id, record.id);
        }

        // The seed set is read-only: the new account does not become
        // signable-in.
        let err = provider
            .sign_in("new@brand.com", "secret")
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_backend_delegates_to_mock() {
        let backend = IdentityBackend::mock();
        let session = backend
            .sign_in("jordan@clipworks.io", "shipitfriday")
            .await
            .unwrap();
        assert_eq!(session.channels.len(), 2);
        assert_eq!(session.channels[0].title, "ClipWorks");
        assert!(backend.sign_out().await.is_ok());
    }

    #[tokio::test]
    async fn test_remote_endpoint_joins_paths() {
        let provider = RemoteIdentityProvider::new("https://id.clipbridge.io/");
        assert_eq!(
            provider.endpoint("/api/auth/login"),
            "https://id.clipbridge.io/api/auth/login"
        );
    }
}
