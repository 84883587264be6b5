//! The session manager: rehydration, sign-in, sign-up and sign-out over an
//! identity provider and a storage backend.
//!
//! All storage writes for the session and bookmark keys happen here.
//! Components call through [`crate::ui::session::SessionContext`] and never
//! touch storage directly, so the state machine has exactly four inputs:
//! restore, sign_in, sign_up and sign_out. Overlapping calls are not
//! serialized; the last write wins.

use super::error::SessionError;
use super::model::{Session, SessionState};
use super::provider::{IdentityBackend, IdentityProvider, SignUpRequest};
use super::storage::{BOOKMARKS_KEY, SESSION_KEY, StorageBackend};

/// Artificial delays applied to the auth operations so the UI's pending
/// states are visible against the in-process mock backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub sign_in_ms: u32,
    pub sign_up_ms: u32,
    pub sign_out_ms: u32,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            sign_in_ms: 800,
            sign_up_ms: 800,
            sign_out_ms: 300,
        }
    }
}

impl Latency {
    /// Zero delays, for tests.
    pub fn none() -> Self {
        Self {
            sign_in_ms: 0,
            sign_up_ms: 0,
            sign_out_ms: 0,
        }
    }
}

async fn simulated_delay(ms: u32) {
    if ms == 0 {
        return;
    }
    #[cfg(not(feature = "ssr"))]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(feature = "ssr")]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// Owns the auth state transitions and the two storage keys.
#[derive(Debug, Clone)]
pub struct SessionManager {
    provider: IdentityBackend,
    storage: StorageBackend,
    latency: Latency,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(
            IdentityBackend::mock(),
            StorageBackend::default(),
            Latency::default(),
        )
    }
}

impl SessionManager {
    pub fn new(provider: IdentityBackend, storage: StorageBackend, latency: Latency) -> Self {
        Self {
            provider,
            storage,
            latency,
        }
    }

    pub fn storage(&self) -> &StorageBackend {
        &self.storage
    }

    /// Reads the persisted session without recovery. A value that does not
    /// parse is reported as [`SessionError::StorageCorrupt`].
    pub fn read_persisted(&self) -> Result<Option<Session>, SessionError> {
        match self.storage.get(SESSION_KEY) {
            None => Ok(None),
            Some(raw) => serde_json::from_str::<Session>(&raw)
                .map(Some)
                .map_err(|_| SessionError::StorageCorrupt),
        }
    }

    /// Boot-time rehydration. Never fails: a corrupt value is logged,
    /// both keys are cleared and the result is no-session. Bookmarks
    /// written next to a corrupt session are not trusted either.
    pub fn restore(&self) -> SessionState {
        match self.read_persisted() {
            Ok(Some(session)) => SessionState::Authenticated(session),
            Ok(None) => SessionState::Unauthenticated,
            Err(_) => {
                leptos::logging::warn!("stored session did not parse, clearing auth state");
                self.clear_persisted();
                SessionState::Unauthenticated
            }
        }
    }

    /// Checks credentials and persists the resulting session. On failure
    /// storage is untouched.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        simulated_delay(self.latency.sign_in_ms).await;
        let session = self.provider.sign_in(email, password).await?;
        self.persist(&session);
        Ok(session)
    }

    /// Creates an account and persists its session. A duplicate email
    /// leaves storage exactly as it was.
    pub async fn sign_up(&self, request: SignUpRequest) -> Result<Session, SessionError> {
        simulated_delay(self.latency.sign_up_ms).await;
        let session = self.provider.sign_up(&request).await?;
        self.persist(&session);
        Ok(session)
    }

    /// Signs out. Never fails and holds nothing back: the provider is
    /// notified best-effort, then both storage keys are removed whether or
    /// not that notification succeeded, and whether or not a session was
    /// present to begin with.
    pub async fn sign_out(&self) {
        simulated_delay(self.latency.sign_out_ms).await;
        if let Err(err) = self.provider.sign_out().await {
            leptos::logging::warn!("sign-out notification failed: {}", err);
        }
        self.clear_persisted();
    }

    fn persist(&self, session: &Session) {
        if let Ok(json) = serde_json::to_string(session) {
            self.storage.set(SESSION_KEY, &json);
        }
    }

    fn clear_persisted(&self) {
        self.storage.remove(SESSION_KEY);
        self.storage.remove(BOOKMARKS_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::model::Role;
    use crate::core::session::provider::seed_records;
    use crate::core::session::storage::MemoryStore;

    fn test_manager() -> SessionManager {
        SessionManager::new(
            IdentityBackend::mock(),
            StorageBackend::memory(),
            Latency::none(),
        )
    }

    fn manager_over(store: MemoryStore) -> SessionManager {
        SessionManager::new(
            IdentityBackend::mock(),
            StorageBackend::Memory(store),
            Latency::none(),
        )
    }

    // ========================================================================
    // Sign-in
    // ========================================================================

    #[tokio::test]
    async fn test_sign_in_resolves_seeded_booker() {
        let manager = test_manager();
        let session = manager
            .sign_in("sarah@creator.com", "password123")
            .await
            .unwrap();

        assert_eq!(session.role, Role::Booker);
        assert_eq!(session.username, "sarahcreates");

        // Persisted under the session key with the record's id.
        let stored = manager.storage().get(SESSION_KEY).unwrap();
        let parsed: Session = serde_json::from_str(&stored).unwrap();
        assert_eq!(parsed.id, seed_records()[0].id);
        assert_eq!(parsed, session);
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password_leaves_storage_untouched() {
        let manager = test_manager();
        let err = manager
            .sign_in("sarah@creator.com", "wrongpass")
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::InvalidCredentials);
        assert_eq!(manager.storage().get(SESSION_KEY), None);
    }

    #[tokio::test]
    async fn test_failed_sign_in_keeps_the_previous_session() {
        let manager = test_manager();
        manager
            .sign_in("alex@editor.com", "editpass456")
            .await
            .unwrap();
        let before = manager.storage().get(SESSION_KEY).unwrap();

        let err = manager
            .sign_in("alex@editor.com", "nope")
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::InvalidCredentials);
        assert_eq!(manager.storage().get(SESSION_KEY), Some(before));
    }

    #[tokio::test]
    async fn test_sign_in_email_lookup_ignores_case() {
        let manager = test_manager();
        let session = manager
            .sign_in("Sarah@CREATOR.com", "password123")
            .await
            .unwrap();
        assert_eq!(session.email, "sarah@creator.com");
    }

    // ========================================================================
    // Rehydration
    // ========================================================================

    #[tokio::test]
    async fn test_fresh_rehydration_reproduces_the_session() {
        let store = MemoryStore::new();
        let manager = manager_over(store.clone());
        let session = manager
            .sign_in("alex@editor.com", "editpass456")
            .await
            .unwrap();

        // A brand new manager over the same storage sees the same value.
        let rebooted = manager_over(store);
        assert_eq!(
            rebooted.restore(),
            SessionState::Authenticated(session.clone())
        );
        assert_eq!(session.channels.len(), 1);
    }

    #[test]
    fn test_restore_with_no_stored_session_is_unauthenticated() {
        let manager = test_manager();
        assert_eq!(manager.restore(), SessionState::Unauthenticated);
    }

    #[test]
    fn test_restore_clears_corrupt_storage_silently() {
        let manager = test_manager();
        manager.storage().set(SESSION_KEY, "{not valid json");
        manager.storage().set(BOOKMARKS_KEY, "[\"listing-1\"]");

        assert_eq!(manager.restore(), SessionState::Unauthenticated);
        assert_eq!(manager.storage().get(SESSION_KEY), None);
        assert_eq!(manager.storage().get(BOOKMARKS_KEY), None);
    }

    #[test]
    fn test_read_persisted_reports_corruption() {
        let manager = test_manager();
        manager.storage().set(SESSION_KEY, "42");
        assert_eq!(
            manager.read_persisted().unwrap_err(),
            SessionError::StorageCorrupt
        );
    }

    // ========================================================================
    // Sign-up
    // ========================================================================

    #[tokio::test]
    async fn test_sign_up_duplicate_email_does_not_mutate_storage() {
        let manager = test_manager();
        manager
            .sign_in("sarah@creator.com", "password123")
            .await
            .unwrap();
        let before = manager.storage().get(SESSION_KEY).unwrap();

        let err = manager
            .sign_up(SignUpRequest {
                email: "alex@editor.com".to_string(),
                password: "whatever".to_string(),
                username: "impostor".to_string(),
                role: Role::Creator,
            })
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::DuplicateEmail);
        assert_eq!(manager.storage().get(SESSION_KEY), Some(before));
    }

    #[tokio::test]
    async fn test_sign_up_persists_a_fresh_session() {
        let manager = test_manager();
        let session = manager
            .sign_up(SignUpRequest {
                email: "pat@brandhouse.co".to_string(),
                password: "letmein".to_string(),
                username: "brandhouse".to_string(),
                role: Role::Booker,
            })
            .await
            .unwrap();

        assert!(session.channels.is_empty());
        for record in seed_records() {
            assert_ne!(session.id, record.id);
        }

        let stored = manager.storage().get(SESSION_KEY).unwrap();
        let parsed: Session = serde_json::from_str(&stored).unwrap();
        assert_eq!(parsed, session);
    }

    // ========================================================================
    // Sign-out
    // ========================================================================

    #[tokio::test]
    async fn test_sign_out_clears_both_keys() {
        let manager = test_manager();
        manager
            .sign_in("sarah@creator.com", "password123")
            .await
            .unwrap();
        manager.storage().set(BOOKMARKS_KEY, "[\"listing-1\",\"listing-2\"]");

        manager.sign_out().await;

        assert_eq!(manager.storage().get(SESSION_KEY), None);
        assert_eq!(manager.storage().get(BOOKMARKS_KEY), None);
    }

    #[tokio::test]
    async fn test_sign_out_while_signed_out_still_clears() {
        let manager = test_manager();
        // Never signed in, but a stale bookmarks value is lying around.
        manager.storage().set(BOOKMARKS_KEY, "[\"stale\"]");

        manager.sign_out().await;
        manager.sign_out().await;

        assert_eq!(manager.storage().get(SESSION_KEY), None);
        assert_eq!(manager.storage().get(BOOKMARKS_KEY), None);
    }

    #[tokio::test]
    async fn test_sign_out_clears_even_when_the_provider_fails() {
        // The remote provider cannot reach the browser fetch API from a
        // native test, so its sign-out reliably errors. The clear must
        // happen anyway and the call must not propagate the failure.
        let manager = SessionManager::new(
            IdentityBackend::remote("https://id.clipbridge.io"),
            StorageBackend::memory(),
            Latency::none(),
        );
        manager.storage().set(SESSION_KEY, "{}");
        manager.storage().set(BOOKMARKS_KEY, "[]");

        manager.sign_out().await;

        assert_eq!(manager.storage().get(SESSION_KEY), None);
        assert_eq!(manager.storage().get(BOOKMARKS_KEY), None);
    }

    // ========================================================================
    // Latency knobs
    // ========================================================================

    #[test]
    fn test_latency_defaults() {
        let latency = Latency::default();
        assert_eq!(latency.sign_in_ms, 800);
        assert_eq!(latency.sign_up_ms, 800);
        assert_eq!(latency.sign_out_ms, 300);

        assert_eq!(Latency::none().sign_in_ms, 0);
    }

    #[tokio::test]
    async fn test_operations_run_with_nonzero_latency() {
        let manager = SessionManager::new(
            IdentityBackend::mock(),
            StorageBackend::memory(),
            Latency {
                sign_in_ms: 5,
                sign_up_ms: 5,
                sign_out_ms: 5,
            },
        );
        let session = manager
            .sign_in("jordan@clipworks.io", "shipitfriday")
            .await
            .unwrap();
        assert_eq!(session.username, "jordanclips");
        manager.sign_out().await;
        assert_eq!(manager.storage().get(SESSION_KEY), None);
    }
}
