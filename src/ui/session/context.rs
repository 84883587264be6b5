//! Session context for managing sign-in state across the component tree
//!
//! This module provides a reactive session context that:
//! - Mirrors the persisted session into signals the UI can react to
//! - Exposes the sign-in, sign-up and sign-out flows
//! - Restores the stored session once after hydration

use leptos::prelude::*;

use crate::core::session::{
    Session, SessionError, SessionManager, SessionState, SignUpRequest, StorageBackend,
};

/// Session context providing authentication state and actions
///
/// All state transitions go through the wrapped [`SessionManager`], so the
/// signals here never disagree with what localStorage holds.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current session state
    pub state: RwSignal<SessionState>,
    /// Whether a sign-in, sign-up or sign-out call is in flight
    pub pending: RwSignal<bool>,
    /// Error message from the last operation
    pub error: RwSignal<Option<String>>,
    manager: StoredValue<SessionManager>,
}

impl SessionContext {
    /// Check if a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated()
    }

    /// Get the current session (if signed in)
    pub fn session(&self) -> Option<Session> {
        match self.state.get() {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Storage backend the manager persists to
    ///
    /// Bookmarks live next to the session, in the same backend, so
    /// sign-out can clear both keys together.
    pub fn storage(&self) -> StorageBackend {
        self.manager.get_value().storage().clone()
    }

    /// Sign in with email and password
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        self.pending.set(true);
        self.error.set(None);

        let result = self.manager.get_value().sign_in(email, password).await;

        self.pending.set(false);
        match &result {
            Ok(session) => self.state.set(SessionState::Authenticated(session.clone())),
            Err(err) => self.error.set(Some(err.to_string())),
        }
        result
    }

    /// Register a new account
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<Session, SessionError> {
        self.pending.set(true);
        self.error.set(None);

        let result = self.manager.get_value().sign_up(request.clone()).await;

        self.pending.set(false);
        match &result {
            Ok(session) => self.state.set(SessionState::Authenticated(session.clone())),
            Err(err) => self.error.set(Some(err.to_string())),
        }
        result
    }

    /// Sign out the current user
    ///
    /// Never fails: local state is cleared even when the provider
    /// notification does not go through.
    pub async fn sign_out(&self) {
        self.pending.set(true);
        self.manager.get_value().sign_out().await;
        self.pending.set(false);
        self.state.set(SessionState::Unauthenticated);
    }
}

/// Provide session context to the component tree using the default manager
pub fn provide_session_context() -> SessionContext {
    provide_session_context_with(SessionManager::default())
}

/// Provide session context backed by a specific manager
///
/// Swapping the manager swaps both the credential backend and the
/// persistence target, which is how tests run against in-memory storage.
pub fn provide_session_context_with(manager: SessionManager) -> SessionContext {
    // Start with Unauthenticated on both server and client to avoid hydration mismatch
    let state = RwSignal::new(SessionState::Unauthenticated);
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let manager = StoredValue::new(manager);

    let ctx = SessionContext {
        state,
        pending,
        error,
        manager,
    };

    // Restore the persisted session after hydration (client-side only)
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            state.set(SessionState::Unknown);
            state.set(manager.get_value().restore());
        });
    }

    provide_context(ctx);
    ctx
}

/// Get session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
