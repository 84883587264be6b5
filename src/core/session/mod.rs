//! Session domain: the client auth state machine and everything behind it
//!
//! Provides:
//! - The session model persisted to localStorage
//! - An identity-provider interface with seeded mock and HTTP backends
//! - The manager owning restore/sign-in/sign-up/sign-out transitions

mod error;
mod manager;
mod model;
mod provider;
mod storage;

pub use error::SessionError;
pub use manager::{Latency, SessionManager};
pub use model::{ChannelLink, Role, Session, SessionState};
pub use provider::{
    CredentialRecord, IdentityBackend, IdentityProvider, MockIdentityProvider,
    RemoteIdentityProvider, SignUpRequest, seed_records,
};
pub use storage::{BOOKMARKS_KEY, MemoryStore, SESSION_KEY, StorageBackend};
