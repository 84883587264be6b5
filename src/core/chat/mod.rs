//! Per-project chat backend
//!
//! Provides broadcast-backed message feeds with:
//! - REST history and send endpoints
//! - WebSocket streaming of insert events to subscribed panels
//! - Bounded in-memory history per project

#[cfg(feature = "ssr")]
mod api;
#[cfg(feature = "ssr")]
mod feed;
mod protocol;
#[cfg(feature = "ssr")]
mod websocket;

#[cfg(feature = "ssr")]
pub use api::*;
#[cfg(feature = "ssr")]
pub use feed::*;
pub use protocol::*;
#[cfg(feature = "ssr")]
pub use websocket::*;
