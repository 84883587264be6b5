//! Core domain models and business logic for the marketplace client

pub mod bookmarks;
pub mod chat;
#[cfg(feature = "ssr")]
pub mod config;
pub mod listings;
pub mod session;
