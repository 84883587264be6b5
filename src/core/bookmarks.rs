//! Bookmarked listings, persisted next to the session.
//!
//! The set lives under its own storage key so the dashboard can restore it
//! without parsing the session. Signing out removes the key (see
//! [`crate::core::session::SessionManager::sign_out`]).

use std::collections::HashSet;

use crate::core::session::{BOOKMARKS_KEY, StorageBackend};

/// Reads the bookmarked listing ids. A value that does not parse degrades
/// to an empty set rather than failing the caller.
pub fn load_bookmarks(storage: &StorageBackend) -> HashSet<String> {
    match storage.get(BOOKMARKS_KEY) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        None => HashSet::new(),
    }
}

/// Writes the full set under the bookmarks key.
pub fn save_bookmarks(storage: &StorageBackend, bookmarks: &HashSet<String>) {
    if let Ok(json) = serde_json::to_string(bookmarks) {
        storage.set(BOOKMARKS_KEY, &json);
    }
}

/// Flips one listing in or out of the set and persists the result.
/// Returns the new set so callers can update their signal from it.
pub fn toggle_bookmark(storage: &StorageBackend, listing_id: &str) -> HashSet<String> {
    let mut bookmarks = load_bookmarks(storage);
    if !bookmarks.remove(listing_id) {
        bookmarks.insert(listing_id.to_string());
    }
    save_bookmarks(storage, &bookmarks);
    bookmarks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_key_is_empty() {
        let storage = StorageBackend::memory();
        assert!(load_bookmarks(&storage).is_empty());
    }

    #[test]
    fn test_toggle_round_trips_through_storage() {
        let storage = StorageBackend::memory();

        let set = toggle_bookmark(&storage, "listing-7");
        assert!(set.contains("listing-7"));
        assert!(load_bookmarks(&storage).contains("listing-7"));

        let set = toggle_bookmark(&storage, "listing-7");
        assert!(set.is_empty());
        assert!(load_bookmarks(&storage).is_empty());
    }

    #[test]
    fn test_corrupt_value_degrades_to_empty() {
        let storage = StorageBackend::memory();
        storage.set(BOOKMARKS_KEY, "{\"wrong\":\"shape\"}");
        assert!(load_bookmarks(&storage).is_empty());
    }

    #[test]
    fn test_toggle_keeps_other_entries() {
        let storage = StorageBackend::memory();
        toggle_bookmark(&storage, "a");
        toggle_bookmark(&storage, "b");
        let set = toggle_bookmark(&storage, "a");

        assert!(!set.contains("a"));
        assert!(set.contains("b"));
    }
}
