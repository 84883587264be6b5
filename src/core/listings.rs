//! Seeded creator listings shown on the landing showcase and the
//! authenticated dashboard. Listing ids are what the bookmark set stores.

use serde::{Deserialize, Serialize};

/// Service category a listing is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingCategory {
    Clips,
    Editing,
    Captions,
    Trailers,
}

impl ListingCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ListingCategory::Clips => "Short-form clips",
            ListingCategory::Editing => "Video editing",
            ListingCategory::Captions => "Captions & subtitles",
            ListingCategory::Trailers => "Trailers & promos",
        }
    }
}

/// One bookable service offered by a creator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub creator: String,
    pub category: ListingCategory,
    pub price_usd: u32,
    pub rating: f32,
    pub delivery_days: u32,
    pub completed_orders: u32,
}

/// The catalog the site ships with.
pub fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "listing-viral-clips".to_string(),
            title: "60-second viral clips from your long-form".to_string(),
            creator: "alexcuts".to_string(),
            category: ListingCategory::Clips,
            price_usd: 45,
            rating: 4.9,
            delivery_days: 2,
            completed_orders: 412,
        },
        Listing {
            id: "listing-podcast-highlights".to_string(),
            title: "Podcast highlights, cut for Shorts & Reels".to_string(),
            creator: "jordanclips".to_string(),
            category: ListingCategory::Clips,
            price_usd: 60,
            rating: 4.8,
            delivery_days: 3,
            completed_orders: 263,
        },
        Listing {
            id: "listing-full-edit".to_string(),
            title: "Full YouTube video edit, raw to publish".to_string(),
            creator: "jordanclips".to_string(),
            category: ListingCategory::Editing,
            price_usd: 220,
            rating: 5.0,
            delivery_days: 5,
            completed_orders: 98,
        },
        Listing {
            id: "listing-brand-captions".to_string(),
            title: "Hard-coded captions with brand fonts".to_string(),
            creator: "subsbymaya".to_string(),
            category: ListingCategory::Captions,
            price_usd: 25,
            rating: 4.7,
            delivery_days: 1,
            completed_orders: 780,
        },
        Listing {
            id: "listing-gaming-montage".to_string(),
            title: "Gaming montage editing, 24h turnaround".to_string(),
            creator: "framefreddy".to_string(),
            category: ListingCategory::Editing,
            price_usd: 90,
            rating: 4.6,
            delivery_days: 1,
            completed_orders: 154,
        },
        Listing {
            id: "listing-tiktok-demos".to_string(),
            title: "Product demo clips for TikTok Shop".to_string(),
            creator: "clipqueenrita".to_string(),
            category: ListingCategory::Clips,
            price_usd: 75,
            rating: 4.9,
            delivery_days: 2,
            completed_orders: 201,
        },
        Listing {
            id: "listing-channel-trailer".to_string(),
            title: "Channel trailer that converts".to_string(),
            creator: "studionora".to_string(),
            category: ListingCategory::Trailers,
            price_usd: 180,
            rating: 4.8,
            delivery_days: 4,
            completed_orders: 67,
        },
        Listing {
            id: "listing-multilingual-subs".to_string(),
            title: "Multilingual subtitles (EN/ES/PT)".to_string(),
            creator: "subsbymaya".to_string(),
            category: ListingCategory::Captions,
            price_usd: 40,
            rating: 4.9,
            delivery_days: 2,
            completed_orders: 342,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let listings = seed_listings();
        let ids: HashSet<_> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), listings.len());
    }

    #[test]
    fn test_seed_entries_are_presentable() {
        for listing in seed_listings() {
            assert!(!listing.title.is_empty());
            assert!(!listing.creator.is_empty());
            assert!(listing.price_usd > 0);
            assert!(listing.rating > 0.0 && listing.rating <= 5.0);
            assert!(!listing.category.display_name().is_empty());
        }
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&ListingCategory::Clips).unwrap();
        assert_eq!(json, "\"clips\"");
    }
}
