//! Dashboard page component
//!
//! The authenticated home: per-project chat threads, the creator catalog
//! with a persisted shortlist, and channel stats for creator accounts.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use uuid::{Uuid, uuid};

use crate::core::bookmarks::toggle_bookmark;
use crate::core::listings::{Listing, seed_listings};
use crate::core::session::{ChannelLink, SessionState};
use crate::ui::chat_panel::ChatPanel;
use crate::ui::icon::{Icon, icons};
use crate::ui::session::{UserMenu, use_session_context};
use crate::ui::theme::{ThemeMode, use_theme_context};

/// A demo project thread every account can talk in.
struct DemoProject {
    id: Uuid,
    name: &'static str,
    brief: &'static str,
}

/// Stable ids: every browser joins the same feeds.
fn demo_projects() -> Vec<DemoProject> {
    vec![
        DemoProject {
            id: uuid!("7b1d61ee-93c2-4b31-a2cf-3bd6d9e0f101"),
            name: "Summer launch clips",
            brief: "Six 30-second cuts for TikTok and Reels",
        },
        DemoProject {
            id: uuid!("c4a8f0d2-5e17-4f6b-9b08-2f90a1b7e202"),
            name: "Podcast highlights",
            brief: "Weekly highlight reel from Tuesday's episode",
        },
        DemoProject {
            id: uuid!("f39e2ab7-0c44-4d95-8d61-54c7e8a9d303"),
            name: "UGC caption pass",
            brief: "Captions and hooks for twelve creator submissions",
        },
    ]
}

/// Compact counter for channel stats, 12_400 renders as "12.4k".
fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}k", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session_context();
    let theme = use_theme_context();

    // Only signed-in accounts get a dashboard. Unknown means restore is
    // still running, so hold off instead of bouncing a valid session.
    Effect::new(move |_| {
        if session.state.get() == SessionState::Unauthenticated {
            let navigate = use_navigate();
            navigate("/signin", Default::default());
        }
    });

    let selected_project = RwSignal::new(0usize);
    let bookmarks = RwSignal::new(HashSet::<String>::new());

    // The shortlist comes out of storage once the browser is driving
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        bookmarks.set(crate::core::bookmarks::load_bookmarks(&session.storage()));
    });

    let on_toggle = Callback::new(move |listing_id: String| {
        bookmarks.set(toggle_bookmark(&session.storage(), &listing_id));
    });

    view! {
        <div class="min-h-screen bg-theme-primary">
            // Header
            <header class="sticky top-0 z-40 bg-theme-primary/80 backdrop-blur-md border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        // Logo
                        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                                <svg class="w-5 h-5 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                          d="M15 10l4.553-2.276A1 1 0 0121 8.618v6.764a1 1 0 01-1.447.894L15 14M5 18h8a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v8a2 2 0 002 2z" />
                                </svg>
                            </div>
                            <span class="text-xl font-bold text-theme-primary">"ClipBridge"</span>
                        </A>

                        <div class="flex items-center gap-3">
                            // Theme toggle
                            <button
                                class="p-2 rounded-lg hover:bg-theme-secondary transition-colors text-theme-secondary"
                                on:click=move |_| theme.toggle()
                                title="Toggle theme"
                            >
                                {move || {
                                    if theme.mode.get() == ThemeMode::Dark {
                                        view! {
                                            <Icon name=icons::SUN class="w-5 h-5" />
                                        }
                                    } else {
                                        view! {
                                            <Icon name=icons::MOON class="w-5 h-5" />
                                        }
                                    }
                                }}
                            </button>

                            <UserMenu />
                        </div>
                    </div>
                </div>
            </header>

            // Main content
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                // Greeting
                <div class="mb-8">
                    <div class="flex flex-wrap items-center gap-3">
                        <h1 class="text-2xl font-bold text-theme-primary">
                            {move || match session.session() {
                                Some(active) => format!("Welcome back, {}", active.username),
                                None => "Welcome back".to_string(),
                            }}
                        </h1>
                        {move || {
                            session
                                .session()
                                .map(|active| {
                                    view! {
                                        <span class="px-2.5 py-1 rounded-full text-xs font-medium bg-accent-primary/10 text-accent-primary">
                                            {active.role.display_name()}
                                        </span>
                                    }
                                })
                        }}
                    </div>
                    <p class="mt-1 text-theme-secondary">
                        "Here is what's moving on your projects."
                    </p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8 mb-12">
                    // Project threads
                    <section class="lg:col-span-2">
                        <h2 class="text-lg font-semibold text-theme-primary mb-4">"Project Threads"</h2>

                        <div class="flex flex-wrap gap-2 mb-4">
                            {demo_projects()
                                .into_iter()
                                .enumerate()
                                .map(|(index, project)| {
                                    view! {
                                        <button
                                            class=move || {
                                                if selected_project.get() == index {
                                                    "text-left px-4 py-2 rounded-lg border border-accent-primary bg-accent-primary/10 transition-colors"
                                                } else {
                                                    "text-left px-4 py-2 rounded-lg border border-theme hover:border-accent-primary/50 transition-colors"
                                                }
                                            }
                                            on:click=move |_| selected_project.set(index)
                                        >
                                            <span class="block text-sm font-medium text-theme-primary">{project.name}</span>
                                            <span class="block text-xs text-theme-tertiary">{project.brief}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        // Rebuilding the panel on selection tears down the old feed
                        {move || {
                            let projects = demo_projects();
                            let index = selected_project.get().min(projects.len() - 1);
                            let project = &projects[index];
                            view! {
                                <div class="h-[32rem]">
                                    <ChatPanel project_id=project.id title=project.name />
                                </div>
                            }
                        }}
                    </section>

                    // Sidebar
                    <aside class="space-y-6">
                        {move || {
                            session
                                .session()
                                .filter(|active| !active.channels.is_empty())
                                .map(|active| {
                                    view! { <ChannelsCard channels=active.channels /> }
                                })
                        }}

                        <ShortlistCard bookmarks=bookmarks on_toggle=on_toggle />
                    </aside>
                </div>

                // Catalog
                <section>
                    <div class="flex items-center justify-between mb-4">
                        <h2 class="text-lg font-semibold text-theme-primary">"Creator Catalog"</h2>
                        <span class="text-sm text-theme-tertiary">
                            {move || {
                                let saved = bookmarks.with(|set| set.len());
                                if saved == 1 {
                                    "1 saved".to_string()
                                } else {
                                    format!("{} saved", saved)
                                }
                            }}
                        </span>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                        {seed_listings()
                            .into_iter()
                            .map(|listing| {
                                view! { <CatalogCard listing=listing bookmarks=bookmarks on_toggle=on_toggle /> }
                            })
                            .collect_view()}
                    </div>
                </section>
            </main>

            // Footer
            <footer class="py-6 border-t border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <p class="text-center text-sm text-theme-tertiary">
                        "© 2026 ClipBridge. All rights reserved."
                    </p>
                </div>
            </footer>
        </div>
    }
}

/// Channel stats for creator accounts
#[component]
fn ChannelsCard(channels: Vec<ChannelLink>) -> impl IntoView {
    view! {
        <div class="bg-theme-secondary border border-theme rounded-xl p-5">
            <h3 class="text-sm font-semibold text-theme-primary mb-4">"Your Channels"</h3>
            <div class="space-y-4">
                {channels
                    .into_iter()
                    .map(|channel| {
                        view! {
                            <div>
                                <p class="text-sm font-medium text-theme-primary">{channel.title}</p>
                                <div class="mt-1 flex items-center gap-3 text-xs text-theme-tertiary">
                                    <span>{format!("{} subs", format_count(channel.subscribers))}</span>
                                    <span>{format!("{} views", format_count(channel.total_views))}</span>
                                    <span>{format!("{} videos", channel.video_count)}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Saved listings, kept in storage under the bookmarks key
#[component]
fn ShortlistCard(
    bookmarks: RwSignal<HashSet<String>>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="bg-theme-secondary border border-theme rounded-xl p-5">
            <h3 class="text-sm font-semibold text-theme-primary mb-4">"Your Shortlist"</h3>
            {move || {
                let saved: Vec<Listing> = seed_listings()
                    .into_iter()
                    .filter(|listing| bookmarks.with(|set| set.contains(&listing.id)))
                    .collect();
                if saved.is_empty() {
                    view! {
                        <p class="text-sm text-theme-tertiary">
                            "Nothing saved yet. Bookmark listings from the catalog to build a shortlist."
                        </p>
                    }
                        .into_any()
                } else {
                    view! {
                        <ul class="space-y-3">
                            {saved
                                .into_iter()
                                .map(|listing| {
                                    let listing_id = listing.id.clone();
                                    view! {
                                        <li class="flex items-start justify-between gap-2">
                                            <div>
                                                <p class="text-sm text-theme-primary">{listing.title.clone()}</p>
                                                <p class="text-xs text-theme-tertiary">
                                                    {format!("@{} · ${}", listing.creator, listing.price_usd)}
                                                </p>
                                            </div>
                                            <button
                                                class="p-1 rounded hover:bg-theme-tertiary transition-colors"
                                                on:click=move |_| on_toggle.run(listing_id.clone())
                                                title="Remove from shortlist"
                                            >
                                                <Icon name=icons::X class="w-4 h-4" />
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// One bookable listing with its shortlist toggle
#[component]
fn CatalogCard(
    listing: Listing,
    bookmarks: RwSignal<HashSet<String>>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    let listing_id = listing.id.clone();
    let toggle_id = listing.id.clone();
    let bookmarked = Memo::new(move |_| bookmarks.with(|set| set.contains(&listing_id)));

    let initial = listing.creator.chars().next().unwrap_or('?').to_uppercase().to_string();

    view! {
        <div class="bg-theme-secondary border border-theme rounded-xl p-5 hover:border-accent-primary/50 transition-colors">
            <div class="flex items-start justify-between gap-3">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-full bg-accent-primary/10 flex items-center justify-center text-accent-primary font-semibold">
                        {initial}
                    </div>
                    <div>
                        <p class="text-sm font-medium text-theme-primary">{format!("@{}", listing.creator)}</p>
                        <span class="text-xs text-theme-tertiary">{listing.category.display_name()}</span>
                    </div>
                </div>

                <button
                    class=move || {
                        if bookmarked.get() {
                            "p-2 rounded-lg bg-accent-primary/10 transition-colors"
                        } else {
                            "p-2 rounded-lg hover:bg-theme-tertiary transition-colors"
                        }
                    }
                    on:click=move |_| on_toggle.run(toggle_id.clone())
                    title=move || {
                        if bookmarked.get() { "Remove from shortlist" } else { "Save to shortlist" }
                    }
                >
                    <Icon name=icons::BOOKMARK class="w-5 h-5" />
                </button>
            </div>

            <h3 class="mt-4 text-theme-primary font-medium leading-snug">{listing.title.clone()}</h3>

            <div class="mt-3 flex items-center gap-4 text-xs text-theme-tertiary">
                <span class="flex items-center gap-1">
                    <Icon name=icons::STAR class="w-3.5 h-3.5" />
                    {format!("{:.1}", listing.rating)}
                </span>
                <span>{format!("{}-day delivery", listing.delivery_days)}</span>
                <span>{format!("{} orders", listing.completed_orders)}</span>
            </div>

            <div class="mt-4 pt-4 border-t border-theme flex items-center justify-between">
                <span class="text-xs text-theme-tertiary">"From"</span>
                <span class="text-lg font-bold text-theme-primary">{format!("${}", listing.price_usd)}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_count_scales_units() {
        assert_eq!(format_count(412), "412");
        assert_eq!(format_count(12_400), "12.4k");
        assert_eq!(format_count(3_450_000), "3.5M");
    }

    #[test]
    fn demo_projects_have_distinct_ids() {
        let projects = demo_projects();
        let ids: HashSet<Uuid> = projects.iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), projects.len());
    }
}
