//! Sign-up page component
//!
//! Shared shell for the two role-specific onboarding flows. The route
//! decides whether the form registers a brand or a creator account.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::session::Role;
use crate::ui::icon::{Icon, icons};
use crate::ui::session::{SignUpForm, use_session_context};
use crate::ui::theme::{ThemeMode, use_theme_context};

/// Sign-up page component
#[component]
pub fn SignUpPage(
    /// Account role the route registers
    role: Role,
) -> impl IntoView {
    let session = use_session_context();
    let theme = use_theme_context();

    // Redirect if already signed in
    Effect::new(move |_| {
        if session.state.get().is_authenticated() {
            let navigate = use_navigate();
            navigate("/dashboard", Default::default());
        }
    });

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            // Header
            <header class="border-b border-theme">
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
                            // Switch between the two flows
                            {match role {
                                Role::Booker => view! {
                                    <A
                                        href="/signup/creator"
                                        attr:class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                                    >
                                        "Joining as a creator?"
                                    </A>
                                },
                                Role::Creator => view! {
                                    <A
                                        href="/signup/brand"
                                        attr:class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                                    >
                                        "Joining as a brand?"
                                    </A>
                                },
                            }}

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
                        </div>
                    </div>
                </div>
            </header>

            // Main content
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md">
                    <SignUpForm role=role />
                </div>
            </main>

            // Footer
            <footer class="py-4 border-t border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <p class="text-center text-sm text-theme-tertiary">
                        "© 2026 ClipBridge. All rights reserved."
                    </p>
                </div>
            </footer>
        </div>
    }
}
