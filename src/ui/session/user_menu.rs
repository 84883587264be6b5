//! User menu component
//!
//! Header dropdown showing the signed-in user and session actions. Renders
//! sign-in and sign-up links when no one is signed in, and a placeholder
//! while the stored session is still being restored.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::use_session_context;
use crate::core::session::{Session, SessionState};
use crate::ui::icon::{Icon, icons};

/// User menu component for the header
#[component]
pub fn UserMenu() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    // Dropdown open state
    let menu_open = RwSignal::new(false);

    view! {
        <div class="relative">
            {move || {
                match session.state.get() {
                    SessionState::Unknown => {
                        // Placeholder while the stored session is restored
                        view! {
                            <div class="w-8 h-8 rounded-full bg-theme-secondary animate-pulse"></div>
                        }.into_any()
                    }
                    SessionState::Unauthenticated => {
                        view! {
                            <div class="flex items-center gap-2">
                                <A
                                    href="/signin"
                                    attr:class="px-3 py-1.5 text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                                >
                                    "Sign In"
                                </A>
                                <A
                                    href="/signup/brand"
                                    attr:class="px-3 py-1.5 text-sm font-medium text-white bg-accent-primary hover:bg-accent-primary-hover rounded-lg transition-colors"
                                >
                                    "Get Started"
                                </A>
                            </div>
                        }.into_any()
                    }
                    SessionState::Authenticated(user) => {
                        let navigate = navigate.clone();
                        let handle_sign_out = move |_| {
                            menu_open.set(false);
                            let navigate = navigate.clone();
                            spawn_local(async move {
                                session.sign_out().await;
                                navigate("/", Default::default());
                            });
                        };

                        view! {
                            <div class="relative">
                                <button
                                    class="flex items-center gap-2 p-1 rounded-lg hover:bg-theme-secondary transition-colors"
                                    on:click=move |_| menu_open.update(|v| *v = !*v)
                                >
                                    <UserAvatar user=user.clone() size=32 />
                                    <span class="hidden sm:block text-sm font-medium text-theme-primary max-w-[120px] truncate">
                                        {user.username.clone()}
                                    </span>
                                    <div class="flex items-center justify-center h-4 w-4 text-theme-tertiary transition-transform duration-200" class=("rotate-180", move || menu_open.get())>
                                        <Icon name=icons::CHEVRON_DOWN class="h-4 w-4" />
                                    </div>
                                </button>

                                // Dropdown menu
                                {move || {
                                    if menu_open.get() {
                                        let user_clone = user.clone();
                                        let handle_sign_out = handle_sign_out.clone();
                                        Some(view! {
                                            <div class="absolute right-0 mt-2 w-56 bg-theme-primary rounded-lg shadow-lg border border-theme py-1 z-50">
                                                // User info header
                                                <div class="px-4 py-3 border-b border-theme">
                                                    <p class="text-sm font-medium text-theme-primary truncate">
                                                        {user_clone.username.clone()}
                                                    </p>
                                                    <p class="text-xs text-theme-tertiary truncate">
                                                        {user_clone.email.clone()}
                                                    </p>
                                                    <p class="mt-1 text-xs text-accent-primary">
                                                        {user_clone.role.display_name()}
                                                    </p>
                                                </div>

                                                // Menu items
                                                <div class="py-1">
                                                    <A
                                                        href="/dashboard"
                                                        attr:class="w-full px-4 py-2 text-sm text-left text-theme-primary
                                                               hover:bg-theme-secondary transition-colors flex items-center gap-2"
                                                    >
                                                        <Icon name=icons::GRID class="h-4 w-4" />
                                                        "Dashboard"
                                                    </A>
                                                </div>

                                                // Divider
                                                <div class="border-t border-theme my-1"></div>

                                                // Sign out
                                                <div class="py-1">
                                                    <button
                                                        class="w-full px-4 py-2 text-sm text-left text-red-500
                                                               hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors
                                                               flex items-center gap-2"
                                                        on:click=handle_sign_out
                                                    >
                                                        <Icon name=icons::LOGOUT class="h-4 w-4" />
                                                        "Sign Out"
                                                    </button>
                                                </div>
                                            </div>
                                        })
                                    } else {
                                        None
                                    }
                                }}
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}

/// User avatar component
#[component]
pub fn UserAvatar(
    /// Session of the user to render
    user: Session,
    /// Avatar size in pixels
    #[prop(default = 32)]
    size: u32,
) -> impl IntoView {
    let initials = {
        let first = user
            .username
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string();
        first
    };

    let size_style = format!(
        "width: {}px; height: {}px; min-width: {}px; min-height: {}px;",
        size, size, size, size
    );
    let font_size = if size >= 40 { "text-lg" } else { "text-sm" };

    if let Some(avatar_url) = &user.avatar_url {
        view! {
            <img
                src=avatar_url.clone()
                alt=format!("{}'s avatar", user.username)
                class="rounded-full object-cover"
                style=size_style
            />
        }
        .into_any()
    } else {
        // Generate a consistent color from the username
        let hash = user
            .username
            .bytes()
            .fold(0u32, |acc, b| acc.wrapping_add(b as u32));
        let colors = [
            "bg-blue-500",
            "bg-green-500",
            "bg-yellow-500",
            "bg-red-500",
            "bg-purple-500",
            "bg-pink-500",
            "bg-indigo-500",
            "bg-teal-500",
        ];
        let color = colors[(hash as usize) % colors.len()];

        view! {
            <div
                class=format!("{} rounded-full flex items-center justify-center text-white font-medium {}", color, font_size)
                style=size_style
            >
                {initials}
            </div>
        }
        .into_any()
    }
}
