//! Sign-up form component
//!
//! A page-level registration form. The account role is fixed by the page
//! that mounts the form, so brands and creators get separate onboarding
//! routes with the same fields.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::use_session_context;
use crate::core::session::{Role, SignUpRequest};
use crate::ui::icon::{Icon, icons};

/// Sign-up form component
#[component]
pub fn SignUpForm(
    /// Role assigned to the new account
    role: Role,
) -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    // Form state
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    // Form validation
    let email_error = RwSignal::new(None::<String>);
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);

    // Validate email
    let validate_email = move || {
        let value = email.get();
        if value.is_empty() {
            email_error.set(Some("Email is required".to_string()));
            false
        } else if !value.contains('@') || !value.contains('.') {
            email_error.set(Some("Please enter a valid email".to_string()));
            false
        } else {
            email_error.set(None);
            true
        }
    };

    // Validate username
    let validate_username = move || {
        let value = username.get();
        if value.is_empty() {
            username_error.set(Some("Username is required".to_string()));
            false
        } else if value.len() < 3 {
            username_error.set(Some("Username must be at least 3 characters".to_string()));
            false
        } else if value.len() > 30 {
            username_error.set(Some("Username must be less than 30 characters".to_string()));
            false
        } else if !value
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            username_error.set(Some(
                "Username can only contain letters, numbers, underscores, and hyphens".to_string(),
            ));
            false
        } else {
            username_error.set(None);
            true
        }
    };

    // Validate password
    let validate_password = move || {
        let value = password.get();
        if value.is_empty() {
            password_error.set(Some("Password is required".to_string()));
            false
        } else if value.len() < 8 {
            password_error.set(Some("Password must be at least 8 characters".to_string()));
            false
        } else {
            password_error.set(None);
            true
        }
    };

    // Validate confirm password
    let validate_confirm = move || {
        let pass = password.get();
        let confirm = confirm_password.get();
        if confirm.is_empty() {
            confirm_error.set(Some("Please confirm your password".to_string()));
            false
        } else if pass != confirm {
            confirm_error.set(Some("Passwords do not match".to_string()));
            false
        } else {
            confirm_error.set(None);
            true
        }
    };

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Clear previous errors
        session.clear_error();

        // Validate all fields
        let email_valid = validate_email();
        let username_valid = validate_username();
        let password_valid = validate_password();
        let confirm_valid = validate_confirm();

        if !email_valid || !username_valid || !password_valid || !confirm_valid {
            return;
        }

        let request = SignUpRequest {
            email: email.get(),
            password: password.get(),
            username: username.get(),
            role,
        };
        let navigate = navigate.clone();

        spawn_local(async move {
            if session.sign_up(&request).await.is_ok() {
                navigate("/dashboard", Default::default());
            }
            // On failure the error banner is driven by the session context
        });
    };

    let heading = match role {
        Role::Booker => "Join as a Brand",
        Role::Creator => "Join as a Creator",
    };
    let tagline = match role {
        Role::Booker => "Book vetted creators and turn footage into clips that convert",
        Role::Creator => "Get discovered by brands looking for your editing style",
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <form on:submit=on_submit class="space-y-5">
                // Header
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-theme-primary">
                        {heading}
                    </h2>
                    <p class="mt-2 text-sm text-theme-secondary">
                        {tagline}
                    </p>
                </div>

                // Global error message
                {move || {
                    session.error.get().map(|error| {
                        view! {
                            <div class="p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                                <p class="text-sm text-red-700 dark:text-red-300">{error}</p>
                            </div>
                        }
                    })
                }}

                // Email field
                <div>
                    <label for="email" class="block text-sm font-medium text-theme-primary mb-1">
                        "Email"
                    </label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary placeholder-theme-tertiary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                               transition-colors"
                        class:border-red-500=move || email_error.get().is_some()
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            email_error.set(None);
                        }
                        on:blur=move |_| { validate_email(); }
                    />
                    {move || {
                        email_error.get().map(|error| {
                            view! {
                                <p class="mt-1 text-sm text-red-500">{error}</p>
                            }
                        })
                    }}
                </div>

                // Username field
                <div>
                    <label for="username" class="block text-sm font-medium text-theme-primary mb-1">
                        "Username"
                    </label>
                    <input
                        type="text"
                        id="username"
                        name="username"
                        autocomplete="username"
                        placeholder="Choose a username"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary placeholder-theme-tertiary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                               transition-colors"
                        class:border-red-500=move || username_error.get().is_some()
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            username.set(event_target_value(&ev));
                            username_error.set(None);
                        }
                        on:blur=move |_| { validate_username(); }
                    />
                    {move || {
                        username_error.get().map(|error| {
                            view! {
                                <p class="mt-1 text-sm text-red-500">{error}</p>
                            }
                        })
                    }}
                </div>

                // Password field
                <div>
                    <label for="password" class="block text-sm font-medium text-theme-primary mb-1">
                        "Password"
                    </label>
                    <div class="relative">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            id="password"
                            name="password"
                            autocomplete="new-password"
                            placeholder="Create a password"
                            class="w-full px-3 py-2 pr-10 bg-theme-secondary border border-theme rounded-lg
                                   text-theme-primary placeholder-theme-tertiary
                                   focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                                   transition-colors"
                            class:border-red-500=move || password_error.get().is_some()
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                password_error.set(None);
                            }
                            on:blur=move |_| { validate_password(); }
                        />
                        <button
                            type="button"
                            class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || {
                                if show_password.get() {
                                    view! {
                                        <Icon name=icons::EYE_CLOSED class="h-5 w-5" />
                                    }.into_any()
                                } else {
                                    view! {
                                        <Icon name=icons::EYE class="h-5 w-5" />
                                    }.into_any()
                                }
                            }}
                        </button>
                    </div>
                    {move || {
                        password_error.get().map(|error| {
                            view! {
                                <p class="mt-1 text-sm text-red-500">{error}</p>
                            }
                        })
                    }}
                </div>

                // Confirm password field
                <div>
                    <label for="confirm-password" class="block text-sm font-medium text-theme-primary mb-1">
                        "Confirm Password"
                    </label>
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        id="confirm-password"
                        name="confirm-password"
                        autocomplete="new-password"
                        placeholder="Confirm your password"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary placeholder-theme-tertiary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                               transition-colors"
                        class:border-red-500=move || confirm_error.get().is_some()
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| {
                            confirm_password.set(event_target_value(&ev));
                            confirm_error.set(None);
                        }
                        on:blur=move |_| { validate_confirm(); }
                    />
                    {move || {
                        confirm_error.get().map(|error| {
                            view! {
                                <p class="mt-1 text-sm text-red-500">{error}</p>
                            }
                        })
                    }}
                </div>

                // Submit button
                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                           text-white font-medium rounded-lg
                           focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-accent-primary
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                    disabled=move || session.pending.get()
                >
                    {move || {
                        if session.pending.get() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4 text-white" />
                                    "Creating account..."
                                </span>
                            }.into_any()
                        } else {
                            view! { <span class="block">"Create Account"</span> }.into_any()
                        }
                    }}
                </button>

                // Sign-in link
                <div class="text-center text-sm text-theme-secondary">
                    "Already have an account? "
                    <A
                        href="/signin"
                        attr:class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    >
                        "Sign in"
                    </A>
                </div>
            </form>
        </div>
    }
}
