use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::session::Role;
use crate::ui::pages::{
    DashboardPage, LandingPage, NotFoundPage, PrivacyPage, SignInPage, SignUpPage, TermsPage,
};
use crate::ui::session::provide_session_context;
use crate::ui::theme::provide_theme_context;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // App-wide contexts: theme first so pages can toggle it, then the session
    let _theme_ctx = provide_theme_context();
    let _session_ctx = provide_session_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/clipbridge.css"/>

        // sets the document title
        <Title text="ClipBridge - Book Short-Form Video Creators"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/signin") view=SignInPage />
                <Route
                    path=path!("/signup/brand")
                    view=|| view! { <SignUpPage role=Role::Booker /> }
                />
                <Route
                    path=path!("/signup/creator")
                    view=|| view! { <SignUpPage role=Role::Creator /> }
                />
                <Route path=path!("/dashboard") view=DashboardPage />
                <Route path=path!("/terms") view=TermsPage />
                <Route path=path!("/privacy") view=PrivacyPage />
            </Routes>
        </Router>
    }
}
