//! Legal pages, rendered from Markdown documents

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::markdown::Markdown;

const TERMS: &str = r#"
# Terms of Service

_Last updated: January 15, 2026_

Welcome to ClipBridge. These terms govern your use of the ClipBridge
marketplace, which connects brands with short-form video creators. By
creating an account or using the site you agree to them.

## 1. Accounts

You need an account to book creators or offer services. You are
responsible for the activity on your account and for keeping your
credentials private. You must provide accurate information when you
sign up and keep it up to date.

Accounts come in two kinds. **Brand accounts** post briefs and book
creators. **Creator accounts** list services, link channels and deliver
work. One person may hold both kinds with separate email addresses.

## 2. The Marketplace

ClipBridge is a venue. Contracts for work are formed between the brand
and the creator, not with us. We surface listings, handle messaging and
keep a record of orders, but we are not a party to the work itself.

Creators set their own prices, delivery windows and revision counts.
What a listing promises is what the creator owes, nothing more.

## 3. Content and Conduct

Work delivered through ClipBridge must be the creator's own or properly
licensed. Brands receive full rights to delivered clips on completion
of an order unless the listing says otherwise.

You may not use the platform to distribute content that is unlawful,
deceptive or infringes the rights of others. We may suspend accounts
that do.

## 4. Fees

Publishing listings and messaging are free. ClipBridge charges a
commission on completed orders as described on the pricing page at the
time of booking. Fees already incurred are not refundable.

## 5. Termination

You can close your account at any time. We may suspend or terminate
accounts that violate these terms. Sections 2 through 4 survive
termination for orders already in flight.

## 6. Changes

We may update these terms. When we do, we will post the new version
here and update the date above. Continued use after a change means you
accept it.

## Contact

Questions about these terms go to [legal@clipbridge.io](mailto:legal@clipbridge.io).
"#;

const PRIVACY: &str = r#"
# Privacy Policy

_Last updated: January 15, 2026_

This policy describes what ClipBridge collects and how it is used.

## What We Collect

**Account data.** Email address, username, account role and, for
creator accounts, the channels you choose to link with their public
statistics.

**Usage data.** Pages visited, listings bookmarked and messages sent
through project chat. Chat messages are stored so the other side of a
project can read them.

**Device data.** Your theme preference and session are kept in your
browser's local storage. They never leave your device until you sign
in, and clearing site data removes them.

## How We Use It

We use account data to run the marketplace: showing your profile to
the other side of a booking, routing messages and calculating listing
statistics. We do not sell personal data and we do not use it for
third-party advertising.

## Sharing

Listing data and the channel statistics you link are public by design.
Email addresses are never shown to other users. We share data with
service providers only as needed to operate the site, and with
authorities only when the law requires it.

## Retention

Account data is kept while your account exists. Project messages are
kept for the life of the project so both sides keep their record.
Closing your account removes your profile from the catalog.

## Your Choices

You can update your account details, unlink channels and clear your
bookmarks at any time from the dashboard. Signing out removes the
session and bookmark data stored in your browser.

## Contact

Privacy questions go to [support@clipbridge.io](mailto:support@clipbridge.io).
"#;

/// Terms of service page
#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalShell content=TERMS /> }
}

/// Privacy policy page
#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <LegalShell content=PRIVACY /> }
}

/// Shared chrome for the legal documents
#[component]
fn LegalShell(content: &'static str) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            // Header
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                                <svg class="w-5 h-5 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                          d="M15 10l4.553-2.276A1 1 0 0121 8.618v6.764a1 1 0 01-1.447.894L15 14M5 18h8a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v8a2 2 0 002 2z" />
                                </svg>
                            </div>
                            <span class="text-xl font-bold text-theme-primary">"ClipBridge"</span>
                        </A>

                        <A href="/" attr:class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                            "Back to home"
                        </A>
                    </div>
                </div>
            </header>

            // Document
            <main class="flex-1">
                <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                    <Markdown content=content.to_string() />
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
