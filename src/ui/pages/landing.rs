//! Landing page component
//!
//! The public marketing page for ClipBridge featuring:
//! - SEO meta tags for search engine optimization
//! - Hero section with staged fade-in and role-specific calls to action
//! - How-it-works section walking through the booking flow
//! - Features section with benefit cards
//! - Creator showcase fed from the seeded listings catalog
//! - Pricing section with plan comparison for brands
//! - FAQ section with accordion
//! - Call-to-action and footer sections
//!
//! Below-the-fold sections reveal on scroll through [`ScrollReveal`].

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::listings::{Listing, seed_listings};
use crate::ui::icon::{Icon, icons};
use crate::ui::on_visible::ScrollReveal;
use crate::ui::session::{UserMenu, use_session_context};
use crate::ui::theme::{ThemeMode, use_theme_context};

/// Landing page component with scroll-based section reveals
#[component]
pub fn LandingPage() -> impl IntoView {
    let session = use_session_context();
    let theme = use_theme_context();
    let navigate = use_navigate();

    // Primary hero CTA: straight to the dashboard for signed-in users
    let on_hire = move |_| {
        if session.is_authenticated() {
            navigate("/dashboard", Default::default());
        } else {
            navigate("/signup/brand", Default::default());
        }
    };

    view! {
        // SEO Meta Tags
        <SeoMeta />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Header theme=theme />

            // Hero Section
            <section class="min-h-screen flex items-center justify-center relative pt-16">
                <div class="text-center px-4 max-w-4xl mx-auto">
                    <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold text-theme-primary mb-6 tracking-tight
                               landing-fade-in-up">
                        "ClipBridge"
                    </h1>
                    <p class="text-xl sm:text-2xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed
                              landing-fade-in-up landing-delay-200">
                        "The marketplace where brands book short-form video creators. Post a brief, pick a creator, and get scroll-stopping clips back in days."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 landing-fade-in-up landing-delay-400">
                        <button
                            class="landing-btn-primary"
                            on:click=on_hire
                            aria-label="Hire a creator on ClipBridge"
                        >
                            "Hire a Creator"
                        </button>
                        <A
                            href="/signup/creator"
                            attr:class="landing-btn-secondary"
                            attr:aria-label="Join ClipBridge as a creator"
                        >
                            "Become a Creator"
                        </A>
                    </div>

                    // Scroll indicator
                    <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                        <Icon name=icons::CHEVRON_DOWN class="w-6 h-6 text-theme-tertiary" />
                    </div>
                </div>

                // Background decoration
                <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
                    <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-accent-primary/5 rounded-full blur-3xl"></div>
                    <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-purple-500/5 rounded-full blur-3xl"></div>
                </div>
            </section>

            // How It Works Section
            <section id="how-it-works" class="py-20 px-4">
                <div class="max-w-6xl mx-auto">
                    <ScrollReveal class="text-center mb-16">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "How It Works"
                        </h2>
                        <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                            "From brief to published clip in three steps. No agencies, no back-and-forth email chains."
                        </p>
                    </ScrollReveal>

                    <div class="grid md:grid-cols-3 gap-8">
                        <StepCard
                            number="1"
                            title="Post your brief"
                            description="Tell creators what you need: platform, format, tone and deadline. It takes about five minutes."
                        />
                        <StepCard
                            number="2"
                            title="Pick your creator"
                            description="Compare portfolios, ratings and turnaround times, then book the listing that fits your budget."
                        />
                        <StepCard
                            number="3"
                            title="Review and publish"
                            description="Talk through revisions in the project thread and download the final cut when you approve it."
                        />
                    </div>
                </div>
            </section>

            // Features Section
            <section class="py-20 px-4 bg-theme-secondary/10">
                <div class="max-w-6xl mx-auto">
                    <ScrollReveal class="text-center mb-16">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "Why ClipBridge?"
                        </h2>
                        <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                            "Everything a brand needs to turn long-form content into a steady stream of clips."
                        </p>
                    </ScrollReveal>

                    <div class="grid md:grid-cols-3 gap-8">
                        <FeatureCard
                            icon="vetted"
                            title="Vetted Creators"
                            description="Every editor on the marketplace is reviewed before their first listing goes live."
                        />
                        <FeatureCard
                            icon="brief"
                            title="Briefs in Minutes"
                            description="Structured briefs capture format, length and tone so nothing gets lost in DMs."
                        />
                        <FeatureCard
                            icon="chat"
                            title="Built-in Project Chat"
                            description="Every booking gets a live thread. Feedback, files and approvals stay in one place."
                        />
                        <FeatureCard
                            icon="bookmark"
                            title="Shortlists"
                            description="Bookmark the creators you like and come back to them for the next campaign."
                        />
                        <FeatureCard
                            icon="stats"
                            title="Real Channel Stats"
                            description="Creators link their channels, so you see actual subscriber and view counts, not screenshots."
                        />
                        <FeatureCard
                            icon="turnaround"
                            title="Fast Turnaround"
                            description="Most clip orders are delivered within 48 hours, with the window shown on every listing."
                        />
                    </div>
                </div>
            </section>

            // Creator Showcase Section
            <ShowcaseSection />

            // Pricing Section
            <PricingSection />

            // FAQ Section
            <FaqSection />

            // CTA Section
            <section class="py-24 px-4 bg-gradient-to-b from-transparent to-theme-secondary/30">
                <ScrollReveal class="max-w-4xl mx-auto text-center">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Ready to ship more clips?"
                    </h2>
                    <p class="text-lg text-theme-secondary mb-8 max-w-xl mx-auto">
                        "Join the brands and creators already trading briefs for bangers on ClipBridge."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <A
                            href="/signup/brand"
                            attr:class="landing-btn-primary"
                        >
                            "Get Started Free"
                        </A>
                        <a
                            href="#creators"
                            class="landing-btn-secondary inline-flex items-center gap-2"
                            aria-label="Browse the creator showcase"
                        >
                            <Icon name=icons::PLAY class="w-5 h-5" />
                            "Browse Creators"
                        </a>
                    </div>
                </ScrollReveal>
            </section>

            // Footer
            <Footer />

            // CSS Animations
            <LandingStyles />
        </div>
    }
}

/// Header component with mobile menu support
#[component]
fn Header(theme: crate::ui::theme::ThemeContext) -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold text-theme-primary">"ClipBridge"</span>
                    </A>

                    // Desktop Navigation
                    <div class="hidden md:flex items-center gap-6">
                        <nav class="flex items-center gap-4">
                            <a href="#how-it-works" class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "How It Works"
                            </a>
                            <a href="#creators" class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "Creators"
                            </a>
                            <a href="#pricing" class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "Pricing"
                            </a>
                            <a href="#faq" class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "FAQ"
                            </a>
                        </nav>
                        <ThemeToggle theme=theme />
                    </div>

                    <div class="flex items-center gap-2">
                        <UserMenu />

                        // Mobile menu button
                        <button
                            class="md:hidden p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                            on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                            aria-label="Toggle mobile menu"
                            aria-expanded=move || mobile_menu_open.get()
                        >
                            {move || {
                                if mobile_menu_open.get() {
                                    view! {
                                        <Icon name=icons::X class="w-6 h-6 text-theme-primary" />
                                    }.into_any()
                                } else {
                                    view! {
                                        <Icon name=icons::MENU class="w-6 h-6 text-theme-primary" />
                                    }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <div class="py-4 space-y-4 border-t border-theme/50">
                        <nav class="flex flex-col gap-2">
                            <a
                                href="#how-it-works"
                                class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                "How It Works"
                            </a>
                            <a
                                href="#creators"
                                class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                "Creators"
                            </a>
                            <a
                                href="#pricing"
                                class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                "Pricing"
                            </a>
                            <a
                                href="#faq"
                                class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                "FAQ"
                            </a>
                            <ThemeToggle theme=theme />
                        </nav>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Theme toggle button component
#[component]
fn ThemeToggle(theme: crate::ui::theme::ThemeContext) -> impl IntoView {
    view! {
        <button
            class="p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors text-gray-600 dark:text-gray-300
                   border border-gray-300 dark:border-gray-600"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
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
    }
}

/// Numbered step card for the how-it-works walkthrough
#[component]
fn StepCard(
    number: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <ScrollReveal class="text-center px-4">
            <div class="w-14 h-14 mx-auto mb-4 rounded-full bg-accent-primary text-white text-xl font-bold
                        flex items-center justify-center shadow-lg">
                {number}
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{description}</p>
        </ScrollReveal>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <ScrollReveal class="bg-theme-primary p-6 rounded-xl border border-theme hover:border-accent-primary/50
                             transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center mb-4">
                <FeatureIcon icon=icon />
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{description}</p>
        </ScrollReveal>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        // Page title
        <Title text="ClipBridge - Hire Short-Form Video Creators" />

        // Basic meta tags
        <Meta name="description" content="ClipBridge connects brands with short-form video creators. Post a brief, book a vetted editor, and get TikTok, Reels and Shorts clips delivered in days." />
        <Meta name="keywords" content="short-form video, video editing, clips, TikTok editor, Reels, YouTube Shorts, creator marketplace, hire video editor" />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://clipbridge.io/" />
        <Meta property="og:title" content="ClipBridge - Hire Short-Form Video Creators" />
        <Meta property="og:description" content="The marketplace where brands book short-form video creators. Post a brief, pick a creator, get clips back in days." />
        <Meta property="og:image" content="https://clipbridge.io/og-image.png" />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:url" content="https://clipbridge.io/" />
        <Meta property="twitter:title" content="ClipBridge - Hire Short-Form Video Creators" />
        <Meta property="twitter:description" content="The marketplace where brands book short-form video creators. Post a brief, pick a creator, get clips back in days." />
        <Meta property="twitter:image" content="https://clipbridge.io/og-image.png" />

        // Canonical URL
        <Link rel="canonical" href="https://clipbridge.io/" />

        // JSON-LD Structured Data (inline script)
        <script type="application/ld+json" inner_html=r#"{"@context":"https://schema.org","@type":"WebSite","name":"ClipBridge","url":"https://clipbridge.io","description":"Marketplace connecting brands with short-form video creators","publisher":{"@type":"Organization","name":"ClipBridge"},"offers":{"@type":"Offer","price":"0","priceCurrency":"USD"},"keywords":["short-form video","creator marketplace","video editing"]}"#></script>
    }
}

/// Creator showcase fed from the seeded listings catalog
#[component]
fn ShowcaseSection() -> impl IntoView {
    // Six cards keep the grid even on every breakpoint
    let listings: Vec<Listing> = seed_listings().into_iter().take(6).collect();

    view! {
        <section id="creators" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <ScrollReveal class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Meet the Creators"
                    </h2>
                    <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                        "A sample of the listings live on the marketplace right now."
                    </p>
                </ScrollReveal>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {listings
                        .into_iter()
                        .map(|listing| view! { <ListingCard listing /> })
                        .collect_view()}
                </div>

                <ScrollReveal class="text-center mt-10">
                    <p class="text-theme-secondary">
                        "Sign in to browse the full catalog and open a project thread. "
                        <A href="/signin" attr:class="text-accent-primary hover:underline font-medium">
                            "Sign in"
                        </A>
                    </p>
                </ScrollReveal>
            </div>
        </section>
    }
}

/// One listing in the showcase grid
#[component]
fn ListingCard(listing: Listing) -> impl IntoView {
    let initial = listing
        .creator
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string();

    view! {
        <ScrollReveal class="bg-theme-primary rounded-xl border border-theme overflow-hidden
                             hover:border-accent-primary/50 hover:shadow-lg transition-all duration-300">
            <div class="p-5">
                // Creator row
                <div class="flex items-center justify-between mb-4">
                    <div class="flex items-center gap-2">
                        <div class="w-8 h-8 rounded-full bg-accent-primary/20 text-accent-primary font-semibold
                                    flex items-center justify-center text-sm">
                            {initial}
                        </div>
                        <span class="text-sm font-medium text-theme-primary">{listing.creator.clone()}</span>
                    </div>
                    <span class="px-2 py-0.5 text-xs font-medium rounded-full bg-theme-secondary text-theme-secondary">
                        {listing.category.display_name()}
                    </span>
                </div>

                // Title
                <h3 class="font-semibold text-theme-primary leading-snug mb-4">{listing.title.clone()}</h3>

                // Stats
                <div class="flex items-center gap-4 text-sm text-theme-secondary mb-4">
                    <span class="flex items-center gap-1">
                        <Icon name=icons::STAR class="w-4 h-4 text-yellow-500" />
                        {format!("{:.1}", listing.rating)}
                    </span>
                    <span>{format!("{}-day delivery", listing.delivery_days)}</span>
                    <span>{format!("{} orders", listing.completed_orders)}</span>
                </div>

                // Price
                <div class="flex items-center justify-between pt-4 border-t border-theme">
                    <span class="text-theme-secondary text-sm">"From"</span>
                    <span class="text-lg font-bold text-theme-primary">{format!("${}", listing.price_usd)}</span>
                </div>
            </div>
        </ScrollReveal>
    }
}

/// Pricing section component
#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="py-20 px-4 bg-theme-secondary/10">
            <div class="max-w-6xl mx-auto">
                <ScrollReveal class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Simple, Transparent Pricing"
                    </h2>
                    <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                        "Plans for brands. Creators always join free and keep their listing price."
                    </p>
                </ScrollReveal>

                <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    <PricingCard
                        name="Starter"
                        price="$0"
                        period="forever"
                        description="For trying out your first clip order"
                        features=vec![
                            ("1 open brief at a time", true),
                            ("Browse the full catalog", true),
                            ("Project chat", true),
                            ("Bookmarks & shortlists", true),
                            ("Priority creator matching", false),
                            ("Bulk clip packages", false),
                            ("Dedicated producer", false),
                        ]
                        cta_text="Get Started"
                        cta_href="/signup/brand"
                        highlighted=false
                    />
                    <PricingCard
                        name="Growth"
                        price="$49"
                        period="/month"
                        description="For brands publishing clips every week"
                        features=vec![
                            ("Unlimited open briefs", true),
                            ("Browse the full catalog", true),
                            ("Project chat", true),
                            ("Bookmarks & shortlists", true),
                            ("Priority creator matching", true),
                            ("Bulk clip packages", true),
                            ("Dedicated producer", false),
                        ]
                        cta_text="Start Free Trial"
                        cta_href="/signup/brand"
                        highlighted=true
                    />
                    <PricingCard
                        name="Studio"
                        price="$199"
                        period="/month"
                        description="For agencies running multiple brands"
                        features=vec![
                            ("Everything in Growth", true),
                            ("Multi-brand workspaces", true),
                            ("Dedicated producer", true),
                            ("Custom usage contracts", true),
                            ("Quarterly creator scouting", true),
                            ("Invoice billing", true),
                            ("Priority support", true),
                        ]
                        cta_text="Start with Studio"
                        cta_href="/signup/brand"
                        highlighted=false
                    />
                </div>

                <ScrollReveal class="text-center mt-8">
                    <p class="text-theme-tertiary text-sm">
                        "Clip orders are always priced per listing. Plans only change how many briefs you can run."
                    </p>
                </ScrollReveal>
            </div>
        </section>
    }
}

/// Pricing card component
#[component]
fn PricingCard(
    name: &'static str,
    price: &'static str,
    period: &'static str,
    description: &'static str,
    features: Vec<(&'static str, bool)>,
    cta_text: &'static str,
    cta_href: &'static str,
    highlighted: bool,
) -> impl IntoView {
    let card_class = if highlighted {
        "relative bg-theme-primary p-8 rounded-2xl border-2 border-accent-primary shadow-xl scale-105"
    } else {
        "bg-theme-primary p-8 rounded-2xl border border-theme hover:border-theme-secondary transition-colors"
    };

    view! {
        <ScrollReveal class=card_class>
            {if highlighted {
                Some(view! {
                    <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-accent-primary text-white text-sm font-medium rounded-full">
                        "Most Popular"
                    </div>
                })
            } else {
                None
            }}

            <div class="text-center mb-6">
                <h3 class="text-xl font-bold text-theme-primary mb-2">{name}</h3>
                <div class="flex items-baseline justify-center gap-1">
                    <span class="text-4xl font-bold text-theme-primary">{price}</span>
                    <span class="text-theme-secondary">{period}</span>
                </div>
                <p class="text-sm text-theme-secondary mt-2">{description}</p>
            </div>

            <ul class="space-y-3 mb-8">
                {features.into_iter().map(|(feature, included)| {
                    view! {
                        <li class="flex items-center gap-3">
                            {if included {
                                view! {
                                    <Icon name=icons::CHECK class="w-5 h-5 text-green-500 flex-shrink-0" />
                                }.into_any()
                            } else {
                                view! {
                                    <Icon name=icons::X class="w-5 h-5 text-theme-tertiary flex-shrink-0" />
                                }.into_any()
                            }}
                            <span class=if included { "text-theme-primary" } else { "text-theme-tertiary" }>
                                {feature}
                            </span>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <A
                href=cta_href
                attr:class=if highlighted {
                    "block w-full text-center py-3 px-6 bg-accent-primary hover:bg-accent-primary-hover text-white font-semibold rounded-xl transition-colors"
                } else {
                    "block w-full text-center py-3 px-6 border-2 border-theme hover:border-accent-primary text-theme-primary font-semibold rounded-xl transition-colors"
                }
            >
                {cta_text}
            </A>
        </ScrollReveal>
    }
}

/// FAQ section component
#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="py-20 px-4">
            <div class="max-w-3xl mx-auto">
                <ScrollReveal class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Frequently Asked Questions"
                    </h2>
                    <p class="text-lg text-theme-secondary">
                        "Got questions? We've got answers."
                    </p>
                </ScrollReveal>

                <div class="space-y-4">
                    <FaqItem
                        question="What is ClipBridge?"
                        answer="ClipBridge is a marketplace that connects brands with short-form video creators. Brands post briefs and book listed services; creators take on clipping, editing and captioning work at the price they set."
                    />
                    <FaqItem
                        question="How fast will I get my clips?"
                        answer="Each listing shows its delivery window upfront. Most clip orders are turned around within 48 hours, and larger edits within a week. The countdown starts when the creator accepts your brief."
                    />
                    <FaqItem
                        question="What if I need revisions?"
                        answer="Every order includes revisions, agreed in the brief. You request them in the project chat, so the creator sees your notes next to the delivery they refer to."
                    />
                    <FaqItem
                        question="Who owns the finished clips?"
                        answer="You do. Full usage rights transfer to the brand when you approve the delivery. The exact terms are spelled out in our Terms of Service."
                    />
                    <FaqItem
                        question="How do creators join?"
                        answer="Creators sign up through the creator onboarding flow, link their channels, and publish their first listing. Channel stats shown on listings come straight from the linked channels."
                    />
                    <FaqItem
                        question="Can I work with the same creator again?"
                        answer="Yes. Bookmark any listing to add it to your shortlist, then rebook it from your dashboard whenever the next campaign lands."
                    />
                    <FaqItem
                        question="Do creators pay anything to be listed?"
                        answer="No. Joining and listing is free for creators. ClipBridge takes a small service fee from each completed order, which is already reflected in the listed price."
                    />
                </div>
            </div>
        </section>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <ScrollReveal class="border border-theme rounded-xl overflow-hidden">
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-theme-secondary/30 transition-colors"
                on:click=move |_| set_is_open.update(|v| *v = !*v)
                aria-expanded=move || is_open.get()
            >
                <span class="font-semibold text-theme-primary">{question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 text-theme-tertiary flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <div
                class="overflow-hidden transition-all duration-300 max-h-0"
                class:max-h-0=move || !is_open.get()
                class:max-h-96=move || is_open.get()
            >
                <div class="px-6 pb-4 text-theme-secondary leading-relaxed">
                    {answer}
                </div>
            </div>
        </ScrollReveal>
    }
}

/// Feature icon component
#[component]
fn FeatureIcon(icon: &'static str) -> impl IntoView {
    let svg_content = match icon {
        "vetted" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z" />
        },
        "brief" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z" />
        },
        "chat" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z" />
        },
        "bookmark" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M5 5a2 2 0 012-2h10a2 2 0 012 2v16l-7-3.5L5 21V5z" />
        },
        "stats" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z" />
        },
        "turnaround" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 10V3L4 14h7v7l9-11h-7z" />
        },
        _ => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 10V3L4 14h7v7l9-11h-7z" />
        },
    };

    view! {
        <svg class="w-6 h-6 text-accent-primary" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            {svg_content}
        </svg>
    }
}

/// Logo component
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-accent-primary to-purple-600 rounded-xl
                    flex items-center justify-center shadow-lg">
            <svg class="w-6 h-6 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                      d="M15 10l4.553-2.276A1 1 0 0121 8.618v6.764a1 1 0 01-1.447.894L15 14M5 18h8a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v8a2 2 0 002 2z" />
            </svg>
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    // Brand
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo />
                            <span class="text-xl font-bold text-theme-primary">"ClipBridge"</span>
                        </div>
                        <p class="text-sm text-theme-secondary max-w-md">
                            "The marketplace where brands book short-form video creators. Briefs in, bangers out."
                        </p>
                    </div>

                    // Marketplace links
                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Marketplace"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href="#creators" class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Browse Creators"
                                </a>
                            </li>
                            <li>
                                <A href="/signup/brand" attr:class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Hire a Creator"
                                </A>
                            </li>
                            <li>
                                <A href="/signup/creator" attr:class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Become a Creator"
                                </A>
                            </li>
                        </ul>
                    </div>

                    // Legal
                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Legal"</h4>
                        <ul class="space-y-2">
                            <li>
                                <A href="/terms" attr:class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Terms of Service"
                                </A>
                            </li>
                            <li>
                                <A href="/privacy" attr:class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Privacy Policy"
                                </A>
                            </li>
                        </ul>
                    </div>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-theme/50 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-theme-tertiary">
                        "© 2026 ClipBridge. All rights reserved."
                    </span>
                    <span class="text-sm text-theme-tertiary">
                        "support@clipbridge.io"
                    </span>
                </div>
            </div>
        </footer>
    }
}

/// CSS styles for landing page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Button styles */
            .landing-btn-primary {
                padding: 1rem 2rem;
                font-weight: 600;
                font-size: 1.125rem;
                color: white;
                background-color: #2563eb;
                border-radius: 0.75rem;
                transition: all 0.3s;
                transform: scale(1);
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                cursor: pointer;
            }
            .landing-btn-primary:hover {
                transform: scale(1.05);
                background-color: #1d4ed8;
            }

            .landing-btn-secondary {
                padding: 1rem 2rem;
                font-weight: 600;
                font-size: 1.125rem;
                border: 2px solid #9ca3af;
                border-radius: 0.75rem;
                transition: all 0.3s;
                box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                background-color: #f9fafb;
                color: #374151;
            }
            .dark .landing-btn-secondary {
                background-color: #1f2937;
                border-color: #6b7280;
                color: #e5e7eb;
            }
            .landing-btn-secondary:hover {
                transform: scale(1.05);
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
            }

            /* Fade in up animation */
            @keyframes landing-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .landing-fade-in-up {
                animation: landing-fade-in-up 0.6s ease-out forwards;
            }

            .landing-delay-200 {
                animation-delay: 0.2s;
                opacity: 0;
            }

            .landing-delay-400 {
                animation-delay: 0.4s;
                opacity: 0;
            }

            /* Scroll reveals, toggled by the on-visible observer */
            .scroll-reveal {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }

            .scroll-reveal.visible {
                opacity: 1;
                transform: translateY(0);
            }

            @media (prefers-reduced-motion: reduce) {
                .landing-fade-in-up,
                .landing-delay-200,
                .landing-delay-400 {
                    animation: none;
                    opacity: 1;
                }
                .scroll-reveal {
                    opacity: 1;
                    transform: none;
                    transition: none;
                }
            }
            "#
        </style>
    }
}
