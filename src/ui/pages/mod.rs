//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Landing page (home)
//! - Sign-in page
//! - Sign-up pages (brand and creator)
//! - Dashboard (projects and catalog)
//! - Legal pages

mod dashboard;
mod landing;
mod legal;
mod not_found;
mod signin;
mod signup;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use legal::{PrivacyPage, TermsPage};
pub use not_found::NotFoundPage;
pub use signin::SignInPage;
pub use signup::SignUpPage;
