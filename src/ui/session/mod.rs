//! Session UI module
//!
//! Components and context for the sign-in, sign-up and sign-out flows.

mod context;
mod signin_form;
mod signup_form;
mod user_menu;

pub use context::{
    SessionContext, provide_session_context, provide_session_context_with, use_session_context,
};
pub use signin_form::SignInForm;
pub use signup_form::SignUpForm;
pub use user_menu::UserMenu;
