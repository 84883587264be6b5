pub mod chat_panel;
pub mod icon;
pub mod markdown;
pub mod on_visible;
pub mod pages;
pub mod session;
pub mod theme;

pub use chat_panel::ChatPanel;
pub use icon::{Icon, icons};
pub use on_visible::ScrollReveal;
