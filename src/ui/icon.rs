use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names shipped under public/icons/
#[allow(dead_code)]
pub mod icons {
    pub const BOOKMARK: &str = "bookmark";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const GRID: &str = "grid";
    pub const LOADER: &str = "loader";
    pub const LOGOUT: &str = "logout";
    pub const MENU: &str = "menu";
    pub const MOON: &str = "moon";
    pub const PLAY: &str = "play";
    pub const SEND: &str = "send";
    pub const STAR: &str = "star";
    pub const SUN: &str = "sun";
    pub const X: &str = "x";
}
