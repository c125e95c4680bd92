use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file stem under /icons)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names available under /icons
pub mod icons {
    pub const X: &str = "x";
    pub const MENU: &str = "menu";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const INFORMATION_CIRCLE: &str = "information-circle";
    pub const LOADER: &str = "loader";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const MONITOR: &str = "monitor";
    pub const BRAIN: &str = "brain";
    pub const SHIELD: &str = "shield";
    pub const WALLET: &str = "wallet";
    pub const TRENDING_UP: &str = "trending-up";
    pub const ZAP: &str = "zap";
    pub const GLOBE: &str = "globe";
    pub const GITHUB: &str = "github";
}
