use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::SiteConfig;
use crate::core::config::EMBEDDED_CONFIG_ID;
use crate::ui::pages::{LandingPage, NotFoundPage};
use crate::ui::{provide_theme_context, provide_waitlist_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    // Read back by `hydrate()` so the client renders with the server's config
    let embedded_config = config.to_embedded_json().unwrap_or_else(|e| {
        tracing::error!("Failed to serialize site config: {}", e);
        String::from("{}")
    });

    let analytics = config.ga_id.clone().map(|id| {
        let loader = format!("https://www.googletagmanager.com/gtag/js?id={}", id);
        view! {
            <script defer=true src=loader></script>
            <script inner_html=gtag_init_script(&id)></script>
        }
    });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=EMBEDDED_CONFIG_ID inner_html=embedded_config></script>
                {analytics}
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

/// Inline gtag bootstrap for the given measurement id
fn gtag_init_script(id: &str) -> String {
    let quoted = serde_json::to_string(id)
        .unwrap_or_else(|_| String::from("\"\""))
        .replace("</", "<\\/");
    format!(
        "window.dataLayer = window.dataLayer || [];\
         function gtag(){{dataLayer.push(arguments);}}\
         gtag('js', new Date());\
         gtag('config', {});",
        quoted
    )
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_theme_context();
    provide_waitlist_context();

    // Server passes the config in via route context, the client via `hydrate()`
    let config = use_context::<SiteConfig>().unwrap_or_default();
    provide_context(config);

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/intmoney.css"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}
