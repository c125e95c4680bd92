//! IntMoney - landing site
//!
//! Server-rendered and hydrated Leptos app with a waitlist signup dialog.
//! `core` holds the framework-independent config and waitlist logic, `ui`
//! the components built on top of it.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::core::SiteConfig;
    use crate::core::config::EMBEDDED_CONFIG_ID;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let config = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(EMBEDDED_CONFIG_ID))
        .and_then(|el| el.text_content())
        .and_then(|json| match SiteConfig::from_embedded_json(&json) {
            Ok(config) => Some(config),
            Err(e) => {
                leptos::logging::warn!("Ignoring malformed site config: {}", e);
                None
            }
        })
        .unwrap_or_default();

    leptos::mount::hydrate_body(move || {
        provide_context(config);
        view! { <App/> }
    });
}
