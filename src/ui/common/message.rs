//! Reusable message components for errors and notices

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon and an optional dismiss button
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Called when the dismiss button is pressed; no button without it
    #[prop(optional)]
    on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span class="flex-1">{move || error.get().unwrap_or_default()}</span>
                {on_dismiss.map(|dismiss| view! {
                    <button
                        type="button"
                        class="ml-2 text-sm underline opacity-80 hover:opacity-100"
                        on:click=move |_| dismiss.run(())
                        aria-label="Dismiss error"
                    >
                        "Dismiss"
                    </button>
                })}
            </div>
        </Show>
    }
}

/// Info message component
/// Displays an info message with an information icon
#[component]
pub fn InfoMessage(
    /// Info message signal - shows when Some, hidden when None
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="flex items-center text-sm text-blue-500 dark:text-blue-400">
                <Icon name=icons::INFORMATION_CIRCLE class="icon-text"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
