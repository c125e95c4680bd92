use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled input with an inline error line underneath
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// Element id, also used by the label's `for`
    id: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Input `name` attribute
    #[prop(optional)]
    name: Option<&'static str>,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let error_id = error_element_id(id);
    let has_error = move || error.as_ref().and_then(|e| e.get()).is_some();

    view! {
        <div class="space-y-1.5">
            <label class="label" for=id>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                id=id
                type=input_type
                name=name.unwrap_or(id)
                autocomplete=autocomplete
                class="input-base"
                class:border-red-500=has_error
                aria-invalid=move || has_error().to_string()
                aria-describedby=move || described_by(id, has_error())
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|err| view! {
                    <div id=error_id.clone() class="flex items-center text-sm text-theme-error" role="alert">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

fn error_element_id(id: &str) -> String {
    format!("{}-error", id)
}

/// `aria-describedby` value: only points at the error line while it is rendered
fn described_by(id: &str, has_error: bool) -> Option<String> {
    has_error.then(|| error_element_id(id))
}
