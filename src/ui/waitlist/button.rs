use leptos::prelude::*;

use super::context::use_waitlist_context;

/// Button that opens the waitlist dialog
#[component]
pub fn WaitlistButton(
    /// Button content
    children: Children,
    /// CSS classes
    #[prop(default = "landing-btn-primary")]
    class: &'static str,
    /// Runs after the dialog was opened
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    /// Accessible label, if the content is not descriptive
    #[prop(optional)]
    aria_label: Option<&'static str>,
) -> impl IntoView {
    let waitlist = use_waitlist_context();

    view! {
        <button
            type="button"
            class=class
            aria-label=aria_label
            aria-haspopup="dialog"
            on:click=move |_| {
                waitlist.open();
                if let Some(callback) = on_click.as_ref() {
                    callback.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
