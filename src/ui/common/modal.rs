use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Base modal component with consistent structure.
///
/// The content stays mounted while closed and is hidden with CSS, so the
/// close transition can play out.
#[component]
pub fn BaseModal(
    /// Modal title
    title: String,
    /// Optional subtitle/description
    #[prop(optional)]
    subtitle: Option<String>,
    /// Element id for the title, referenced by `aria-labelledby`
    #[prop(default = "modal-title")]
    title_id: &'static str,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-md)
    #[prop(default = "max-w-md")]
    max_width: &'static str,
    /// Whether clicking backdrop closes modal
    #[prop(default = true)]
    close_on_backdrop: bool,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "fixed inset-0 z-50 flex items-center justify-center p-4 modal-backdrop transition-all duration-300"
                } else {
                    "fixed inset-0 z-50 flex items-center justify-center p-4 modal-backdrop opacity-0 pointer-events-none transition-all duration-300"
                }
            }
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                if close_on_backdrop {
                    #[cfg(not(feature = "ssr"))]
                    {
                        if let Some(target) = e.target() {
                            if let Some(element) = target.dyn_ref::<web_sys::Element>() {
                                if element.class_list().contains("modal-backdrop") {
                                    on_close.run(());
                                }
                            }
                        }
                    }
                    #[cfg(feature = "ssr")]
                    {
                        let _ = e;
                    }
                }
            }
        >
            <div
                class=format!("relative w-full {} glass-card gradient-border overflow-hidden rounded-2xl p-6", max_width)
                role="dialog"
                aria-modal="true"
                aria-labelledby=title_id
            >
                // Decorative glow
                <div class="absolute -top-24 -right-24 w-48 h-48 bg-primary/20 rounded-full blur-[48px] pointer-events-none" aria-hidden="true"></div>
                <div class="absolute -bottom-24 -left-24 w-48 h-48 bg-primary/20 rounded-full blur-[48px] pointer-events-none" aria-hidden="true"></div>

                <button
                    type="button"
                    class="absolute top-4 right-4 z-20 p-1 rounded-full text-muted-foreground hover:text-foreground transition-colors"
                    on:click=move |_| on_close.run(())
                    title="Close"
                    aria-label="Close dialog"
                >
                    <Icon name=icons::X class="w-5 h-5"/>
                </button>

                <div class="relative z-10">
                    // Header
                    <div class="mb-4 pr-6">
                        <h2 id=title_id class="text-2xl font-bold">{title}</h2>
                        {subtitle.map(|s| view! { <p class="mt-1 text-sm text-muted-foreground">{s}</p> })}
                    </div>

                    // Content
                    {children()}
                </div>
            </div>
        </div>
    }
}
