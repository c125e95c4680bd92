//! The waitlist dialog

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{WaitlistContext, use_waitlist_context};
use crate::core::SiteConfig;
use crate::core::waitlist::{TaskGuard, Transport, WaitlistField, WaitlistFlow, WaitlistForm};
use crate::ui::common::{BaseModal, ErrorMessage, FormField, InfoMessage};
use crate::ui::icon::{Icon, icons};

type Flow = WaitlistFlow<RwSignal<WaitlistForm>, WaitlistContext, Transport>;

/// Dialog with the signup form, mounted once per page.
///
/// Opening and closing is driven entirely by [`WaitlistContext`]; the dialog
/// only reacts to it.
#[component]
pub fn WaitlistModal() -> impl IntoView {
    let waitlist = use_waitlist_context();
    let config = use_context::<SiteConfig>().unwrap_or_default();

    let form = RwSignal::new(WaitlistForm::new());
    let transport = Transport::from_config(&config);
    let demo_mode = transport.is_demo();
    let flow: StoredValue<Flow> = StoredValue::new(WaitlistFlow::new(form, waitlist, transport));

    // Pending requests and timers must not outlive the dialog
    let tasks = StoredValue::new(TaskGuard::new());
    on_cleanup(move || tasks.with_value(|t| t.cancel_all()));

    let run_visibility_change = move |open: bool| {
        let flow = flow.get_value();
        let task = tasks.with_value(|t| t.track(async move { flow.visibility_changed(open).await }));
        spawn_local(async move {
            let _ = task.await;
        });
    };

    Effect::new(move |prev: Option<bool>| {
        let open = waitlist.is_open_tracked();
        if let Some(was_open) = prev {
            if was_open != open {
                run_visibility_change(open);
            }
        }
        open
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let flow = flow.get_value();
        let task = tasks.with_value(|t| {
            t.track(async move {
                // Rejections are already reflected in the form state
                let _ = flow.submit().await;
            })
        });
        spawn_local(async move {
            let _ = task.await;
        });
    };

    let name = Signal::derive(move || form.with(|f| f.values().name.clone()));
    let email = Signal::derive(move || form.with(|f| f.values().email.clone()));
    let email_error = Signal::derive(move || form.with(|f| f.errors().message(WaitlistField::Email)));
    let is_loading = Signal::derive(move || form.with(|f| f.is_loading()));
    let is_success = Signal::derive(move || form.with(|f| f.status().is_success()));
    let submit_error =
        Signal::derive(move || form.with(|f| f.status().error_message().map(str::to_string)));
    let demo_notice = Signal::derive(move || {
        demo_mode.then(|| "Demo mode: signups are simulated and not stored.".to_string())
    });

    let on_name = Callback::new(move |value: String| form.update(|f| f.set_name(value)));
    let on_email = Callback::new(move |value: String| form.update(|f| f.set_email(value)));
    let on_dismiss_error = Callback::new(move |_: ()| flow.with_value(|f| f.acknowledge_error()));

    view! {
        <BaseModal
            title="Join the Waitlist".to_string()
            subtitle="Be the first to know when we launch and get early access to your AI financial agent.".to_string()
            title_id="waitlist-title"
            is_open=waitlist.is_open_signal()
            on_close=Callback::new(move |_: ()| waitlist.close())
        >
            <Show
                when=move || !is_success.get()
                fallback=|| view! {
                    <div class="flex flex-col items-center text-center py-8 space-y-3" role="status">
                        <div class="w-16 h-16 rounded-full bg-primary/10 flex items-center justify-center">
                            <Icon name=icons::CHECK_CIRCLE class="w-8 h-8"/>
                        </div>
                        <h3 class="text-xl font-semibold">"You're on the list!"</h3>
                        <p class="text-sm text-muted-foreground">
                            "Keep an eye on your inbox. We'll be in touch soon."
                        </p>
                    </div>
                }
            >
                <form class="space-y-4" on:submit=on_submit novalidate=true>
                    <FormField
                        label="Name (Optional)".to_string()
                        id="waitlist-name"
                        autocomplete="name"
                        placeholder="Jane Doe".to_string()
                        value=name
                        on_input=on_name
                        disabled=is_loading
                    />

                    <FormField
                        label="Email".to_string()
                        id="waitlist-email"
                        required=true
                        input_type="email"
                        autocomplete="email"
                        placeholder="jane@example.com".to_string()
                        value=email
                        on_input=on_email
                        disabled=is_loading
                        error=email_error
                    />

                    <ErrorMessage error=submit_error on_dismiss=on_dismiss_error/>
                    <InfoMessage message=demo_notice/>

                    <button
                        type="submit"
                        class="landing-btn-primary w-full justify-center"
                        disabled=move || is_loading.get()
                        aria-busy=move || is_loading.get().to_string()
                    >
                        <Show
                            when=move || is_loading.get()
                            fallback=|| view! { <span>"Join Waitlist"</span> }
                        >
                            <Icon name=icons::LOADER class="w-4 h-4 animate-spin"/>
                            <span>"Securing your spot..."</span>
                        </Show>
                    </button>
                </form>
            </Show>
        </BaseModal>
    }
}
