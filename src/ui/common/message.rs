//! Banner for submission failures

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Error banner with optional retry and dismiss actions
/// Hidden while `error` is None
#[component]
pub fn ErrorBanner(
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
    #[prop(optional)]
    on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-banner" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="w-5 h-5 flex-shrink-0"/>
                <span class="flex-1">{move || error.get().unwrap_or_default()}</span>
                {on_retry.map(|retry| view! {
                    <button type="button" class="error-banner-action" on:click=move |_| retry.run(())>
                        <Icon name=icons::REFRESH class="w-4 h-4"/>
                        "Try again"
                    </button>
                })}
                {on_dismiss.map(|dismiss| view! {
                    <button
                        type="button"
                        class="error-banner-action"
                        on:click=move |_| dismiss.run(())
                        aria-label="Dismiss"
                    >
                        <Icon name=icons::X class="w-4 h-4"/>
                    </button>
                })}
            </div>
        </Show>
    }
}
