use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Inline error line shown under a field
#[component]
fn FieldErrorLine(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| view! {
            <div class="flex items-center gap-1 text-sm text-red-500" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                <span>{err}</span>
            </div>
        })
    }
}

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Element id, also used by the label
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
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
    view! {
        <div class="space-y-2">
            <label class="label" for=id>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class="input-base"
                class=("input-error", move || error.and_then(|e| e.get()).is_some())
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldErrorLine error=error/>
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    id: &'static str,
    /// Field label text
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 3)]
    rows: u32,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label class="label" for=id>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <textarea
                id=id
                name=id
                class="input-base resize-none"
                class=("input-error", move || error.and_then(|e| e.get()).is_some())
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldErrorLine error=error/>
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, &'static str)>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label class="label" for=id>{label}</label>
            <select
                id=id
                name=id
                class="input-base"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                {options.into_iter().map(|(val, text)| {
                    view! { <option value=val>{text}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Checkbox form field component
///
/// `required` is enforced natively by the browser on submit.
#[component]
pub fn CheckboxField(
    id: &'static str,
    /// Label content (may contain links)
    children: Children,
    #[prop(default = false)]
    required: bool,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3">
            <input
                id=id
                name=id
                type="checkbox"
                class="mt-1 w-4 h-4 rounded border-gray-300 text-indigo-600 focus:ring-2 focus:ring-indigo-500"
                required=required
                disabled=move || disabled.get()
            />
            <label class="text-sm text-muted cursor-pointer" for=id>{children()}</label>
        </div>
    }
}
