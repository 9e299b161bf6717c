use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Maximum width of a modal panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
    Full,
}

impl ModalSize {
    fn class(&self) -> &'static str {
        match self {
            ModalSize::Small => "max-w-md",
            ModalSize::Medium => "max-w-lg",
            ModalSize::Large => "max-w-2xl",
            ModalSize::ExtraLarge => "max-w-4xl",
            ModalSize::Full => "max-w-[95vw] max-h-[95vh]",
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().body() {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

/// Dialog overlay with consistent structure
///
/// Closes on Escape, on backdrop click and from the header button. Page
/// scrolling is locked while open.
#[component]
pub fn Modal(
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Optional title shown in the header
    #[prop(optional)]
    title: Option<&'static str>,
    /// Optional subtitle/description
    #[prop(optional)]
    description: Option<&'static str>,
    #[prop(default = ModalSize::Medium)]
    size: ModalSize,
    /// Whether clicking backdrop closes modal
    #[prop(default = true)]
    close_on_backdrop: bool,
    /// Modal content
    children: Children,
    /// Extra classes for the panel
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        Effect::new(move |_| set_body_scroll_locked(is_open.get()));

        on_cleanup(move || {
            drop(handle_keydown);
            set_body_scroll_locked(false);
        });
    }

    view! {
        <div
            class="modal-backdrop fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/60 backdrop-blur-sm transition-all duration-300"
            class=(["opacity-0", "pointer-events-none"], move || !is_open.get())
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                if close_on_backdrop {
                    #[cfg(not(feature = "ssr"))]
                    {
                        if let Some(element) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                            if element.class_list().contains("modal-backdrop") {
                                on_close.run(());
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
                class=format!("relative w-full {} {} modal-panel transition-transform duration-300", size.class(), class)
                class=("scale-95", move || !is_open.get())
            >
                {(title.is_some() || description.is_some()).then(|| view! {
                    <div class="modal-header">
                        {title.map(|t| view! { <h2 class="text-xl font-semibold">{t}</h2> })}
                        {description.map(|d| view! { <p class="text-sm text-muted mt-1">{d}</p> })}
                    </div>
                })}

                <button
                    class="absolute right-4 top-4 rounded-full p-1 opacity-70 hover:opacity-100 transition-opacity"
                    on:click=move |_| on_close.run(())
                    aria-label="Close"
                >
                    <Icon name=icons::X class="w-5 h-5"/>
                </button>

                {children()}
            </div>
        </div>
    }
}
