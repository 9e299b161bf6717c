use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Default,
    Gradient,
    Outline,
    Ghost,
}

/// Button size options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
    Icon,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Gradient => "btn-gradient",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
            ButtonSize::ExtraLarge => "btn-xl",
            ButtonSize::Icon => "btn-icon",
        }
    }
}

fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    ["btn-base", variant.class(), size.class(), extra]
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Default)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler; submit buttons usually leave this to the form
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// HTML button type
    #[prop(default = "button")]
    button_type: &'static str,
    /// Whether button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Whether button is in loading state
    #[prop(into, default = Signal::stored(false))]
    loading: Signal<bool>,
    /// Accessible label for icon-only buttons
    #[prop(optional)]
    aria_label: Option<&'static str>,
    /// Button content (text or elements)
    children: Children,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let classes = button_classes(variant, size, &class);

    view! {
        <button
            type=button_type
            class=classes
            on:click=move |_| {
                if !loading.get_untracked() {
                    if let Some(cb) = on_click {
                        cb.run(());
                    }
                }
            }
            disabled=move || disabled.get() || loading.get()
            aria-label=aria_label
            aria-busy=move || loading.get().to_string()
        >
            {move || loading.get().then(|| view! {
                <Icon name=icons::SPINNER class="w-4 h-4 animate-spin"/>
            })}
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_skip_empty_parts() {
        assert_eq!(
            button_classes(ButtonVariant::Gradient, ButtonSize::Medium, ""),
            "btn-base btn-gradient"
        );
        assert_eq!(
            button_classes(ButtonVariant::Outline, ButtonSize::ExtraLarge, "w-full"),
            "btn-base btn-outline btn-xl w-full"
        );
    }
}
