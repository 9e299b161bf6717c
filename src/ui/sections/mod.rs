//! Landing page sections, in page order

mod contact;
mod faq;
mod features;
mod footer;
mod hero;
mod navigation;
mod pricing;
mod testimonials;

pub use contact::Contact;
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use navigation::Navigation;
pub use pricing::Pricing;
pub use testimonials::Testimonials;

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Pill badge plus a headline whose tail is gradient-highlighted
#[component]
pub(crate) fn SectionHeading(
    badge: &'static str,
    title: &'static str,
    highlight: &'static str,
) -> impl IntoView {
    view! {
        <div class="inline-flex items-center px-4 py-2 rounded-full bg-gradient-to-r from-blue-100 to-purple-100 text-sm font-medium text-blue-800 mb-6">
            {badge}
        </div>
        <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">
            {title}
            " "
            <span class="gradient-text">{highlight}</span>
        </h2>
    }
}

/// Logo component
#[component]
pub(crate) fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-blue-600 to-purple-600 rounded-xl flex items-center justify-center shadow-lg">
            <Icon name=icons::SPARKLES class="w-6 h-6 text-white" />
        </div>
    }
}
