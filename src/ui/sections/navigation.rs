use leptos::prelude::*;

use crate::core::content::NAV_LINKS;
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::sections::Logo;

/// Scroll offset after which the header gets its solid background
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

/// Fixed header with section anchors and mobile menu
#[component]
pub fn Navigation() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let update = move || {
            let y = window().scroll_y().unwrap_or(0.0);
            set_scrolled.set(y > SCROLLED_THRESHOLD_PX);
        };
        update();

        let handle = window_event_listener(scroll, move |_| update());
        on_cleanup(move || drop(handle));
    }
    #[cfg(feature = "ssr")]
    let _ = set_scrolled;

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-40 transition-all duration-300"
            class=(["nav-scrolled", "shadow-lg"], move || scrolled.get())
            class=("bg-transparent", move || !scrolled.get())
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="#" class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold gradient-text">"ADmyBRAND"</span>
                    </a>

                    // Desktop Navigation
                    <nav class="hidden md:flex items-center gap-6">
                        {NAV_LINKS.iter().map(|(label, href)| view! {
                            <a href=*href class="text-sm font-medium text-gray-600 hover:text-gray-900 transition-colors">
                                {*label}
                            </a>
                        }).collect_view()}
                        <a href="#pricing">
                            <Button variant=ButtonVariant::Gradient size=ButtonSize::Small>
                                "Start Free Trial"
                            </Button>
                        </a>
                    </nav>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-gray-100 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || if mobile_menu_open.get() {
                            view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300 bg-white/95 backdrop-blur-md rounded-b-xl"
                    class=("max-h-0", move || !mobile_menu_open.get())
                    class=("max-h-96", move || mobile_menu_open.get())
                >
                    <nav class="flex flex-col gap-1 py-4">
                        {NAV_LINKS.iter().map(|(label, href)| view! {
                            <a
                                href=*href
                                class="block px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-100 rounded-lg transition-colors"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                {*label}
                            </a>
                        }).collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}
