use leptos::prelude::*;

use crate::core::content::{CONTACT_CHANNELS, NAV_LINKS, PRODUCT_NAME};
use crate::ui::sections::Logo;

const LINK_CLASS: &str = "text-sm text-gray-400 hover:text-white transition-colors";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 bg-gray-900 text-gray-300">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    // Brand
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo />
                            <span class="text-xl font-bold text-white">{PRODUCT_NAME}</span>
                        </div>
                        <p class="text-sm text-gray-400 max-w-md">
                            "AI-powered marketing tools that create content, optimize campaigns and \
                             turn customer data into growth."
                        </p>
                    </div>

                    // Product links
                    <div>
                        <h4 class="font-semibold text-white mb-4">"Product"</h4>
                        <ul class="space-y-2">
                            {NAV_LINKS.iter().map(|(label, href)| view! {
                                <li>
                                    <a href=*href class=LINK_CLASS>{*label}</a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-semibold text-white mb-4">"Contact"</h4>
                        <ul class="space-y-2">
                            {CONTACT_CHANNELS.iter().map(|channel| view! {
                                <li class="text-sm text-gray-400">
                                    <span class="text-gray-500">{channel.label}": "</span>
                                    {channel.value}
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-gray-800 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-gray-500">"© 2025 ADmyBRAND. All rights reserved."</span>
                    <div class="flex items-center gap-4">
                        <a href="#" class=LINK_CLASS>"Privacy Policy"</a>
                        <a href="#" class=LINK_CLASS>"Terms of Service"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
