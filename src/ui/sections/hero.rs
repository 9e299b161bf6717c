use leptos::prelude::*;

use crate::core::content::PRODUCT_NAME;
use crate::ui::common::{AnimatedSection, Button, ButtonSize, ButtonVariant};
use crate::ui::features::DemoVideo;
use crate::ui::icon::{Icon, icons};

const TRUST_POINTS: [&str; 3] = ["No Credit Card Required", "14-Day Free Trial", "Cancel Anytime"];

#[component]
pub fn Hero() -> impl IntoView {
    let (show_demo, set_show_demo) = signal(false);

    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden hero-bg pt-16">
            // Background decoration
            <div class="absolute inset-0 overflow-hidden" aria-hidden="true">
                <div class="absolute -top-40 -right-40 w-80 h-80 bg-purple-300 rounded-full mix-blend-multiply blur-xl opacity-70 animate-blob"></div>
                <div class="absolute -bottom-40 -left-40 w-80 h-80 bg-blue-300 rounded-full mix-blend-multiply blur-xl opacity-70 animate-blob animation-delay-2000"></div>
                <div class="absolute top-40 left-40 w-80 h-80 bg-pink-300 rounded-full mix-blend-multiply blur-xl opacity-70 animate-blob animation-delay-4000"></div>
            </div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="max-w-4xl mx-auto text-center">
                    <AnimatedSection delay_ms=200>
                        <div class="inline-flex items-center px-4 py-2 rounded-full bg-gradient-to-r from-blue-100 to-purple-100 text-sm font-medium text-blue-800 mb-6">
                            <Icon name=icons::SPARKLES class="w-4 h-4 mr-2" />
                            "Revolutionary AI Marketing Platform"
                        </div>
                    </AnimatedSection>

                    <AnimatedSection delay_ms=400>
                        <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold text-gray-900 mb-6 leading-tight">
                            "Transform Your"
                            <span class="gradient-text">" Marketing"</span>
                            <br />
                            "with AI Power"
                        </h1>
                    </AnimatedSection>

                    <AnimatedSection delay_ms=600>
                        <p class="text-xl text-gray-600 mb-8 max-w-2xl mx-auto">
                            {PRODUCT_NAME}
                            " revolutionizes your marketing strategy with cutting-edge artificial intelligence. \
                             Create compelling content, optimize campaigns, and drive unprecedented growth with our comprehensive AI toolkit."
                        </p>
                    </AnimatedSection>

                    <AnimatedSection delay_ms=800>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <a href="#pricing">
                                <Button variant=ButtonVariant::Gradient size=ButtonSize::ExtraLarge class="group".to_string()>
                                    "Start Free Trial"
                                    <Icon name=icons::ARROW_RIGHT class="ml-2 h-5 w-5 group-hover:translate-x-1 transition-transform" />
                                </Button>
                            </a>
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::ExtraLarge
                                class="group".to_string()
                                on_click=Callback::new(move |_| set_show_demo.set(true))
                            >
                                <Icon name=icons::PLAY class="mr-2 h-5 w-5 group-hover:scale-110 transition-transform" />
                                "Watch Demo"
                            </Button>
                        </div>
                    </AnimatedSection>

                    <AnimatedSection delay_ms=1000>
                        <div class="mt-12 flex flex-wrap items-center justify-center gap-8 text-sm text-gray-500">
                            {TRUST_POINTS.iter().map(|point| view! {
                                <div class="flex items-center">
                                    <div class="w-2 h-2 bg-green-500 rounded-full mr-2"></div>
                                    {*point}
                                </div>
                            }).collect_view()}
                        </div>
                    </AnimatedSection>
                </div>
            </div>

            // Scroll indicator
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce" aria-hidden="true">
                <div class="w-6 h-10 border-2 border-gray-400 rounded-full flex justify-center">
                    <div class="w-1 h-3 bg-gray-400 rounded-full mt-2"></div>
                </div>
            </div>

            <DemoVideo
                is_open=show_demo.into()
                on_close=Callback::new(move |_| set_show_demo.set(false))
            />
        </section>
    }
}
