use leptos::prelude::*;

use crate::core::content::{FEATURES, Feature, FeatureIcon, STATS};
use crate::ui::common::{AnimatedSection, Card, CardContent, GlassCard};
use crate::ui::sections::SectionHeading;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-24 bg-gradient-to-b from-white to-gray-50">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <AnimatedSection class="text-center mb-16">
                    <SectionHeading
                        badge="Powerful Features"
                        title="Everything You Need to"
                        highlight="Dominate Marketing"
                    />
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Our comprehensive AI suite provides all the tools you need to create, optimize, and scale \
                         your marketing efforts with unprecedented efficiency and results."
                    </p>
                </AnimatedSection>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES.iter().enumerate().map(|(index, feature)| view! {
                        <FeatureCard feature=*feature index=index />
                    }).collect_view()}
                </div>

                // Stats
                <AnimatedSection delay_ms=800 class="mt-24">
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                        {STATS.iter().map(|stat| view! {
                            <GlassCard class="p-6".to_string()>
                                <div class="text-3xl md:text-4xl font-bold gradient-text mb-2">{stat.number}</div>
                                <div class="text-gray-600 font-medium">{stat.label}</div>
                            </GlassCard>
                        }).collect_view()}
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    view! {
        <div
            class="landing-scroll-animate"
            style=format!("transition-delay: {}ms", index * 100)
        >
            <Card class="h-full group hover:shadow-xl transition-all duration-300 bg-white/80 backdrop-blur-sm".to_string()>
                <div class="card-header text-center pb-4">
                    <div class="w-16 h-16 mx-auto mb-4 p-3 rounded-2xl bg-gradient-to-br from-blue-100 to-purple-100 flex items-center justify-center group-hover:scale-110 transition-transform">
                        <FeatureGlyph icon=feature.icon />
                    </div>
                    <h3 class="text-xl font-bold text-gray-900 group-hover:text-blue-600 transition-colors">
                        {feature.title}
                    </h3>
                </div>
                <CardContent>
                    <p class="text-gray-600 mb-6 leading-relaxed text-center">{feature.description}</p>
                    <div class="space-y-2">
                        {feature.benefits.iter().map(|benefit| view! {
                            <div class="flex items-center text-sm text-gray-500">
                                <div class="w-1.5 h-1.5 bg-green-500 rounded-full mr-3"></div>
                                {*benefit}
                            </div>
                        }).collect_view()}
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}

/// Feature icon component
#[component]
fn FeatureGlyph(icon: FeatureIcon) -> impl IntoView {
    let svg_content = match icon {
        FeatureIcon::ContentCreation => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z" />
        },
        FeatureIcon::CampaignOptimization => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M13 7h8m0 0v8m0-8l-8 8-4-4-6 6" />
        },
        FeatureIcon::BrandManagement => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M7 21a4 4 0 01-4-4V5a2 2 0 012-2h4a2 2 0 012 2v12a4 4 0 01-4 4zm0 0h12a2 2 0 002-2v-4a2 2 0 00-2-2h-2.343M11 7.343l1.657-1.657a2 2 0 012.828 0l2.829 2.829a2 2 0 010 2.828l-8.486 8.485M7 17h.01" />
        },
        FeatureIcon::Analytics => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z" />
        },
        FeatureIcon::CustomerInsights => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0z" />
        },
        FeatureIcon::Automation => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M10.325 4.317c.426-1.756 2.924-1.756 3.35 0a1.724 1.724 0 002.573 1.066c1.543-.94 3.31.826 2.37 2.37a1.724 1.724 0 001.065 2.572c1.756.426 1.756 2.924 0 3.35a1.724 1.724 0 00-1.066 2.573c.94 1.543-.826 3.31-2.37 2.37a1.724 1.724 0 00-2.572 1.065c-.426 1.756-2.924 1.756-3.35 0a1.724 1.724 0 00-2.573-1.066c-1.543.94-3.31-.826-2.37-2.37a1.724 1.724 0 00-1.065-2.572c-1.756-.426-1.756-2.924 0-3.35a1.724 1.724 0 001.066-2.573c-.94-1.543.826-3.31 2.37-2.37.996.608 2.296.07 2.572-1.065zM15 12a3 3 0 11-6 0 3 3 0 016 0z" />
        },
    };

    view! {
        <svg class="w-10 h-10 text-blue-600" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            {svg_content}
        </svg>
    }
}
