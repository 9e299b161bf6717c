use leptos::prelude::*;

use crate::core::content::{PLANS, PlanCopy};
use crate::core::{BillingCadence, PricingTier};
use crate::ui::common::{AnimatedSection, Button, ButtonSize, ButtonVariant, Card, CardContent};
use crate::ui::features::{BillingToggle, PricingCalculator, use_calculator_config};
use crate::ui::format::format_currency;
use crate::ui::icon::{Icon, icons};
use crate::ui::sections::SectionHeading;

#[component]
pub fn Pricing() -> impl IntoView {
    let (cadence, set_cadence) = signal(BillingCadence::default());
    let (show_calculator, set_show_calculator) = signal(false);
    let config = use_calculator_config();

    // Plan copy joined with its tier; copy without a matching tier is skipped
    let plans: Vec<(PlanCopy, PricingTier)> = PLANS
        .iter()
        .filter_map(|plan| config.tiers.find(plan.tier).map(|tier| (*plan, tier.clone())))
        .collect();

    // Largest discount across tiers, for the toggle badge
    let best_saving = config.tiers.iter().map(PricingTier::savings_percent).max().unwrap_or(0);

    view! {
        <section id="pricing" class="py-24 bg-gradient-to-b from-gray-50 to-white">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <AnimatedSection class="text-center mb-16">
                    <SectionHeading badge="Simple Pricing" title="Choose Your" highlight="Perfect Plan" />
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto mb-8">
                        "Start with a 14-day free trial. No credit card required. Scale as you grow with our flexible pricing options."
                    </p>

                    <div class="mb-8">
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Large
                            class="group".to_string()
                            on_click=Callback::new(move |_| set_show_calculator.set(true))
                        >
                            <Icon name=icons::CALCULATOR class="w-5 h-5 mr-2 group-hover:rotate-12 transition-transform" />
                            "Calculate Your Perfect Plan"
                        </Button>
                    </div>

                    <div class="mb-12">
                        <BillingToggle
                            cadence=cadence.into()
                            on_toggle=Callback::new(move |_| set_cadence.update(|c| *c = c.toggled()))
                            badge=format!("Save up to {}%", best_saving)
                        />
                    </div>
                </AnimatedSection>

                <div class="grid md:grid-cols-3 gap-8 max-w-7xl mx-auto">
                    {plans.into_iter().enumerate().map(|(index, (plan, tier))| view! {
                        <PricingCard plan=plan tier=tier cadence=cadence.into() index=index />
                    }).collect_view()}
                </div>

                <AnimatedSection delay_ms=800 class="text-center mt-16">
                    <div class="inline-flex items-center px-6 py-3 rounded-full bg-green-50 border border-green-200">
                        <Icon name=icons::CHECK class="w-5 h-5 text-green-600 mr-2" />
                        <span class="text-green-800 font-medium">"30-day money-back guarantee"</span>
                    </div>
                </AnimatedSection>

                <PricingCalculator
                    is_open=show_calculator.into()
                    on_close=Callback::new(move |_| set_show_calculator.set(false))
                />
            </div>
        </section>
    }
}

/// Pricing card component
#[component]
fn PricingCard(
    plan: PlanCopy,
    tier: PricingTier,
    cadence: Signal<BillingCadence>,
    index: usize,
) -> impl IntoView {
    let annual = move || cadence.get().is_annual();
    let monthly_price = format_currency(tier.monthly_price);
    let savings = tier.savings_percent();
    let price = move || format_currency(tier.effective_price(cadence.get()));

    let cta_variant = if plan.popular { ButtonVariant::Gradient } else { ButtonVariant::Outline };
    let card_class = if plan.popular {
        "h-full relative overflow-hidden border-2 border-blue-500 shadow-xl md:scale-105 transition-all duration-300".to_string()
    } else {
        "h-full relative overflow-hidden border border-gray-200 hover:shadow-lg transition-all duration-300".to_string()
    };

    view! {
        <div class="landing-scroll-animate relative" style=format!("transition-delay: {}ms", index * 100)>
            {plan.popular.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 z-10">
                    <div class="inline-flex items-center px-4 py-2 rounded-full bg-gradient-to-r from-blue-600 to-purple-600 text-white text-sm font-medium">
                        <Icon name=icons::STAR class="w-4 h-4 mr-1" />
                        "Most Popular"
                    </div>
                </div>
            })}

            <Card class=card_class>
                <div class="card-header text-center pb-8">
                    <h3 class="text-2xl font-bold text-gray-900 mb-2">{plan.tier}</h3>
                    <p class="text-gray-600 mb-6">{plan.description}</p>

                    <div class="space-y-2">
                        <div class="flex items-baseline justify-center">
                            <span class="text-5xl font-bold text-gray-900">{price}</span>
                            <span class="text-gray-500 ml-2">"/month"</span>
                        </div>
                        <Show when=annual>
                            <div class="flex items-center justify-center gap-2">
                                <span class="text-lg text-gray-400 line-through">{monthly_price.clone()}</span>
                                <span class="text-sm text-green-600 font-medium">{format!("Save {}%", savings)}</span>
                            </div>
                            <p class="text-sm text-gray-500">"Billed annually"</p>
                        </Show>
                    </div>
                </div>

                <CardContent>
                    <div class="space-y-6">
                        <a href="#contact" class="block">
                            <Button
                                variant=cta_variant
                                size=ButtonSize::Large
                                class="w-full".to_string()
                            >
                                {plan.cta}
                            </Button>
                        </a>

                        <div class="space-y-4">
                            <h4 class="font-semibold text-gray-900">"Everything included:"</h4>
                            <ul class="space-y-3">
                                {plan.features.iter().map(|feature| view! {
                                    <li class="flex items-start">
                                        <Icon name=icons::CHECK class="w-5 h-5 text-green-500 mr-3 mt-0.5 flex-shrink-0" />
                                        <span class="text-gray-600 text-sm">{*feature}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}
