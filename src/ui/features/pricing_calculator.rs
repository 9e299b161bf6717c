//! Interactive plan recommendation and ROI calculator

use leptos::prelude::*;

use crate::core::{BillingCadence, CalculatorConfig, SliderBounds, UsageInput};
use crate::ui::common::{Button, ButtonSize, ButtonVariant, Modal, ModalSize};
use crate::ui::format::{format_currency, format_limit, format_percent, group_thousands};
use crate::ui::icon::{Icon, icons};

/// Calculator constants provided by the app, or the built-in table
pub fn use_calculator_config() -> CalculatorConfig {
    use_context::<CalculatorConfig>().unwrap_or_default()
}

/// Monthly / Annual switch with an optional savings badge
#[component]
pub fn BillingToggle(
    cadence: Signal<BillingCadence>,
    on_toggle: Callback<()>,
    /// Badge shown next to "Annual" while annual billing is selected
    #[prop(into)]
    badge: Signal<String>,
) -> impl IntoView {
    let annual = move || cadence.get().is_annual();

    view! {
        <div class="flex items-center justify-center gap-4">
            <span class="text-sm font-medium" class=("text-gray-900", move || !annual()) class=("text-gray-500", annual)>
                "Monthly"
            </span>
            <button
                class="relative inline-flex h-6 w-11 items-center rounded-full transition-colors"
                class=("bg-blue-600", annual)
                class=("bg-gray-200", move || !annual())
                role="switch"
                aria-checked=move || annual().to_string()
                aria-label="Toggle annual billing"
                on:click=move |_| on_toggle.run(())
            >
                <span
                    class="inline-block h-4 w-4 rounded-full bg-white transition-transform"
                    class=("translate-x-5", annual)
                    class=("translate-x-0.5", move || !annual())
                />
            </button>
            <span class="text-sm font-medium" class=("text-gray-900", annual) class=("text-gray-500", move || !annual())>
                "Annual"
            </span>
            <Show when=annual>
                <span class="inline-flex items-center px-2 py-1 rounded-full bg-green-100 text-green-800 text-xs font-medium">
                    {move || badge.get()}
                </span>
            </Show>
        </div>
    }
}

#[component]
fn UsageSlider(
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// Text color class for the icon and value
    accent: &'static str,
    bounds: SliderBounds,
    value: Signal<u32>,
    on_change: Callback<u32>,
    /// Value as shown under the slider
    display: fn(u32) -> String,
    max_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div class=format!("flex items-center gap-2 {}", accent)>
                <Icon name=icon class="w-5 h-5" />
                <label class="font-medium" for=id>{label}</label>
            </div>
            <div class="space-y-2">
                <input
                    id=id
                    type="range"
                    min=bounds.min.to_string()
                    max=bounds.max.to_string()
                    step=bounds.step.to_string()
                    prop:value=move || value.get().to_string()
                    on:input=move |ev| {
                        if let Ok(raw) = event_target_value(&ev).parse::<u32>() {
                            on_change.run(bounds.clamp(raw));
                        }
                    }
                    class="w-full h-2 bg-gray-200 rounded-lg appearance-none cursor-pointer slider"
                />
                <div class="flex justify-between text-sm text-gray-500">
                    <span>{group_thousands(u64::from(bounds.min))}</span>
                    <span class=format!("font-medium {}", accent)>{move || display(value.get())}</span>
                    <span>{max_label}</span>
                </div>
            </div>
        </div>
    }
}

/// Calculator dialog: usage sliders in, recommended plan and ROI out
#[component]
pub fn PricingCalculator(is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let config = StoredValue::new(use_calculator_config());
    let usage = RwSignal::new(config.with_value(|c| UsageInput::default().clamped(c)));
    let quote = Memo::new(move |_| config.with_value(|c| c.quote(&usage.get())));

    let team = Signal::derive(move || usage.get().team_size);
    let content = Signal::derive(move || usage.get().content_volume);
    let campaigns = Signal::derive(move || usage.get().campaign_count);
    let cadence = Signal::derive(move || usage.get().billing_cadence);

    let (team_bounds, content_bounds, campaign_bounds) =
        config.with_value(|c| (c.team_bounds, c.content_bounds, c.campaign_bounds));

    view! {
        <Modal is_open=is_open on_close=on_close title="Pricing Calculator" size=ModalSize::ExtraLarge>
            <div class="modal-body space-y-8">
                <div class="grid md:grid-cols-3 gap-6">
                    <UsageSlider
                        id="calc-team"
                        label="Team Size"
                        icon=icons::USERS
                        accent="text-blue-600"
                        bounds=team_bounds
                        value=team
                        on_change=Callback::new(move |v| usage.update(|u| u.team_size = v))
                        display=|v| format!("{} people", v)
                        max_label="100+"
                    />
                    <UsageSlider
                        id="calc-content"
                        label="Content Pieces/Month"
                        icon=icons::MESSAGE
                        accent="text-purple-600"
                        bounds=content_bounds
                        value=content
                        on_change=Callback::new(move |v| usage.update(|u| u.content_volume = v))
                        display=|v| group_thousands(u64::from(v))
                        max_label="50K+"
                    />
                    <UsageSlider
                        id="calc-campaigns"
                        label="Active Campaigns"
                        icon=icons::LIGHTNING
                        accent="text-green-600"
                        bounds=campaign_bounds
                        value=campaigns
                        on_change=Callback::new(move |v| usage.update(|u| u.campaign_count = v))
                        display=|v| v.to_string()
                        max_label="200+"
                    />
                </div>

                <BillingToggle
                    cadence=cadence
                    on_toggle=Callback::new(move |_| usage.update(|u| u.billing_cadence = u.billing_cadence.toggled()))
                    badge=Signal::derive(move || format!("Save {}/year", format_currency(quote.get().annual_savings)))
                />

                <div class="grid md:grid-cols-2 gap-6">
                    // Recommended plan
                    <div class="card border-2 border-blue-500 text-center">
                        <div class="card-header">
                            <h3 class="text-xl text-blue-600 font-semibold">"Recommended Plan"</h3>
                            <div class="text-3xl font-bold text-gray-900">{move || quote.get().tier.name}</div>
                            <div class="text-4xl font-bold text-blue-600">
                                {move || format_currency(quote.get().effective_price)}
                                <span class="text-lg text-gray-500">"/month"</span>
                            </div>
                            <Show when=move || cadence.get().is_annual()>
                                <div class="text-sm text-gray-500">
                                    {move || format!("Billed annually ({}/year)", format_currency(quote.get().billed_per_year))}
                                </div>
                            </Show>
                        </div>
                        <div class="card-content">
                            <a href="#contact" on:click=move |_| on_close.run(())>
                                <Button variant=ButtonVariant::Gradient size=ButtonSize::Large class="w-full mb-4".to_string()>
                                    "Start Free Trial"
                                </Button>
                            </a>
                            <div class="text-sm text-gray-500">"14-day free trial • No credit card required"</div>
                        </div>
                    </div>

                    // ROI
                    <div class="card bg-gradient-to-br from-green-50 to-blue-50">
                        <div class="card-header">
                            <h3 class="flex items-center gap-2 text-xl font-semibold text-green-600">
                                <Icon name=icons::BAR_CHART class="w-5 h-5" />
                                "Estimated ROI"
                            </h3>
                        </div>
                        <div class="card-content space-y-4">
                            <div class="grid grid-cols-2 gap-4 text-center">
                                <div>
                                    <div class="text-2xl font-bold text-green-600">
                                        {move || format!("{:.0}h", quote.get().roi.hours_saved_per_month)}
                                    </div>
                                    <div class="text-sm text-gray-600">"Time Saved/Month"</div>
                                </div>
                                <div>
                                    <div class="text-2xl font-bold text-green-600">
                                        {move || format_currency(quote.get().roi.monthly_savings)}
                                    </div>
                                    <div class="text-sm text-gray-600">"Monthly Savings"</div>
                                </div>
                            </div>
                            <div class="text-center p-4 bg-white rounded-lg">
                                <div class="text-3xl font-bold text-green-600">
                                    {move || format_percent(quote.get().roi.roi_percent)}
                                </div>
                                <div class="text-sm text-gray-600">"Return on Investment"</div>
                            </div>
                        </div>
                    </div>
                </div>

                // Plan comparison
                <div class="space-y-4">
                    <h3 class="text-lg font-semibold text-center">"How your needs compare to our plans:"</h3>
                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                        {config.with_value(|c| c.tiers.iter().cloned().collect::<Vec<_>>()).into_iter().map(|tier| {
                            let name = tier.name.clone();
                            let recommended = Signal::derive(move || quote.with(|q| q.tier.name == name));
                            view! {
                                <div
                                    class="p-4 rounded-lg border-2 transition-all text-center"
                                    class=(["border-blue-500", "bg-blue-50"], recommended.clone())
                                    class=(["border-gray-200", "bg-gray-50"], move || !recommended.get())
                                >
                                    <div class="font-semibold">{tier.name.clone()}</div>
                                    <div class="text-sm text-gray-600 mt-2">
                                        "Team: " {format_limit(tier.max_team_size, |v| format!("Up to {v}"))}
                                    </div>
                                    <div class="text-sm text-gray-600">
                                        "Content: " {format_limit(tier.max_content_volume, |v| format!("{v}/mo"))}
                                    </div>
                                    <div class="text-sm text-gray-600">
                                        "Campaigns: " {format_limit(tier.max_campaign_count, |v| v)}
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </Modal>
    }
}
