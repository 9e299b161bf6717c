use leptos::prelude::*;

use crate::core::Carousel;
use crate::core::content::{TESTIMONIALS, TRUSTED_BY, Testimonial};
use crate::ui::common::{AnimatedSection, Button, ButtonSize, ButtonVariant, Card, CardContent};
use crate::ui::icon::{Icon, icons};
use crate::ui::sections::SectionHeading;

#[component]
pub fn Testimonials() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));

    // Auto-advance; the timer lives exactly as long as this section
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::carousel::AUTO_ADVANCE_MS;
        use std::time::Duration;

        match set_interval_with_handle(
            move || carousel.update(Carousel::next),
            Duration::from_millis(AUTO_ADVANCE_MS),
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => leptos::logging::warn!("Carousel timer unavailable: {:?}", e),
        }
    }

    let current = Memo::new(move |_| TESTIMONIALS.get(carousel.get().current()).copied());

    view! {
        <section id="testimonials" class="py-24 bg-gradient-to-b from-white to-blue-50">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <AnimatedSection class="text-center mb-16">
                    <SectionHeading
                        badge="Customer Success Stories"
                        title="Loved by"
                        highlight="Marketing Teams Worldwide"
                    />
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Join thousands of marketing professionals who have transformed their results with ADmyBRAND AI Suite."
                    </p>
                </AnimatedSection>

                <div class="relative max-w-4xl mx-auto mb-16">
                    <Card class="overflow-hidden shadow-2xl bg-white/80 backdrop-blur-sm".to_string()>
                        <CardContent>
                            <div class="p-4 md:p-8" aria-live="polite">
                                {move || current.get().map(|t| view! { <TestimonialSlide testimonial=t /> })}
                            </div>
                        </CardContent>
                    </Card>

                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Icon
                        aria_label="Previous testimonial"
                        class="absolute left-4 top-1/2 -translate-y-1/2 bg-white/80 backdrop-blur-sm".to_string()
                        on_click=Callback::new(move |_| carousel.update(Carousel::prev))
                    >
                        <Icon name=icons::CHEVRON_LEFT class="w-5 h-5" />
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Icon
                        aria_label="Next testimonial"
                        class="absolute right-4 top-1/2 -translate-y-1/2 bg-white/80 backdrop-blur-sm".to_string()
                        on_click=Callback::new(move |_| carousel.update(Carousel::next))
                    >
                        <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5" />
                    </Button>
                </div>

                // Indicators
                <div class="flex justify-center gap-2 mb-16">
                    {(0..TESTIMONIALS.len()).map(|index| view! {
                        <button
                            class="w-3 h-3 rounded-full transition-colors"
                            class=("bg-blue-600", move || carousel.with(|c| c.is_current(index)))
                            class=("bg-gray-300", move || !carousel.with(|c| c.is_current(index)))
                            aria-label=format!("Show testimonial {}", index + 1)
                            on:click=move |_| carousel.update(|c| c.select(index))
                        />
                    }).collect_view()}
                </div>

                <AnimatedSection delay_ms=600>
                    <div class="text-center">
                        <p class="text-gray-500 mb-8">"Trusted by leading companies worldwide"</p>
                        <div class="grid grid-cols-2 md:grid-cols-5 gap-8 items-center opacity-60">
                            {TRUSTED_BY.iter().map(|company| view! {
                                <div class="text-2xl font-bold text-gray-400">{*company}</div>
                            }).collect_view()}
                        </div>
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[component]
fn TestimonialSlide(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="text-center animate-slide-in">
            <Icon name=icons::QUOTE class="w-12 h-12 text-blue-600 mx-auto mb-6" />

            <div class="flex justify-center mb-6" aria-label=format!("{} out of 5 stars", testimonial.rating)>
                {(0..testimonial.rating).map(|_| view! {
                    <Icon name=icons::STAR class="w-5 h-5 text-yellow-400 fill-current" />
                }).collect_view()}
            </div>

            <blockquote class="text-xl md:text-2xl text-gray-700 leading-relaxed mb-8 italic">
                {format!("\u{201c}{}\u{201d}", testimonial.quote)}
            </blockquote>

            <div class="inline-flex items-center px-4 py-2 rounded-full bg-green-100 text-green-800 text-sm font-medium mb-8">
                {testimonial.result}
            </div>

            <div class="flex items-center justify-center gap-4">
                <div class="w-16 h-16 rounded-full bg-gradient-to-br from-blue-500 to-purple-600 flex items-center justify-center text-white text-xl font-semibold">
                    {testimonial.initials()}
                </div>
                <div class="text-left">
                    <div class="font-semibold text-gray-900">{testimonial.name}</div>
                    <div class="text-gray-600">{testimonial.role}</div>
                    <div class="text-blue-600 font-medium">{testimonial.company}</div>
                </div>
            </div>
        </div>
    }
}
