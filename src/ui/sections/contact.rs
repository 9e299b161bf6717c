use leptos::prelude::*;

use crate::ui::common::AnimatedSection;
use crate::ui::features::ContactForm;
use crate::ui::sections::SectionHeading;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-24 bg-gradient-to-b from-white to-gray-50">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <AnimatedSection class="text-center mb-16">
                    <SectionHeading badge="Get in Touch" title="Ready to" highlight="Transform Your Marketing?" />
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Join thousands of marketing professionals who have revolutionized their results with ADmyBRAND AI Suite. \
                         Let's discuss how we can help your business grow."
                    </p>
                </AnimatedSection>

                <AnimatedSection delay_ms=300>
                    <ContactForm />
                </AnimatedSection>
            </div>
        </section>
    }
}
