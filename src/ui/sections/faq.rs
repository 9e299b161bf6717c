use leptos::prelude::*;

use crate::core::content::FAQ;
use crate::ui::common::{Accordion, AnimatedSection};
use crate::ui::sections::SectionHeading;

/// FAQ section component
#[component]
pub fn Faq() -> impl IntoView {
    let items = FAQ.iter().map(|entry| (entry.question, entry.answer)).collect::<Vec<_>>();

    view! {
        <section id="faq" class="py-24 bg-gradient-to-b from-blue-50 to-white">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <AnimatedSection class="text-center mb-16">
                    <SectionHeading badge="Frequently Asked Questions" title="Got" highlight="Questions?" />
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Find answers to the most common questions about ADmyBRAND AI Suite. \
                         Can't find what you're looking for? Contact our support team."
                    </p>
                </AnimatedSection>

                <div class="max-w-4xl mx-auto">
                    <Accordion items=items />
                </div>

                <AnimatedSection delay_ms=600 class="text-center mt-16">
                    <div class="bg-gradient-to-r from-blue-600 to-purple-600 rounded-2xl p-8 md:p-12 text-white">
                        <h3 class="text-2xl md:text-3xl font-bold mb-4">"Still have questions?"</h3>
                        <p class="text-blue-100 mb-6 max-w-2xl mx-auto">
                            "Our team of marketing AI experts is here to help you succeed. \
                             Get personalized answers and see how ADmyBRAND can transform your marketing."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <a
                                href="#contact"
                                class="px-8 py-3 bg-white text-blue-600 rounded-lg font-semibold hover:bg-gray-50 transition-colors"
                            >
                                "Contact Support"
                            </a>
                            <a
                                href="#contact"
                                class="px-8 py-3 border-2 border-white text-white rounded-lg font-semibold hover:bg-white hover:text-blue-600 transition-colors"
                            >
                                "Schedule Demo"
                            </a>
                        </div>
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}
