use leptos::prelude::*;

/// Section whose content fades in once scrolled into view
///
/// The `visible` class is added by [`ScrollAnimationScript`].
#[component]
pub fn AnimatedSection(
    /// Anchor id used by the navigation links
    #[prop(optional)]
    id: Option<&'static str>,
    children: Children,
    #[prop(default = "")]
    class: &'static str,
    /// Transition delay in milliseconds
    #[prop(default = 0)]
    delay_ms: u32,
) -> impl IntoView {
    view! {
        <section
            id=id
            class=format!("landing-scroll-animate {}", class)
            style=(delay_ms > 0).then(|| format!("transition-delay: {}ms", delay_ms))
        >
            {children()}
        </section>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
pub fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.landing-scroll-animate').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
