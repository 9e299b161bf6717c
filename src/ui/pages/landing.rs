//! Landing page component
//!
//! Single scrolling page for ADmyBRAND AI Suite:
//! - SEO meta tags and JSON-LD product data
//! - Navigation, hero, features, pricing, testimonials, FAQ and contact sections
//! - Footer plus the scroll-reveal script

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use serde_json::json;

use crate::core::CalculatorConfig;
use crate::core::content::{FEATURES, PRODUCT_NAME};
use crate::ui::common::ScrollAnimationScript;
use crate::ui::features::use_calculator_config;
use crate::ui::sections::{
    Contact, Faq, Features, Footer, Hero, Navigation, Pricing, Testimonials,
};

const SITE_URL: &str = "https://admybrand.ai/";
const PAGE_TITLE: &str = "ADmyBRAND AI Suite - AI-Powered Marketing Platform";
const PAGE_DESCRIPTION: &str = "Transform your marketing with AI-powered content creation, \
    campaign optimization and customer insights. Start your free trial today.";

/// Landing page with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-white overflow-x-hidden">
            <Navigation />
            <main>
                <Hero />
                <Features />
                <Pricing />
                <Testimonials />
                <Faq />
                <Contact />
            </main>
            <Footer />
        </div>

        <LandingStyles />
        <ScrollAnimationScript />
    }
}

/// SoftwareApplication structured data, one offer per plan
pub fn structured_data(config: &CalculatorConfig) -> serde_json::Value {
    let offers = config
        .tiers
        .iter()
        .map(|tier| {
            json!({
                "@type": "Offer",
                "name": tier.name,
                "price": format!("{:.2}", tier.monthly_price),
                "priceCurrency": "USD",
            })
        })
        .collect::<Vec<_>>();

    json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": PRODUCT_NAME,
        "applicationCategory": "BusinessApplication",
        "operatingSystem": "Web",
        "description": PAGE_DESCRIPTION,
        "url": SITE_URL,
        "offers": offers,
        "featureList": FEATURES.iter().map(|f| f.title).collect::<Vec<_>>(),
    })
}

/// SEO meta tags component
#[component]
fn SeoMeta() -> impl IntoView {
    let json_ld = structured_data(&use_calculator_config()).to_string();

    view! {
        <Title text=PAGE_TITLE />

        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta name="keywords" content="AI marketing, content generation, campaign optimization, marketing automation, customer insights" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content=PAGE_TITLE />
        <Meta property="twitter:description" content=PAGE_DESCRIPTION />

        <Link rel="canonical" href=SITE_URL />
        <Link rel="icon" href="/favicon.svg" />

        <script type="application/ld+json" inner_html=json_ld></script>
    }
}

/// CSS for component classes and landing animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html { scroll-behavior: smooth; }

            .gradient-text {
                background: linear-gradient(90deg, #2563eb, #9333ea, #db2777);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            .hero-bg { background: linear-gradient(135deg, #eff6ff 0%, #ffffff 50%, #faf5ff 100%); }

            .nav-scrolled {
                background-color: rgba(255, 255, 255, 0.9);
                backdrop-filter: blur(12px);
            }

            /* Buttons */
            .btn-base {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                font-weight: 600;
                border-radius: 0.5rem;
                transition: all 0.2s;
                cursor: pointer;
            }
            .btn-base:disabled { opacity: 0.6; cursor: not-allowed; }
            .btn-default { background-color: #111827; color: white; }
            .btn-default:hover:not(:disabled) { background-color: #1f2937; }
            .btn-gradient {
                color: white;
                background-image: linear-gradient(90deg, #2563eb, #9333ea);
                box-shadow: 0 10px 15px -3px rgba(37, 99, 235, 0.3);
            }
            .btn-gradient:hover:not(:disabled) { transform: scale(1.03); }
            .btn-outline { border: 2px solid #d1d5db; background-color: white; color: #374151; }
            .btn-outline:hover:not(:disabled) { border-color: #2563eb; color: #2563eb; }
            .btn-ghost { background-color: transparent; }
            .btn-ghost:hover:not(:disabled) { background-color: rgba(0, 0, 0, 0.05); }
            .btn-sm { padding: 0.375rem 0.875rem; font-size: 0.875rem; }
            .btn-lg { padding: 0.75rem 1.5rem; font-size: 1rem; }
            .btn-xl { padding: 1rem 2rem; font-size: 1.125rem; }
            .btn-icon { width: 2.5rem; height: 2.5rem; padding: 0; border-radius: 9999px; }
            .btn-base:not(.btn-sm):not(.btn-lg):not(.btn-xl):not(.btn-icon) { padding: 0.5rem 1rem; }

            /* Cards */
            .card {
                background-color: white;
                border: 1px solid #e5e7eb;
                border-radius: 1rem;
                box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
            }
            .card-header { padding: 1.5rem 1.5rem 0.5rem; }
            .card-content { padding: 1.5rem; }
            .text-muted { color: #6b7280; }
            .glass-card {
                background: rgba(255, 255, 255, 0.6);
                border: 1px solid rgba(255, 255, 255, 0.4);
                border-radius: 1rem;
                backdrop-filter: blur(12px);
            }
            .glass-card-hover { transition: transform 0.3s, box-shadow 0.3s; }
            .glass-card-hover:hover {
                transform: translateY(-4px);
                box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
            }

            /* Forms */
            .label { display: block; font-size: 0.875rem; font-weight: 500; color: #374151; }
            .input-base {
                width: 100%;
                padding: 0.625rem 0.875rem;
                border: 1px solid #d1d5db;
                border-radius: 0.5rem;
                background-color: white;
                transition: border-color 0.2s, box-shadow 0.2s;
            }
            .input-base:focus {
                outline: none;
                border-color: #2563eb;
                box-shadow: 0 0 0 3px rgba(37, 99, 235, 0.2);
            }
            .input-base:disabled { background-color: #f3f4f6; }
            .input-error { border-color: #ef4444; }
            .error-banner {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                padding: 0.75rem 1rem;
                border-radius: 0.5rem;
                background-color: #fef2f2;
                border: 1px solid #fecaca;
                color: #b91c1c;
                font-size: 0.875rem;
            }
            .error-banner-action {
                display: inline-flex;
                align-items: center;
                gap: 0.25rem;
                font-weight: 500;
                cursor: pointer;
            }
            .error-banner-action:hover { text-decoration: underline; }

            /* Range sliders */
            .slider::-webkit-slider-thumb {
                appearance: none;
                width: 1.25rem;
                height: 1.25rem;
                border-radius: 9999px;
                background: linear-gradient(90deg, #2563eb, #9333ea);
                cursor: pointer;
            }
            .slider::-moz-range-thumb {
                width: 1.25rem;
                height: 1.25rem;
                border: none;
                border-radius: 9999px;
                background: linear-gradient(90deg, #2563eb, #9333ea);
                cursor: pointer;
            }

            /* Modal */
            .modal-panel {
                max-height: 90vh;
                overflow-y: auto;
                background-color: white;
                border-radius: 1rem;
                box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
            }
            .modal-panel.bg-black { background-color: #000; }
            .modal-header { padding: 1.5rem 1.5rem 0; }
            .modal-body { padding: 1.5rem; }

            /* Scroll animations */
            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .landing-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }

            @keyframes blob {
                0% { transform: translate(0, 0) scale(1); }
                33% { transform: translate(30px, -50px) scale(1.1); }
                66% { transform: translate(-20px, 20px) scale(0.9); }
                100% { transform: translate(0, 0) scale(1); }
            }
            .animate-blob { animation: blob 7s infinite; }
            .animation-delay-2000 { animation-delay: 2s; }
            .animation-delay-4000 { animation-delay: 4s; }

            @keyframes slide-in {
                from { opacity: 0; transform: translateX(24px); }
                to { opacity: 1; transform: translateX(0); }
            }
            .animate-slide-in { animation: slide-in 0.5s ease-out; }

            @keyframes pop {
                0% { transform: scale(0.5); opacity: 0; }
                70% { transform: scale(1.1); opacity: 1; }
                100% { transform: scale(1); }
            }
            .animate-pop { animation: pop 0.4s ease-out; }
            "#
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_data_lists_every_tier() {
        let config = CalculatorConfig::default();
        let data = structured_data(&config);

        let offers = data["offers"].as_array().unwrap();
        assert_eq!(offers.len(), config.tiers.len());
        assert_eq!(offers[0]["priceCurrency"], "USD");
        assert_eq!(data["name"], PRODUCT_NAME);
    }

    #[test]
    fn test_structured_data_prices_come_from_tiers() {
        let config = CalculatorConfig::default();
        let data = structured_data(&config);

        for (offer, tier) in data["offers"].as_array().unwrap().iter().zip(config.tiers.iter()) {
            assert_eq!(offer["name"], tier.name.as_str());
            assert_eq!(offer["price"], format!("{:.2}", tier.monthly_price));
        }
    }
}
