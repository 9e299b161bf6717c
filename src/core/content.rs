//! Static marketing copy for the landing page
//!
//! Plan prices are not repeated here; they come from the calculator's tier
//! table so the pricing cards and the calculator can never disagree.

use serde::Serialize;

/// Product name used across the page
pub const PRODUCT_NAME: &str = "ADmyBRAND AI Suite";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeatureIcon {
    ContentCreation,
    CampaignOptimization,
    BrandManagement,
    Analytics,
    CustomerInsights,
    Automation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: FeatureIcon::ContentCreation,
        title: "AI Content Creation",
        description: "Generate compelling marketing copy, social media posts, and email campaigns with our advanced AI writing assistant. Create content that converts in seconds.",
        benefits: &["10x faster content creation", "SEO-optimized copy", "Multi-language support"],
    },
    Feature {
        icon: FeatureIcon::CampaignOptimization,
        title: "Campaign Optimization",
        description: "Automatically optimize your marketing campaigns across all channels. Our AI analyzes performance data and adjusts targeting, bidding, and creative elements in real-time.",
        benefits: &["30% higher ROI", "Real-time optimization", "Cross-platform management"],
    },
    Feature {
        icon: FeatureIcon::BrandManagement,
        title: "Brand Management",
        description: "Maintain consistent brand voice and visual identity across all marketing materials. AI-powered brand guidelines ensure every piece of content aligns with your brand.",
        benefits: &["Consistent brand voice", "Automated compliance", "Brand asset library"],
    },
    Feature {
        icon: FeatureIcon::Analytics,
        title: "Advanced Analytics",
        description: "Get deep insights into your marketing performance with AI-powered analytics. Understand customer behavior, predict trends, and make data-driven decisions.",
        benefits: &["Predictive analytics", "Custom dashboards", "Automated reporting"],
    },
    Feature {
        icon: FeatureIcon::CustomerInsights,
        title: "Customer Insights",
        description: "Understand your customers like never before with AI-driven behavioral analysis. Segment audiences, predict preferences, and personalize experiences at scale.",
        benefits: &["360° customer view", "Behavioral prediction", "Personalization engine"],
    },
    Feature {
        icon: FeatureIcon::Automation,
        title: "Marketing Automation",
        description: "Automate your entire marketing workflow from lead generation to conversion. Set up intelligent campaigns that adapt and optimize themselves automatically.",
        benefits: &["End-to-end automation", "Smart workflows", "Lead scoring & nurturing"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { number: "500+", label: "Companies Trust Us" },
    Stat { number: "10M+", label: "Content Pieces Created" },
    Stat { number: "300%", label: "Average ROI Increase" },
    Stat { number: "24/7", label: "AI-Powered Support" },
];

/// Marketing copy for one pricing plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanCopy {
    /// Must match a tier name in the calculator's tier table
    pub tier: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

pub const PLANS: &[PlanCopy] = &[
    PlanCopy {
        tier: "Starter",
        description: "Perfect for small businesses and startups",
        features: &[
            "AI Content Creation (1,000 pieces/month)",
            "Basic Campaign Optimization",
            "Email Support",
            "2 Brand Profiles",
            "Basic Analytics Dashboard",
            "Social Media Integration",
        ],
        cta: "Start Free Trial",
        popular: false,
    },
    PlanCopy {
        tier: "Professional",
        description: "Ideal for growing marketing teams",
        features: &[
            "AI Content Creation (10,000 pieces/month)",
            "Advanced Campaign Optimization",
            "Priority Support",
            "10 Brand Profiles",
            "Advanced Analytics & Reporting",
            "Multi-channel Integration",
            "A/B Testing Suite",
            "Customer Segmentation",
            "Marketing Automation",
        ],
        cta: "Start Free Trial",
        popular: true,
    },
    PlanCopy {
        tier: "Enterprise",
        description: "For large organizations with complex needs",
        features: &[
            "Unlimited AI Content Creation",
            "Enterprise Campaign Optimization",
            "24/7 Dedicated Support",
            "Unlimited Brand Profiles",
            "Custom Analytics & Dashboards",
            "API Access & Integrations",
            "Advanced A/B Testing",
            "Predictive Analytics",
            "White-label Solutions",
            "Custom AI Model Training",
            "Dedicated Account Manager",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub rating: u8,
    pub quote: &'static str,
    pub result: &'static str,
}

impl Testimonial {
    /// First letters of the first and last word of the name, for the avatar
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let last = words.last().and_then(|w| w.chars().next());
        first.into_iter().chain(last).flat_map(char::to_uppercase).collect()
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Chen",
        role: "Marketing Director",
        company: "TechFlow Solutions",
        rating: 5,
        quote: "ADmyBRAND AI Suite has completely transformed our marketing operations. We've seen a 300% increase in content output and a 150% improvement in campaign performance. The AI-powered insights are game-changing.",
        result: "300% increase in content output",
    },
    Testimonial {
        name: "Michael Rodriguez",
        role: "CEO",
        company: "GrowthLab Inc.",
        rating: 5,
        quote: "The automation capabilities are incredible. What used to take our team weeks now happens in hours. The ROI has been phenomenal - we've reduced marketing costs by 40% while doubling our lead generation.",
        result: "40% reduction in marketing costs",
    },
    Testimonial {
        name: "Emily Johnson",
        role: "Head of Digital Marketing",
        company: "InnovateCorp",
        rating: 5,
        quote: "The AI content creation is so sophisticated that our audience engagement has skyrocketed. The platform understands our brand voice perfectly and creates content that truly resonates with our customers.",
        result: "250% increase in engagement",
    },
    Testimonial {
        name: "David Park",
        role: "Marketing Manager",
        company: "ScaleUp Ventures",
        rating: 5,
        quote: "ADmyBRAND's predictive analytics helped us identify market trends before our competitors. We launched three successful campaigns that generated $2M in revenue, all based on AI insights.",
        result: "$2M in additional revenue",
    },
    Testimonial {
        name: "Lisa Thompson",
        role: "CMO",
        company: "FutureForward",
        rating: 5,
        quote: "The customer segmentation and personalization features are outstanding. We've achieved a 180% improvement in conversion rates by delivering the right message to the right audience at the right time.",
        result: "180% improvement in conversions",
    },
];

pub const TRUSTED_BY: &[&str] = &["TechFlow", "GrowthLab", "InnovateCorp", "ScaleUp", "FutureForward"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What is ADmyBRAND AI Suite and how does it work?",
        answer: "ADmyBRAND AI Suite is a comprehensive AI-powered marketing platform that automates and optimizes your entire marketing workflow. It uses advanced machine learning algorithms to create content, optimize campaigns, analyze customer behavior, and provide actionable insights. The platform integrates with your existing tools and learns from your brand voice and customer data to deliver personalized marketing solutions.",
    },
    FaqEntry {
        question: "How quickly can I see results with ADmyBRAND?",
        answer: "Most customers see immediate improvements in content creation speed (within the first week) and significant campaign performance improvements within 30 days. Our AI learns from your data and continuously optimizes, so results compound over time. Many clients report 150-300% improvements in key metrics within the first quarter of usage.",
    },
    FaqEntry {
        question: "Is my data secure with ADmyBRAND AI Suite?",
        answer: "Absolutely. We take data security very seriously and employ enterprise-grade security measures including end-to-end encryption, SOC 2 Type II compliance, GDPR compliance, and regular security audits. Your data is never shared with third parties and is used solely to improve your marketing performance. We also offer on-premise deployment options for enterprise customers.",
    },
    FaqEntry {
        question: "Can ADmyBRAND integrate with my existing marketing tools?",
        answer: "Yes! ADmyBRAND AI Suite integrates with over 100+ popular marketing tools including Google Ads, Facebook Ads, HubSpot, Salesforce, Mailchimp, Shopify, and many more. Our API allows for custom integrations, and our team can help set up any specific integrations you need during onboarding.",
    },
    FaqEntry {
        question: "What kind of support do you provide?",
        answer: "We offer comprehensive support including 24/7 chat support, email support, extensive documentation, video tutorials, and webinar training sessions. Professional and Enterprise plans include priority support and dedicated account managers. We also provide onboarding assistance to ensure you get the most out of the platform from day one.",
    },
    FaqEntry {
        question: "Can I cancel my subscription at any time?",
        answer: "Yes, you can cancel your subscription at any time with no cancellation fees. If you cancel, you'll continue to have access to your plan features until the end of your current billing period. We also offer a 30-day money-back guarantee if you're not completely satisfied with the platform.",
    },
    FaqEntry {
        question: "How does the AI content creation work?",
        answer: "Our AI content creation engine is trained on millions of high-performing marketing materials and learns your specific brand voice, tone, and style preferences. You simply provide a brief or topic, and the AI generates compelling copy for emails, social media, ads, blog posts, and more. The AI can also optimize content for different platforms and audiences automatically.",
    },
    FaqEntry {
        question: "What makes ADmyBRAND different from other marketing AI tools?",
        answer: "ADmyBRAND is the only platform that combines content creation, campaign optimization, customer insights, and marketing automation in one unified AI-powered suite. Unlike point solutions, we provide end-to-end marketing intelligence that learns and adapts to your specific business needs. Our AI is specifically trained for marketing use cases and delivers measurably better results than generic AI tools.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel { label: "Email", value: "hello@admybrand.ai" },
    ContactChannel { label: "Phone", value: "+1 (555) 123-4567" },
    ContactChannel { label: "Response Time", value: "Within 24 hours" },
];

/// Anchor targets shown in the navigation bar
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Features", "#features"),
    ("Pricing", "#pricing"),
    ("Testimonials", "#testimonials"),
    ("FAQ", "#faq"),
    ("Contact", "#contact"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pricing::CalculatorConfig;

    #[test]
    fn test_every_plan_has_a_tier() {
        let config = CalculatorConfig::default();
        for plan in PLANS {
            assert!(config.tiers.find(plan.tier).is_some(), "{}", plan.tier);
        }
        assert_eq!(PLANS.len(), config.tiers.len());
    }

    #[test]
    fn test_exactly_one_popular_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
    }

    #[test]
    fn test_testimonial_initials() {
        assert_eq!(TESTIMONIALS[0].initials(), "SC");
        assert_eq!(TESTIMONIALS[1].initials(), "MR");

        let single = Testimonial {
            name: "cher",
            ..TESTIMONIALS[0]
        };
        assert_eq!(single.initials(), "C");
    }

    #[test]
    fn test_ratings_in_range() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn test_nav_links_point_at_sections() {
        assert!(NAV_LINKS.iter().all(|(_, href)| href.starts_with('#')));
    }
}
