//! Core domain logic: plan recommendation, ROI, contact form and page copy

pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod pricing;
#[cfg(test)]
mod tests;
pub mod validation;

pub use carousel::Carousel;
pub use contact::{
    ContactForm, ContactGateway, ContactRequest, Liveness, SimulatedGateway, SubmissionError,
    SubmissionPhase, SubmissionReceipt, SubmitRejected, run_submission,
};
pub use pricing::{
    BillingCadence, CalculatorConfig, CalculatorConfigError, Limit, PricingTier, Quote,
    RoiEstimate, SliderBounds, TierTable, TierTableError, UsageInput, estimate_roi,
    recommend_tier,
};
pub use validation::{ContactField, ContactFields, FieldError, FieldErrors, Interest, validate};
