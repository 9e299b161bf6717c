//! Interactive widgets backed by `crate::core` state machines

mod contact_form;
mod demo_video;
mod pricing_calculator;

pub use contact_form::ContactForm;
pub use demo_video::DemoVideo;
pub use pricing_calculator::{BillingToggle, PricingCalculator, use_calculator_config};
