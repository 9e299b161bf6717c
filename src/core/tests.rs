#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::core::content::{PLANS, TESTIMONIALS};
    use crate::core::{
        BillingCadence, CalculatorConfig, Carousel, ContactField, ContactForm, Interest, Liveness,
        SimulatedGateway, SubmissionError, SubmissionPhase, SubmitRejected, UsageInput,
        run_submission,
    };

    #[test]
    fn test_calculator_default_session() {
        let config = CalculatorConfig::default();
        assert!(config.validate().is_ok());

        let usage = UsageInput::default();
        let quote = config.quote(&usage);
        assert_eq!(quote.tier.name, "Professional");
        assert_eq!(quote.effective_price, 65.0);
        assert_eq!(quote.roi.hours_saved_per_month, 50.0);
        assert_eq!(quote.roi.monthly_savings, 2500.0);
        assert!((quote.roi.roi_percent - 3746.15).abs() < 0.01);
    }

    #[test]
    fn test_calculator_slider_walk() {
        let config = CalculatorConfig::default();
        let mut usage = UsageInput::new(1, 100, 1).with_cadence(BillingCadence::Monthly);
        assert_eq!(config.quote(&usage).tier.name, "Starter");
        assert_eq!(config.quote(&usage).effective_price, 29.0);

        // one seat over the starter cap
        usage.team_size = 6;
        assert_eq!(config.quote(&usage).tier.name, "Professional");

        usage.team_size = 25;
        usage.content_volume = 10_000;
        usage.campaign_count = 50;
        assert_eq!(config.quote(&usage).tier.name, "Professional");

        usage.campaign_count = 51;
        assert_eq!(config.quote(&usage).tier.name, "Enterprise");
    }

    #[test]
    fn test_out_of_range_slider_values_are_clamped() {
        let config = CalculatorConfig::default();
        let usage = UsageInput::new(0, 75_000, 999).clamped(&config);
        assert_eq!(usage.team_size, 1);
        assert_eq!(usage.content_volume, 50_000);
        assert_eq!(usage.campaign_count, 200);
        assert_eq!(config.quote(&usage).tier.name, "Enterprise");
    }

    #[test]
    fn test_cadence_toggle_changes_price_not_tier() {
        let config = CalculatorConfig::default();
        let annual = UsageInput::default();
        let monthly = annual.with_cadence(annual.billing_cadence.toggled());

        let a = config.quote(&annual);
        let m = config.quote(&monthly);
        assert_eq!(a.tier, m.tier);
        assert_eq!(m.effective_price, 79.0);
        assert!(a.effective_price < m.effective_price);
        assert!(a.roi.roi_percent > m.roi.roi_percent);
    }

    #[test]
    fn test_plan_copy_prices_come_from_tiers() {
        let config = CalculatorConfig::default();
        let prices: Vec<f64> = PLANS
            .iter()
            .filter_map(|plan| config.tiers.find(plan.tier))
            .map(|tier| tier.effective_price(BillingCadence::Monthly))
            .collect();
        assert_eq!(prices, vec![29.0, 79.0, 199.0]);
    }

    #[test]
    fn test_contact_form_full_lifecycle() {
        let mut form = ContactForm::new();

        assert_eq!(form.begin_submit(), Err(SubmitRejected::Invalid(4)));

        form.set_field(ContactField::Name, "Sarah Chen");
        form.set_field(ContactField::Email, "sarah@techflow.io");
        form.set_field(ContactField::Company, "TechFlow Solutions");
        form.set_field(ContactField::Phone, "+1 (555) 123-4567");
        form.set_field(ContactField::Message, "We'd like a demo for our team.");
        form.set_field(ContactField::Interest, Interest::Demo.as_str());

        let request = form.begin_submit().unwrap();
        assert_eq!(request.fields.interest, Interest::Demo);
        assert_eq!(form.phase(), SubmissionPhase::Submitting);

        form.finish_submit(Err(SubmissionError::Transport("timeout".to_string())));
        assert_eq!(form.phase(), SubmissionPhase::Editing);
        assert!(form.failure().is_some());
        assert_eq!(form.fields().company, "TechFlow Solutions");

        form.begin_submit().unwrap();
        form.finish_submit(Ok(Default::default()));
        assert_eq!(form.phase(), SubmissionPhase::Submitted);
        assert!(form.fields().name.is_empty());

        form.reset();
        assert_eq!(form.phase(), SubmissionPhase::Editing);
    }

    #[test]
    fn test_bad_phone_blocks_submission() {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Jo");
        form.set_field(ContactField::Email, "jo@example.com");
        form.set_field(ContactField::Company, "Acme");
        form.set_field(ContactField::Message, "Hello there, world");
        form.set_field(ContactField::Phone, "012345");

        assert_eq!(form.begin_submit(), Err(SubmitRejected::Invalid(1)));
        assert!(form.errors().contains(ContactField::Phone));
    }

    #[tokio::test]
    async fn test_submission_through_simulated_gateway() {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Jo");
        form.set_field(ContactField::Email, "jo@example.com");
        form.set_field(ContactField::Company, "Acme");
        form.set_field(ContactField::Message, "Hello there, world");

        let request = form.begin_submit().unwrap();
        // second click while in flight
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));

        let gateway = SimulatedGateway::new(Duration::from_millis(10));
        let outcome = run_submission(&gateway, &request, &Liveness::new())
            .await
            .unwrap();
        let reference = outcome.as_ref().unwrap().reference;

        form.finish_submit(outcome);
        assert_eq!(form.receipt().map(|r| r.reference), Some(reference));
    }

    #[test]
    fn test_testimonial_carousel_cycles_through_content() {
        let mut carousel = Carousel::new(TESTIMONIALS.len());
        let mut seen = Vec::new();
        for _ in 0..TESTIMONIALS.len() {
            seen.push(TESTIMONIALS[carousel.current()].name);
            carousel.next();
        }
        assert_eq!(carousel.current(), 0);
        assert_eq!(seen.len(), 5);
        assert_eq!(seen[4], "Lisa Thompson");
    }
}
