//! Contact form submission state machine
//!
//! Phases move `Editing -> Submitting -> Submitted -> Editing`. Submitting is
//! entered only from a clean validation pass, and at most one submission is
//! in flight at a time.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{ContactField, ContactFields, FieldErrors, validate};

/// Delay used by [`SimulatedGateway`] when none is given
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Lifecycle stage of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Validated snapshot handed to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub fields: ContactFields,
}

/// Acknowledgement returned by a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self {
            reference: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Failure of the submission unit-of-work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum SubmissionError {
    #[error("could not reach the server: {0}")]
    Transport(String),
    #[error("the request was rejected: {0}")]
    Rejected(String),
}

/// Why a submit action did not start a submission
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a submission is already in progress")]
    InFlight,
    #[error("the form was already submitted")]
    AlreadySubmitted,
    #[error("{0} field(s) need attention")]
    Invalid(usize),
}

/// Contact form state owned by one form instance
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    phase: SubmissionPhase,
    failure: Option<SubmissionError>,
    receipt: Option<SubmissionReceipt>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn failure(&self) -> Option<&SubmissionError> {
        self.failure.as_ref()
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Store a new value and clear that field's error without re-validating
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.set(field, value);
        self.errors.clear(field);
    }

    /// Validate everything and, if clean, enter `Submitting`
    pub fn begin_submit(&mut self) -> Result<ContactRequest, SubmitRejected> {
        match self.phase {
            SubmissionPhase::Submitting => return Err(SubmitRejected::InFlight),
            SubmissionPhase::Submitted => return Err(SubmitRejected::AlreadySubmitted),
            SubmissionPhase::Editing => {}
        }

        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            return Err(SubmitRejected::Invalid(self.errors.len()));
        }

        self.phase = SubmissionPhase::Submitting;
        self.failure = None;
        Ok(ContactRequest {
            fields: self.fields.clone(),
        })
    }

    /// Apply the outcome of the in-flight submission
    ///
    /// Ignored unless a submission is in flight.
    pub fn finish_submit(&mut self, outcome: Result<SubmissionReceipt, SubmissionError>) {
        if self.phase != SubmissionPhase::Submitting {
            return;
        }
        match outcome {
            Ok(receipt) => {
                self.fields = ContactFields::default();
                self.errors = FieldErrors::new();
                self.receipt = Some(receipt);
                self.phase = SubmissionPhase::Submitted;
            }
            Err(error) => {
                self.failure = Some(error);
                self.phase = SubmissionPhase::Editing;
            }
        }
    }

    /// Back to an empty form, e.g. "Send another message"
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn dismiss_failure(&mut self) {
        self.failure = None;
    }
}

/// Destination for validated contact requests
pub trait ContactGateway {
    fn submit(
        &self,
        request: &ContactRequest,
    ) -> impl std::future::Future<Output = Result<SubmissionReceipt, SubmissionError>>;
}

/// Stand-in gateway that waits a fixed delay and then succeeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedGateway {
    pub delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl ContactGateway for SimulatedGateway {
    async fn submit(&self, request: &ContactRequest) -> Result<SubmissionReceipt, SubmissionError> {
        sleep(self.delay).await;
        let receipt = SubmissionReceipt::new();
        leptos::logging::log!(
            "Contact request {} received ({} <{}>, interest: {})",
            receipt.reference,
            request.fields.name.trim(),
            request.fields.email.trim(),
            request.fields.interest.as_str()
        );
        Ok(receipt)
    }
}

#[cfg(feature = "ssr")]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(not(feature = "ssr"))]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

/// Shared flag telling async work whether its owner still exists
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Mark the owner as torn down
    pub fn revoke(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one submission; `None` when the owner went away before it finished
pub async fn run_submission<G: ContactGateway>(
    gateway: &G,
    request: &ContactRequest,
    liveness: &Liveness,
) -> Option<Result<SubmissionReceipt, SubmissionError>> {
    let outcome = gateway.submit(request).await;
    if !liveness.is_alive() {
        leptos::logging::warn!("Dropping contact submission result: form was unmounted");
        return None;
    }
    if let Err(error) = &outcome {
        leptos::logging::error!("Contact submission failed: {}", error);
    }
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Jo");
        form.set_field(ContactField::Email, "a@b.com");
        form.set_field(ContactField::Company, "Acme");
        form.set_field(ContactField::Message, "Hello there!!");
        form
    }

    #[test]
    fn test_invalid_submit_stays_editing() {
        let mut form = ContactForm::new();
        assert_eq!(form.begin_submit(), Err(SubmitRejected::Invalid(4)));
        assert_eq!(form.phase(), SubmissionPhase::Editing);
        assert_eq!(form.errors().len(), 4);
    }

    #[test]
    fn test_edit_clears_only_that_field() {
        let mut form = ContactForm::new();
        let _ = form.begin_submit();

        form.set_field(ContactField::Email, "a@b.com");
        assert!(!form.errors().contains(ContactField::Email));
        assert!(form.errors().contains(ContactField::Name));
        assert!(form.errors().contains(ContactField::Company));
        assert!(form.errors().contains(ContactField::Message));
    }

    #[test]
    fn test_edit_clears_without_revalidating() {
        let mut form = ContactForm::new();
        let _ = form.begin_submit();

        // still invalid, but the error goes away until the next submit
        form.set_field(ContactField::Email, "nope");
        assert!(!form.errors().contains(ContactField::Email));

        let _ = form.begin_submit();
        assert!(form.errors().contains(ContactField::Email));
    }

    #[test]
    fn test_valid_submit_enters_submitting() {
        let mut form = filled_form();
        let request = form.begin_submit().unwrap();
        assert_eq!(request.fields.company, "Acme");
        assert!(form.is_submitting());
    }

    #[test]
    fn test_submit_while_in_flight_is_noop() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        let before = form.clone();

        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
        assert_eq!(form, before);
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish_submit(Ok(SubmissionReceipt::new()));

        assert_eq!(form.phase(), SubmissionPhase::Submitted);
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(form.receipt().is_some());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::AlreadySubmitted));
    }

    #[test]
    fn test_reset_after_success() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish_submit(Ok(SubmissionReceipt::new()));
        form.reset();

        assert_eq!(form.phase(), SubmissionPhase::Editing);
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(form.errors().is_empty());
        assert!(form.receipt().is_none());
    }

    #[test]
    fn test_failure_keeps_input() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish_submit(Err(SubmissionError::Transport("offline".to_string())));

        assert_eq!(form.phase(), SubmissionPhase::Editing);
        assert_eq!(form.fields().name, "Jo");
        assert_eq!(
            form.failure(),
            Some(&SubmissionError::Transport("offline".to_string()))
        );

        // retry clears the banner
        form.begin_submit().unwrap();
        assert!(form.failure().is_none());
    }

    #[test]
    fn test_finish_outside_submitting_is_ignored() {
        let mut form = filled_form();
        form.finish_submit(Ok(SubmissionReceipt::new()));
        assert_eq!(form.phase(), SubmissionPhase::Editing);
        assert_eq!(form.fields().name, "Jo");
    }

    #[test]
    fn test_liveness_revoke() {
        let liveness = Liveness::new();
        let clone = liveness.clone();
        assert!(clone.is_alive());
        liveness.revoke();
        assert!(!clone.is_alive());
    }

    #[tokio::test]
    async fn test_simulated_gateway_succeeds() {
        let mut form = filled_form();
        let request = form.begin_submit().unwrap();
        let gateway = SimulatedGateway::new(Duration::from_millis(5));

        let outcome = run_submission(&gateway, &request, &Liveness::new()).await;
        form.finish_submit(outcome.unwrap());
        assert_eq!(form.phase(), SubmissionPhase::Submitted);
    }

    #[tokio::test]
    async fn test_torn_down_owner_gets_nothing() {
        let gateway = SimulatedGateway::new(Duration::from_millis(20));
        let request = filled_form().begin_submit().unwrap();
        let liveness = Liveness::new();

        // futures are lazy: the owner is gone before the gateway resolves
        let pending = run_submission(&gateway, &request, &liveness);
        liveness.revoke();

        assert!(pending.await.is_none());
    }
}
