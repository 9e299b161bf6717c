//! Validation rules for the contact form
//!
//! Each field is checked on its own; there are no cross-field rules. A full
//! pass produces a [`FieldErrors`] map keyed by field.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum trimmed length of the sender's name
pub const MIN_NAME_LENGTH: usize = 2;

/// Minimum trimmed length of the message body
pub const MIN_MESSAGE_LENGTH: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Up to 16 digits, optional leading `+`, no leading zero
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("phone pattern compiles"));

/// Contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Company,
    Phone,
    Message,
    Interest,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Company,
        ContactField::Phone,
        ContactField::Message,
        ContactField::Interest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Company => "company",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
            ContactField::Interest => "interest",
        }
    }
}

/// Topic selected in the "What are you interested in?" dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    #[default]
    General,
    Demo,
    Pricing,
    Enterprise,
    Partnership,
    Support,
}

impl Interest {
    pub const ALL: [Interest; 6] = [
        Interest::General,
        Interest::Demo,
        Interest::Pricing,
        Interest::Enterprise,
        Interest::Partnership,
        Interest::Support,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::General => "general",
            Interest::Demo => "demo",
            Interest::Pricing => "pricing",
            Interest::Enterprise => "enterprise",
            Interest::Partnership => "partnership",
            Interest::Support => "support",
        }
    }

    /// Unknown values fall back to `General`
    pub fn from_str(s: &str) -> Self {
        Interest::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interest::General => "General Inquiry",
            Interest::Demo => "Schedule a Demo",
            Interest::Pricing => "Pricing Information",
            Interest::Enterprise => "Enterprise Solutions",
            Interest::Partnership => "Partnership Opportunities",
            Interest::Support => "Technical Support",
        }
    }
}

/// Raw values typed into the contact form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
    pub interest: Interest,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> String {
        match field {
            ContactField::Name => self.name.clone(),
            ContactField::Email => self.email.clone(),
            ContactField::Company => self.company.clone(),
            ContactField::Phone => self.phone.clone(),
            ContactField::Message => self.message.clone(),
            ContactField::Interest => self.interest.as_str().to_string(),
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Company => self.company = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
            ContactField::Interest => self.interest = Interest::from_str(&value),
        }
    }
}

/// Why a single field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    NameRequired,
    NameTooShort,
    EmailRequired,
    EmailInvalid,
    CompanyRequired,
    PhoneInvalid,
    MessageRequired,
    MessageTooShort,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::NameRequired => write!(f, "Name is required"),
            FieldError::NameTooShort => {
                write!(f, "Name must be at least {} characters", MIN_NAME_LENGTH)
            }
            FieldError::EmailRequired => write!(f, "Email is required"),
            FieldError::EmailInvalid => write!(f, "Please enter a valid email address"),
            FieldError::CompanyRequired => write!(f, "Company name is required"),
            FieldError::PhoneInvalid => write!(f, "Please enter a valid phone number"),
            FieldError::MessageRequired => write!(f, "Message is required"),
            FieldError::MessageTooShort => {
                write!(
                    f,
                    "Message must be at least {} characters",
                    MIN_MESSAGE_LENGTH
                )
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Field-keyed validation errors; a missing key means the field is valid
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<ContactField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    /// Display text for a field's error, if any
    pub fn message(&self, field: ContactField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn insert(&mut self, field: ContactField, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Drop one field's error, leaving the others untouched
    pub fn clear(&mut self, field: ContactField) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.keys().copied()
    }
}

fn validate_name(value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FieldError::NameRequired)
    } else if trimmed.chars().count() < MIN_NAME_LENGTH {
        Err(FieldError::NameTooShort)
    } else {
        Ok(())
    }
}

fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::EmailRequired)
    } else if !EMAIL_PATTERN.is_match(value) {
        Err(FieldError::EmailInvalid)
    } else {
        Ok(())
    }
}

fn validate_company(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::CompanyRequired)
    } else {
        Ok(())
    }
}

/// Optional; checked only when something was typed
fn validate_phone(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    if PHONE_PATTERN.is_match(&normalize_phone(value)) {
        Ok(())
    } else {
        Err(FieldError::PhoneInvalid)
    }
}

fn validate_message(value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FieldError::MessageRequired)
    } else if trimmed.chars().count() < MIN_MESSAGE_LENGTH {
        Err(FieldError::MessageTooShort)
    } else {
        Ok(())
    }
}

/// Strip whitespace, dashes and parentheses from a phone number
pub fn normalize_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

/// Check one field in isolation
pub fn validate_field(fields: &ContactFields, field: ContactField) -> Result<(), FieldError> {
    match field {
        ContactField::Name => validate_name(&fields.name),
        ContactField::Email => validate_email(&fields.email),
        ContactField::Company => validate_company(&fields.company),
        ContactField::Phone => validate_phone(&fields.phone),
        ContactField::Message => validate_message(&fields.message),
        ContactField::Interest => Ok(()),
    }
}

/// Run every rule and collect the failures
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in ContactField::ALL {
        if let Err(error) = validate_field(fields, field) {
            errors.insert(field, error);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> ContactFields {
        ContactFields {
            name: "Jo".to_string(),
            email: "a@b.com".to_string(),
            company: "Acme".to_string(),
            message: "Hello there!!".to_string(),
            ..ContactFields::default()
        }
    }

    #[test]
    fn test_empty_form_has_four_errors() {
        let errors = validate(&ContactFields::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(ContactField::Name), Some(FieldError::NameRequired));
        assert_eq!(errors.get(ContactField::Email), Some(FieldError::EmailRequired));
        assert_eq!(
            errors.get(ContactField::Company),
            Some(FieldError::CompanyRequired)
        );
        assert_eq!(
            errors.get(ContactField::Message),
            Some(FieldError::MessageRequired)
        );
        assert!(!errors.contains(ContactField::Phone));
    }

    #[test]
    fn test_minimal_valid_form() {
        assert!(validate(&valid_fields()).is_empty());
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let fields = ContactFields {
            name: "   ".to_string(),
            company: "\t".to_string(),
            message: "  \n ".to_string(),
            ..valid_fields()
        };
        let errors = validate(&fields);
        assert_eq!(errors.get(ContactField::Name), Some(FieldError::NameRequired));
        assert_eq!(
            errors.get(ContactField::Company),
            Some(FieldError::CompanyRequired)
        );
        assert_eq!(
            errors.get(ContactField::Message),
            Some(FieldError::MessageRequired)
        );
    }

    #[test]
    fn test_length_rules_use_trimmed_value() {
        let mut fields = valid_fields();
        fields.name = " J ".to_string();
        fields.message = "   too short   ".to_string();
        let errors = validate(&fields);
        assert_eq!(errors.get(ContactField::Name), Some(FieldError::NameTooShort));
        assert_eq!(
            errors.get(ContactField::Message),
            Some(FieldError::MessageTooShort)
        );
    }

    #[test]
    fn test_email_pattern() {
        let mut fields = valid_fields();
        for good in ["john@company.com", "a.b+c@mail.example.org"] {
            fields.email = good.to_string();
            assert!(validate_field(&fields, ContactField::Email).is_ok(), "{good}");
        }
        for bad in ["john", "john@company", "john @company.com", "@company.com", "a@@b.com"] {
            fields.email = bad.to_string();
            assert_eq!(
                validate_field(&fields, ContactField::Email),
                Err(FieldError::EmailInvalid),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_phone_is_optional_but_checked() {
        let mut fields = valid_fields();
        for good in ["", "   ", "+1 (555) 123-4567", "5551234567", "+44 20 7946 0958"] {
            fields.phone = good.to_string();
            assert!(validate_field(&fields, ContactField::Phone).is_ok(), "{good}");
        }
        for bad in ["0123456", "call me", "+", "12345678901234567", "555.123.4567"] {
            fields.phone = bad.to_string();
            assert_eq!(
                validate_field(&fields, ContactField::Phone),
                Err(FieldError::PhoneInvalid),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+1 (555) 123-4567"), "+15551234567");
        assert_eq!(normalize_phone(" 42 "), "42");
    }

    #[test]
    fn test_clear_removes_only_one_field() {
        let mut errors = validate(&ContactFields::default());
        assert_eq!(errors.clear(ContactField::Email), Some(FieldError::EmailRequired));
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(ContactField::Name));
        assert_eq!(errors.clear(ContactField::Email), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::NameRequired.to_string(), "Name is required");
        assert_eq!(
            FieldError::NameTooShort.to_string(),
            "Name must be at least 2 characters"
        );
        assert_eq!(
            FieldError::MessageTooShort.to_string(),
            "Message must be at least 10 characters"
        );
        let errors = validate(&ContactFields::default());
        assert_eq!(
            errors.message(ContactField::Company).as_deref(),
            Some("Company name is required")
        );
        assert_eq!(errors.message(ContactField::Phone), None);
    }

    #[test]
    fn test_fields_get_set() {
        let mut fields = ContactFields::default();
        fields.set(ContactField::Company, "Acme");
        fields.set(ContactField::Interest, "demo");
        assert_eq!(fields.get(ContactField::Company), "Acme");
        assert_eq!(fields.interest, Interest::Demo);

        fields.set(ContactField::Interest, "nonsense");
        assert_eq!(fields.interest, Interest::General);
    }

    #[test]
    fn test_interest_labels() {
        assert_eq!(Interest::default().label(), "General Inquiry");
        for interest in Interest::ALL {
            assert_eq!(Interest::from_str(interest.as_str()), interest);
        }
    }
}
