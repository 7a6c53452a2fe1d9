//! Contact form contract.
//!
//! The site has no backend of its own. A submitted form goes to an external
//! form service (see [`crate::config::SiteConfig::form_endpoint`]); this
//! module defines what that service receives and the rules a draft must
//! pass before the browser is allowed to send it.
//!
//! | Field       | Rule                                                      |
//! |-------------|-----------------------------------------------------------|
//! | first_name  | required, at most 80 characters                          |
//! | last_name   | required, at most 80 characters                           |
//! | email       | required, `local@domain.tld`                              |
//! | phone       | optional; 7-15 digits, separators `+ - ( ) .` and space   |
//! | service     | required, one of [`ServiceInterest`]                      |
//! | budget      | optional, one of [`BudgetRange`]                          |
//! | message     | required, 20-5000 characters                              |

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::ContentError;

pub const NAME_MAX_CHARS: usize = 80;
pub const MESSAGE_MIN_CHARS: usize = 20;
pub const MESSAGE_MAX_CHARS: usize = 5000;
pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Service a prospect is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceInterest {
    CommercialShoots,
    PerformanceMarketing,
    UgcContent,
    BrandStrategy,
    WebDevelopment,
    Other,
}

impl ServiceInterest {
    pub const ALL: [ServiceInterest; 6] = [
        ServiceInterest::CommercialShoots,
        ServiceInterest::PerformanceMarketing,
        ServiceInterest::UgcContent,
        ServiceInterest::BrandStrategy,
        ServiceInterest::WebDevelopment,
        ServiceInterest::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceInterest::CommercialShoots => "Commercial Shoots",
            ServiceInterest::PerformanceMarketing => "Performance Marketing",
            ServiceInterest::UgcContent => "UGC Content",
            ServiceInterest::BrandStrategy => "Brand Strategy",
            ServiceInterest::WebDevelopment => "Web Development",
            ServiceInterest::Other => "Other",
        }
    }

    /// Value of the `<option>` element.
    pub fn key(self) -> &'static str {
        match self {
            ServiceInterest::CommercialShoots => "commercial_shoots",
            ServiceInterest::PerformanceMarketing => "performance_marketing",
            ServiceInterest::UgcContent => "ugc_content",
            ServiceInterest::BrandStrategy => "brand_strategy",
            ServiceInterest::WebDevelopment => "web_development",
            ServiceInterest::Other => "other",
        }
    }
}

impl fmt::Display for ServiceInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceInterest {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ServiceInterest::ALL
            .into_iter()
            .find(|svc| svc.key() == wanted || svc.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ContentError::UnknownService(s.to_string()))
    }
}

/// Budget band offered in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "from_5k_to_10k")]
    From5kTo10k,
    #[serde(rename = "from_10k_to_25k")]
    From10kTo25k,
    #[serde(rename = "from_25k_to_50k")]
    From25kTo50k,
    #[serde(rename = "over_50k")]
    Over50k,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 4] = [
        BudgetRange::From5kTo10k,
        BudgetRange::From10kTo25k,
        BudgetRange::From25kTo50k,
        BudgetRange::Over50k,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BudgetRange::From5kTo10k => "$5,000 - $10,000",
            BudgetRange::From10kTo25k => "$10,000 - $25,000",
            BudgetRange::From25kTo50k => "$25,000 - $50,000",
            BudgetRange::Over50k => "$50,000+",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            BudgetRange::From5kTo10k => "from_5k_to_10k",
            BudgetRange::From10kTo25k => "from_10k_to_25k",
            BudgetRange::From25kTo50k => "from_25k_to_50k",
            BudgetRange::Over50k => "over_50k",
        }
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BudgetRange {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BudgetRange::ALL
            .into_iter()
            .find(|band| band.key() == wanted || band.label() == wanted)
            .ok_or_else(|| ContentError::UnknownBudget(s.to_string()))
    }
}

/// Form field names, as used in `name=` attributes and error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Service,
    Budget,
    Message,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Budget => "budget",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Every problem found in a draft, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{} invalid field(s): {}", .errors.len(), summary(.errors))]
pub struct InquiryErrors {
    pub errors: Vec<FieldError>,
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl InquiryErrors {
    /// Message for `field`, if it failed.
    pub fn for_field(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(|e| e.field).collect()
    }
}

/// Raw form values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub budget: String,
    pub message: String,
}

/// A validated inquiry, ready to hand to the form service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub service: ServiceInterest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetRange>,
    pub message: String,
}

impl ContactInquiry {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl ContactDraft {
    /// Check every field and normalise whitespace.
    ///
    /// All failures are collected, so the form can mark every bad field at
    /// once instead of one per submit.
    pub fn validate(&self) -> Result<ContactInquiry, InquiryErrors> {
        let mut errors = Vec::new();
        let mut fail = |field: Field, message: &str| {
            errors.push(FieldError {
                field,
                message: message.to_string(),
            })
        };

        let first_name = collapse_spaces(&self.first_name);
        check_name(&first_name, Field::FirstName, &mut fail);
        let last_name = collapse_spaces(&self.last_name);
        check_name(&last_name, Field::LastName, &mut fail);

        let email = self.email.trim().to_string();
        if email.is_empty() {
            fail(Field::Email, "Email address is required");
        } else if !EMAIL_RE.is_match(&email) {
            fail(Field::Email, "Enter a valid email address");
        }

        let phone = self.phone.trim();
        if !phone.is_empty() && !is_valid_phone(phone) {
            fail(Field::Phone, "Enter 7-15 digits");
        }

        let service = match self.service.trim() {
            "" => {
                fail(Field::Service, "Select a service");
                None
            }
            raw => match raw.parse::<ServiceInterest>() {
                Ok(svc) => Some(svc),
                Err(_) => {
                    fail(Field::Service, "Select a service from the list");
                    None
                }
            },
        };

        let budget = match self.budget.trim() {
            "" => None,
            raw => match raw.parse::<BudgetRange>() {
                Ok(band) => Some(band),
                Err(_) => {
                    fail(Field::Budget, "Select a budget range from the list");
                    None
                }
            },
        };

        let message = self.message.trim().to_string();
        let length = message.chars().count();
        if length == 0 {
            fail(Field::Message, "Tell us about your project");
        } else if length < MESSAGE_MIN_CHARS {
            fail(Field::Message, "Add a little more detail (at least 20 characters)");
        } else if length > MESSAGE_MAX_CHARS {
            fail(Field::Message, "Keep it under 5000 characters");
        }

        match service {
            Some(service) if errors.is_empty() => Ok(ContactInquiry {
                first_name,
                last_name,
                email,
                phone: (!phone.is_empty()).then(|| phone.to_string()),
                service,
                budget,
                message,
            }),
            _ => Err(InquiryErrors { errors }),
        }
    }
}

fn check_name(value: &str, field: Field, fail: &mut impl FnMut(Field, &str)) {
    if value.is_empty() {
        fail(field, "This field is required");
    } else if value.chars().count() > NAME_MAX_CHARS {
        fail(field, "Use at most 80 characters");
    }
}

fn collapse_spaces(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_valid_phone(phone: &str) -> bool {
    let mut digits = 0usize;
    for c in phone.chars() {
        match c {
            '0'..='9' => digits += 1,
            '+' | '-' | '(' | ')' | '.' | ' ' => {}
            _ => return false,
        }
    }
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete() -> ContactDraft {
        ContactDraft {
            first_name: "  Ada ".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            service: "commercial_shoots".into(),
            budget: "$10,000 - $25,000".into(),
            message: "Launch campaign for a new running shoe line.".into(),
        }
    }

    #[test]
    fn accepts_complete_draft() {
        let inquiry = complete().validate().unwrap();
        assert_eq!(inquiry.first_name, "Ada");
        assert_eq!(inquiry.full_name(), "Ada Lovelace");
        assert_eq!(inquiry.service, ServiceInterest::CommercialShoots);
        assert_eq!(inquiry.budget, Some(BudgetRange::From10kTo25k));
        assert_eq!(inquiry.phone.as_deref(), Some("+1 (555) 123-4567"));
    }

    #[test]
    fn optional_fields_may_be_blank() {
        let draft = ContactDraft {
            phone: String::new(),
            budget: String::new(),
            ..complete()
        };
        let inquiry = draft.validate().unwrap();
        assert_eq!(inquiry.phone, None);
        assert_eq!(inquiry.budget, None);
    }

    #[test]
    fn reports_every_bad_field() {
        let err = ContactDraft::default().validate().unwrap_err();
        assert_eq!(
            err.fields(),
            vec![Field::FirstName, Field::LastName, Field::Email, Field::Service, Field::Message]
        );
        assert_eq!(err.for_field(Field::Email), Some("Email address is required"));
        assert!(err.to_string().starts_with("5 invalid field(s)"));
    }

    #[test]
    fn rejects_malformed_email_and_phone() {
        let draft = ContactDraft {
            email: "ada@localhost".into(),
            phone: "call me".into(),
            ..complete()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.fields(), vec![Field::Email, Field::Phone]);

        assert!(!is_valid_phone("123"));
        assert!(is_valid_phone("555.123.4567"));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn rejects_unknown_options() {
        let draft = ContactDraft {
            service: "catering".into(),
            budget: "$1M".into(),
            ..complete()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.fields(), vec![Field::Service, Field::Budget]);
    }

    #[test]
    fn message_length_bounds() {
        let short = ContactDraft {
            message: "Hi there".into(),
            ..complete()
        };
        assert_eq!(short.validate().unwrap_err().fields(), vec![Field::Message]);

        let long = ContactDraft {
            message: "x".repeat(MESSAGE_MAX_CHARS + 1),
            ..complete()
        };
        assert_eq!(long.validate().unwrap_err().fields(), vec![Field::Message]);
    }

    #[test]
    fn options_parse_from_labels_and_keys() {
        for svc in ServiceInterest::ALL {
            assert_eq!(svc.label().parse::<ServiceInterest>().unwrap(), svc);
            assert_eq!(svc.key().parse::<ServiceInterest>().unwrap(), svc);
        }
        for band in BudgetRange::ALL {
            assert_eq!(band.label().parse::<BudgetRange>().unwrap(), band);
            assert_eq!(band.key().parse::<BudgetRange>().unwrap(), band);
        }
    }

    #[test]
    fn inquiry_serializes_without_empty_optionals() {
        let draft = ContactDraft {
            phone: String::new(),
            budget: String::new(),
            ..complete()
        };
        let json = serde_json::to_value(draft.validate().unwrap()).unwrap();
        assert_eq!(json["service"], "commercial_shoots");
        assert!(json.get("phone").is_none());
        assert!(json.get("budget").is_none());
    }
}
