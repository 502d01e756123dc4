//! Field validation and the copy/download validity gate
//!
//! The generator renders whatever it is given. Whether the result may be
//! copied or downloaded is decided here, from the record alone.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

use crate::model::SignatureData;

/// Field-level validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Value contains characters outside the allowed set
    #[error("{field} can only contain {allowed}")]
    PatternMismatch {
        field: &'static str,
        allowed: &'static str,
        value: String,
    },
    /// Email is not syntactically valid
    #[error("Please enter a valid email address ('{0}')")]
    InvalidEmail(String),
    /// URL failed to parse
    #[error("{field} has an invalid URL ('{value}')")]
    InvalidUrl { field: &'static str, value: String },
    /// Social platform outside the supported set
    #[error("Unsupported social platform '{0}'")]
    UnknownPlatform(String),
}

fn letters_and_spaces() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z\s]*$").expect("invalid regex"))
}

fn phone_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9+]*$").expect("invalid regex"))
}

fn email_syntax() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-\.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("invalid regex")
    })
}

/// Whether `value` parses as an absolute URL.
pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// Whether `value` looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && email_syntax().is_match(value)
}

/// Validate the record's non-empty fields. Blank required fields are
/// reported by [`Readiness`], not here.
pub fn validate(data: &SignatureData) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for (field, value) in [("Name", &data.name), ("Position", &data.position)] {
        if !letters_and_spaces().is_match(value) {
            errors.push(FieldError::PatternMismatch {
                field,
                allowed: "letters and spaces",
                value: value.clone(),
            });
        }
    }
    if !data.email.is_empty() && !is_valid_email(&data.email) {
        errors.push(FieldError::InvalidEmail(data.email.clone()));
    }
    if !phone_chars().is_match(&data.phone) {
        errors.push(FieldError::PatternMismatch {
            field: "Phone number",
            allowed: "numbers and +",
            value: data.phone.clone(),
        });
    }
    for site in data.websites.iter().filter(|s| !s.is_empty()) {
        if !is_valid_url(site) {
            errors.push(FieldError::InvalidUrl {
                field: "Website",
                value: site.clone(),
            });
        }
    }
    for link in &data.social_links {
        if !link.platform.is_known() {
            errors.push(FieldError::UnknownPlatform(link.platform.as_str().to_string()));
        }
        if !link.url.trim().is_empty() && !is_valid_url(&link.url) {
            errors.push(FieldError::InvalidUrl {
                field: "Social link",
                value: link.url.clone(),
            });
        }
    }
    errors
}

/// One unchecked item on the readiness checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadinessIssue {
    NameMissing,
    PositionMissing,
    EmailMissing,
    PhoneMissing,
    /// A social link without a URL (whitespace counts as empty)
    EmptySocialLink,
    /// A blank entry in the website list
    EmptyWebsite,
    Invalid(FieldError),
}

impl fmt::Display for ReadinessIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadinessIssue::NameMissing => f.write_str("Name is required"),
            ReadinessIssue::PositionMissing => f.write_str("Position is required"),
            ReadinessIssue::EmailMissing => f.write_str("Email is required"),
            ReadinessIssue::PhoneMissing => f.write_str("Phone number is required"),
            ReadinessIssue::EmptySocialLink => f.write_str("Remove empty social links or add URLs"),
            ReadinessIssue::EmptyWebsite => f.write_str("Remove empty websites or add URLs"),
            ReadinessIssue::Invalid(e) => write!(f, "{e}"),
        }
    }
}

/// Result of the validity gate: an ordered checklist of open issues
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Readiness {
    pub issues: Vec<ReadinessIssue>,
}

impl Readiness {
    /// Evaluate the gate for `data`.
    pub fn check(data: &SignatureData) -> Self {
        let mut issues = Vec::new();
        let required = [
            (&data.name, ReadinessIssue::NameMissing),
            (&data.position, ReadinessIssue::PositionMissing),
            (&data.email, ReadinessIssue::EmailMissing),
            (&data.phone, ReadinessIssue::PhoneMissing),
        ];
        for (value, issue) in required {
            if value.is_empty() {
                issues.push(issue);
            }
        }
        if data.social_links.iter().any(|l| l.url.trim().is_empty()) {
            issues.push(ReadinessIssue::EmptySocialLink);
        }
        if data.websites.iter().any(|w| w.is_empty()) {
            issues.push(ReadinessIssue::EmptyWebsite);
        }
        issues.extend(validate(data).into_iter().map(ReadinessIssue::Invalid));
        Self { issues }
    }

    /// Whether copy/download may proceed.
    pub fn is_ready(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "• {issue}")?;
        }
        Ok(())
    }
}
