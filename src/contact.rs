use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationErrors;

pub const MIN_MESSAGE_LEN: usize = 10;

pub const FIELD_FIRST_NAME: &str = "firstName";
pub const FIELD_LAST_NAME: &str = "lastName";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MESSAGE: &str = "message";

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MESSAGE_TOO_SHORT: &str = "Please enter a message with at least 10 characters";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// A message from the contact form, in the JSON shape `POST /api/contact` takes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Checks every field and returns the trimmed submission, with a blank
    /// company dropped.
    pub fn validated(&self) -> Result<ContactSubmission, ValidationErrors> {
        let normalized = ContactSubmission {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self
                .company
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            message: self.message.trim().to_string(),
        };

        let mut errors = ValidationErrors::new();
        if normalized.first_name.is_empty() {
            errors.push(FIELD_FIRST_NAME, FIRST_NAME_REQUIRED);
        }
        if normalized.last_name.is_empty() {
            errors.push(FIELD_LAST_NAME, LAST_NAME_REQUIRED);
        }
        if !is_valid_email(&normalized.email) {
            errors.push(FIELD_EMAIL, INVALID_EMAIL);
        }
        if normalized.message.chars().count() < MIN_MESSAGE_LEN {
            errors.push(FIELD_MESSAGE, MESSAGE_TOO_SHORT);
        }
        errors.into_result(normalized)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    // the pattern can't express these without lookaround
    if local.starts_with('.') || email.contains("..") {
        return false;
    }
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactSubmission {
        ContactSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            company: Some("Acme Devices".to_string()),
            message: "I'd like to talk about a product launch.".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_has_no_errors() {
        let submission = valid();
        assert_eq!(submission.validated(), Ok(submission.clone()));
    }

    #[test]
    fn test_missing_first_name() {
        let submission = ContactSubmission {
            first_name: String::new(),
            ..valid()
        };
        let errors = submission.validated().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for(FIELD_FIRST_NAME), Some(FIRST_NAME_REQUIRED));
    }

    #[test]
    fn test_whitespace_name_counts_as_missing() {
        let submission = ContactSubmission {
            last_name: "   ".to_string(),
            ..valid()
        };
        let errors = submission.validated().unwrap_err();
        assert_eq!(errors.message_for(FIELD_LAST_NAME), Some(LAST_NAME_REQUIRED));
    }

    #[test]
    fn test_bad_email() {
        let submission = ContactSubmission {
            email: "not-an-email".to_string(),
            ..valid()
        };
        let errors = submission.validated().unwrap_err();
        assert_eq!(errors.message_for(FIELD_EMAIL), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_short_message() {
        let submission = ContactSubmission {
            message: "short".to_string(),
            ..valid()
        };
        let errors = submission.validated().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for(FIELD_MESSAGE), Some(MESSAGE_TOO_SHORT));

        let exactly_ten = ContactSubmission {
            message: "0123456789".to_string(),
            ..valid()
        };
        assert!(exactly_ten.validated().is_ok());
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = ContactSubmission::default().validated().unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_normalization() {
        let submission = ContactSubmission {
            first_name: "  Jane ".to_string(),
            company: Some("  ".to_string()),
            ..valid()
        };
        let normalized = submission.validated().unwrap();
        assert_eq!(normalized.first_name, "Jane");
        assert_eq!(normalized.company, None);
    }

    #[test]
    fn test_email_rules() {
        for good in [
            "a@b.co",
            "first.last@sub.example.org",
            "o'neil+tag@example.io",
        ] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in [
            "",
            "plain",
            "@example.com",
            "a@b",
            "a@b.c",
            ".a@example.com",
            "a..b@example.com",
            "a.@example.com",
            "a b@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(valid()).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["lastName"], "Doe");

        let parsed: ContactSubmission = serde_json::from_str(
            r#"{"firstName":"A","lastName":"B","email":"a@b.co","message":"hello there"}"#,
        )
        .unwrap();
        assert_eq!(parsed.company, None);
    }
}
