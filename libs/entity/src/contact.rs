use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A contact-form submission as it is persisted.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct ContactSubmission {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_type: Option<String>,
    pub message: String,
    pub status: SubmissionStatus,
    pub created_at: NaiveDateTime,
}

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    New,
    Contacted,
    Archived,
}

/// Raw contact-form input, before validation.
///
/// Both the server and the browser-side form state validate through
/// [`ContactForm::validate`], so the two can never disagree about what
/// counts as a complete submission.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service_type: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("message is required")]
    MissingMessage,
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "name",
            ValidationError::MissingEmail => "email",
            ValidationError::MissingMessage => "message",
        }
    }
}

impl ContactForm {
    /// Checks the required fields and builds a new submission.
    ///
    /// Values are trimmed; whitespace-only counts as missing. Empty
    /// optional fields become `None`.
    pub fn validate(self) -> Result<ContactSubmission, ValidationError> {
        let name = required(self.name).ok_or(ValidationError::MissingName)?;
        let email =
            required(self.email).ok_or(ValidationError::MissingEmail)?;
        let message =
            required(self.message).ok_or(ValidationError::MissingMessage)?;

        Ok(ContactSubmission {
            name,
            email,
            phone: required(self.phone),
            service_type: required(self.service_type),
            message,
            status: SubmissionStatus::New,
            ..Default::default()
        })
    }
}

fn required(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_complete_form() {
        // Arrange
        let input = ContactForm {
            phone: Some("".to_string()),
            service_type: Some(" Branding ".to_string()),
            ..form("Jan", "jan@example.com", "Hello")
        };

        // Act
        let submission = input.validate().unwrap();

        // Assert
        assert_eq!(submission.name, "Jan");
        assert_eq!(submission.email, "jan@example.com");
        assert_eq!(submission.message, "Hello");
        assert_eq!(submission.phone, None);
        assert_eq!(submission.service_type.as_deref(), Some("Branding"));
        assert_eq!(submission.status, SubmissionStatus::New);
    }

    #[test]
    fn test_validate_missing_fields() {
        assert_eq!(
            form("", "jan@example.com", "Hello").validate(),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            form("Jan", "   ", "Hello").validate(),
            Err(ValidationError::MissingEmail)
        );
        assert_eq!(
            form("Jan", "jan@example.com", "").validate(),
            Err(ValidationError::MissingMessage)
        );
        assert_eq!(
            ContactForm::default().validate(),
            Err(ValidationError::MissingName)
        );
    }

    #[test]
    fn test_validation_error_names_field() {
        let e = form("Jan", "", "Hello").validate().unwrap_err();

        assert_eq!(e.field(), "email");
        assert_eq!(e.to_string(), "email is required");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(SubmissionStatus::New.as_ref(), "new");
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::Contacted).unwrap(),
            "\"contacted\""
        );
    }
}
