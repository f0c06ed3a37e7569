use std::time::Duration;

use entity::prelude::*;

/// How long the success notice stays up before the form resets.
pub const SUCCESS_CLEAR_DELAY: Duration = Duration::from_secs(5);

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent. We'll be in touch soon.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Succeeded { since: Duration },
    Failed(String),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Browser-side state of the contact section.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormState {
    form: ContactForm,
    status: FormStatus,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            status: FormStatus::Idle,
        }
    }
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Inline notice to show under the form, if any.
    pub fn message(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Succeeded { .. } => Some(SUCCESS_MESSAGE),
            FormStatus::Failed(message) => Some(message.as_str()),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }

    /// Validates with the server's rules and, if the form is complete,
    /// returns the payload to POST. A second call while the first request
    /// is still in flight is rejected.
    pub fn begin_submit(&mut self) -> Result<ContactForm, SubmitError> {
        if self.status == FormStatus::Submitting {
            return Err(SubmitError::InFlight);
        }

        if let Err(e) = self.form.clone().validate() {
            self.status = FormStatus::Failed(e.to_string());
            return Err(e.into());
        }

        self.status = FormStatus::Submitting;
        Ok(self.form.clone())
    }

    /// Records the response. Success clears the fields.
    pub fn finish_submit(
        &mut self,
        result: Result<(), String>,
        now: Duration,
    ) {
        match result {
            Ok(()) => {
                self.form = ContactForm::default();
                self.status = FormStatus::Succeeded { since: now };
            }
            Err(message) => self.status = FormStatus::Failed(message),
        }
    }

    /// Clears an expired success notice. Returns whether anything changed.
    pub fn advance(&mut self, now: Duration) -> bool {
        match self.status {
            FormStatus::Succeeded { since }
                if now.saturating_sub(since) >= SUCCESS_CLEAR_DELAY =>
            {
                self.status = FormStatus::Idle;
                true
            }
            _ => false,
        }
    }
}
