use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contact::application::domain::entities::{
    ContactMessage, FieldErrors, EMAIL_MAX_CHARS, MESSAGE_MAX_CHARS, NAME_MAX_CHARS, SUBJECT_MAX_CHARS,
};

//
// ──────────────────────────────────────────────────────────
// Submit Contact Command
// ──────────────────────────────────────────────────────────
//

/// Raw form values, kept around so an invalid form can be re-rendered as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl SubmitContactCommand {
    pub fn new(input: &ContactFormInput) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = required(&mut errors, "name", &input.name, NAME_MAX_CHARS);
        let subject = required(&mut errors, "subject", &input.subject, SUBJECT_MAX_CHARS);
        let message = required(&mut errors, "message", &input.message, MESSAGE_MAX_CHARS);

        let email = input.email.trim();
        if email.is_empty() {
            errors.add("email", "This field is required.");
        } else if email.chars().count() > EMAIL_MAX_CHARS {
            errors.add(
                "email",
                format!("Ensure this value has at most {EMAIL_MAX_CHARS} characters."),
            );
        } else if !EmailAddress::is_valid(email) {
            errors.add("email", "Enter a valid email address.");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name,
            email: email.to_string(),
            subject,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn required(errors: &mut FieldErrors, field: &'static str, raw: &str, max: usize) -> String {
    let value = raw.trim();

    if value.is_empty() {
        errors.add(field, "This field is required.");
    } else if value.chars().count() > max {
        errors.add(
            field,
            format!("Ensure this value has at most {max} characters."),
        );
    }

    value.to_string()
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    /// Stores the message, then notifies the owner and acknowledges the sender.
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactMessage, SubmitContactError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ContactFormInput {
        ContactFormInput {
            name: "  Grace Hopper ".to_string(),
            email: "grace@example.com".to_string(),
            subject: "Hiring".to_string(),
            message: "Are you available?".to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let command = SubmitContactCommand::new(&input()).unwrap();

        assert_eq!(command.name(), "Grace Hopper");
        assert_eq!(command.email(), "grace@example.com");
    }

    #[test]
    fn test_blank_fields_are_required() {
        let errors = SubmitContactCommand::new(&ContactFormInput::default()).unwrap_err();

        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["email", "message", "name", "subject"]);
        assert_eq!(
            errors.get("name").unwrap(),
            &["This field is required.".to_string()]
        );
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut form = input();
        form.email = "not-an-email".to_string();

        let errors = SubmitContactCommand::new(&form).unwrap_err();

        assert_eq!(
            errors.get("email").unwrap(),
            &["Enter a valid email address.".to_string()]
        );
        assert!(errors.get("name").is_none());
    }

    #[test]
    fn test_overlong_email_is_a_field_error() {
        let domain = vec!["b".repeat(60); 4].join(".");
        let mut form = input();
        form.email = format!("{}@{domain}.com", "a".repeat(64));
        assert!(EmailAddress::is_valid(&form.email));

        let errors = SubmitContactCommand::new(&form).unwrap_err();

        assert_eq!(
            errors.get("email").unwrap(),
            &["Ensure this value has at most 254 characters.".to_string()]
        );
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email"]);
    }

    #[test]
    fn test_length_caps_count_characters() {
        let mut form = input();
        form.name = "é".repeat(NAME_MAX_CHARS);
        assert!(SubmitContactCommand::new(&form).is_ok());

        form.name.push('é');
        let errors = SubmitContactCommand::new(&form).unwrap_err();
        assert!(errors.get("name").is_some());
    }

    #[test]
    fn test_message_cap() {
        let mut form = input();
        form.message = "a".repeat(MESSAGE_MAX_CHARS + 1);

        let errors = SubmitContactCommand::new(&form).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["message"]);
    }
}
