use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::contact::application::domain::entities::ContactMessage;
use crate::email::application::ports::outgoing::contact_notifier::{
    ContactNotificationError, ContactNotifier,
};
use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::shared::templates::{
    TemplateRenderer, CONTACT_ACKNOWLEDGEMENT_EMAIL, CONTACT_NOTIFICATION_EMAIL,
};

#[derive(Serialize)]
struct ContactEmailContext<'a> {
    site_name: &'a str,
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    received_at: String,
}

#[derive(Clone)]
pub struct ContactEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    templates: Arc<TemplateRenderer>,
    owner_email: String,
    site_name: String,
}

impl fmt::Debug for ContactEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("owner_email", &self.owner_email)
            .finish()
    }
}

impl ContactEmailService {
    pub fn new(
        sender: Arc<dyn EmailSender + Send + Sync>,
        templates: Arc<TemplateRenderer>,
        owner_email: String,
        site_name: String,
    ) -> Self {
        Self {
            sender,
            templates,
            owner_email,
            site_name,
        }
    }

    fn render(
        &self,
        template: &str,
        message: &ContactMessage,
    ) -> Result<String, ContactNotificationError> {
        let context = ContactEmailContext {
            site_name: &self.site_name,
            name: &message.name,
            email: &message.email,
            subject: &message.subject,
            message: &message.message,
            received_at: message.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        };

        self.templates
            .render(template, &context)
            .map_err(|e| ContactNotificationError::TemplateFailed(e.to_string()))
    }
}

#[async_trait]
impl ContactNotifier for ContactEmailService {
    async fn notify_owner(&self, message: &ContactMessage) -> Result<(), ContactNotificationError> {
        let body = self.render(CONTACT_NOTIFICATION_EMAIL, message)?;
        let subject = format!(
            "[{}] New message from {}: {}",
            self.site_name, message.name, message.subject
        );

        self.sender
            .send_email(&self.owner_email, &subject, &body)
            .await
            .map_err(ContactNotificationError::EmailSendingFailed)
    }

    async fn acknowledge_sender(
        &self,
        message: &ContactMessage,
    ) -> Result<(), ContactNotificationError> {
        let body = self.render(CONTACT_ACKNOWLEDGEMENT_EMAIL, message)?;
        let subject = format!("Thanks for getting in touch, {}", message.name);

        self.sender
            .send_email(&message.email, &subject, &body)
            .await
            .map_err(ContactNotificationError::EmailSendingFailed)
    }
}
