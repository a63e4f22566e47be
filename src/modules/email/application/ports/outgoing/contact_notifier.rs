use crate::contact::application::domain::entities::ContactMessage;

#[derive(Debug, thiserror::Error)]
pub enum ContactNotificationError {
    #[error("Template rendering failed: {0}")]
    TemplateFailed(String),

    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait ContactNotifier: Send + Sync {
    /// Tells the site owner a message arrived.
    async fn notify_owner(&self, message: &ContactMessage) -> Result<(), ContactNotificationError>;

    /// Confirms receipt to whoever submitted the form.
    async fn acknowledge_sender(
        &self,
        message: &ContactMessage,
    ) -> Result<(), ContactNotificationError>;
}
