use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::contact::application::domain::entities::ContactMessage;
use crate::contact::application::ports::{
    incoming::use_cases::{SubmitContactCommand, SubmitContactError, SubmitContactUseCase},
    outgoing::{ContactMessageRepository, NewContactMessage},
};
use crate::email::application::ports::outgoing::contact_notifier::ContactNotifier;

#[derive(Clone)]
pub struct SubmitContactService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    repository: R,
    notifier: Arc<dyn ContactNotifier + Send + Sync>,
}

impl<R> SubmitContactService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    pub fn new(repository: R, notifier: Arc<dyn ContactNotifier + Send + Sync>) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactMessage, SubmitContactError> {
        let saved = self
            .repository
            .save(NewContactMessage {
                name: command.name().to_string(),
                email: command.email().to_string(),
                subject: command.subject().to_string(),
                message: command.message().to_string(),
            })
            .await
            .map_err(|e| SubmitContactError::RepositoryError(e.to_string()))?;

        info!(message_id = %saved.id, "Contact message stored");

        // The message is stored; mail problems must not fail the submission.
        if let Err(e) = self.notifier.notify_owner(&saved).await {
            warn!(message_id = %saved.id, error = %e, "Owner notification failed");
        }

        if let Err(e) = self.notifier.acknowledge_sender(&saved).await {
            warn!(message_id = %saved.id, error = %e, "Sender acknowledgement failed");
        }

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::contact::application::ports::incoming::use_cases::ContactFormInput;
    use crate::contact::application::ports::outgoing::ContactMessageRepositoryError;
    use crate::email::adapter::outgoing::mock_sender::MockEmailSender;
    use crate::email::application::services::ContactEmailService;
    use crate::shared::pagination::{PageRequest, PageResult};
    use crate::shared::templates::TemplateRenderer;

    // ──────────────────────────────────────────────────────────
    // In-memory Repository
    // ──────────────────────────────────────────────────────────

    #[derive(Clone, Default)]
    struct InMemoryRepository {
        stored: Arc<Mutex<Vec<ContactMessage>>>,
        fail: bool,
    }

    #[async_trait]
    impl ContactMessageRepository for InMemoryRepository {
        async fn save(
            &self,
            data: NewContactMessage,
        ) -> Result<ContactMessage, ContactMessageRepositoryError> {
            if self.fail {
                return Err(ContactMessageRepositoryError::DatabaseError(
                    "connection reset".to_string(),
                ));
            }

            let message = ContactMessage {
                id: Uuid::new_v4(),
                name: data.name,
                email: data.email,
                subject: data.subject,
                message: data.message,
                created_at: Utc::now(),
            };
            self.stored.lock().unwrap().push(message.clone());
            Ok(message)
        }

        async fn list(
            &self,
            _page: PageRequest,
        ) -> Result<PageResult<ContactMessage>, ContactMessageRepositoryError> {
            unimplemented!()
        }
    }

    fn command() -> SubmitContactCommand {
        SubmitContactCommand::new(&ContactFormInput {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            subject: "Hiring".to_string(),
            message: "Are you available next month?".to_string(),
        })
        .unwrap()
    }

    fn service(
        repository: InMemoryRepository,
        sender: MockEmailSender,
    ) -> SubmitContactService<InMemoryRepository> {
        let notifier = ContactEmailService::new(
            Arc::new(sender),
            Arc::new(TemplateRenderer::new().unwrap()),
            "owner@example.com".to_string(),
            "Jane Doe".to_string(),
        );
        SubmitContactService::new(repository, Arc::new(notifier))
    }

    #[tokio::test]
    async fn test_success_stores_one_message_and_sends_two_emails() {
        let repository = InMemoryRepository::default();
        let sender = MockEmailSender::new();

        let saved = service(repository.clone(), sender.clone())
            .execute(command())
            .await
            .unwrap();

        let stored = repository.stored.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, saved.id);

        let sent = sender.get_sent_emails();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "owner@example.com");
        assert_eq!(sent[1].to, "grace@example.com");
    }

    #[tokio::test]
    async fn test_email_failure_does_not_fail_submission() {
        let repository = InMemoryRepository::default();
        let sender = MockEmailSender::failing_for("owner@example.com");

        let result = service(repository.clone(), sender.clone())
            .execute(command())
            .await;

        assert!(result.is_ok());
        assert_eq!(repository.stored.lock().unwrap().len(), 1);
        // The acknowledgement is still attempted.
        assert_eq!(sender.get_sent_emails().len(), 1);
    }

    #[tokio::test]
    async fn test_repository_failure_sends_nothing() {
        let repository = InMemoryRepository {
            fail: true,
            ..Default::default()
        };
        let sender = MockEmailSender::new();

        let result = service(repository, sender.clone()).execute(command()).await;

        assert!(matches!(
            result,
            Err(SubmitContactError::RepositoryError(_))
        ));
        assert!(sender.get_sent_emails().is_empty());
    }
}
