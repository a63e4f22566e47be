use async_trait::async_trait;
use std::marker::PhantomData;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::auth::application::ports::incoming::use_cases::{
    LoginAdminError, LoginAdminRequest, LoginAdminResponse, LoginAdminUseCase,
};
use crate::chatbot::application::domain::entities::ChatLog;
use crate::chatbot::application::ports::incoming::use_cases::{
    ListChatLogsError, ListChatLogsQuery, ListChatLogsUseCase, RelayChatCommand,
    RelayChatUseCase, RelayOutcome,
};
use crate::chatbot::application::ports::outgoing::{
    RateLimitDecision, RateLimiter, RateLimiterError,
};
use crate::contact::application::domain::entities::ContactMessage;
use crate::contact::application::ports::incoming::use_cases::{
    ListContactMessagesError, ListContactMessagesUseCase, SubmitContactCommand,
    SubmitContactError, SubmitContactUseCase,
};
use crate::portfolio::application::domain::drafts::ProfileDraft;
use crate::portfolio::application::domain::entities::{Certification, PortfolioPage, Profile};
use crate::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioPageError, GetPortfolioPageUseCase, ManageContentError, ManageContentUseCase,
    ManageProfileError, ManageProfileUseCase, UploadCertificationDocumentError,
    UploadCertificationDocumentUseCase,
};
use crate::portfolio::application::ports::outgoing::ContentRecord;
use crate::shared::multipart::UploadedFile;
use crate::shared::pagination::{PageRequest, PageResult};

fn empty_page<T>(page: PageRequest) -> PageResult<T> {
    PageResult {
        items: Vec::new(),
        page: page.page,
        per_page: page.per_page,
        total: 0,
    }
}

// ──────────────────────────────────────────────────────────
// Auth
// ──────────────────────────────────────────────────────────

pub struct StubLoginAdmin;

#[async_trait]
impl LoginAdminUseCase for StubLoginAdmin {
    async fn execute(
        &self,
        _request: LoginAdminRequest,
    ) -> Result<LoginAdminResponse, LoginAdminError> {
        Err(LoginAdminError::InvalidCredentials)
    }
}

// ──────────────────────────────────────────────────────────
// Portfolio
// ──────────────────────────────────────────────────────────

pub struct StubPortfolioPage;

#[async_trait]
impl GetPortfolioPageUseCase for StubPortfolioPage {
    async fn execute(&self) -> Result<PortfolioPage, GetPortfolioPageError> {
        Err(GetPortfolioPageError::ProfileMissing)
    }
}

pub struct StubProfile;

#[async_trait]
impl ManageProfileUseCase for StubProfile {
    async fn get(&self) -> Result<Profile, ManageProfileError> {
        Err(ManageProfileError::NotFound)
    }

    async fn upsert(&self, _draft: ProfileDraft) -> Result<Profile, ManageProfileError> {
        Err(ManageProfileError::NotFound)
    }

    async fn replace_image(&self, _file: UploadedFile) -> Result<Profile, ManageProfileError> {
        Err(ManageProfileError::NotFound)
    }

    async fn replace_resume(&self, _file: UploadedFile) -> Result<Profile, ManageProfileError> {
        Err(ManageProfileError::NotFound)
    }
}

/// Empty collection of any content kind.
pub struct StubContent<C>(PhantomData<fn() -> C>);

impl<C> Default for StubContent<C> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

#[async_trait]
impl<C: ContentRecord> ManageContentUseCase<C> for StubContent<C> {
    async fn list(&self) -> Result<Vec<C>, ManageContentError> {
        Ok(Vec::new())
    }

    async fn get(&self, _id: Uuid) -> Result<C, ManageContentError> {
        Err(ManageContentError::NotFound)
    }

    async fn create(&self, _draft: C::Draft) -> Result<C, ManageContentError> {
        Err(ManageContentError::RepositoryError("stub".to_string()))
    }

    async fn update(&self, _id: Uuid, _draft: C::Draft) -> Result<C, ManageContentError> {
        Err(ManageContentError::NotFound)
    }

    async fn delete(&self, _id: Uuid) -> Result<(), ManageContentError> {
        Err(ManageContentError::NotFound)
    }
}

pub struct StubCertificationDocuments;

#[async_trait]
impl UploadCertificationDocumentUseCase for StubCertificationDocuments {
    async fn execute(
        &self,
        _certification_id: Uuid,
        _file: UploadedFile,
    ) -> Result<Certification, UploadCertificationDocumentError> {
        Err(UploadCertificationDocumentError::NotFound)
    }
}

// ──────────────────────────────────────────────────────────
// Contact
// ──────────────────────────────────────────────────────────

pub struct StubSubmitContact;

#[async_trait]
impl SubmitContactUseCase for StubSubmitContact {
    async fn execute(
        &self,
        _command: SubmitContactCommand,
    ) -> Result<ContactMessage, SubmitContactError> {
        Err(SubmitContactError::RepositoryError("stub".to_string()))
    }
}

pub struct StubListContactMessages;

#[async_trait]
impl ListContactMessagesUseCase for StubListContactMessages {
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<ContactMessage>, ListContactMessagesError> {
        Ok(empty_page(page))
    }
}

// ──────────────────────────────────────────────────────────
// Chatbot
// ──────────────────────────────────────────────────────────

pub struct StubRelayChat;

#[async_trait]
impl RelayChatUseCase for StubRelayChat {
    async fn execute(
        &self,
        _command: RelayChatCommand,
        _fragments: mpsc::Sender<String>,
    ) -> RelayOutcome {
        RelayOutcome::Unavailable
    }
}

pub struct StubListChatLogs;

#[async_trait]
impl ListChatLogsUseCase for StubListChatLogs {
    async fn execute(
        &self,
        query: ListChatLogsQuery,
    ) -> Result<PageResult<ChatLog>, ListChatLogsError> {
        Ok(empty_page(query.page))
    }
}

/// Never limits.
pub struct AllowAllLimiter;

#[async_trait]
impl RateLimiter for AllowAllLimiter {
    async fn hit(&self, _client_key: &str) -> Result<RateLimitDecision, RateLimiterError> {
        Ok(RateLimitDecision {
            allowed: true,
            limit: u32::MAX,
            retry_after_secs: 0,
        })
    }
}
