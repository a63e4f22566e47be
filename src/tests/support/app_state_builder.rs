use actix_web::web;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::LoginAdminUseCase;
use crate::chatbot::application::ports::incoming::use_cases::{
    ListChatLogsUseCase, RelayChatUseCase,
};
use crate::chatbot::application::ports::outgoing::RateLimiter;
use crate::chatbot::application::ChatbotUseCases;
use crate::config::SiteSettings;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::incoming::use_cases::{
    ListContactMessagesUseCase, SubmitContactUseCase,
};
use crate::portfolio::application::domain::entities::Project;
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioPageUseCase, ManageContentUseCase, ManageProfileUseCase,
    UploadCertificationDocumentUseCase,
};
use crate::shared::templates::TemplateRenderer;
use crate::tests::support::stubs::*;
use crate::AppState;

/// AppState with stubbed use cases; override only what a test exercises.
pub struct TestAppStateBuilder {
    login_admin: Arc<dyn LoginAdminUseCase + Send + Sync>,
    portfolio: PortfolioUseCases,
    contact: ContactUseCases,
    chatbot: ChatbotUseCases,
    site: SiteSettings,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_admin: Arc::new(StubLoginAdmin),
            portfolio: PortfolioUseCases {
                page: Arc::new(StubPortfolioPage),
                profile: Arc::new(StubProfile),
                projects: Arc::new(StubContent::default()),
                skills: Arc::new(StubContent::default()),
                experiences: Arc::new(StubContent::default()),
                educations: Arc::new(StubContent::default()),
                certifications: Arc::new(StubContent::default()),
                links: Arc::new(StubContent::default()),
                certification_documents: Arc::new(StubCertificationDocuments),
            },
            contact: ContactUseCases {
                submit: Arc::new(StubSubmitContact),
                list_messages: Arc::new(StubListContactMessages),
            },
            chatbot: ChatbotUseCases {
                relay: Arc::new(StubRelayChat),
                list_logs: Arc::new(StubListChatLogs),
                rate_limiter: Arc::new(AllowAllLimiter),
            },
            site: SiteSettings {
                site_name: "Jane Doe".to_string(),
                media_url: "/media".to_string(),
                trust_proxy_headers: false,
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_admin(mut self, uc: impl LoginAdminUseCase + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_portfolio_page(mut self, uc: impl GetPortfolioPageUseCase + 'static) -> Self {
        self.portfolio.page = Arc::new(uc);
        self
    }

    pub fn with_profile(mut self, uc: impl ManageProfileUseCase + 'static) -> Self {
        self.portfolio.profile = Arc::new(uc);
        self
    }

    pub fn with_projects(mut self, uc: impl ManageContentUseCase<Project> + 'static) -> Self {
        self.portfolio.projects = Arc::new(uc);
        self
    }

    pub fn with_certification_documents(
        mut self,
        uc: impl UploadCertificationDocumentUseCase + 'static,
    ) -> Self {
        self.portfolio.certification_documents = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(mut self, uc: impl SubmitContactUseCase + 'static) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_list_contact_messages(
        mut self,
        uc: impl ListContactMessagesUseCase + 'static,
    ) -> Self {
        self.contact.list_messages = Arc::new(uc);
        self
    }

    pub fn with_relay_chat(mut self, uc: impl RelayChatUseCase + 'static) -> Self {
        self.chatbot.relay = Arc::new(uc);
        self
    }

    pub fn with_list_chat_logs(mut self, uc: impl ListChatLogsUseCase + 'static) -> Self {
        self.chatbot.list_logs = Arc::new(uc);
        self
    }

    pub fn with_rate_limiter(mut self, limiter: impl RateLimiter + 'static) -> Self {
        self.chatbot.rate_limiter = Arc::new(limiter);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_admin: self.login_admin,
            portfolio: self.portfolio,
            contact: self.contact,
            chatbot: self.chatbot,
            templates: Arc::new(TemplateRenderer::new().expect("templates compile")),
            site: self.site,
        })
    }
}
