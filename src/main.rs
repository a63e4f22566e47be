pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, chatbot, contact, email, media, portfolio};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::application::ports::incoming::use_cases::LoginAdminUseCase;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::LoginAdminService;

use crate::chatbot::adapter::outgoing::{
    ChatHistoryRedis, ChatLogRepositoryPostgres, GeminiClient, GeminiModelCatalog,
    RateLimiterRedis,
};
use crate::chatbot::application::services::{ListChatLogsService, RelayChatService};
use crate::chatbot::application::ChatbotUseCases;

use crate::contact::adapter::outgoing::ContactMessageRepositoryPostgres;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::services::{ListContactMessagesService, SubmitContactService};

use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::services::ContactEmailService;

use crate::media::adapter::outgoing::{ImageThumbnailGenerator, LocalMediaStorage};
use crate::media::application::ports::outgoing::{MediaStorage, ThumbnailGenerator};

use crate::portfolio::adapter::outgoing::{
    CertificationRepositoryPostgres, EducationRepositoryPostgres, ExperienceRepositoryPostgres,
    LinkRepositoryPostgres, PortfolioQueryPostgres, ProfileRepositoryPostgres,
    ProjectRepositoryPostgres, SkillRepositoryPostgres,
};
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::services::{
    GetPortfolioPageService, ManageContentService, ManageProfileService,
    UploadCertificationDocumentService,
};

use crate::config::{AppConfig, SiteSettings};
use crate::shared::api::{custom_form_config, custom_json_config};
use crate::shared::templates::TemplateRenderer;

use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_admin: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub portfolio: PortfolioUseCases,
    pub contact: ContactUseCases,
    pub chatbot: ChatbotUseCases,
    pub templates: Arc<TemplateRenderer>,
    pub site: SiteSettings,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// Try .env.{environment} first, then fall back to .env
fn load_env_file() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    init_tracing();
    load_env_file();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!(
        environment = %config.environment,
        site = %config.site_name,
        "Starting portfolio site..."
    );

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("Failed to create Redis pool")?;
    let redis_arc = Arc::new(redis_pool);

    // Streaming responses must not be cut by a total timeout; only connecting is bounded.
    let http = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .build()
        .context("Failed to build HTTP client")?;

    let templates = Arc::new(TemplateRenderer::new().context("Failed to load templates")?);

    // Media
    let storage: Arc<dyn MediaStorage + Send + Sync> =
        Arc::new(LocalMediaStorage::new(config.media_root.clone()));
    let thumbnails: Arc<dyn ThumbnailGenerator + Send + Sync> =
        Arc::new(ImageThumbnailGenerator::new());

    // Auth
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let login_admin = LoginAdminService::new(
        config.admin.clone(),
        Arc::new(Argon2Hasher::new()),
        Arc::clone(&token_provider_arc),
    );

    // Portfolio
    let portfolio = PortfolioUseCases {
        page: Arc::new(GetPortfolioPageService::new(PortfolioQueryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        profile: Arc::new(ManageProfileService::new(
            ProfileRepositoryPostgres::new(Arc::clone(&db_arc)),
            Arc::clone(&storage),
        )),
        projects: Arc::new(ManageContentService::new(
            ProjectRepositoryPostgres::new(Arc::clone(&db_arc)),
            Arc::clone(&storage),
        )),
        skills: Arc::new(ManageContentService::new(
            SkillRepositoryPostgres::new(Arc::clone(&db_arc)),
            Arc::clone(&storage),
        )),
        experiences: Arc::new(ManageContentService::new(
            ExperienceRepositoryPostgres::new(Arc::clone(&db_arc)),
            Arc::clone(&storage),
        )),
        educations: Arc::new(ManageContentService::new(
            EducationRepositoryPostgres::new(Arc::clone(&db_arc)),
            Arc::clone(&storage),
        )),
        certifications: Arc::new(ManageContentService::new(
            CertificationRepositoryPostgres::new(Arc::clone(&db_arc)),
            Arc::clone(&storage),
        )),
        links: Arc::new(ManageContentService::new(
            LinkRepositoryPostgres::new(Arc::clone(&db_arc)),
            Arc::clone(&storage),
        )),
        certification_documents: Arc::new(UploadCertificationDocumentService::new(
            CertificationRepositoryPostgres::new(Arc::clone(&db_arc)),
            Arc::clone(&storage),
            thumbnails,
        )),
    };

    // Contact
    let smtp_sender = SmtpEmailSender::from_settings(&config.smtp, &config.email_from)
        .map_err(anyhow::Error::msg)
        .context("Failed to configure SMTP")?;
    let contact_notifier = ContactEmailService::new(
        Arc::new(smtp_sender),
        Arc::clone(&templates),
        config.contact_owner_email.clone(),
        config.site_name.clone(),
    );
    let contact_repo = ContactMessageRepositoryPostgres::new(Arc::clone(&db_arc));
    let contact = ContactUseCases {
        submit: Arc::new(SubmitContactService::new(
            contact_repo.clone(),
            Arc::new(contact_notifier),
        )),
        list_messages: Arc::new(ListContactMessagesService::new(contact_repo)),
    };

    // Chatbot
    let chatbot_settings = &config.chatbot;
    if chatbot_settings.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; the chatbot will answer with the unavailable reply");
    }
    let chat_logs = ChatLogRepositoryPostgres::new(Arc::clone(&db_arc));
    let relay = RelayChatService::new(
        Arc::new(PortfolioQueryPostgres::new(Arc::clone(&db_arc))),
        Arc::new(GeminiModelCatalog::new(
            http.clone(),
            chatbot_settings.gemini_base_url.clone(),
            chatbot_settings.gemini_api_key.clone(),
            chatbot_settings.fallback_models.clone(),
            chatbot_settings.discover_models,
        )),
        Arc::new(GeminiClient::new(
            http,
            chatbot_settings.gemini_base_url.clone(),
            chatbot_settings.gemini_api_key.clone(),
        )),
        Arc::new(ChatHistoryRedis::new(
            Arc::clone(&redis_arc),
            chatbot_settings.history_ttl_secs,
        )),
        Arc::new(chat_logs.clone()),
    );
    let chatbot = ChatbotUseCases {
        relay: Arc::new(relay),
        list_logs: Arc::new(ListChatLogsService::new(chat_logs)),
        rate_limiter: Arc::new(RateLimiterRedis::new(
            Arc::clone(&redis_arc),
            chatbot_settings.rate_limit_per_minute,
        )),
    };

    let state = AppState {
        login_admin: Arc::new(login_admin),
        portfolio,
        contact,
        chatbot,
        templates,
        site: config.site_settings(),
    };

    let server_url = config.server_url();
    let serve_docs = !config.is_production();
    let static_root = config.static_root.clone();
    let media_root = config.media_root.clone();
    let media_url = config.media_url.clone();
    let openapi = ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .app_data(custom_form_config())
            .configure(init_routes)
            .service(Files::new("/static", static_root.clone()))
            .service(Files::new(&media_url, media_root.clone()));

        if serve_docs {
            app = app.service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            );
        }

        app
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public pages
    cfg.service(crate::portfolio::adapter::incoming::web::routes::portfolio_page_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::chatbot::adapter::incoming::web::routes::chatbot_response_handler);
    // Admin
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::upsert_profile_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::upload_profile_image_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::upload_resume_handler);
    cfg.service(
        crate::portfolio::adapter::incoming::web::routes::upload_certification_document_handler,
    );
    cfg.service(crate::contact::adapter::incoming::web::routes::list_contact_messages_handler);
    cfg.service(crate::chatbot::adapter::incoming::web::routes::list_chat_logs_handler);
    cfg.configure(crate::portfolio::adapter::incoming::web::routes::configure_admin_content);
}

/// `hash-password <password>`: prints the argon2 hash to put in ADMIN_PASSWORD_HASH.
#[cfg(not(tarpaulin_include))]
fn hash_password(password: Option<&str>) -> anyhow::Result<()> {
    let password = password
        .filter(|p| !p.is_empty())
        .context("Usage: portfolio_site hash-password <password>")?;

    let hash = actix_web::rt::System::new()
        .block_on(Argon2Hasher::new().hash_password(password))
        .context("Failed to hash password")?;

    println!("{hash}");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = match args.first().map(String::as_str) {
        Some("hash-password") => hash_password(args.get(1).map(String::as_str)),
        _ => start(),
    };

    if let Err(e) = result {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
