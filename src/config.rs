// src/config.rs

use std::path::PathBuf;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_FALLBACK_MODELS: &str = "gemini-2.5-flash,gemini-2.0-flash,gemini-1.5-flash";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub enum SmtpSettings {
    /// Plain SMTP without auth (Mailpit, MailHog)
    Local { host: String, port: u16 },
    Relay {
        server: String,
        username: String,
        password: String,
    },
}

#[derive(Debug, Clone)]
pub struct ChatbotSettings {
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub fallback_models: Vec<String>,
    pub discover_models: bool,
    pub rate_limit_per_minute: u32,
    pub history_ttl_secs: u64,
}

#[derive(Debug, Clone)]
pub struct AdminSettings {
    pub username: String,
    pub password_hash: String,
}

/// Request-time settings shared by the page, contact and chatbot handlers.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub site_name: String,
    pub media_url: String,
    pub trust_proxy_headers: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: String,
    pub run_migrations: bool,
    pub smtp: SmtpSettings,
    pub email_from: String,
    pub contact_owner_email: String,
    pub site_name: String,
    pub media_root: PathBuf,
    pub media_url: String,
    pub static_root: PathBuf,
    pub trust_proxy_headers: bool,
    pub chatbot: ChatbotSettings,
    pub admin: AdminSettings,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env { lookup: &lookup };

        let environment = env.or("RUST_ENV", "development");

        let smtp = if environment == "test" {
            SmtpSettings::Local {
                host: env.or("SMTP_HOST", "localhost"),
                port: env.parse_or("SMTP_PORT", 1025)?,
            }
        } else {
            SmtpSettings::Relay {
                server: env.required("SMTP_SERVER")?,
                username: env.required("SMTP_USERNAME")?,
                password: env.required("SMTP_PASSWORD")?,
            }
        };

        let email_from = env.required("EMAIL_FROM")?;
        let contact_owner_email = env.or("CONTACT_OWNER_EMAIL", &email_from);

        let fallback_models = parse_model_list(&env.or("GEMINI_FALLBACK_MODELS", DEFAULT_FALLBACK_MODELS));
        if fallback_models.is_empty() {
            return Err(ConfigError::Invalid {
                key: "GEMINI_FALLBACK_MODELS",
                reason: "at least one model name is required".to_string(),
            });
        }

        let rate_limit_per_minute: u32 = env.parse_or("CHATBOT_RATE_LIMIT_PER_MINUTE", 10)?;
        if rate_limit_per_minute == 0 {
            return Err(ConfigError::Invalid {
                key: "CHATBOT_RATE_LIMIT_PER_MINUTE",
                reason: "must be greater than zero".to_string(),
            });
        }

        let chatbot = ChatbotSettings {
            gemini_api_key: env.get("GEMINI_API_KEY"),
            gemini_base_url: env
                .or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            fallback_models,
            discover_models: env.parse_or("GEMINI_DISCOVER_MODELS", true)?,
            rate_limit_per_minute,
            history_ttl_secs: env.parse_or("CHAT_HISTORY_TTL_SECS", 86_400)?,
        };

        let admin = AdminSettings {
            username: env.required("ADMIN_USERNAME")?,
            password_hash: env.required("ADMIN_PASSWORD_HASH")?,
        };

        let jwt = JwtConfig {
            secret_key: env.required("JWT_SECRET")?,
            issuer: env.or("JWT_ISSUER", "portfolio-site"),
            access_token_expiry: env.parse_or("JWT_ACCESS_EXPIRY", 1800)?,
        };
        jwt.validate()?;

        Ok(Self {
            host: env.required("HOST")?,
            port: env.parse_required("PORT")?,
            database_url: env.required("DATABASE_URL")?,
            redis_url: env.required("REDIS_URL")?,
            run_migrations: env.parse_or("RUN_MIGRATIONS", false)?,
            smtp,
            email_from,
            contact_owner_email,
            site_name: env.or("SITE_NAME", "Portfolio"),
            media_root: PathBuf::from(env.or("MEDIA_ROOT", "media")),
            media_url: normalize_url_prefix(&env.or("MEDIA_URL", "/media")),
            static_root: PathBuf::from(env.or("STATIC_ROOT", "static")),
            trust_proxy_headers: env.parse_or("TRUST_PROXY_HEADERS", false)?,
            chatbot,
            admin,
            jwt,
            environment,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            site_name: self.site_name.clone(),
            media_url: self.media_url.clone(),
            trust_proxy_headers: self.trust_proxy_headers,
        }
    }
}

struct Env<'a, F: Fn(&str) -> Option<String>> {
    lookup: &'a F,
}

impl<F: Fn(&str) -> Option<String>> Env<'_, F> {
    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key).ok_or(ConfigError::Missing(key))
    }

    fn parse_required<T>(&self, key: &'static str) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        parse_value(key, &self.required(key)?)
    }

    fn parse_or<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            Some(raw) => parse_value(key, &raw),
            None => Ok(default),
        }
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

pub fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalize_url_prefix(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("RUST_ENV", "test"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/portfolio"),
            ("REDIS_URL", "redis://localhost:6379"),
            ("EMAIL_FROM", "site@example.com"),
            ("ADMIN_USERNAME", "admin"),
            ("ADMIN_PASSWORD_HASH", "$argon2id$v=19$m=4096,t=3,p=1$c2FsdA$aGFzaA"),
            ("JWT_SECRET", "test_secret_key_for_testing_purposes_only"),
        ])
    }

    fn load(env: &HashMap<&'static str, &'static str>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults_applied() {
        let config = load(&base_env()).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.contact_owner_email, "site@example.com");
        assert_eq!(config.site_name, "Portfolio");
        assert_eq!(config.media_url, "/media");
        assert_eq!(config.chatbot.rate_limit_per_minute, 10);
        assert_eq!(config.chatbot.gemini_api_key, None);
        assert_eq!(config.chatbot.fallback_models.len(), 3);
        assert!(config.chatbot.discover_models);
        assert!(!config.trust_proxy_headers);
        assert!(matches!(config.smtp, SmtpSettings::Local { port: 1025, .. }));
    }

    #[test]
    fn test_missing_required_key() {
        let mut env = base_env();
        env.remove("DATABASE_URL");

        assert_eq!(load(&env).unwrap_err(), ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn test_relay_smtp_required_outside_test() {
        let mut env = base_env();
        env.insert("RUST_ENV", "production");

        assert_eq!(load(&env).unwrap_err(), ConfigError::Missing("SMTP_SERVER"));

        env.insert("SMTP_SERVER", "smtp.gmail.com");
        env.insert("SMTP_USERNAME", "me");
        env.insert("SMTP_PASSWORD", "secret");
        let config = load(&env).unwrap();
        assert!(config.is_production());
        assert!(matches!(config.smtp, SmtpSettings::Relay { .. }));
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        let mut env = base_env();
        env.insert("PORT", "eighty");
        assert!(matches!(
            load(&env).unwrap_err(),
            ConfigError::Invalid { key: "PORT", .. }
        ));

        let mut env = base_env();
        env.insert("CHATBOT_RATE_LIMIT_PER_MINUTE", "0");
        assert!(matches!(
            load(&env).unwrap_err(),
            ConfigError::Invalid {
                key: "CHATBOT_RATE_LIMIT_PER_MINUTE",
                ..
            }
        ));
    }

    #[test]
    fn test_short_jwt_secret_rejected() {
        let mut env = base_env();
        env.insert("JWT_SECRET", "short");

        assert!(matches!(
            load(&env).unwrap_err(),
            ConfigError::Invalid { key: "JWT_SECRET", .. }
        ));
    }

    #[test]
    fn test_model_list_parsing_skips_blanks() {
        assert_eq!(
            parse_model_list(" gemini-1.5-flash, ,gemini-2.0-flash,"),
            vec!["gemini-1.5-flash".to_string(), "gemini-2.0-flash".to_string()]
        );
    }

    #[test]
    fn test_url_prefix_normalized() {
        assert_eq!(normalize_url_prefix("uploads/"), "/uploads");
        assert_eq!(normalize_url_prefix("/media"), "/media");
    }
}
