use async_trait::async_trait;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::chatbot::adapter::outgoing::gemini_client::API_KEY_HEADER;
use crate::chatbot::application::domain::entities::sort_candidates;
use crate::chatbot::application::ports::outgoing::ModelCatalog;

const CACHE_TTL: Duration = Duration::from_secs(600);
/// Bounds the whole list-models exchange; chat requests queue behind it.
const DISCOVERY_TIMEOUT: Duration = Duration::from_secs(10);
const GENERATE_METHOD: &str = "generateContent";
const MAX_CANDIDATES: usize = 5;

/// Name fragments of models that cannot answer a plain text chat.
const EXCLUDED_VARIANTS: [&str; 6] = ["embedding", "tts", "image", "vision", "live", "exp"];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelEntry {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

struct CachedModels {
    fetched_at: Instant,
    models: Vec<String>,
}

/// Discovers text models from the list-models endpoint and falls back to
/// a configured list when discovery is off, fails, or finds nothing.
pub struct GeminiModelCatalog {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    fallback: Vec<String>,
    discover: bool,
    discovery_timeout: Duration,
    cache: Mutex<Option<CachedModels>>,
}

impl GeminiModelCatalog {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
        fallback: Vec<String>,
        discover: bool,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
            fallback: sort_candidates(fallback),
            discover,
            discovery_timeout: DISCOVERY_TIMEOUT,
            cache: Mutex::new(None),
        }
    }

    pub fn with_discovery_timeout(mut self, timeout: Duration) -> Self {
        self.discovery_timeout = timeout;
        self
    }

    async fn fetch(&self, api_key: &str) -> Result<Vec<String>, reqwest::Error> {
        let list: ModelList = self
            .http
            .get(format!("{}/models", self.base_url))
            .query(&[("pageSize", "1000")])
            .header(API_KEY_HEADER, api_key)
            .timeout(self.discovery_timeout)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(usable_models(list))
    }
}

fn usable_models(list: ModelList) -> Vec<String> {
    let names = list
        .models
        .into_iter()
        .filter(|m| m.supported_generation_methods.iter().any(|g| g == GENERATE_METHOD))
        .map(|m| m.name.trim_start_matches("models/").to_string())
        .filter(|name| name.starts_with("gemini-"))
        .filter(|name| !EXCLUDED_VARIANTS.iter().any(|v| name.contains(v)))
        .collect();

    let mut sorted = sort_candidates(names);
    sorted.truncate(MAX_CANDIDATES);
    sorted
}

#[async_trait]
impl ModelCatalog for GeminiModelCatalog {
    async fn candidate_models(&self) -> Vec<String> {
        let api_key = match (&self.api_key, self.discover) {
            (Some(key), true) => key,
            _ => return self.fallback.clone(),
        };

        let mut cache = self.cache.lock().await;
        if let Some(cached) = cache.as_ref() {
            if cached.fetched_at.elapsed() < CACHE_TTL {
                return cached.models.clone();
            }
        }

        let models = match self.fetch(api_key).await {
            Ok(models) if !models.is_empty() => models,
            Ok(_) => {
                warn!("Model discovery returned no usable models, using fallback list");
                self.fallback.clone()
            }
            Err(e) => {
                warn!(error = %e, "Model discovery failed, using fallback list");
                self.fallback.clone()
            }
        };

        debug!(models = ?models, "Candidate models refreshed");
        *cache = Some(CachedModels {
            fetched_at: Instant::now(),
            models: models.clone(),
        });
        models
    }
}
