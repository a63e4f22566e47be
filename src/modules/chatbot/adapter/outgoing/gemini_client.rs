use async_trait::async_trait;
use futures::{stream, StreamExt};
use reqwest_eventsource::{retry::Never, Event, EventSource, RequestBuilderExt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chatbot::application::domain::prompt::Prompt;
use crate::chatbot::application::ports::outgoing::{LanguageModel, LanguageModelError, TextStream};

pub(crate) const API_KEY_HEADER: &str = "x-goog-api-key";

/// Streams `streamGenerateContent` responses from the Gemini REST API.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:streamGenerateContent?alt=sse", self.base_url)
    }
}

// ──────────────────────────────────────────────────────────
// Wire types
// ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize, PartialEq)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&'static str>, text: &str) -> Self {
        Self {
            role,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

impl GenerateRequest {
    fn from_prompt(prompt: &Prompt) -> Self {
        let mut contents = Vec::with_capacity(prompt.history.len() * 2 + 1);
        for turn in &prompt.history {
            contents.push(Content::text(Some("user"), &turn.question));
            contents.push(Content::text(Some("model"), &turn.answer));
        }
        contents.push(Content::text(Some("user"), &prompt.question));

        Self {
            system_instruction: Content::text(None, &prompt.system_instruction),
            contents,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ChunkPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ChunkContent {
    #[serde(default)]
    parts: Vec<ChunkPart>,
}

#[derive(Debug, Deserialize)]
struct ChunkCandidate {
    #[serde(default)]
    content: Option<ChunkContent>,
}

#[derive(Debug, Deserialize)]
struct ChunkError {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct GenerateChunk {
    #[serde(default)]
    candidates: Vec<ChunkCandidate>,
    #[serde(default)]
    error: Option<ChunkError>,
}

/// Text of the first candidate; empty when the chunk carries none.
fn chunk_text(data: &str) -> Result<String, LanguageModelError> {
    let chunk: GenerateChunk = serde_json::from_str(data)
        .map_err(|e| LanguageModelError::Stream(format!("Malformed chunk: {e}")))?;

    if let Some(error) = chunk.error {
        return Err(LanguageModelError::Stream(error.message));
    }

    Ok(chunk
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default())
}

fn map_event_error(err: reqwest_eventsource::Error) -> LanguageModelError {
    use reqwest_eventsource::Error;

    match err {
        Error::InvalidStatusCode(status, _) => LanguageModelError::Request(format!("HTTP {status}")),
        Error::Transport(e) => LanguageModelError::Request(e.to_string()),
        other => LanguageModelError::Stream(other.to_string()),
    }
}

/// Ends after the first error; the event source is closed so it never reconnects.
fn fragments(source: EventSource) -> TextStream {
    stream::unfold(Some(source), |state| async move {
        let mut source = state?;
        loop {
            match source.next().await {
                Some(Ok(Event::Open)) => debug!("Gemini stream opened"),
                Some(Ok(Event::Message(msg))) => {
                    return match chunk_text(&msg.data) {
                        Ok(text) => Some((Ok(text), Some(source))),
                        Err(e) => {
                            source.close();
                            Some((Err(e), None))
                        }
                    };
                }
                Some(Err(reqwest_eventsource::Error::StreamEnded)) | None => {
                    source.close();
                    return None;
                }
                Some(Err(e)) => {
                    source.close();
                    return Some((Err(map_event_error(e)), None));
                }
            }
        }
    })
    .boxed()
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn stream(&self, model: &str, prompt: &Prompt) -> Result<TextStream, LanguageModelError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LanguageModelError::NotConfigured)?;

        let mut source = self
            .http
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateRequest::from_prompt(prompt))
            .eventsource()
            .map_err(|e| LanguageModelError::Request(e.to_string()))?;
        source.set_retry_policy(Box::new(Never));

        Ok(fragments(source))
    }
}
