use async_trait::async_trait;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::chatbot::application::domain::entities::{ChatHistory, ChatTurn, UNAVAILABLE_REPLY};
use crate::chatbot::application::domain::grounding::GroundingContext;
use crate::chatbot::application::domain::prompt::Prompt;
use crate::chatbot::application::ports::incoming::use_cases::{
    RelayChatCommand, RelayChatUseCase, RelayOutcome,
};
use crate::chatbot::application::ports::outgoing::{
    ChatHistoryStore, ChatLogRepository, LanguageModel, LanguageModelError, ModelCatalog,
    NewChatLog,
};
use crate::portfolio::application::domain::entities::PortfolioSnapshot;
use crate::portfolio::application::ports::outgoing::PortfolioQuery;

/// Longest wait for the next fragment before a candidate counts as stalled.
const FRAGMENT_TIMEOUT: Duration = Duration::from_secs(30);

enum Attempt {
    Answered(String),
    Failed(LanguageModelError),
    Disconnected,
}

#[derive(Clone)]
pub struct RelayChatService {
    portfolio: Arc<dyn PortfolioQuery + Send + Sync>,
    catalog: Arc<dyn ModelCatalog + Send + Sync>,
    model: Arc<dyn LanguageModel + Send + Sync>,
    history: Arc<dyn ChatHistoryStore + Send + Sync>,
    logs: Arc<dyn ChatLogRepository + Send + Sync>,
    fragment_timeout: Duration,
}

impl RelayChatService {
    pub fn new(
        portfolio: Arc<dyn PortfolioQuery + Send + Sync>,
        catalog: Arc<dyn ModelCatalog + Send + Sync>,
        model: Arc<dyn LanguageModel + Send + Sync>,
        history: Arc<dyn ChatHistoryStore + Send + Sync>,
        logs: Arc<dyn ChatLogRepository + Send + Sync>,
    ) -> Self {
        Self {
            portfolio,
            catalog,
            model,
            history,
            logs,
            fragment_timeout: FRAGMENT_TIMEOUT,
        }
    }

    pub fn with_fragment_timeout(mut self, timeout: Duration) -> Self {
        self.fragment_timeout = timeout;
        self
    }

    async fn load_history(&self, session_key: &str) -> ChatHistory {
        self.history.load(session_key).await.unwrap_or_else(|e| {
            warn!(error = %e, "Chat history unavailable, starting fresh");
            ChatHistory::default()
        })
    }

    async fn load_snapshot(&self) -> PortfolioSnapshot {
        self.portfolio.load_snapshot().await.unwrap_or_else(|e| {
            warn!(error = %e, "Portfolio data unavailable for chat context");
            PortfolioSnapshot::default()
        })
    }

    /// Output that already reached the client counts as an answer even if
    /// the stream breaks afterwards.
    async fn attempt(&self, model: &str, prompt: &Prompt, fragments: &mpsc::Sender<String>) -> Attempt {
        let mut stream = match self.model.stream(model, prompt).await {
            Ok(stream) => stream,
            Err(e) => return Attempt::Failed(e),
        };

        let mut answer = String::new();

        loop {
            let item = match tokio::time::timeout(self.fragment_timeout, stream.next()).await {
                Ok(Some(item)) => item,
                Ok(None) => break,
                Err(_) => Err(LanguageModelError::Stream(format!(
                    "no output within {}ms",
                    self.fragment_timeout.as_millis()
                ))),
            };

            match item {
                Ok(fragment) if fragment.is_empty() => continue,
                Ok(fragment) => {
                    answer.push_str(&fragment);
                    if fragments.send(fragment).await.is_err() {
                        return Attempt::Disconnected;
                    }
                }
                Err(e) if answer.is_empty() => return Attempt::Failed(e),
                Err(e) => {
                    warn!(model = %model, error = %e, "Stream broke after partial output");
                    break;
                }
            }
        }

        if answer.is_empty() {
            Attempt::Failed(LanguageModelError::Stream("empty response".to_string()))
        } else {
            Attempt::Answered(answer)
        }
    }

    async fn record(&self, session_key: &str, mut history: ChatHistory, question: &str, answer: &str, model: &str) {
        history.push(ChatTurn {
            question: question.to_string(),
            answer: answer.to_string(),
        });
        if let Err(e) = self.history.save(session_key, &history).await {
            warn!(error = %e, "Failed to save chat history");
        }

        let log = NewChatLog {
            session_key: session_key.to_string(),
            user_query: question.to_string(),
            ai_response: answer.to_string(),
            model_used: model.to_string(),
        };
        if let Err(e) = self.logs.save(log).await {
            warn!(error = %e, "Failed to store chat log");
        }
    }
}

#[async_trait]
impl RelayChatUseCase for RelayChatService {
    async fn execute(
        &self,
        command: RelayChatCommand,
        fragments: mpsc::Sender<String>,
    ) -> RelayOutcome {
        let question = command.question.as_str();

        let (history, snapshot) =
            tokio::join!(self.load_history(&command.session_key), self.load_snapshot());
        let prompt = Prompt::build(&GroundingContext::from_snapshot(&snapshot), &history, question);

        for model in self.catalog.candidate_models().await {
            match self.attempt(&model, &prompt, &fragments).await {
                Attempt::Answered(answer) => {
                    self.record(&command.session_key, history, question, &answer, &model)
                        .await;
                    info!(model = %model, answer_chars = answer.chars().count(), "Chat answered");
                    return RelayOutcome::Answered { model };
                }
                Attempt::Failed(e) => {
                    warn!(model = %model, error = %e, "Model failed, trying next candidate");
                }
                Attempt::Disconnected => {
                    debug!(model = %model, "Client disconnected mid-answer");
                    return RelayOutcome::Disconnected;
                }
            }
        }

        warn!("Every candidate model failed");
        if fragments.send(UNAVAILABLE_REPLY.to_string()).await.is_err() {
            return RelayOutcome::Disconnected;
        }
        RelayOutcome::Unavailable
    }
}
