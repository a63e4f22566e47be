use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::chatbot::application::domain::entities::ChatQuestion;

/// What the relay reports once the exchange is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// A model answered; the exchange was recorded.
    Answered { model: String },

    /// Every candidate failed and the unavailable reply was sent.
    Unavailable,

    /// The client went away before the answer finished.
    Disconnected,
}

#[derive(Debug, Clone)]
pub struct RelayChatCommand {
    pub session_key: String,
    pub question: ChatQuestion,
}

#[async_trait]
pub trait RelayChatUseCase: Send + Sync {
    /// Sends text fragments to `fragments` as they arrive. Never fails; model
    /// errors fall through to the next candidate.
    async fn execute(
        &self,
        command: RelayChatCommand,
        fragments: mpsc::Sender<String>,
    ) -> RelayOutcome;
}
