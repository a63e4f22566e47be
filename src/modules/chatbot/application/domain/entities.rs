use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use utoipa::ToSchema;
use uuid::Uuid;

/// Turns kept per session; the oldest falls off first.
pub const MAX_HISTORY_TURNS: usize = 10;

pub const MAX_QUESTION_CHARS: usize = 1000;

/// Streamed once when no candidate model produced any output.
pub const UNAVAILABLE_REPLY: &str =
    "Sorry, the assistant is unavailable right now. Please try again later or use the contact form.";

// ──────────────────────────────────────────────────────────
// Question
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatQuestionError {
    #[error("Message must not be empty")]
    Empty,

    #[error("Message must be at most {MAX_QUESTION_CHARS} characters")]
    TooLong,
}

/// A visitor question, trimmed and length-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatQuestion(String);

impl ChatQuestion {
    pub fn new(raw: &str) -> Result<Self, ChatQuestionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ChatQuestionError::Empty);
        }
        if trimmed.chars().count() > MAX_QUESTION_CHARS {
            return Err(ChatQuestionError::TooLong);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ──────────────────────────────────────────────────────────
// History
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
}

/// Session conversation, capped at [`MAX_HISTORY_TURNS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ChatTurn>", into = "Vec<ChatTurn>")]
pub struct ChatHistory {
    turns: VecDeque<ChatTurn>,
}

impl ChatHistory {
    pub fn push(&mut self, turn: ChatTurn) {
        while self.turns.len() >= MAX_HISTORY_TURNS {
            self.turns.pop_front();
        }
        self.turns.push_back(turn);
    }

    pub fn turns(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl From<Vec<ChatTurn>> for ChatHistory {
    fn from(turns: Vec<ChatTurn>) -> Self {
        let mut history = ChatHistory::default();
        for turn in turns {
            history.push(turn);
        }
        history
    }
}

impl From<ChatHistory> for Vec<ChatTurn> {
    fn from(history: ChatHistory) -> Self {
        history.turns.into()
    }
}

// ──────────────────────────────────────────────────────────
// Chat Log
// ──────────────────────────────────────────────────────────

/// One answered exchange. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ChatLog {
    pub id: Uuid,
    pub session_key: String,
    pub user_query: String,
    pub ai_response: String,
    pub model_used: String,
    pub created_at: DateTime<Utc>,
}

/// Candidate model names, highest version first, without duplicates.
/// Digit runs compare as numbers, so `gemini-1.10` ranks above `gemini-1.9`.
pub fn sort_candidates(mut models: Vec<String>) -> Vec<String> {
    models.sort_by(|a, b| version_key(b).cmp(&version_key(a)).then_with(|| b.cmp(a)));
    models.dedup();
    models
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum NameSegment<'a> {
    Text(&'a str),
    Number(u64),
}

fn version_key(name: &str) -> Vec<NameSegment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_digits = false;

    for (i, c) in name.char_indices() {
        let is_digit = c.is_ascii_digit();
        if i > start && is_digit != in_digits {
            segments.push(segment(&name[start..i], in_digits));
            start = i;
        }
        in_digits = is_digit;
    }
    if start < name.len() {
        segments.push(segment(&name[start..], in_digits));
    }
    segments
}

fn segment(run: &str, digits: bool) -> NameSegment<'_> {
    match run.parse() {
        Ok(n) if digits => NameSegment::Number(n),
        _ => NameSegment::Text(run),
    }
}
