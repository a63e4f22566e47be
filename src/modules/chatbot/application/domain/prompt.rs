use super::entities::{ChatHistory, ChatTurn};
use super::grounding::GroundingContext;

pub const INSTRUCTION_PREAMBLE: &str = "You are the assistant on a personal portfolio website. \
Answer questions from recruiters and visitors about the portfolio owner using only the facts \
in the context below. If the context does not answer the question, say so and suggest the \
contact form. Keep answers short and professional, and use Markdown lists where they help.";

/// Everything sent to the model for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Preamble followed by the grounding context.
    pub system_instruction: String,
    pub history: Vec<ChatTurn>,
    pub question: String,
}

impl Prompt {
    pub fn build(context: &GroundingContext, history: &ChatHistory, question: &str) -> Self {
        Self {
            system_instruction: format!(
                "{INSTRUCTION_PREAMBLE}\n\n--- CONTEXT ---\n{}\n--- END CONTEXT ---",
                context.as_str()
            ),
            history: history.turns().cloned().collect(),
            question: question.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::domain::entities::PortfolioSnapshot;

    #[test]
    fn test_prompt_wraps_context_and_keeps_turn_order() {
        let context = GroundingContext::from_snapshot(&PortfolioSnapshot::default());
        let mut history = ChatHistory::default();
        history.push(ChatTurn {
            question: "first".to_string(),
            answer: "one".to_string(),
        });
        history.push(ChatTurn {
            question: "second".to_string(),
            answer: "two".to_string(),
        });

        let prompt = Prompt::build(&context, &history, "third");

        assert!(prompt.system_instruction.starts_with(INSTRUCTION_PREAMBLE));
        assert!(prompt.system_instruction.contains("No profile data is available."));
        assert_eq!(prompt.history[0].question, "first");
        assert_eq!(prompt.history[1].answer, "two");
        assert_eq!(prompt.question, "third");
    }
}
