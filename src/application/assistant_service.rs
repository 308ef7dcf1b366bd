// Assistant service - Use case for asking the knowledge-base assistant
use crate::application::upstream::AssistantClient;
use crate::domain::assistant::ChatMessage;
use std::sync::Arc;
use thiserror::Error;

const GREETING: &str = "Hello! I'm your Industrial AI Ops assistant. I can help you with equipment maintenance procedures, safety standards, predictive maintenance insights, and system documentation. What would you like to know?";
const EMPTY_ANSWER: &str = "I couldn't generate a response. Please try again.";
const CONNECTION_TROUBLE: &str =
    "I'm having trouble connecting to the server right now. Please try again in a moment.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssistantError {
    #[error("question must not be empty")]
    EmptyQuestion,
}

#[derive(Clone)]
pub struct AssistantService {
    client: Arc<dyn AssistantClient>,
}

impl AssistantService {
    pub fn new(client: Arc<dyn AssistantClient>) -> Self {
        Self { client }
    }

    /// Opening message of a new conversation.
    pub fn greeting(&self) -> ChatMessage {
        ChatMessage::assistant(GREETING)
    }

    /// Ask a question. Upstream failures become an assistant message flagged as an error.
    pub async fn ask(&self, question: &str) -> Result<ChatMessage, AssistantError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AssistantError::EmptyQuestion);
        }

        match self.client.ask_assistant(question).await {
            Ok(answer) => {
                let text = answer
                    .answer
                    .filter(|text| !text.trim().is_empty())
                    .unwrap_or_else(|| EMPTY_ANSWER.to_string());
                Ok(ChatMessage {
                    sources: answer.sources,
                    has_answer: Some(answer.has_answer),
                    ..ChatMessage::assistant(text)
                })
            }
            Err(e) => {
                tracing::warn!("Failed to get assistant response: {}", e);
                Ok(ChatMessage {
                    is_error: true,
                    ..ChatMessage::assistant(CONNECTION_TROUBLE)
                })
            }
        }
    }
}
