// Assistant conversation model

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSnippet {
    pub source: String,
    pub snippet: String,
}

/// Raw answer returned by the knowledge-base assistant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssistantAnswer {
    pub answer: Option<String>,
    pub sources: Vec<SourceSnippet>,
    pub has_answer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "ai",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub sources: Vec<SourceSnippet>,
    pub has_answer: Option<bool>,
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            sources: Vec::new(),
            has_answer: None,
            is_error: false,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            ..Self::user(text)
        }
    }
}
