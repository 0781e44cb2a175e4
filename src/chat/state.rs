//! Conversation state types
//!
//! The message log is append-only: new turns push onto the end, and
//! nothing ever truncates or reorders it mid-run.

use crate::llm::LlmMessage;
use serde::{Deserialize, Serialize};

/// Message role tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in the conversation log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Verdict produced by the classifier for a single user message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Emotional,
    Logical,
}

impl Classification {
    /// Parse the wire value from the structured classifier output
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "emotional" => Some(Classification::Emotional),
            "logical" => Some(Classification::Logical),
            _ => None,
        }
    }
}

/// Destination chosen by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Therapist,
    Logical,
}

/// Accumulated conversation state passed between nodes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    pub classification: Option<Classification>,
    pub route: Option<Route>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the log. The only mutator of the message list.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Text of the most recent user message, if the log ends with one
    pub fn last_user_text(&self) -> Option<&str> {
        match self.messages.last() {
            Some(ChatMessage {
                role: Role::User,
                text,
            }) => Some(text),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Translate the log into LLM wire messages. System entries ride in the
    /// request's system field, not the message list, so they are skipped.
    pub fn to_llm_messages(&self) -> Vec<LlmMessage> {
        self.messages
            .iter()
            .filter_map(|m| match m.role {
                Role::User => Some(LlmMessage::user(&m.text)),
                Role::Assistant => Some(LlmMessage::assistant(&m.text)),
                Role::System => None,
            })
            .collect()
    }
}
