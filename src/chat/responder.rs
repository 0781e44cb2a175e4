//! Therapist and logical responders
//!
//! Each responder issues one model call with its fixed system instruction
//! over only the latest user message, and returns the reply text.

use super::state::{ChatState, Route};
use super::turn::TurnError;
use crate::llm::{LlmMessage, LlmRequest, LlmService};
use std::sync::Arc;

const THERAPIST_SYSTEM: &str =
    "You are a therapist. Respond to the user's message with empathy and understanding.";

const LOGICAL_SYSTEM: &str =
    "You are a logical agent. Respond to the user's message with logic and reasoning.";

/// Produce the reply for the routed destination
pub async fn respond(
    llm: &Arc<dyn LlmService>,
    destination: Route,
    state: &ChatState,
) -> Result<String, TurnError> {
    let last = state.last_user_text().ok_or(TurnError::NoUserMessage)?;

    let system = match destination {
        Route::Therapist => THERAPIST_SYSTEM,
        Route::Logical => LOGICAL_SYSTEM,
    };

    let request = LlmRequest::chat(Some(system.to_string()), vec![LlmMessage::user(last)]);
    let response = llm.complete(&request).await?;

    let reply = response.text();
    if reply.is_empty() {
        return Err(TurnError::EmptyReply);
    }
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::state::ChatMessage;
    use crate::chat::testing::MockLlm;

    #[tokio::test]
    async fn therapist_uses_empathetic_instruction() {
        let mock = MockLlm::new();
        mock.queue_text("I'm sorry to hear that.");
        let llm = mock.service();

        let mut state = ChatState::new();
        state.push(ChatMessage::user("I feel awful"));

        let reply = respond(&llm, Route::Therapist, &state).await.unwrap();
        assert_eq!(reply, "I'm sorry to hear that.");

        let requests = mock.recorded_requests();
        assert_eq!(requests[0].system.as_deref(), Some(THERAPIST_SYSTEM));
        // Only the latest message is sent
        assert_eq!(requests[0].messages.len(), 1);
    }

    #[tokio::test]
    async fn logical_uses_reasoning_instruction() {
        let mock = MockLlm::new();
        mock.queue_text("2x");
        let llm = mock.service();

        let mut state = ChatState::new();
        state.push(ChatMessage::user("derivative of x^2?"));

        respond(&llm, Route::Logical, &state).await.unwrap();

        let requests = mock.recorded_requests();
        assert_eq!(requests[0].system.as_deref(), Some(LOGICAL_SYSTEM));
    }

    #[tokio::test]
    async fn empty_reply_is_an_error() {
        let mock = MockLlm::new();
        mock.queue_text("");
        let llm = mock.service();

        let mut state = ChatState::new();
        state.push(ChatMessage::user("hello"));

        let err = respond(&llm, Route::Logical, &state).await.unwrap_err();
        assert!(matches!(err, TurnError::EmptyReply));
    }
}
