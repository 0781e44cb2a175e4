//! Basic chatbot flow
//!
//! One node: the full accumulated history goes to the model, and the single
//! reply is appended. No classification, no routing, no tools.

use super::state::{ChatMessage, ChatState};
use super::turn::TurnError;
use crate::llm::{LlmRequest, LlmService};
use std::sync::Arc;

/// Run one chatbot turn over the whole history
pub async fn run_turn(llm: &Arc<dyn LlmService>, state: &mut ChatState) -> Result<(), TurnError> {
    if state.last_user_text().is_none() {
        return Err(TurnError::NoUserMessage);
    }

    let request = LlmRequest::chat(None, state.to_llm_messages());
    let response = llm.complete(&request).await?;

    let reply = response.text();
    if reply.is_empty() {
        return Err(TurnError::EmptyReply);
    }
    state.push(ChatMessage::assistant(reply));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::testing::MockLlm;

    #[tokio::test]
    async fn full_history_is_sent() {
        let mock = MockLlm::new();
        mock.queue_text("third reply");
        let llm = mock.service();

        let mut state = ChatState::new();
        state.push(ChatMessage::user("one"));
        state.push(ChatMessage::assistant("two"));
        state.push(ChatMessage::user("three"));

        run_turn(&llm, &mut state).await.unwrap();

        let requests = mock.recorded_requests();
        assert_eq!(requests[0].messages.len(), 3);
        assert_eq!(state.len(), 4);
    }

    #[tokio::test]
    async fn history_accumulates_across_turns() {
        let mock = MockLlm::new();
        mock.queue_text("a");
        mock.queue_text("b");
        let llm = mock.service();

        let mut state = ChatState::new();
        state.push(ChatMessage::user("1"));
        run_turn(&llm, &mut state).await.unwrap();
        state.push(ChatMessage::user("2"));
        run_turn(&llm, &mut state).await.unwrap();

        assert_eq!(state.len(), 4);
        // Second request carried the first exchange
        assert_eq!(mock.recorded_requests()[1].messages.len(), 3);
    }
}
