//! Agent flow: chatbot with tool calling
//!
//! The model may answer directly or request tool invocations. Tool results
//! are fed back as tool-result blocks and the request repeats until the
//! model ends its turn with plain text. Conversation state is checkpointed
//! per thread id after every turn.

use super::state::{ChatMessage, ChatState};
use super::turn::TurnError;
use crate::checkpoint::MemorySaver;
use crate::llm::{ContentBlock, LlmMessage, LlmRequest, LlmService, MessageRole};
use crate::tools::ToolRegistry;
use std::sync::Arc;

/// Upper bound on tool round-trips within one turn. The original flow has
/// no cap; a runaway model would loop forever, so we stop it here.
const MAX_TOOL_ITERATIONS: usize = 8;

/// Tool-calling chatbot bound to a checkpointer thread
pub struct Agent {
    llm: Arc<dyn LlmService>,
    tools: ToolRegistry,
    checkpointer: MemorySaver,
    thread_id: String,
}

impl Agent {
    pub fn new(
        llm: Arc<dyn LlmService>,
        tools: ToolRegistry,
        checkpointer: MemorySaver,
        thread_id: impl Into<String>,
    ) -> Self {
        Self {
            llm,
            tools,
            checkpointer,
            thread_id: thread_id.into(),
        }
    }

    /// Run one user turn, executing any tools the model requests, and
    /// checkpoint the resulting state.
    pub async fn run_turn(&self, state: &mut ChatState) -> Result<(), TurnError> {
        if state.last_user_text().is_none() {
            return Err(TurnError::NoUserMessage);
        }

        // Wire-level working copy: tool_use/tool_result blocks live here for
        // the duration of the turn, only the final text joins the log.
        let mut wire = state.to_llm_messages();
        let definitions = self.tools.definitions();

        for _ in 0..MAX_TOOL_ITERATIONS {
            let request = LlmRequest {
                system: None,
                messages: wire.clone(),
                tools: definitions.clone(),
                tool_choice: None,
                max_tokens: None,
            };
            let response = self.llm.complete(&request).await?;
            tracing::debug!(
                end_turn = response.end_turn,
                tool_requests = response.tool_uses().len(),
                "model response"
            );

            if !response.has_tool_use() {
                let reply = response.text();
                if reply.is_empty() {
                    return Err(TurnError::EmptyReply);
                }
                state.push(ChatMessage::assistant(reply));
                self.checkpointer.save(&self.thread_id, state);
                return Ok(());
            }

            let mut results = Vec::new();
            for (id, name, input) in response.tool_uses() {
                let output = self.tools.execute(name, input.clone()).await;
                let block = match output {
                    Some(out) => ContentBlock::tool_result(id, out.output, !out.success),
                    None => {
                        tracing::warn!(tool = name, "model requested unknown tool");
                        ContentBlock::tool_result(id, format!("Unknown tool: {name}"), true)
                    }
                };
                results.push(block);
            }

            wire.push(LlmMessage {
                role: MessageRole::Assistant,
                content: response.content,
            });
            wire.push(LlmMessage {
                role: MessageRole::User,
                content: results,
            });
        }

        Err(TurnError::ToolLoop {
            limit: MAX_TOOL_ITERATIONS,
        })
    }

    /// Restore the last checkpointed state for this thread, if any
    pub fn restore(&self) -> Option<ChatState> {
        self.checkpointer.load(&self.thread_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::testing::MockLlm;
    use serde_json::json;

    fn agent_with(mock: &MockLlm) -> Agent {
        Agent::new(
            mock.service(),
            ToolRegistry::new(),
            MemorySaver::new(),
            "1",
        )
    }

    #[tokio::test]
    async fn direct_answer_skips_tools() {
        let mock = MockLlm::new();
        mock.queue_text("hello there");
        let agent = agent_with(&mock);

        let mut state = ChatState::new();
        state.push(ChatMessage::user("hi"));
        agent.run_turn(&mut state).await.unwrap();

        assert_eq!(state.len(), 2);
        assert_eq!(state.last_message().unwrap().text, "hello there");
    }

    #[tokio::test]
    async fn tool_call_round_trip() {
        let mock = MockLlm::new();
        mock.queue_tool_call(
            "call_1",
            "get_student_grade",
            json!({"student_id": "s-9"}),
        );
        mock.queue_text("The grade is recorded.");
        let agent = agent_with(&mock);

        let mut state = ChatState::new();
        state.push(ChatMessage::user("what's my grade?"));
        agent.run_turn(&mut state).await.unwrap();

        // Second request carried the tool result back to the model
        let requests = mock.recorded_requests();
        assert_eq!(requests.len(), 2);
        let last_msg = requests[1].messages.last().unwrap();
        assert!(matches!(
            last_msg.content[0],
            ContentBlock::ToolResult { .. }
        ));

        // Only the final text joined the log
        assert_eq!(state.len(), 2);
    }

    #[tokio::test]
    async fn unknown_tool_is_reported_as_error_result() {
        let mock = MockLlm::new();
        mock.queue_tool_call("call_1", "launch_rocket", json!({}));
        mock.queue_text("I couldn't do that.");
        let agent = agent_with(&mock);

        let mut state = ChatState::new();
        state.push(ChatMessage::user("go"));
        agent.run_turn(&mut state).await.unwrap();

        let requests = mock.recorded_requests();
        let last_msg = requests[1].messages.last().unwrap();
        match &last_msg.content[0] {
            ContentBlock::ToolResult { is_error, .. } => assert!(*is_error),
            other => panic!("expected tool result, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn endless_tool_requests_hit_the_cap() {
        let mock = MockLlm::new();
        for i in 0..MAX_TOOL_ITERATIONS {
            mock.queue_tool_call(
                &format!("call_{i}"),
                "get_student_grade",
                json!({"student_id": "s"}),
            );
        }
        let agent = agent_with(&mock);

        let mut state = ChatState::new();
        state.push(ChatMessage::user("loop"));
        let err = agent.run_turn(&mut state).await.unwrap_err();
        assert!(matches!(err, TurnError::ToolLoop { .. }));
    }

    #[tokio::test]
    async fn turn_is_checkpointed_under_the_thread_id() {
        let mock = MockLlm::new();
        mock.queue_text("saved");
        let checkpointer = MemorySaver::new();
        let agent = Agent::new(
            mock.service(),
            ToolRegistry::new(),
            checkpointer.clone(),
            "thread-7",
        );

        let mut state = ChatState::new();
        state.push(ChatMessage::user("remember this"));
        agent.run_turn(&mut state).await.unwrap();

        let restored = checkpointer.load("thread-7").unwrap();
        assert_eq!(restored.len(), 2);
    }
}
