//! Mock LLM service for flow tests
//!
//! Returns queued responses in order and records every request.

use crate::llm::{ContentBlock, LlmError, LlmRequest, LlmResponse, LlmService, Usage};
use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub struct MockLlm {
    responses: Arc<Mutex<VecDeque<Result<LlmResponse, LlmError>>>>,
    requests: Arc<Mutex<Vec<LlmRequest>>>,
}

impl MockLlm {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a plain text reply
    pub fn queue_text(&self, text: &str) {
        self.queue_response(LlmResponse {
            content: vec![ContentBlock::text(text)],
            end_turn: true,
            usage: Usage::default(),
        });
    }

    /// Queue a structured classifier verdict (forced tool call output)
    pub fn queue_classification(&self, verdict: &str) {
        self.queue_response(LlmResponse {
            content: vec![ContentBlock::ToolUse {
                id: "toolu_mock".to_string(),
                name: "classify_message".to_string(),
                input: json!({ "message_type": verdict }),
            }],
            end_turn: false,
            usage: Usage::default(),
        });
    }

    /// Queue an arbitrary tool call from the assistant
    pub fn queue_tool_call(&self, id: &str, name: &str, input: serde_json::Value) {
        self.queue_response(LlmResponse {
            content: vec![ContentBlock::ToolUse {
                id: id.to_string(),
                name: name.to_string(),
                input,
            }],
            end_turn: false,
            usage: Usage::default(),
        });
    }

    pub fn queue_response(&self, response: LlmResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn queue_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Hand out a service handle; the mock keeps its queues shared so tests
    /// can still inspect recorded requests afterwards.
    pub fn service(&self) -> Arc<dyn LlmService> {
        Arc::new(MockLlmHandle {
            responses: Arc::clone(&self.responses),
            requests: Arc::clone(&self.requests),
        })
    }
}

struct MockLlmHandle {
    responses: Arc<Mutex<VecDeque<Result<LlmResponse, LlmError>>>>,
    requests: Arc<Mutex<Vec<LlmRequest>>>,
}

#[async_trait]
impl LlmService for MockLlmHandle {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::network("No mock response queued")))
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }
}
