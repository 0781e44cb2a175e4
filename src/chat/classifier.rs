//! Message classifier
//!
//! Labels the latest user message `emotional` or `logical` through a forced
//! tool call, so the model's verdict comes back as structured output instead
//! of free text.

use super::state::{ChatState, Classification};
use super::turn::TurnError;
use crate::llm::{LlmMessage, LlmRequest, LlmService, ToolDefinition};
use serde_json::json;
use std::sync::Arc;

const CLASSIFIER_SYSTEM: &str =
    "Classify the message if it needs an emotional or logical response.";

const CLASSIFY_TOOL: &str = "classify_message";

fn classify_tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: CLASSIFY_TOOL.to_string(),
        description: "Record whether the message needs an emotional or logical response."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["message_type"],
            "properties": {
                "message_type": {
                    "type": "string",
                    "enum": ["emotional", "logical"],
                    "description": "Classify if the message needs an emotional or logical response."
                }
            }
        }),
    }
}

/// Classify the latest user message. Reads only the last message's text;
/// earlier turns are deliberately ignored.
pub async fn classify_message(
    llm: &Arc<dyn LlmService>,
    state: &ChatState,
) -> Result<Classification, TurnError> {
    let last = state.last_user_text().ok_or(TurnError::NoUserMessage)?;

    let request = LlmRequest {
        system: Some(CLASSIFIER_SYSTEM.to_string()),
        messages: vec![LlmMessage::user(last)],
        tools: vec![classify_tool_definition()],
        tool_choice: Some(CLASSIFY_TOOL.to_string()),
        max_tokens: Some(64),
    };

    let response = llm.complete(&request).await?;

    let verdict = response
        .tool_uses()
        .into_iter()
        .find(|(_, name, _)| *name == CLASSIFY_TOOL)
        .and_then(|(_, _, input)| input.get("message_type"))
        .and_then(|v| v.as_str())
        .map(ToString::to_string)
        .unwrap_or_default();

    Classification::parse(&verdict).ok_or(TurnError::Classification { got: verdict })
}
