//! One turn of the router flow
//!
//! Strictly linear: classify, route, respond. The only branch is the route
//! dispatch, and nothing re-classifies within a turn.

use super::classifier::classify_message;
use super::responder::respond;
use super::router::route;
use super::state::{ChatMessage, ChatState};
use crate::llm::{LlmError, LlmService};
use std::sync::Arc;
use thiserror::Error;

/// Errors that abort a turn
#[derive(Debug, Error)]
pub enum TurnError {
    #[error("model call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("classifier output did not match the expected enumeration: {got}")]
    Classification { got: String },

    #[error("turn requires a trailing user message")]
    NoUserMessage,

    #[error("responder returned an empty reply")]
    EmptyReply,

    #[error("tool loop exceeded {limit} iterations without ending the turn")]
    ToolLoop { limit: usize },
}

/// Run one user turn: classify the latest message, route it, and append
/// exactly one assistant reply to the state.
pub async fn run_turn(llm: &Arc<dyn LlmService>, state: &mut ChatState) -> Result<(), TurnError> {
    let classification = classify_message(llm, state).await?;
    state.classification = Some(classification);

    let destination = route(state.classification);
    state.route = Some(destination);
    tracing::debug!(?classification, ?destination, "message routed");

    let reply = respond(llm, destination, state).await?;
    state.push(ChatMessage::assistant(reply));

    Ok(())
}
