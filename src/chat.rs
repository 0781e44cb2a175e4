//! Conversational flows
//!
//! Three flows share the same append-only conversation state:
//! - `router`: classify the message, then answer as a therapist or a
//!   logical agent ([`turn::run_turn`]).
//! - `basic`: single chatbot node over the full history ([`basic`]).
//! - `agent`: chatbot with tool calling and checkpointing ([`agent`]).

pub mod agent;
pub mod basic;
mod classifier;
mod responder;
mod router;
mod state;
mod turn;

#[cfg(test)]
mod proptests;
#[cfg(test)]
pub mod testing;

pub use state::{ChatMessage, ChatState, Classification, Role, Route};
pub use turn::{run_turn, TurnError};
