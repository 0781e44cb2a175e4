//! Read-eval loop over standard input
//!
//! One line per turn: read the user's message, run one flow turn, print the
//! assistant's reply. `exit` / `quit` (case-insensitive) or EOF end the loop.

use crate::chat::agent::Agent;
use crate::chat::{basic, run_turn, ChatMessage, ChatState, TurnError};
use crate::llm::LlmService;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Which conversational flow drives the loop
pub enum Flow {
    /// Classify then route to the therapist or logical responder
    Router,
    /// Single chatbot node over the full history
    Basic,
    /// Tool-calling chatbot with checkpointing
    Agent(Agent),
}

/// Errors that abort the loop
#[derive(Debug, Error)]
pub enum ReplError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Turn(#[from] TurnError),
}

/// Whether a line is a loop-termination command
fn is_exit_command(line: &str) -> bool {
    let lowered = line.trim().to_lowercase();
    lowered == "exit" || lowered == "quit"
}

/// Run the loop until exit/quit or EOF. Turn failures propagate; nothing is
/// retried or recovered locally.
pub async fn run(flow: Flow, llm: Arc<dyn LlmService>) -> Result<(), ReplError> {
    let mut state = match &flow {
        Flow::Agent(agent) => agent.restore().unwrap_or_default(),
        _ => ChatState::new(),
    };

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"User: ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            // EOF
            return Ok(());
        };

        if is_exit_command(&line) {
            stdout.write_all(b"Exiting the chatbot.\n").await?;
            stdout.flush().await?;
            return Ok(());
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        state.push(ChatMessage::user(input));

        match &flow {
            Flow::Router => run_turn(&llm, &mut state).await?,
            Flow::Basic => basic::run_turn(&llm, &mut state).await?,
            Flow::Agent(agent) => agent.run_turn(&mut state).await?,
        }

        if let Some(reply) = state.last_message() {
            stdout
                .write_all(format!("Chatbot: {}\n", reply.text).as_bytes())
                .await?;
            stdout.flush().await?;
        }
    }
}
