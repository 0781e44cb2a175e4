//! moodroute - terminal chat flows over hosted LLM APIs
//!
//! Three flows: a router that answers as a therapist or a logical agent
//! depending on how each message classifies, a basic full-history chatbot,
//! and a tool-calling agent with in-memory checkpointing.

mod chat;
mod checkpoint;
mod llm;
mod repl;
mod tools;

use chat::agent::Agent;
use checkpoint::MemorySaver;
use llm::{LlmConfig, ModelRegistry, Provider};
use repl::Flow;
use std::sync::Arc;
use tools::ToolRegistry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodroute=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Configuration
    let llm_config = LlmConfig::from_env();
    let registry = Arc::new(ModelRegistry::new(&llm_config));

    if !registry.has_models() {
        return Err(format!(
            "No LLM API keys configured. Set {} or {}.",
            Provider::Anthropic.api_key_env_var(),
            Provider::OpenAI.api_key_env_var()
        )
        .into());
    }

    tracing::info!(
        models = ?registry.available_models(),
        default = %registry.default_model_id(),
        "LLM registry initialized"
    );

    let llm = registry
        .default()
        .ok_or("Default model is not available")?;

    // Flow selection
    let mode = std::env::args().nth(1).unwrap_or_else(|| "router".to_string());
    let flow = match mode.as_str() {
        "router" => Flow::Router,
        "basic" => Flow::Basic,
        "agent" => Flow::Agent(Agent::new(
            Arc::clone(&llm),
            ToolRegistry::new(),
            MemorySaver::new(),
            "1",
        )),
        other => {
            return Err(format!("Unknown flow '{other}' (expected router, basic, or agent)").into())
        }
    };

    repl::run(flow, llm).await?;

    Ok(())
}
