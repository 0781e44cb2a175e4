//! Centralized model definitions for all LLM providers

use super::anthropic::AnthropicModel;
use super::openai::OpenAIModel;
use super::{AnthropicService, LlmService, OpenAIService};
use std::sync::Arc;

/// LLM provider enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Anthropic,
    OpenAI,
}

impl Provider {
    /// Get the environment variable name for this provider's API key
    pub fn api_key_env_var(self) -> &'static str {
        match self {
            Provider::Anthropic => "ANTHROPIC_API_KEY",
            Provider::OpenAI => "OPENAI_API_KEY",
        }
    }
}

/// Model definition with metadata
#[derive(Debug, Clone)]
pub struct ModelDef {
    /// User-facing model ID (e.g., "claude-4.5-haiku")
    pub id: &'static str,
    /// Provider for this model
    pub provider: Provider,
    /// Human-readable description
    #[allow(dead_code)] // For future model listings
    pub description: &'static str,
    /// Factory function to create the service
    pub factory: fn(&str) -> Arc<dyn LlmService>,
}

/// Get all available model definitions
pub fn all_models() -> &'static [ModelDef] {
    &[
        ModelDef {
            id: "gpt-4.1-nano",
            provider: Provider::OpenAI,
            description: "GPT-4.1 Nano (fast, cheap)",
            factory: |api_key| {
                Arc::new(OpenAIService::new(api_key.to_string(), OpenAIModel::GPT41Nano))
            },
        },
        ModelDef {
            id: "gpt-4o-mini",
            provider: Provider::OpenAI,
            description: "GPT-4o Mini (fast, efficient)",
            factory: |api_key| {
                Arc::new(OpenAIService::new(api_key.to_string(), OpenAIModel::GPT4oMini))
            },
        },
        ModelDef {
            id: "gpt-4o",
            provider: Provider::OpenAI,
            description: "GPT-4o (balanced)",
            factory: |api_key| {
                Arc::new(OpenAIService::new(api_key.to_string(), OpenAIModel::GPT4o))
            },
        },
        ModelDef {
            id: "claude-4.5-haiku",
            provider: Provider::Anthropic,
            description: "Claude Haiku 4.5 (fast, efficient)",
            factory: |api_key| {
                Arc::new(AnthropicService::new(
                    api_key.to_string(),
                    AnthropicModel::Claude45Haiku,
                ))
            },
        },
        ModelDef {
            id: "claude-4.5-sonnet",
            provider: Provider::Anthropic,
            description: "Claude Sonnet 4.5 (balanced performance)",
            factory: |api_key| {
                Arc::new(AnthropicService::new(
                    api_key.to_string(),
                    AnthropicModel::Claude45Sonnet,
                ))
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // These names feed the startup error message and must match what
    // LlmConfig::from_env reads.
    #[test]
    fn api_key_env_vars_match_config_lookups() {
        assert_eq!(Provider::Anthropic.api_key_env_var(), "ANTHROPIC_API_KEY");
        assert_eq!(Provider::OpenAI.api_key_env_var(), "OPENAI_API_KEY");
    }
}
