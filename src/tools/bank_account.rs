//! Bank account lookup tool (demo stub)

use super::{Tool, ToolOutput};
use async_trait::async_trait;
use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Value};

/// Returns a random ten-digit account number for any user id
pub struct BankAccountTool;

#[derive(Debug, Deserialize)]
struct BankAccountInput {
    #[allow(dead_code)] // Deserialized for validation only
    user_id: String,
}

#[async_trait]
impl Tool for BankAccountTool {
    fn name(&self) -> &str {
        "get_bank_account_number"
    }

    fn description(&self) -> String {
        "Get the user's bank account number.".to_string()
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "required": ["user_id"],
            "properties": {
                "user_id": {
                    "type": "string",
                    "description": "The user to look up"
                }
            }
        })
    }

    async fn run(&self, input: Value) -> ToolOutput {
        match serde_json::from_value::<BankAccountInput>(input) {
            Ok(_) => {
                let number: u64 = rand::thread_rng().gen_range(1_000_000_000..=9_999_999_999);
                ToolOutput::success(number.to_string())
            }
            Err(e) => ToolOutput::error(format!("Invalid input: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_ten_digit_number() {
        let tool = BankAccountTool;
        let result = tool.run(json!({"user_id": "u-1"})).await;
        assert!(result.success);
        assert_eq!(result.output.len(), 10);
        assert!(result.output.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn missing_user_id_fails() {
        let tool = BankAccountTool;
        let result = tool.run(json!({})).await;
        assert!(!result.success);
    }
}
