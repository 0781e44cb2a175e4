//! Student grade lookup tool (demo stub)

use super::{Tool, ToolOutput};
use async_trait::async_trait;
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::{json, Value};

const GRADES: &[&str] = &["A", "B", "C", "D", "F"];

/// Returns a random letter grade for any student id
pub struct StudentGradeTool;

#[derive(Debug, Deserialize)]
struct StudentGradeInput {
    #[allow(dead_code)] // Deserialized for validation only
    student_id: String,
}

#[async_trait]
impl Tool for StudentGradeTool {
    fn name(&self) -> &str {
        "get_student_grade"
    }

    fn description(&self) -> String {
        "Get the student's grade.".to_string()
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "required": ["student_id"],
            "properties": {
                "student_id": {
                    "type": "string",
                    "description": "The student to look up"
                }
            }
        })
    }

    async fn run(&self, input: Value) -> ToolOutput {
        match serde_json::from_value::<StudentGradeInput>(input) {
            Ok(_) => {
                let grade = GRADES
                    .choose(&mut rand::thread_rng())
                    .copied()
                    .unwrap_or("F");
                ToolOutput::success(grade)
            }
            Err(e) => ToolOutput::error(format!("Invalid input: {e}")),
        }
    }
}
