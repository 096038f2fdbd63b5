use serde_json::Value;
use tracing::{error, info};

use crate::protocol::ToolResult;
use crate::runner::TaskRunner;

/// Name of the single exposed tool. The spelling is part of the wire
/// contract — existing clients call it exactly like this.
pub const TOOL_NAME: &str = "task_and_schedule_planer";

/// Handle a `task_and_schedule_planer` tool call.
pub async fn handle(arguments: Option<&Value>, runner: &dyn TaskRunner) -> ToolResult {
    let arguments = arguments.cloned().unwrap_or_else(|| Value::Object(Default::default()));
    let topic = extract_topic(&arguments);

    info!(topic = %topic, "executing task_and_schedule_planer");

    match runner.run(&topic).await {
        Ok(result) => ToolResult::text(result),
        Err(e) => {
            error!("error executing tool: {e}");
            ToolResult::error(format!("Error executing task: {e}"))
        }
    }
}

/// Pull the topic out of the call arguments.
///
/// Falls back from `topic` to `input` to `task`, and finally to a dump of
/// the whole arguments mapping, so a malformed call still reaches the crew
/// with *something* rather than being rejected. Intentionally lenient.
fn extract_topic(arguments: &Value) -> String {
    for key in ["topic", "input", "task"] {
        match arguments.get(key) {
            Some(Value::String(s)) if !s.is_empty() => return s.clone(),
            Some(Value::Null) | None => continue,
            // Non-string values are carried through as their JSON rendering.
            Some(other) => return other.to_string(),
        }
    }
    arguments.to_string()
}

#[cfg(test)]
mod tests {
    use super::extract_topic;
    use serde_json::json;

    #[test]
    fn topic_key_wins() {
        let args = json!({"topic": "plan my day", "input": "ignored"});
        assert_eq!(extract_topic(&args), "plan my day");
    }

    #[test]
    fn falls_back_to_input_then_task() {
        assert_eq!(extract_topic(&json!({"input": "from input"})), "from input");
        assert_eq!(extract_topic(&json!({"task": "from task"})), "from task");
        assert_eq!(
            extract_topic(&json!({"topic": "", "task": "nonempty wins"})),
            "nonempty wins"
        );
    }

    #[test]
    fn dumps_whole_arguments_when_no_key_matches() {
        let args = json!({"something": "else"});
        assert_eq!(extract_topic(&args), args.to_string());
    }

    #[test]
    fn non_string_topic_is_stringified() {
        assert_eq!(extract_topic(&json!({"topic": 42})), "42");
    }

    #[test]
    fn empty_arguments_dump_to_empty_object() {
        assert_eq!(extract_topic(&json!({})), "{}");
    }
}
