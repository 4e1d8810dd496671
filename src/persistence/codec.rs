use crate::domain::Task;
use anyhow::Result;
use tracing::warn;

/// Encode the task list as a JSON array
pub fn encode_tasks(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string(tasks)?)
}

/// Decode a stored task list; malformed input reads as absent
pub fn decode_tasks(raw: &str) -> Option<Vec<Task>> {
    match serde_json::from_str(raw) {
        Ok(tasks) => Some(tasks),
        Err(e) => {
            warn!(error = %e, "stored task list is malformed, ignoring it");
            None
        }
    }
}

/// Encode a boolean flag as JSON
pub fn encode_flag(flag: bool) -> String {
    flag.to_string()
}

/// Decode a stored boolean flag; anything but a JSON boolean reads as absent
pub fn decode_flag(raw: &str) -> Option<bool> {
    match serde_json::from_str(raw) {
        Ok(flag) => Some(flag),
        Err(e) => {
            warn!(error = %e, "stored flag is malformed, ignoring it");
            None
        }
    }
}
