use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single entry on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique ID, fixed at creation
    pub id: Uuid,
    /// Trimmed task text
    pub text: String,
    /// Whether the task is done
    #[serde(default)]
    pub completed: bool,
    /// When the task was created
    pub created_at: DateTime<Utc>,
    /// When the task was last completed (cleared when reopened)
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
            created_at,
            completed_at: None,
        }
    }

    /// Flip the completion state, stamping or clearing `completed_at`
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        self.completed = !self.completed;
        self.completed_at = if self.completed { Some(now) } else { None };
    }

    /// Case-insensitive text comparison used for duplicate detection
    pub fn has_text(&self, text: &str) -> bool {
        self.text.to_lowercase() == text.to_lowercase()
    }

    /// The timestamp the age label is computed from
    pub fn label_timestamp(&self) -> DateTime<Utc> {
        match (self.completed, self.completed_at) {
            (true, Some(at)) => at,
            _ => self.created_at,
        }
    }
}
