use super::task::Task;
use thiserror::Error;

/// Shortest task text accepted, in characters.
///
/// Counted as Unicode scalar values, not UTF-16 code units, so "😀😀" is
/// two characters and too short even though a browser would report length 4.
pub const MIN_TASK_LEN: usize = 3;

/// Why a draft could not be turned into a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task can't be empty!")]
    EmptyTask,

    #[error("Task is too short!")]
    TooShort,

    #[error("This task already exists!")]
    DuplicateTask,
}

/// Check already-trimmed draft text against the current task list.
///
/// Rules run in order (empty, too short, duplicate) and stop at the first
/// failure.
pub fn validate_draft(text: &str, tasks: &[Task]) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::EmptyTask);
    }

    if text.chars().count() < MIN_TASK_LEN {
        return Err(ValidationError::TooShort);
    }

    if tasks.iter().any(|task| task.has_text(text)) {
        return Err(ValidationError::DuplicateTask);
    }

    Ok(())
}
