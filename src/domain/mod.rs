pub mod enums;
pub mod task;
pub mod time_ago;
pub mod validation;

pub use enums::{InputMode, ThemeMode};
pub use task::Task;
pub use time_ago::time_ago;
pub use validation::{validate_draft, ValidationError};
