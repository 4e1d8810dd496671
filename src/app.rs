use crate::config::TimersConfig;
use crate::domain::{validate_draft, InputMode, Task, ThemeMode, ValidationError};
use crate::persistence::{
    decode_flag, decode_tasks, encode_flag, encode_tasks, KeyValueStore, DARK_MODE_KEY, TASKS_KEY,
};
use crate::theme::AmbientPreference;
use crate::timer::{Clock, Timer};
use anyhow::Result;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Main application state
pub struct AppState {
    pub tasks: Vec<Task>,
    pub draft: String,
    pub is_typing: bool,
    pub error: Option<ValidationError>,
    pub dark_mode: bool,
    /// Most recently deleted task, restorable until the undo window closes
    pub last_deleted: Option<Task>,
    /// Presentation theme, re-applied whenever `dark_mode` changes
    pub theme: ThemeMode,
    pub selected_index: usize,
    pub input_mode: InputMode,
    /// Message from the last failed write, cleared by the next successful one
    pub last_persist_error: Option<String>,

    typing_timer: Timer,
    undo_timer: Timer,
    timers: TimersConfig,
    store: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
}

impl AppState {
    /// Build state from whatever the store holds.
    ///
    /// Missing or malformed entries fall back to an empty list and the ambient theme.
    pub fn load(
        store: Box<dyn KeyValueStore>,
        clock: Box<dyn Clock>,
        ambient: &dyn AmbientPreference,
        timers: TimersConfig,
    ) -> Self {
        let tasks = read_entry(store.as_ref(), TASKS_KEY)
            .and_then(|raw| decode_tasks(&raw))
            .unwrap_or_default();

        let dark_mode = read_entry(store.as_ref(), DARK_MODE_KEY)
            .and_then(|raw| decode_flag(&raw))
            .unwrap_or_else(|| ambient.prefers_dark());

        info!(tasks = tasks.len(), dark_mode, "loaded board");

        let mut app = Self {
            tasks,
            draft: String::new(),
            is_typing: false,
            error: None,
            dark_mode,
            last_deleted: None,
            theme: ThemeMode::Light,
            selected_index: 0,
            input_mode: InputMode::Editing,
            last_persist_error: None,
            typing_timer: Timer::new(),
            undo_timer: Timer::new(),
            timers,
            store,
            clock,
        };
        app.apply_theme();
        app
    }

    /// Replace the draft text and restart the typing indicator
    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
        self.is_typing = true;
        self.error = None;

        // Re-arming drops the previous deadline, so a stale timer can't clear the flag early
        let now = self.clock.instant();
        self.typing_timer.arm(now, self.timers.typing_idle());
    }

    pub fn push_draft_char(&mut self, c: char) {
        let mut text = self.draft.clone();
        text.push(c);
        self.set_draft(text);
    }

    pub fn pop_draft_char(&mut self) {
        let mut text = self.draft.clone();
        text.pop();
        self.set_draft(text);
    }

    /// Validate the draft and, if it passes, append it as a new task
    pub fn submit_draft(&mut self) -> Result<Uuid, ValidationError> {
        let text = self.draft.trim().to_string();

        if let Err(e) = validate_draft(&text, &self.tasks) {
            debug!(error = %e, "draft rejected");
            self.error = Some(e);
            return Err(e);
        }

        let task = Task::new(text, self.clock.now());
        let id = task.id;
        debug!(%id, text = %task.text, "task added");
        self.tasks.push(task);
        self.draft.clear();
        self.error = None;
        self.persist_tasks();

        Ok(id)
    }

    /// Flip a task's completion state; unknown ids are ignored
    pub fn toggle_task(&mut self, id: Uuid) {
        let now = self.clock.now();
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };

        task.toggle(now);
        debug!(%id, completed = task.completed, "task toggled");
        self.persist_tasks();
    }

    /// Remove a task and hold it for undo; unknown ids are ignored
    pub fn delete_task(&mut self, id: Uuid) {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return;
        };

        let task = self.tasks.remove(index);
        debug!(%id, text = %task.text, "task deleted");
        self.last_deleted = Some(task);

        // A new delete restarts the window for the task now held
        let now = self.clock.instant();
        self.undo_timer.arm(now, self.timers.undo_window());

        self.clamp_selection();
        self.persist_tasks();
    }

    /// Put the last deleted task back at the end of the list
    pub fn undo_delete(&mut self) {
        let Some(task) = self.last_deleted.take() else {
            return;
        };

        self.undo_timer.cancel();
        debug!(id = %task.id, "delete undone");
        self.tasks.push(task);
        self.persist_tasks();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        debug!(dark_mode = self.dark_mode, "theme toggled");
        self.persist_dark_mode();
        self.apply_theme();
    }

    /// Fire any timers whose deadline has passed
    pub fn tick(&mut self) {
        let now = self.clock.instant();

        if self.typing_timer.fire_if_due(now) {
            self.is_typing = false;
        }

        if self.undo_timer.fire_if_due(now) {
            if let Some(task) = self.last_deleted.take() {
                debug!(id = %task.id, "undo window closed");
            }
        }
    }

    /// Seconds left to undo the last delete, rounded up; `None` once the window has run out
    pub fn undo_seconds_left(&self) -> Option<u64> {
        self.last_deleted.as_ref()?;
        let remaining = self.undo_timer.remaining(self.clock.instant())?;
        if remaining.is_zero() {
            return None;
        }
        Some(remaining.as_millis().div_ceil(1000) as u64)
    }

    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id) {
            self.toggle_task(id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id) {
            self.delete_task(id);
        }
    }

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len() - 1;
        }
    }

    fn apply_theme(&mut self) {
        self.theme = ThemeMode::from_dark(self.dark_mode);
    }

    fn persist_tasks(&mut self) {
        let result = encode_tasks(&self.tasks).and_then(|raw| self.store.save(TASKS_KEY, &raw));
        self.record_persist(TASKS_KEY, result);
    }

    fn persist_dark_mode(&mut self) {
        let result = self.store.save(DARK_MODE_KEY, &encode_flag(self.dark_mode));
        self.record_persist(DARK_MODE_KEY, result);
    }

    fn record_persist(&mut self, key: &str, result: Result<()>) {
        match result {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                warn!(key, error = %format!("{:#}", e), "failed to save");
                self.last_persist_error = Some(format!("Could not save {}: {}", key, e));
            }
        }
    }
}

fn read_entry(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.load(key) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(key, error = %format!("{:#}", e), "failed to read stored entry");
            None
        }
    }
}
