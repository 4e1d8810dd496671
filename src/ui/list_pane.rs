use crate::app::AppState;
use crate::domain::{time_ago, Task, ThemeMode};
use crate::ui::styles::{
    border_style, check_style, default_style, done_style, muted_style, selected_style, title_style,
};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Shown in place of the list when there are no tasks
pub const EMPTY_MESSAGE: &str = "No tasks yet. Add one to get started!";

/// "Created 5m ago" or "Completed just now"
pub fn age_label(task: &Task, now: DateTime<Utc>) -> String {
    let verb = if task.completed { "Completed" } else { "Created" };
    format!("{} {}", verb, time_ago(task.label_timestamp(), now))
}

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let done_count = app.tasks.iter().filter(|t| t.completed).count();
    let title = format!(" Tasks ({}/{} done) ", done_count, app.tasks.len());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme, false))
        .title(Span::styled(title, title_style(theme)));

    if app.tasks.is_empty() {
        let paragraph = Paragraph::new(Line::styled(EMPTY_MESSAGE, muted_style(theme)))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    // Borders take two rows
    let visible = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(app.selected_index, app.tasks.len(), visible);

    let now = app.now();
    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, task)| {
            let line = task_line(task, now, theme);
            let item = ListItem::new(line);
            if idx == app.selected_index {
                item.style(selected_style(theme))
            } else {
                item
            }
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// First row to draw so the selected task stays inside `visible` rows
pub fn scroll_offset(selected: usize, len: usize, visible: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }
    let selected = selected.min(len - 1);
    (selected + 1).saturating_sub(visible).min(len - visible)
}

/// Format: [✓] Write spec   Completed 2m ago
fn task_line(task: &Task, now: DateTime<Utc>, theme: ThemeMode) -> Line<'static> {
    let (check, text_style) = if task.completed {
        (Span::styled("[✓] ", check_style()), done_style(theme))
    } else {
        (Span::styled("[ ] ", muted_style(theme)), default_style(theme))
    };

    Line::from(vec![
        check,
        Span::styled(task.text.clone(), text_style),
        Span::raw("   "),
        Span::styled(age_label(task, now), muted_style(theme)),
    ])
}
