use crate::app::AppState;
use crate::ui::{
    layout::create_toast_area,
    styles::{toast_action_style, toast_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the "Task deleted!" toast while a deleted task can still be restored
pub fn render_undo_toast(f: &mut Frame, app: &AppState, area: Rect) {
    if app.last_deleted.is_none() {
        return;
    }

    let toast_area = create_toast_area(area);

    // Clear the area behind the toast
    f.render_widget(Clear, toast_area);

    let mut spans = vec![
        Span::raw(" Task deleted!  "),
        Span::styled("[u]", toast_action_style()),
        Span::raw(" Undo"),
    ];
    if let Some(secs) = app.undo_seconds_left() {
        spans.push(Span::raw(format!(" ({}s)", secs)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).style(toast_style()));

    f.render_widget(paragraph, toast_area);
}
