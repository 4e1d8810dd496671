use crate::app::AppState;
use crate::domain::InputMode;
use crate::ui::styles::{border_style, default_style, error_style, muted_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Add a new task...";

/// Render the draft input box
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let editing = app.input_mode == InputMode::Editing;

    let mut spans = vec![Span::raw("> ")];
    if app.draft.is_empty() && !editing {
        spans.push(Span::styled(PLACEHOLDER, muted_style(theme)));
    } else {
        spans.push(Span::styled(app.draft.clone(), default_style(theme)));
    }
    if editing {
        spans.push(Span::styled("█", default_style(theme))); // Cursor
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme, app.error.is_some()))
        .title(Span::styled(" New task ", title_style(theme)));
    if app.is_typing {
        block = block.title(
            Title::from(Span::styled(" typing... ", muted_style(theme))).alignment(Alignment::Right),
        );
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Render the line under the input: validation error, or a failed save
pub fn render_message_line(f: &mut Frame, app: &AppState, area: Rect) {
    let message = if let Some(error) = &app.error {
        format!(" ! {}", error)
    } else if let Some(persist_error) = &app.last_persist_error {
        format!(" ! {}", persist_error)
    } else {
        return;
    };

    f.render_widget(Paragraph::new(Span::styled(message, error_style())), area);
}
