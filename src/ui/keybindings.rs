use crate::domain::{InputMode, ThemeMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect, mode: InputMode, theme: ThemeMode) {
    let hints = match mode {
        InputMode::Editing => Line::from(vec![
            Span::raw(" Enter add   "),
            Span::raw("Esc list   "),
            Span::raw("Backspace delete char"),
        ]),
        InputMode::Normal => Line::from(vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("Space done   "),
            Span::raw("d delete   "),
            Span::raw("u undo   "),
            Span::raw("a add   "),
            Span::raw("t theme   "),
            Span::raw("q quit"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style(theme));
    f.render_widget(paragraph, area);
}
