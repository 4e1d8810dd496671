pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;
pub mod toast;

use crate::app::AppState;
use crate::domain::ThemeMode;
use input_form::{render_input_form, render_message_line};
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use styles::{background_style, theme_icon_style, title_style};
use toast::render_undo_toast;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();

    // Paint the theme background first so every pane sits on it
    f.render_widget(Block::default().style(background_style(app.theme)), size);

    let layout = create_layout(size);

    render_header(f, app.theme, layout.header_area);
    render_input_form(f, app, layout.input_area);
    render_message_line(f, app, layout.message_area);
    render_list_pane(f, app, layout.list_area);
    render_keybindings(f, layout.keybindings_area, app.input_mode, app.theme);

    // Toast floats above everything else
    render_undo_toast(f, app, size);
}

fn render_header(f: &mut Frame, theme: ThemeMode, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(14)])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(" Task Tracker", title_style(theme))),
        chunks[0],
    );

    let icon = match theme {
        ThemeMode::Dark => "☀ light [t] ",
        ThemeMode::Light => "☾ dark [t] ",
    };
    f.render_widget(
        Paragraph::new(Line::styled(icon, theme_icon_style(theme))).alignment(Alignment::Right),
        chunks[1],
    );
}
