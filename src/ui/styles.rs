use crate::domain::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// Whole-screen background and default text
pub fn background_style(theme: ThemeMode) -> Style {
    match theme {
        ThemeMode::Light => Style::default().fg(Color::Black).bg(Color::White),
        ThemeMode::Dark => Style::default().fg(Color::White).bg(Color::Black),
    }
}

/// Default text style
pub fn default_style(theme: ThemeMode) -> Style {
    match theme {
        ThemeMode::Light => Style::default().fg(Color::Black),
        ThemeMode::Dark => Style::default().fg(Color::White),
    }
}

/// Selected row highlight style
pub fn selected_style(theme: ThemeMode) -> Style {
    let bg = match theme {
        ThemeMode::Light => Color::LightBlue,
        ThemeMode::Dark => Color::Blue,
    };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Completed task text: struck through and dimmed
pub fn done_style(theme: ThemeMode) -> Style {
    muted_style(theme).add_modifier(Modifier::CROSSED_OUT)
}

/// Check mark for completed tasks
pub fn check_style() -> Style {
    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
}

/// Secondary text (timestamps, placeholders)
pub fn muted_style(theme: ThemeMode) -> Style {
    match theme {
        ThemeMode::Light => Style::default().fg(Color::DarkGray),
        ThemeMode::Dark => Style::default().fg(Color::Gray),
    }
}

/// Title style for panes
pub fn title_style(theme: ThemeMode) -> Style {
    let fg = match theme {
        ThemeMode::Light => Color::Blue,
        ThemeMode::Dark => Color::Cyan,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

/// Border style, red when the input has an error
pub fn border_style(theme: ThemeMode, has_error: bool) -> Style {
    if has_error {
        return Style::default().fg(Color::Red);
    }
    match theme {
        ThemeMode::Light => Style::default().fg(Color::Gray),
        ThemeMode::Dark => Style::default().fg(Color::DarkGray),
    }
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Undo toast background
pub fn toast_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Action key inside the undo toast
pub fn toast_action_style() -> Style {
    Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD)
}

/// Theme indicator in the header
pub fn theme_icon_style(theme: ThemeMode) -> Style {
    match theme {
        ThemeMode::Light => Style::default().fg(Color::DarkGray),
        ThemeMode::Dark => Style::default().fg(Color::Yellow),
    }
}

/// Keybinding hint style
pub fn hint_style(theme: ThemeMode) -> Style {
    muted_style(theme)
}
