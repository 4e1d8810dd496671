use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub input_area: Rect,
    pub message_area: Rect,
    pub list_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Header: title and theme indicator (1 row)
/// - Input box (3 rows) with a message line below it
/// - Task list fills the rest
/// - Keybindings bar (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Error / status message
            Constraint::Min(0),    // Task list
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        input_area: chunks[1],
        message_area: chunks[2],
        list_area: chunks[3],
        keybindings_area: chunks[4],
    }
}

/// Bottom-right corner area for the undo toast
pub fn create_toast_area(area: Rect) -> Rect {
    let width = 34.min(area.width);
    let height = 3.min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create_layout(area);

        assert_eq!(layout.header_area.height, 1);
        assert_eq!(layout.input_area.height, 3);
        assert_eq!(layout.message_area.height, 1);
        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.list_area.height, 18);
    }

    #[test]
    fn test_create_toast_area() {
        let area = Rect::new(0, 0, 80, 24);
        let toast = create_toast_area(area);

        assert_eq!(toast.width, 34);
        assert_eq!(toast.height, 3);
        assert!(toast.right() < area.right());
        assert!(toast.bottom() < area.bottom());
    }

    #[test]
    fn test_toast_area_fits_tiny_terminal() {
        let area = Rect::new(0, 0, 10, 2);
        let toast = create_toast_area(area);
        assert!(toast.width <= area.width);
        assert!(toast.height <= area.height);
    }
}
