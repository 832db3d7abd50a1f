use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub content_area: Rect,
    pub hints_area: Rect,
}

/// Create the main layout:
/// - Header bar with the date label and view tabs (3 rows, bordered)
/// - Content area for the day or week view
/// - Bottom bar: keybinding hints (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Hints bar
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        content_area: chunks[1],
        hints_area: chunks[2],
    }
}

/// Split the content area into seven week cells, Monday first:
/// Monday..Thursday on the top row, Friday..Sunday on the bottom row.
pub fn create_week_grid(area: Rect) -> [Rect; 7] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[1]);

    [
        top[0], top[1], top[2], top[3], bottom[0], bottom[1], bottom[2],
    ]
}

/// Create centered modal area (for the dialogs)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(14),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
