use crate::app::AppState;
use crate::domain::{format_single_date, format_week_range, ViewMode};
use crate::ui::styles::{border_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the header bar: the current date or week label plus the view tabs
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let label = match app.view_mode {
        ViewMode::Day => format_single_date(app.current_date),
        ViewMode::Week => format_week_range(app.week_start()),
    };

    let mut spans = vec![Span::styled(label, title_style()), Span::raw("    ")];

    // View tabs, active one highlighted
    for mode in [ViewMode::Day, ViewMode::Week] {
        let tab = format!(" {} ", mode.label());
        if mode == app.view_mode {
            spans.push(Span::styled(tab, title_style()));
        } else {
            spans.push(Span::styled(tab, hint_style()));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Agenda ", title_style())),
    );

    f.render_widget(paragraph, area);
}
