use crate::app::AppState;
use crate::domain::{checkbox_glyph, Task};
use crate::ui::styles::{
    accent_style, border_style, completed_style, default_style, empty_style, selected_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the day view: the focused day's tasks as a list of cards
pub fn render_day_view(f: &mut Frame, app: &AppState, area: Rect) {
    let tasks = app.day_tasks();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Taken ", title_style()));

    if tasks.is_empty() {
        let lines = vec![
            Line::raw(""),
            Line::styled("Geen taken voor deze dag", empty_style()),
            Line::raw(""),
            Line::styled("Druk op 'a' om je eerste taak toe te voegen", empty_style()),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task);
            let style = if idx == app.selected_row {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

/// Create a single task card line: accent bar, checkbox, description
pub fn create_task_line(task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(Span::styled(
        "▌ ".to_string(),
        accent_style(task.color.as_deref()),
    ));
    spans.push(Span::raw(format!("{} ", checkbox_glyph(task.completed))));

    if task.completed {
        spans.push(Span::styled(task.description.clone(), completed_style()));
    } else {
        spans.push(Span::raw(task.description.clone()));
    }

    Line::from(spans)
}
