use crate::app::AppState;
use crate::domain::{day_name, month_short, tasks_for_day, week_days};
use crate::ui::day_view::create_task_line;
use crate::ui::layout::create_week_grid;
use crate::ui::styles::{border_style, empty_style, selected_style, today_style};
use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the week view: seven day cells, Monday first
pub fn render_week_view(f: &mut Frame, app: &AppState, area: Rect) {
    let days = week_days(app.week_start());
    let cells = create_week_grid(area);
    let today = chrono::Local::now().date_naive();

    for (idx, (day, cell)) in days.iter().zip(cells.iter()).enumerate() {
        let is_selected = idx == app.selected_weekday;
        render_day_cell(f, app, *day, *cell, *day == today, is_selected);
    }
}

/// Render one day cell with its title and task lines
fn render_day_cell(
    f: &mut Frame,
    app: &AppState,
    day: NaiveDate,
    area: Rect,
    is_today: bool,
    is_selected: bool,
) {
    let title = format!(" {} {} {} ", day_name(day), day.day(), month_short(day));

    let title_style = if is_today {
        today_style()
    } else if is_selected {
        selected_style()
    } else {
        border_style()
    };
    let borders = if is_selected {
        selected_style()
    } else {
        border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(borders)
        .title(Span::styled(title, title_style));

    let tasks = tasks_for_day(&app.tasks, day);
    let lines: Vec<Line> = if tasks.is_empty() {
        vec![Line::styled("  Geen taken", empty_style())]
    } else {
        tasks.iter().map(|task| create_task_line(task)).collect()
    };

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}
