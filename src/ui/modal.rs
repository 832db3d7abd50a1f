use crate::app::{AppState, Modal};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the action menu for the selected task
pub fn render_actions_dialog(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(task) = app
        .selected_task
        .and_then(|id| app.tasks.iter().find(|t| t.id == id))
    else {
        return;
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    lines.push(Line::raw(format!("  {}", task.description)));
    lines.push(Line::raw(""));
    lines.push(Line::raw("  Wat wil je doen met deze taak?"));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("  [e]", modal_title_style()),
        Span::raw(" Bewerken"),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  [v]", modal_title_style()),
        Span::raw(" Verplaatsen naar andere dag"),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  [x]", modal_title_style()),
        Span::raw(" Verwijderen"),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [Esc]", modal_title_style()),
        Span::raw(" Annuleren"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Taak acties ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the move dialog
pub fn render_move_dialog(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(Modal::MoveTask(form)) = &app.modal else {
        return;
    };

    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    lines.push(Line::raw("  Kies een nieuwe datum voor deze taak."));
    lines.push(Line::raw(""));
    lines.push(Line::raw("  Nieuwe datum (JJJJ-MM-DD):"));
    lines.push(Line::from(vec![
        Span::raw("  > "),
        Span::styled(form.date.clone(), modal_title_style()),
        Span::styled("█", modal_title_style()), // Cursor
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [Enter]", modal_title_style()),
        Span::raw(" Verplaatsen  "),
        Span::styled("[Esc]", modal_title_style()),
        Span::raw(" Annuleren"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Taak verplaatsen ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the delete confirmation
pub fn render_confirm_delete(f: &mut Frame, app: &AppState, area: Rect) {
    if !matches!(app.modal, Some(Modal::ConfirmDelete)) {
        return;
    }

    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    lines.push(Line::raw("  Weet je zeker dat je deze taak wilt verwijderen?"));
    lines.push(Line::raw("  Deze actie kan niet ongedaan worden gemaakt."));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [j]", modal_title_style()),
        Span::raw(" Verwijderen  "),
        Span::styled("[n]", modal_title_style()),
        Span::raw(" Annuleren"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Taak verwijderen ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
