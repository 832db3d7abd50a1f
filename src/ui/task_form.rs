use crate::app::{AppState, Modal};
use crate::domain::{FormField, TASK_COLORS};
use crate::ui::{
    layout::create_modal_area,
    styles::{accent_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the create/edit task form
pub fn render_task_form(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(Modal::TaskForm(form)) = &app.modal else {
        return;
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let title_text = if app.selected_task.is_some() {
        " Taak bewerken "
    } else {
        " Nieuwe taak "
    };

    let mut lines = Vec::new();

    // Description field
    lines.push(Line::raw(""));
    lines.push(Line::raw(field_label(
        "Beschrijving:",
        form.field == FormField::Description,
    )));
    lines.push(input_line(&form.description, form.field == FormField::Description));
    lines.push(Line::raw(""));

    // Date field
    lines.push(Line::raw(field_label("Datum (JJJJ-MM-DD):", form.field == FormField::Date)));
    lines.push(input_line(&form.date, form.field == FormField::Date));
    lines.push(Line::raw(""));

    // Color row
    lines.push(Line::raw(field_label("Kleur:", form.field == FormField::Color)));
    let mut color_spans = vec![Span::raw("> ")];
    for (idx, color) in TASK_COLORS.iter().enumerate() {
        let marker = if idx == form.color_index { "●" } else { "○" };
        color_spans.push(Span::styled(
            format!("{} {}", marker, color.name),
            accent_style(Some(color.value)),
        ));
        color_spans.push(Span::raw("  "));
    }
    lines.push(Line::from(color_spans));
    lines.push(Line::raw(""));

    // Instructions
    lines.push(Line::raw(
        "Tab veld wisselen  ·  ←/→ kleur kiezen  ·  Enter opslaan  ·  Esc annuleren",
    ));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title_text, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

fn field_label(label: &str, active: bool) -> String {
    if active {
        format!("{} (actief)", label)
    } else {
        label.to_string()
    }
}

fn input_line(value: &str, active: bool) -> Line<'static> {
    Line::from(vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style()),
        if active {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ])
}
