use crate::app::AppState;
use crate::domain::ViewMode;
use crate::ui::styles::{error_style, hint_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the keybindings hint bar. A pending notice (e.g. a failed save)
/// takes the bar over until it expires.
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(notice) = &app.notice {
        let line = Line::from(Span::styled(format!(" {} ", notice.message), error_style()));
        f.render_widget(Paragraph::new(line), area);
        return;
    }

    let hints = if app.modal.is_some() {
        Line::from(vec![
            Span::raw(" Enter bevestigen   "),
            Span::raw("Tab veld   "),
            Span::raw("Esc annuleren"),
        ])
    } else {
        match app.view_mode {
            ViewMode::Day => Line::from(vec![
                Span::raw(" ←/→ dag   "),
                Span::raw("↑/↓ taak   "),
                Span::raw("Enter acties   "),
                Span::raw("Spatie afvinken   "),
                Span::raw("a nieuw   "),
                Span::raw("t vandaag   "),
                Span::raw("w week   "),
                Span::raw("q afsluiten"),
            ]),
            ViewMode::Week => Line::from(vec![
                Span::raw(" ←/→ week   "),
                Span::raw("↑/↓ dag   "),
                Span::raw("Enter dag openen   "),
                Span::raw("a nieuw   "),
                Span::raw("t vandaag   "),
                Span::raw("d dag   "),
                Span::raw("q afsluiten"),
            ]),
        }
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
