pub mod day_view;
pub mod header;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod styles;
pub mod task_form;
pub mod week_view;

use crate::app::{AppState, Modal};
use crate::domain::ViewMode;
use day_view::render_day_view;
use header::render_header;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::{render_actions_dialog, render_confirm_delete, render_move_dialog};
use ratatui::Frame;
use task_form::render_task_form;
use week_view::render_week_view;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_header(f, app, layout.header_area);

    match app.view_mode {
        ViewMode::Day => render_day_view(f, app, layout.content_area),
        ViewMode::Week => render_week_view(f, app, layout.content_area),
    }

    render_keybindings(f, app, layout.hints_area);

    // Render the open dialog, if any, on top
    match &app.modal {
        Some(Modal::TaskForm(_)) => render_task_form(f, app, size),
        Some(Modal::Actions) => render_actions_dialog(f, app, size),
        Some(Modal::MoveTask(_)) => render_move_dialog(f, app, size),
        Some(Modal::ConfirmDelete) => render_confirm_delete(f, app, size),
        None => {}
    }
}
