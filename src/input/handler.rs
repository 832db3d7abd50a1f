use crate::app::{AppState, Modal};
use crate::domain::ViewMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match &app.modal {
        None => handle_normal_mode(app, key),
        Some(Modal::TaskForm(_)) => handle_task_form_mode(app, key),
        Some(Modal::Actions) => handle_actions_mode(app, key),
        Some(Modal::MoveTask(_)) => handle_move_mode(app, key),
        Some(Modal::ConfirmDelete) => handle_confirm_delete_mode(app, key),
    }
}

/// Handle keys when no dialog is open
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Step back/forward one day or one week
        KeyCode::Left => {
            app.go_previous();
            Ok(false)
        }
        KeyCode::Right => {
            app.go_next();
            Ok(false)
        }

        // Jump to today
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.go_today();
            Ok(false)
        }

        // Switch views
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.set_view_mode(ViewMode::Day);
            Ok(false)
        }
        KeyCode::Char('w') | KeyCode::Char('W') => {
            app.set_view_mode(ViewMode::Week);
            Ok(false)
        }
        KeyCode::Tab => {
            app.set_view_mode(app.view_mode.toggled());
            Ok(false)
        }

        // Move the cursor: over tasks in day view, over days in week view
        KeyCode::Up => {
            match app.view_mode {
                ViewMode::Day => app.select_up(),
                ViewMode::Week => app.select_weekday_up(),
            }
            Ok(false)
        }
        KeyCode::Down => {
            match app.view_mode {
                ViewMode::Day => app.select_down(),
                ViewMode::Week => app.select_weekday_down(),
            }
            Ok(false)
        }

        // Day view: open the action menu. Week view: drill into the day.
        KeyCode::Enter => {
            match app.view_mode {
                ViewMode::Day => app.open_actions(),
                ViewMode::Week => app.open_selected_day(),
            }
            Ok(false)
        }

        // Toggle completion of the task under the cursor
        KeyCode::Char(' ') => {
            if app.view_mode == ViewMode::Day {
                app.toggle_selected_complete();
            }
            Ok(false)
        }

        // New task on the focused day
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.open_create_form();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys inside the create/edit form
fn handle_task_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Save (refused by the app while the form is invalid)
        KeyCode::Enter => {
            app.submit_task_form();
            Ok(false)
        }

        // Cancel, discarding the edit
        KeyCode::Esc => {
            app.close_modal();
            Ok(false)
        }

        // Next field
        KeyCode::Tab => {
            app.form_next_field();
            Ok(false)
        }

        // Cycle colors when the color row has focus
        KeyCode::Left => {
            app.form_prev_color();
            Ok(false)
        }
        KeyCode::Right => {
            app.form_next_color();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.form_backspace();
            Ok(false)
        }

        KeyCode::Char(c) => {
            app.form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the action menu
fn handle_actions_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Edit
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.open_edit_form();
            Ok(false)
        }

        // Move to another day
        KeyCode::Char('v') | KeyCode::Char('V') | KeyCode::Char('m') | KeyCode::Char('M') => {
            app.open_move_dialog();
            Ok(false)
        }

        // Delete (asks for confirmation first)
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.open_delete_confirm();
            Ok(false)
        }

        KeyCode::Esc => {
            app.close_modal();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the move dialog
fn handle_move_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.confirm_move();
            Ok(false)
        }

        KeyCode::Esc => {
            app.close_modal();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.form_backspace();
            Ok(false)
        }

        KeyCode::Char(c) => {
            app.form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the delete confirmation
fn handle_confirm_delete_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Yes, delete
        KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('y') | KeyCode::Enter => {
            app.confirm_delete();
            Ok(false)
        }

        // No, keep it
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_modal();
            Ok(false)
        }

        _ => Ok(false),
    }
}
