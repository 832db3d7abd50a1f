use crate::domain::{
    format_date_key, parse_date_key, start_of_week, tasks_for_day, FormField, Task, ViewMode,
    TASK_COLORS,
};
use crate::persistence::save_tasks;
use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use std::path::PathBuf;
use std::time::Instant;
use uuid::Uuid;

/// How long a transient notice stays visible in the hint bar
const NOTICE_TTL_SECS: u64 = 4;

/// In-progress state of the create/edit task form
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFormState {
    pub description: String,
    pub date: String,
    pub color_index: usize,
    pub field: FormField,
}

/// In-progress state of the move dialog
#[derive(Debug, Clone, PartialEq)]
pub struct MoveFormState {
    pub date: String,
}

/// The currently open dialog. Holding these as one tagged union (instead of
/// a flag per dialog) makes "two dialogs open at once" unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Create (no task selected) or edit (a task selected)
    TaskForm(TaskFormState),
    /// Action menu for the selected task
    Actions,
    /// Pick a new date for the selected task
    MoveTask(MoveFormState),
    /// Confirm deletion of the selected task
    ConfirmDelete,
}

/// Transient, non-blocking message shown in the hint bar
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub shown_at: Instant,
}

/// Main application state
pub struct AppState {
    pub tasks: Vec<Task>,
    pub current_date: NaiveDate,
    pub view_mode: ViewMode,
    pub modal: Option<Modal>,
    /// Valid only while a dialog that operates on it is open
    pub selected_task: Option<Uuid>,
    /// Cursor within the focused day's task list (day view)
    pub selected_row: usize,
    /// Cursor within the week view, 0 = Monday
    pub selected_weekday: usize,
    pub tasks_path: PathBuf,
    pub needs_save: bool,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, tasks_path: PathBuf) -> Self {
        let today = chrono::Local::now().date_naive();

        Self {
            tasks,
            current_date: today,
            view_mode: ViewMode::Week,
            modal: None,
            selected_task: None,
            selected_row: 0,
            selected_weekday: today.weekday().num_days_from_monday() as usize,
            tasks_path,
            needs_save: false,
            notice: None,
        }
    }

    /// Monday of the week containing the focus date
    pub fn week_start(&self) -> NaiveDate {
        start_of_week(self.current_date)
    }

    /// The day the cursor is on: the focus date in day view, the selected
    /// weekday cell in week view
    pub fn focused_day(&self) -> NaiveDate {
        match self.view_mode {
            ViewMode::Day => self.current_date,
            ViewMode::Week => self.week_start() + Duration::days(self.selected_weekday as i64),
        }
    }

    /// Tasks of the focus date, in store order
    pub fn day_tasks(&self) -> Vec<&Task> {
        tasks_for_day(&self.tasks, self.current_date)
    }

    /// The task under the day-view cursor
    pub fn selected_day_task(&self) -> Option<&Task> {
        self.day_tasks().get(self.selected_row).copied()
    }

    // --- Navigation ---

    /// Step back one day or one week, depending on the view
    pub fn go_previous(&mut self) {
        let step = match self.view_mode {
            ViewMode::Day => 1,
            ViewMode::Week => 7,
        };
        self.current_date = self.current_date - Duration::days(step);
        self.clamp_selection();
    }

    /// Step forward one day or one week, depending on the view
    pub fn go_next(&mut self) {
        let step = match self.view_mode {
            ViewMode::Day => 1,
            ViewMode::Week => 7,
        };
        self.current_date = self.current_date + Duration::days(step);
        self.clamp_selection();
    }

    /// Jump back to today
    pub fn go_today(&mut self) {
        let today = chrono::Local::now().date_naive();
        self.current_date = today;
        self.selected_weekday = today.weekday().num_days_from_monday() as usize;
        self.clamp_selection();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.clamp_selection();
    }

    /// Open the day view focused on the week view's selected day
    pub fn open_selected_day(&mut self) {
        self.current_date = self.focused_day();
        self.view_mode = ViewMode::Day;
        self.selected_row = 0;
    }

    /// Move the day-view cursor up
    pub fn select_up(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
        }
    }

    /// Move the day-view cursor down
    pub fn select_down(&mut self) {
        let count = self.day_tasks().len();
        if self.selected_row + 1 < count {
            self.selected_row += 1;
        }
    }

    /// Move the week-view cursor to the previous day
    pub fn select_weekday_up(&mut self) {
        if self.selected_weekday > 0 {
            self.selected_weekday -= 1;
        }
    }

    /// Move the week-view cursor to the next day
    pub fn select_weekday_down(&mut self) {
        if self.selected_weekday + 1 < 7 {
            self.selected_weekday += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.day_tasks().len();
        if count == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= count {
            self.selected_row = count - 1;
        }
    }

    // --- Store mutations ---

    /// Append a task to the collection
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
        self.needs_save = true;
    }

    /// Replace the task whose id matches; no-op if absent
    pub fn update_task(&mut self, task: Task) {
        if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *existing = task;
            self.needs_save = true;
        }
    }

    /// Drop the task whose id matches; no-op if absent
    pub fn remove_task(&mut self, id: Uuid) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.needs_save = true;
            self.clamp_selection();
        }
    }

    /// Flip the completed flag on the matching task; no-op if absent
    pub fn toggle_complete(&mut self, id: Uuid) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
            self.needs_save = true;
        }
    }

    /// Rebind the matching task to a new date, leaving every other field
    /// untouched; no-op if absent
    pub fn move_task_to(&mut self, id: Uuid, date: NaiveDate) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.date = format_date_key(date);
            self.needs_save = true;
            self.clamp_selection();
        }
    }

    /// Flip the completed flag on the task under the day-view cursor
    pub fn toggle_selected_complete(&mut self) {
        if let Some(id) = self.selected_day_task().map(|t| t.id) {
            self.toggle_complete(id);
        }
    }

    // --- Dialogs ---

    /// Open the create form, pre-filled with the focused day
    pub fn open_create_form(&mut self) {
        self.selected_task = None;
        self.modal = Some(Modal::TaskForm(TaskFormState {
            description: String::new(),
            date: format_date_key(self.focused_day()),
            color_index: 0,
            field: FormField::Description,
        }));
    }

    /// Open the action menu for the task under the day-view cursor
    pub fn open_actions(&mut self) {
        if let Some(id) = self.selected_day_task().map(|t| t.id) {
            self.selected_task = Some(id);
            self.modal = Some(Modal::Actions);
        }
    }

    /// Open the edit form pre-filled from the selected task
    pub fn open_edit_form(&mut self) {
        let Some(task) = self.selected_task.and_then(|id| self.task_by_id(id)).cloned() else {
            return;
        };

        let color_index = task
            .color
            .as_deref()
            .and_then(|hex| TASK_COLORS.iter().position(|c| c.value == hex))
            .unwrap_or(0);

        self.modal = Some(Modal::TaskForm(TaskFormState {
            description: task.description,
            date: task.date,
            color_index,
            field: FormField::Description,
        }));
    }

    /// Open the move dialog pre-filled with the task's current date
    pub fn open_move_dialog(&mut self) {
        let Some(date) = self
            .selected_task
            .and_then(|id| self.task_by_id(id))
            .map(|t| t.date.clone())
        else {
            return;
        };

        self.modal = Some(Modal::MoveTask(MoveFormState { date }));
    }

    /// Open the delete confirmation for the selected task
    pub fn open_delete_confirm(&mut self) {
        if self.selected_task.is_some() {
            self.modal = Some(Modal::ConfirmDelete);
        }
    }

    /// Close whichever dialog is open, discarding its in-progress edit.
    /// The selected-task reference lives only as long as a dialog is open.
    pub fn close_modal(&mut self) {
        self.modal = None;
        self.selected_task = None;
    }

    /// Save the task form: create a new task, or update the selected one in
    /// place. Refused (form stays open) while the description is blank or
    /// the date is not a well-formed key.
    pub fn submit_task_form(&mut self) {
        let form = match &self.modal {
            Some(Modal::TaskForm(form)) => form.clone(),
            _ => return,
        };

        let description = form.description.trim().to_string();
        if description.is_empty() || parse_date_key(&form.date).is_none() {
            return;
        }

        let color = Some(TASK_COLORS[form.color_index].value.to_string());
        match self.selected_task.and_then(|id| self.task_by_id(id)).cloned() {
            Some(mut updated) => {
                updated.description = description;
                updated.date = form.date.clone();
                updated.color = color;
                self.update_task(updated);
            }
            None => self.add_task(Task::new(description, form.date.clone(), color)),
        }

        self.close_modal();
        self.clamp_selection();
    }

    /// Confirm the move dialog. Refused until the entered date parses.
    pub fn confirm_move(&mut self) {
        let form = match &self.modal {
            Some(Modal::MoveTask(form)) => form.clone(),
            _ => return,
        };

        let Some(date) = parse_date_key(&form.date) else {
            return;
        };

        if let Some(id) = self.selected_task {
            self.move_task_to(id, date);
        }
        self.close_modal();
    }

    /// Confirm deletion of the selected task
    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.selected_task {
            self.remove_task(id);
        }
        self.close_modal();
    }

    fn task_by_id(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    // --- Form plumbing ---

    /// Type a character into the active form field
    pub fn form_add_char(&mut self, c: char) {
        match &mut self.modal {
            Some(Modal::TaskForm(form)) => match form.field {
                FormField::Description => form.description.push(c),
                // The date field only accepts key characters
                FormField::Date => {
                    if c.is_ascii_digit() || c == '-' {
                        form.date.push(c);
                    }
                }
                FormField::Color => {}
            },
            Some(Modal::MoveTask(form)) => {
                if c.is_ascii_digit() || c == '-' {
                    form.date.push(c);
                }
            }
            _ => {}
        }
    }

    /// Delete the last character of the active form field
    pub fn form_backspace(&mut self) {
        match &mut self.modal {
            Some(Modal::TaskForm(form)) => match form.field {
                FormField::Description => {
                    form.description.pop();
                }
                FormField::Date => {
                    form.date.pop();
                }
                FormField::Color => {}
            },
            Some(Modal::MoveTask(form)) => {
                form.date.pop();
            }
            _ => {}
        }
    }

    /// Tab to the next form field
    pub fn form_next_field(&mut self) {
        if let Some(Modal::TaskForm(form)) = &mut self.modal {
            form.field = form.field.next();
        }
    }

    /// Cycle the form's color choice backwards
    pub fn form_prev_color(&mut self) {
        if let Some(Modal::TaskForm(form)) = &mut self.modal {
            if form.field == FormField::Color {
                form.color_index = (form.color_index + TASK_COLORS.len() - 1) % TASK_COLORS.len();
            }
        }
    }

    /// Cycle the form's color choice forwards
    pub fn form_next_color(&mut self) {
        if let Some(Modal::TaskForm(form)) = &mut self.modal {
            if form.field == FormField::Color {
                form.color_index = (form.color_index + 1) % TASK_COLORS.len();
            }
        }
    }

    // --- Persistence & notices ---

    /// Write the collection through to the persisted slot
    pub fn persist(&self) -> Result<()> {
        save_tasks(&self.tasks_path, &self.tasks)
    }

    /// Write-through after a mutation. A failed write becomes a transient
    /// notice instead of an error; the next mutation writes again.
    pub fn autosave(&mut self) {
        if !self.needs_save {
            return;
        }
        self.needs_save = false;

        if self.persist().is_err() {
            self.set_notice("Opslaan mislukt");
        }
    }

    pub fn set_notice(&mut self, message: &str) {
        self.notice = Some(Notice {
            message: message.to_string(),
            shown_at: Instant::now(),
        });
    }

    /// Drop the notice once its time is up (called every tick)
    pub fn expire_notice(&mut self) {
        if let Some(notice) = &self.notice {
            if notice.shown_at.elapsed().as_secs() >= NOTICE_TTL_SECS {
                self.notice = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::format_date_key;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_app() -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut app = AppState::new(Vec::new(), path);
        app.current_date = date(2024, 3, 4); // Monday
        app.selected_weekday = 0;
        (app, dir)
    }

    fn task_on(description: &str, key: &str) -> Task {
        Task::new(description.to_string(), key.to_string(), None)
    }

    #[test]
    fn test_create_flow_appends_task() {
        let (mut app, _dir) = test_app();
        app.view_mode = ViewMode::Day;

        app.open_create_form();
        for c in "Stofzuigen".chars() {
            app.form_add_char(c);
        }
        app.submit_task_form();

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].description, "Stofzuigen");
        assert_eq!(app.tasks[0].date, "2024-03-04");
        assert!(app.modal.is_none());
        assert!(app.needs_save);
    }

    #[test]
    fn test_create_form_prefills_selected_week_day() {
        let (mut app, _dir) = test_app();
        app.view_mode = ViewMode::Week;
        app.selected_weekday = 3; // Thursday

        app.open_create_form();
        match &app.modal {
            Some(Modal::TaskForm(form)) => assert_eq!(form.date, "2024-03-07"),
            other => panic!("expected task form, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_refused_for_blank_description() {
        let (mut app, _dir) = test_app();
        app.open_create_form();
        for c in "   ".chars() {
            app.form_add_char(c);
        }
        app.submit_task_form();

        assert!(app.tasks.is_empty());
        assert!(app.modal.is_some()); // form stays open
    }

    #[test]
    fn test_submit_refused_for_malformed_date() {
        let (mut app, _dir) = test_app();
        app.open_create_form();
        app.form_add_char('x'); // description
        app.form_next_field();
        app.form_backspace();
        app.form_backspace();
        app.submit_task_form();

        assert!(app.tasks.is_empty());
        assert!(app.modal.is_some());
    }

    #[test]
    fn test_edit_flow_replaces_in_place() {
        let (mut app, _dir) = test_app();
        app.view_mode = ViewMode::Day;
        app.add_task(task_on("Oud", "2024-03-04"));
        let id = app.tasks[0].id;

        app.open_actions();
        app.open_edit_form();
        for _ in 0.."Oud".len() {
            app.form_backspace();
        }
        for c in "Nieuw".chars() {
            app.form_add_char(c);
        }
        app.submit_task_form();

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].id, id);
        assert_eq!(app.tasks[0].description, "Nieuw");
        assert!(app.selected_task.is_none());
    }

    #[test]
    fn test_toggle_complete_is_involution() {
        let (mut app, _dir) = test_app();
        app.add_task(task_on("taak", "2024-03-04"));
        let id = app.tasks[0].id;

        app.toggle_complete(id);
        assert!(app.tasks[0].completed);
        app.toggle_complete(id);
        assert!(!app.tasks[0].completed);
    }

    #[test]
    fn test_toggle_complete_missing_id_is_noop() {
        let (mut app, _dir) = test_app();
        app.add_task(task_on("taak", "2024-03-04"));
        let snapshot = app.tasks.clone();

        app.toggle_complete(Uuid::new_v4());
        assert_eq!(app.tasks, snapshot);
    }

    #[test]
    fn test_move_changes_only_date() {
        let (mut app, _dir) = test_app();
        let mut task = task_on("Verhuizen", "2024-03-04");
        task.completed = true;
        task.color = Some("#E8C5CC".to_string());
        let original = task.clone();
        app.add_task(task);

        app.move_task_to(original.id, date(2024, 3, 11));

        let moved = &app.tasks[0];
        assert_eq!(moved.date, "2024-03-11");
        assert_eq!(moved.id, original.id);
        assert_eq!(moved.description, original.description);
        assert_eq!(moved.completed, original.completed);
        assert_eq!(moved.color, original.color);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let (mut app, _dir) = test_app();
        app.add_task(task_on("blijft", "2024-03-04"));
        app.needs_save = false;
        let snapshot = app.tasks.clone();

        app.remove_task(Uuid::new_v4());
        assert_eq!(app.tasks, snapshot);
        assert!(!app.needs_save);
    }

    #[test]
    fn test_delete_flow() {
        let (mut app, _dir) = test_app();
        app.view_mode = ViewMode::Day;
        app.add_task(task_on("weg ermee", "2024-03-04"));

        app.open_actions();
        app.open_delete_confirm();
        app.confirm_delete();

        assert!(app.tasks.is_empty());
        assert!(app.modal.is_none());
        assert!(app.selected_task.is_none());
    }

    #[test]
    fn test_cancel_clears_selection() {
        let (mut app, _dir) = test_app();
        app.view_mode = ViewMode::Day;
        app.add_task(task_on("taak", "2024-03-04"));

        app.open_actions();
        assert!(app.selected_task.is_some());

        app.close_modal();
        assert!(app.selected_task.is_none());
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_move_dialog_flow() {
        let (mut app, _dir) = test_app();
        app.view_mode = ViewMode::Day;
        app.add_task(task_on("schuiven", "2024-03-04"));

        app.open_actions();
        app.open_move_dialog();

        // Dialog starts from the current date; retype it entirely
        match &app.modal {
            Some(Modal::MoveTask(form)) => assert_eq!(form.date, "2024-03-04"),
            other => panic!("expected move dialog, got {:?}", other),
        }
        for _ in 0.."2024-03-04".len() {
            app.form_backspace();
        }
        for c in "2024-03-08".chars() {
            app.form_add_char(c);
        }
        app.confirm_move();

        assert_eq!(app.tasks[0].date, "2024-03-08");
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_confirm_move_refused_until_date_parses() {
        let (mut app, _dir) = test_app();
        app.view_mode = ViewMode::Day;
        app.add_task(task_on("blijft staan", "2024-03-04"));

        app.open_actions();
        app.open_move_dialog();
        app.form_backspace();
        app.confirm_move();

        assert!(app.modal.is_some());
        assert_eq!(app.tasks[0].date, "2024-03-04");
    }

    #[test]
    fn test_navigation_steps_by_view() {
        let (mut app, _dir) = test_app();

        app.view_mode = ViewMode::Day;
        app.go_next();
        assert_eq!(app.current_date, date(2024, 3, 5));
        app.go_previous();
        assert_eq!(app.current_date, date(2024, 3, 4));

        app.view_mode = ViewMode::Week;
        app.go_next();
        assert_eq!(app.current_date, date(2024, 3, 11));
        app.go_previous();
        assert_eq!(app.current_date, date(2024, 3, 4));
    }

    #[test]
    fn test_open_selected_day_switches_view() {
        let (mut app, _dir) = test_app();
        app.view_mode = ViewMode::Week;
        app.selected_weekday = 6;

        app.open_selected_day();
        assert_eq!(app.view_mode, ViewMode::Day);
        assert_eq!(app.current_date, date(2024, 3, 10)); // the Sunday
    }

    #[test]
    fn test_selection_clamps_after_delete() {
        let (mut app, _dir) = test_app();
        app.view_mode = ViewMode::Day;
        app.add_task(task_on("een", "2024-03-04"));
        app.add_task(task_on("twee", "2024-03-04"));
        app.selected_row = 1;

        app.open_actions();
        app.open_delete_confirm();
        app.confirm_delete();

        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn test_autosave_roundtrip() {
        let (mut app, _dir) = test_app();
        app.add_task(task_on("bewaar mij", "2024-03-04"));
        app.autosave();
        assert!(!app.needs_save);

        let reloaded = crate::persistence::load_tasks(&app.tasks_path);
        assert_eq!(reloaded, app.tasks);
    }

    #[test]
    fn test_color_cycling_wraps() {
        let (mut app, _dir) = test_app();
        app.open_create_form();
        app.form_next_field(); // date
        app.form_next_field(); // color

        app.form_prev_color();
        match &app.modal {
            Some(Modal::TaskForm(form)) => {
                assert_eq!(form.color_index, TASK_COLORS.len() - 1)
            }
            other => panic!("expected task form, got {:?}", other),
        }
        app.form_next_color();
        match &app.modal {
            Some(Modal::TaskForm(form)) => assert_eq!(form.color_index, 0),
            other => panic!("expected task form, got {:?}", other),
        }
    }

    #[test]
    fn test_focused_day_follows_week_cursor() {
        let (mut app, _dir) = test_app();
        app.view_mode = ViewMode::Week;
        app.selected_weekday = 4;
        assert_eq!(format_date_key(app.focused_day()), "2024-03-08");

        app.view_mode = ViewMode::Day;
        assert_eq!(format_date_key(app.focused_day()), "2024-03-04");
    }
}
