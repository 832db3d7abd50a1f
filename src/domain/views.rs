use super::dates::format_date_key;
use super::task::Task;
use chrono::{Duration, NaiveDate};

/// Tasks whose date key equals the local date key of `date`, in store order.
/// A pure projection over the collection, used by the day view and by each
/// cell of the week view.
pub fn tasks_for_day(tasks: &[Task], date: NaiveDate) -> Vec<&Task> {
    let key = format_date_key(date);
    tasks.iter().filter(|t| t.date == key).collect()
}

/// The seven consecutive local dates of the week starting at `week_start`
pub fn week_days(week_start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| week_start + Duration::days(i as i64))
}

/// Checkbox glyph for a task card
pub fn checkbox_glyph(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task_on(description: &str, key: &str) -> Task {
        Task::new(description.to_string(), key.to_string(), None)
    }

    #[test]
    fn test_tasks_for_day_filters_by_key() {
        let tasks = vec![
            task_on("maandag 1", "2024-03-04"),
            task_on("dinsdag", "2024-03-05"),
            task_on("maandag 2", "2024-03-04"),
        ];

        let monday = tasks_for_day(&tasks, date(2024, 3, 4));
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[0].description, "maandag 1");
        assert_eq!(monday[1].description, "maandag 2");

        assert!(tasks_for_day(&tasks, date(2024, 3, 6)).is_empty());
    }

    #[test]
    fn test_tasks_for_day_is_idempotent() {
        let tasks = vec![task_on("taak", "2024-03-04")];
        let first = tasks_for_day(&tasks, date(2024, 3, 4)).len();
        let second = tasks_for_day(&tasks, date(2024, 3, 4)).len();
        assert_eq!(first, second);
    }

    #[test]
    fn test_week_days_monday_first() {
        let days = week_days(date(2024, 2, 26));
        assert_eq!(days[0], date(2024, 2, 26));
        assert_eq!(days[3], date(2024, 2, 29)); // leap day
        assert_eq!(days[6], date(2024, 3, 3)); // crosses into March
    }

    #[test]
    fn test_week_buckets_cover_all_tasks_of_week() {
        let tasks = vec![
            task_on("ma", "2024-02-26"),
            task_on("do", "2024-02-29"),
            task_on("zo", "2024-03-03"),
            task_on("buiten de week", "2024-03-04"),
        ];

        let bucketed: usize = week_days(date(2024, 2, 26))
            .iter()
            .map(|d| tasks_for_day(&tasks, *d).len())
            .sum();
        assert_eq!(bucketed, 3);
    }

    #[test]
    fn test_checkbox_glyph() {
        assert_eq!(checkbox_glyph(false), "[ ]");
        assert_eq!(checkbox_glyph(true), "[x]");
    }
}
