pub mod dates;
pub mod enums;
pub mod task;
pub mod views;

pub use dates::{
    day_name, format_date_key, format_single_date, format_week_range, month_long, month_short,
    parse_date_key, start_of_week, week_number,
};
pub use enums::{FormField, ViewMode};
pub use task::{Task, TaskColor, TASK_COLORS};
pub use views::{checkbox_glyph, tasks_for_day, week_days};
