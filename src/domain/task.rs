use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A preset color choice offered by the task form
#[derive(Debug, Clone, Copy)]
pub struct TaskColor {
    pub name: &'static str,
    pub value: &'static str,
}

/// The six pastel colors a task can carry
pub const TASK_COLORS: [TaskColor; 6] = [
    TaskColor { name: "Geel", value: "#E8DDB5" },
    TaskColor { name: "Peach", value: "#F0DCC4" },
    TaskColor { name: "Roze", value: "#E8C5CC" },
    TaskColor { name: "Blauw", value: "#C8D8DC" },
    TaskColor { name: "Lila", value: "#D0C8DC" },
    TaskColor { name: "Groen", value: "#C8DCC8" },
];

/// A single agenda task bound to one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID, generated at creation and stable across edits
    pub id: Uuid,
    /// What needs to happen
    pub description: String,
    /// Local calendar date key (YYYY-MM-DD, never UTC-shifted)
    pub date: String,
    /// Whether the task has been checked off
    #[serde(default)]
    pub completed: bool,
    /// Hex accent color (one of TASK_COLORS in practice)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Task {
    pub fn new(description: String, date: String, color: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            date,
            completed: false,
            color,
        }
    }
}
