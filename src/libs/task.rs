use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

/// A user-created to-do item with completion state and the cumulative
/// seconds of committed focus time.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDateTime,
    pub completed: bool,
    /// Total committed focus seconds. Only grows; a session folds its
    /// elapsed time in here exactly once, on stop.
    pub pomodoro_quantity: u64,
}

impl Task {
    pub fn new(name: &str) -> Self {
        Task {
            id: Uuid::new_v4(),
            name: name.to_string(),
            date: Local::now().naive_local(),
            completed: false,
            pomodoro_quantity: 0,
        }
    }
}

/// Partial field set merged into an existing task by
/// [`TaskRepository::update`](crate::libs::repository::TaskRepository::update).
///
/// Fields left as `None` keep their current value. The timer engine
/// uses this to commit elapsed time without touching anything else.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub completed: Option<bool>,
    pub pomodoro_quantity: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Pending,
    Completed,
}
