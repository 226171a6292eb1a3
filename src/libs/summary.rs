use crate::libs::task::Task;

/// Aggregate counters derived from the full task list.
///
/// Always recomputed from scratch when the list changes, never patched
/// incrementally and never persisted, so they cannot drift from the
/// stored rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Tasks with `completed == false`.
    pub to_be_completed: usize,
    /// Tasks with `completed == true`.
    pub completed: usize,
    /// Sum of `pomodoro_quantity` over all tasks, in seconds.
    pub estimated_time: u64,
}

impl Totals {
    pub fn compute(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.completed).count();

        Totals {
            to_be_completed: tasks.len() - completed,
            completed,
            estimated_time: tasks.iter().map(|task| task.pomodoro_quantity).sum(),
        }
    }
}
