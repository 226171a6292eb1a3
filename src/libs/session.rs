use uuid::Uuid;

/// Fixed countdown length of one focus session: 25 minutes.
pub const SESSION_LENGTH: u32 = 1500;

/// Resumable countdown state tied to one task.
///
/// The session references its task but is not owned by it; the task
/// lives in the repository, the session in the timer engine. While a
/// fresh session is running, `remaining_seconds + elapsed_seconds`
/// stays equal to [`SESSION_LENGTH`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSession {
    pub task_id: Uuid,
    /// Counts down from [`SESSION_LENGTH`] to 0 while running.
    pub remaining_seconds: u32,
    /// Seconds accumulated since the last commit. Reset to 0 on stop.
    pub elapsed_seconds: u32,
    /// True only while the countdown is actively ticking. Never true
    /// after hydration from the store.
    pub running: bool,
}

impl TimerSession {
    /// A fresh, not-yet-started session for `task_id`.
    pub fn new(task_id: Uuid) -> Self {
        TimerSession {
            task_id,
            remaining_seconds: SESSION_LENGTH,
            elapsed_seconds: 0,
            running: false,
        }
    }

    /// Resets the countdown to a fresh 25:00 without changing ownership.
    pub fn reset(&mut self) {
        self.remaining_seconds = SESSION_LENGTH;
        self.elapsed_seconds = 0;
        self.running = false;
    }
}
