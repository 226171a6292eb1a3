/// Every user-facing message the application can emit.
///
/// Commands never format strings inline; they pick a variant here so
/// wording lives in one place and the display layer stays uniform.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskNameEmpty,
    TaskNotFound(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskDeleted(String),
    TasksEmpty,
    ConfirmDeleteTask(String),

    // === TIMER MESSAGES ===
    TimerOpened(String),
    TimerNotLoaded,
    TimerNotRunning,
    TimerPaused,
    TimerFinished,
    TimerCommitted(u32),
    TimerClosed,
    ConfirmCommitElapsed(u32),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
}
