use super::types::Message;
use crate::libs::formatter::format_clock;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::TaskCreated(name) => write!(f, "Task \"{}\" created", name),
            Message::TaskNameEmpty => write!(f, "Task name must not be empty"),
            Message::TaskNotFound(id) => write!(f, "No task matches \"{}\"", id),
            Message::TaskCompleted(name) => write!(f, "Task \"{}\" completed", name),
            Message::TaskReopened(name) => write!(f, "Task \"{}\" reopened", name),
            Message::TaskDeleted(name) => write!(f, "Task \"{}\" deleted", name),
            Message::TasksEmpty => write!(f, "No tasks yet. Add one with `tomo task add <name>`"),
            Message::ConfirmDeleteTask(name) => write!(f, "Delete task \"{}\"?", name),

            Message::TimerOpened(name) => write!(f, "Focus session for \"{}\"", name),
            Message::TimerNotLoaded => write!(f, "No focus session is open"),
            Message::TimerNotRunning => write!(f, "The focus session is not running"),
            Message::TimerPaused => write!(f, "Session paused"),
            Message::TimerFinished => write!(f, "Session finished"),
            Message::TimerCommitted(seconds) => write!(f, "Committed {} of focus time", format_clock(*seconds)),
            Message::TimerClosed => write!(f, "Session saved for later"),
            Message::ConfirmCommitElapsed(seconds) => write!(f, "Commit {} to the task's total?", format_clock(*seconds)),

            Message::ConfigSaved => write!(f, "Configuration saved"),
            Message::ConfigParseError => write!(f, "Failed to parse configuration"),
        }
    }
}
