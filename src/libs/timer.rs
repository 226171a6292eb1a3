//! Countdown state machine for focus sessions.
//!
//! The engine owns at most one open session at a time:
//!
//! ```text
//! Idle -> Loaded -> Running <-> Paused -> (stop) Idle
//! ```
//!
//! A session hydrated from the store never resumes running on its own;
//! `running` is forced false on every open so a restart always lands in
//! `Loaded`. Elapsed time becomes part of the task's permanent total
//! only on [`TimerEngine::stop`]; [`TimerEngine::close`] persists the
//! countdown verbatim for the next open instead.
//!
//! The engine itself is tick-driven and synchronous; the one-second
//! cadence comes from the caller's loop, which must stop calling
//! [`TimerEngine::tick`] as soon as it returns `false`.

use crate::db::sessions::Sessions;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::repository::TaskRepository;
use crate::libs::session::{TimerSession, SESSION_LENGTH};
use crate::libs::task::TaskPatch;
use crate::msg_bail_anyhow;
use anyhow::Result;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// No open session.
    Idle,
    /// Session hydrated for a task, not running.
    Loaded,
    /// Countdown actively ticking.
    Running,
    /// Ticking stopped, state retained.
    Paused,
}

pub struct TimerEngine {
    sessions: Sessions,
    tasks: Tasks,
    state: TimerState,
    session: Option<TimerSession>,
}

impl TimerEngine {
    pub fn new() -> Result<TimerEngine> {
        Ok(TimerEngine {
            sessions: Sessions::new()?,
            tasks: Tasks::new()?,
            state: TimerState::Idle,
            session: None,
        })
    }

    /// Writes the session row, unless the owning task has been deleted
    /// underneath the open session; then any leftover row is removed
    /// instead, so a session can never outlive its task in the store.
    fn persist(&mut self, session: &TimerSession) -> Result<()> {
        if self.tasks.get(&session.task_id)?.is_some() {
            self.sessions.put(session)?;
        } else {
            self.sessions.delete(&session.task_id)?;
        }

        Ok(())
    }

    /// Hydrates the session for `task_id`, creating a fresh one when
    /// nothing is persisted. Only one session may be open system-wide:
    /// an already-open session is paused and persisted before the
    /// switch.
    pub fn open(&mut self, task_id: Uuid) -> Result<&TimerSession> {
        let same_task = self.session.as_ref().map(|session| session.task_id) == Some(task_id);
        if same_task {
            // Already open in this process; keep the live countdown
            // instead of rereading possibly stale stored state, and
            // persist the resolved (not running) state right away.
            if let Some(current) = self.session.as_mut() {
                current.running = false;
                let snapshot = current.clone();
                self.persist(&snapshot)?;
            }
        } else {
            if self.session.is_some() {
                self.close()?;
            }
            let mut session = self.sessions.get(&task_id)?.unwrap_or_else(|| TimerSession::new(task_id));
            // Persisted sessions never auto-resume running after a restart.
            session.running = false;
            self.session = Some(session);
        }
        self.state = TimerState::Loaded;

        Ok(self.session.as_ref().expect("session was just set"))
    }

    /// Starts or resumes the countdown. A finished countdown restarts
    /// fresh at 25:00 rather than starting at zero.
    pub fn start(&mut self) -> Result<()> {
        if !matches!(self.state, TimerState::Loaded | TimerState::Paused) {
            msg_bail_anyhow!(Message::TimerNotLoaded);
        }

        let session = self.session.as_mut().expect("state is Loaded or Paused");
        if session.remaining_seconds == 0 {
            session.reset();
        }
        session.running = true;
        self.state = TimerState::Running;

        Ok(())
    }

    /// Advances the countdown by one second. Returns whether the
    /// session is still running; when the countdown reaches zero the
    /// engine stops ticking on its own but commits nothing.
    pub fn tick(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }

        let session = self.session.as_mut().expect("state is Running");
        if session.remaining_seconds > 0 {
            session.remaining_seconds -= 1;
            session.elapsed_seconds += 1;
        }
        if session.remaining_seconds == 0 {
            session.running = false;
            self.state = TimerState::Paused;
            return false;
        }

        true
    }

    /// Stops ticking and persists the session so a restart resumes at
    /// exactly this point.
    pub fn pause(&mut self) -> Result<()> {
        if self.state != TimerState::Running {
            msg_bail_anyhow!(Message::TimerNotRunning);
        }

        let session = self.session.as_mut().expect("state is Running");
        session.running = false;
        let snapshot = session.clone();
        self.persist(&snapshot)?;
        self.state = TimerState::Paused;

        Ok(())
    }

    /// Commits the session: folds the accumulated elapsed seconds into
    /// the task's `pomodoro_quantity`, resets the persisted session to
    /// a fresh 25:00 and returns to `Idle`. The only path that changes
    /// the task's permanent total.
    pub fn stop(&mut self, repository: &mut TaskRepository) -> Result<u32> {
        if !matches!(self.state, TimerState::Running | TimerState::Paused) {
            msg_bail_anyhow!(Message::TimerNotLoaded);
        }

        let mut session = self.session.take().expect("state is Running or Paused");
        let committed = session.elapsed_seconds;
        if let Some(current_total) = repository.get(&session.task_id).map(|task| task.pomodoro_quantity) {
            repository.update(
                &session.task_id,
                TaskPatch {
                    pomodoro_quantity: Some(current_total + u64::from(committed)),
                    ..Default::default()
                },
            )?;
        }
        session.reset();
        debug_assert_eq!(session.remaining_seconds, SESSION_LENGTH);
        self.persist(&session)?;
        self.state = TimerState::Idle;

        Ok(committed)
    }

    /// Dismisses the session without committing: the current
    /// remaining/elapsed values are persisted verbatim (running forced
    /// false) and retained for the next open of the same task.
    pub fn close(&mut self) -> Result<()> {
        let Some(mut session) = self.session.take() else {
            return Ok(());
        };

        session.running = false;
        self.persist(&session)?;
        self.state = TimerState::Idle;

        Ok(())
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Current session snapshot for rendering, if one is open.
    pub fn snapshot(&self) -> Option<&TimerSession> {
        self.session.as_ref()
    }
}
