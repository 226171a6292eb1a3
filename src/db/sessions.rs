//! Durable store for the `timer_sessions` collection.
//!
//! At most one row per task, keyed by the owning task's id. A row holds
//! the resumable countdown state of a session that was paused or closed
//! without committing; `running` is stored for completeness but is
//! always forced false on hydration by the timer engine.

use crate::db::db::Db;
use crate::libs::session::TimerSession;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const SCHEMA_SESSIONS: &str = "CREATE TABLE IF NOT EXISTS timer_sessions (
    task_id TEXT NOT NULL PRIMARY KEY,
    remaining_seconds INTEGER NOT NULL,
    elapsed_seconds INTEGER NOT NULL,
    running INTEGER NOT NULL DEFAULT 0
)";
const UPSERT_SESSION: &str = "INSERT INTO timer_sessions (task_id, remaining_seconds, elapsed_seconds, running) VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT(task_id) DO UPDATE SET remaining_seconds = ?2, elapsed_seconds = ?3, running = ?4";
const SELECT_SESSION: &str = "SELECT task_id, remaining_seconds, elapsed_seconds, running FROM timer_sessions WHERE task_id = ?1";
const SELECT_ALL_SESSIONS: &str = "SELECT task_id, remaining_seconds, elapsed_seconds, running FROM timer_sessions";
const DELETE_SESSION: &str = "DELETE FROM timer_sessions WHERE task_id = ?1";

pub struct Sessions {
    conn: Connection,
}

impl Sessions {
    pub fn new() -> Result<Sessions> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_SESSIONS, [])?;

        Ok(Sessions { conn: db.conn })
    }

    /// Inserts or replaces the session row for `session.task_id`.
    pub fn put(&mut self, session: &TimerSession) -> Result<()> {
        self.conn.execute(
            UPSERT_SESSION,
            params![
                session.task_id.to_string(),
                session.remaining_seconds,
                session.elapsed_seconds,
                session.running
            ],
        )?;

        Ok(())
    }

    pub fn get(&mut self, task_id: &Uuid) -> Result<Option<TimerSession>> {
        let session = self.conn.query_row(SELECT_SESSION, [task_id.to_string()], row_to_session).optional()?;

        Ok(session)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<TimerSession>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_SESSIONS)?;
        let session_iter = stmt.query_map([], row_to_session)?;
        let mut sessions = Vec::new();
        for session in session_iter {
            sessions.push(session?);
        }

        Ok(sessions)
    }

    /// Removes the session row for `task_id`; returns the deleted row count.
    pub fn delete(&mut self, task_id: &Uuid) -> Result<usize> {
        let deleted = self.conn.execute(DELETE_SESSION, [task_id.to_string()])?;

        Ok(deleted)
    }
}

fn row_to_session(row: &Row<'_>) -> rusqlite::Result<TimerSession> {
    let task_id: String = row.get(0)?;
    Ok(TimerSession {
        task_id: Uuid::parse_str(&task_id).map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e)))?,
        remaining_seconds: row.get(1)?,
        elapsed_seconds: row.get(2)?,
        running: row.get(3)?,
    })
}
