//! Durable store for the `tasks` collection.
//!
//! One row per task, keyed by its uuid. `put` is an upsert so the same
//! call path serves creation and every later field update; `fetch_all`
//! returns rows newest-first, which is the canonical listing order.

use crate::db::db::Db;
use crate::libs::task::Task;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id TEXT NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    date TIMESTAMP NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0,
    pomodoro_quantity INTEGER NOT NULL DEFAULT 0
)";
const UPSERT_TASK: &str = "INSERT INTO tasks (id, name, date, completed, pomodoro_quantity) VALUES (?1, ?2, ?3, ?4, ?5)
    ON CONFLICT(id) DO UPDATE SET name = ?2, date = ?3, completed = ?4, pomodoro_quantity = ?5";
const SELECT_TASK: &str = "SELECT id, name, date, completed, pomodoro_quantity FROM tasks WHERE id = ?1";
const SELECT_ALL_TASKS: &str = "SELECT id, name, date, completed, pomodoro_quantity FROM tasks ORDER BY rowid DESC";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Inserts or fully replaces the row for `task.id`.
    pub fn put(&mut self, task: &Task) -> Result<()> {
        self.conn.execute(
            UPSERT_TASK,
            params![task.id.to_string(), task.name, task.date, task.completed, task.pomodoro_quantity],
        )?;

        Ok(())
    }

    pub fn get(&mut self, id: &Uuid) -> Result<Option<Task>> {
        let task = self.conn.query_row(SELECT_TASK, [id.to_string()], row_to_task).optional()?;

        Ok(task)
    }

    /// Returns all tasks, newest first.
    pub fn fetch_all(&mut self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_TASKS)?;
        let task_iter = stmt.query_map([], row_to_task)?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    /// Removes the row for `id`; returns the number of deleted rows.
    pub fn delete(&mut self, id: &Uuid) -> Result<usize> {
        let deleted = self.conn.execute(DELETE_TASK, [id.to_string()])?;

        Ok(deleted)
    }
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let id: String = row.get(0)?;
    Ok(Task {
        id: Uuid::parse_str(&id).map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e)))?,
        name: row.get(1)?,
        date: row.get(2)?,
        completed: row.get(3)?,
        pomodoro_quantity: row.get(4)?,
    })
}
