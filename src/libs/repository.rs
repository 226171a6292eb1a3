//! Canonical in-memory task list backed by the durable store.
//!
//! The repository owns the only authoritative copy of the task list.
//! Every mutation is written to the store first and applied to memory
//! only after the write resolves, so a failed write leaves memory and
//! totals exactly as they were. Totals are rederived from the full
//! list after every change.
//!
//! Blank names and unknown ids recover locally as no-ops (the caller
//! gets `None`/`false`, nothing changes); only store failures propagate
//! as errors.

use crate::db::sessions::Sessions;
use crate::db::tasks::Tasks;
use crate::libs::summary::Totals;
use crate::libs::task::{Task, TaskFilter, TaskPatch};
use anyhow::Result;
use uuid::Uuid;

pub struct TaskRepository {
    store: Tasks,
    sessions: Sessions,
    tasks: Vec<Task>,
    totals: Totals,
}

impl TaskRepository {
    /// Opens the backing stores and hydrates the list from disk.
    pub fn new() -> Result<TaskRepository> {
        let mut repository = TaskRepository {
            store: Tasks::new()?,
            sessions: Sessions::new()?,
            tasks: Vec::new(),
            totals: Totals::default(),
        };
        repository.load()?;

        Ok(repository)
    }

    /// Replaces the in-memory list with the stored rows (newest first)
    /// and recomputes totals.
    pub fn load(&mut self) -> Result<()> {
        self.tasks = self.store.fetch_all()?;
        self.totals = Totals::compute(&self.tasks);
        crate::msg_debug!("hydrated {} tasks from the store", self.tasks.len());

        Ok(())
    }

    /// Creates and persists a new task from a trimmed, non-empty name.
    ///
    /// A blank name is a validation no-op: returns `None`, list and
    /// totals untouched. The new task is prepended so listing order
    /// stays newest-first.
    pub fn add(&mut self, name: &str) -> Result<Option<Task>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let task = Task::new(name);
        self.store.put(&task)?;
        self.tasks.insert(0, task.clone());
        self.totals = Totals::compute(&self.tasks);

        Ok(Some(task))
    }

    /// Flips `completed` on the matching task. Unknown id is a no-op
    /// returning `false`. The task keeps its position in the list.
    pub fn toggle_completion(&mut self, id: &Uuid) -> Result<bool> {
        let Some(index) = self.tasks.iter().position(|task| task.id == *id) else {
            return Ok(false);
        };

        let mut task = self.tasks[index].clone();
        task.completed = !task.completed;
        self.store.put(&task)?;
        self.tasks[index] = task;
        self.totals = Totals::compute(&self.tasks);

        Ok(true)
    }

    /// Removes the task from store and memory, along with any persisted
    /// timer session for it, so no session row is left orphaned.
    pub fn delete(&mut self, id: &Uuid) -> Result<bool> {
        let Some(index) = self.tasks.iter().position(|task| task.id == *id) else {
            return Ok(false);
        };

        self.store.delete(id)?;
        self.sessions.delete(id)?;
        self.tasks.remove(index);
        self.totals = Totals::compute(&self.tasks);

        Ok(true)
    }

    /// Merges a partial field set into the matching task, store first,
    /// then memory. The timer engine commits elapsed time through here.
    pub fn update(&mut self, id: &Uuid, patch: TaskPatch) -> Result<bool> {
        let Some(index) = self.tasks.iter().position(|task| task.id == *id) else {
            return Ok(false);
        };

        let mut task = self.tasks[index].clone();
        if let Some(name) = patch.name {
            task.name = name;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        if let Some(pomodoro_quantity) = patch.pomodoro_quantity {
            task.pomodoro_quantity = pomodoro_quantity;
        }
        self.store.put(&task)?;
        self.tasks[index] = task;
        self.totals = Totals::compute(&self.tasks);

        Ok(true)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filtered(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| match filter {
                TaskFilter::All => true,
                TaskFilter::Pending => !task.completed,
                TaskFilter::Completed => task.completed,
            })
            .collect()
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn get(&self, id: &Uuid) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == *id)
    }

    /// Finds a task by full id or unambiguous id prefix. Returns `None`
    /// when nothing or more than one task matches.
    pub fn resolve(&self, prefix: &str) -> Option<&Task> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return None;
        }

        let mut matches = self.tasks.iter().filter(|task| task.id.to_string().starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(task), None) => Some(task),
            _ => None,
        }
    }
}
