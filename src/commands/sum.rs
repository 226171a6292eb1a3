use crate::libs::repository::TaskRepository;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {}

/// Prints the derived totals and the per-task focused time.
pub fn cmd(_sum_args: SumArgs) -> Result<()> {
    let repository = TaskRepository::new()?;

    let tasks = repository.filtered(TaskFilter::All);
    if !tasks.is_empty() {
        View::tasks(&tasks);
    }
    View::totals(&repository.totals());

    Ok(())
}
