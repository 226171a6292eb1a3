use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::repository::TaskRepository;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommands,
}

#[derive(Debug, Subcommand)]
enum TaskCommands {
    #[command(about = "Add a new task")]
    Add {
        /// Task name; multiple words are joined with spaces
        #[arg(required = true)]
        name: Vec<String>,
    },
    #[command(about = "List tasks with derived totals")]
    List {
        /// Include completed tasks regardless of the configured default
        #[arg(short, long)]
        all: bool,
    },
    #[command(about = "Toggle a task's completion state")]
    Done {
        /// Task id or unambiguous id prefix
        id: String,
    },
    #[command(about = "Delete a task and its saved session")]
    Delete {
        /// Task id or unambiguous id prefix
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(task_args: TaskArgs) -> Result<()> {
    let mut repository = TaskRepository::new()?;

    match task_args.command {
        TaskCommands::Add { name } => {
            let name = name.join(" ");
            match repository.add(&name)? {
                Some(task) => msg_success!(Message::TaskCreated(task.name)),
                None => msg_warning!(Message::TaskNameEmpty),
            }
        }
        TaskCommands::List { all } => {
            let show_completed = all || Config::read().unwrap_or_default().show_completed;
            let filter = if show_completed { TaskFilter::All } else { TaskFilter::Pending };
            let tasks = repository.filtered(filter);
            if tasks.is_empty() {
                msg_info!(Message::TasksEmpty);
            } else {
                View::tasks(&tasks);
            }
            View::totals(&repository.totals());
        }
        TaskCommands::Done { id } => {
            let Some(task_id) = repository.resolve(&id).map(|task| task.id) else {
                msg_error!(Message::TaskNotFound(id));
                return Ok(());
            };
            repository.toggle_completion(&task_id)?;
            if let Some(task) = repository.get(&task_id) {
                if task.completed {
                    msg_success!(Message::TaskCompleted(task.name.clone()));
                } else {
                    msg_info!(Message::TaskReopened(task.name.clone()));
                }
            }
        }
        TaskCommands::Delete { id, yes } => {
            let Some(task) = repository.resolve(&id).cloned() else {
                msg_error!(Message::TaskNotFound(id));
                return Ok(());
            };
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteTask(task.name.clone()).to_string())
                    .default(false)
                    .interact()?;
            if confirmed {
                repository.delete(&task.id)?;
                msg_success!(Message::TaskDeleted(task.name));
            }
        }
    }

    Ok(())
}
