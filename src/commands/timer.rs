//! The interactive focus-session command.
//!
//! Opens (or resumes) the countdown for one task and drives the engine
//! with a one-second tokio interval. Ctrl-C pauses instead of killing
//! the process, so accumulated time is never lost; the user then
//! decides whether to commit the elapsed time to the task's total or
//! keep the session for later.

use crate::libs::messages::Message;
use crate::libs::repository::TaskRepository;
use crate::libs::timer::TimerEngine;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::io::{self, Write};
use tokio::signal;
use tokio::time::{self, Duration};

#[derive(Debug, Args)]
pub struct TimerArgs {
    /// Task id or unambiguous id prefix
    id: String,
}

pub async fn cmd(timer_args: TimerArgs) -> Result<()> {
    let mut repository = TaskRepository::new()?;
    let Some(task) = repository.resolve(&timer_args.id).cloned() else {
        msg_error!(Message::TaskNotFound(timer_args.id));
        return Ok(());
    };

    let mut engine = TimerEngine::new()?;
    engine.open(task.id)?;
    msg_print!(Message::TimerOpened(task.name.clone()));
    engine.start()?;

    // The interval is dropped as soon as the loop exits, so no stale
    // tick can fire against a paused or closed session.
    let mut interval = time::interval(Duration::from_secs(1));
    interval.tick().await; // the first tick resolves immediately
    let finished = loop {
        tokio::select! {
            _ = interval.tick() => {
                let still_running = engine.tick();
                if let Some(session) = engine.snapshot() {
                    print!("{}", View::clock_line(session.remaining_seconds, session.elapsed_seconds, session.running));
                    io::stdout().flush()?;
                }
                if !still_running {
                    break true;
                }
            }
            _ = signal::ctrl_c() => {
                engine.pause()?;
                break false;
            }
        }
    };
    println!();
    if finished {
        msg_info!(Message::TimerFinished);
    } else {
        msg_info!(Message::TimerPaused);
    }

    let elapsed = engine.snapshot().map(|session| session.elapsed_seconds).unwrap_or(0);
    let commit = elapsed > 0
        && Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmCommitElapsed(elapsed).to_string())
            .default(true)
            .interact()?;
    if commit {
        let committed = engine.stop(&mut repository)?;
        msg_success!(Message::TimerCommitted(committed));
    } else {
        engine.close()?;
        msg_info!(Message::TimerClosed);
    }

    Ok(())
}
