pub mod init;
pub mod sum;
pub mod task;
pub mod timer;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Run a focus session for a task")]
    Timer(timer::TimerArgs),
    #[command(about = "Show the focus summary")]
    Sum(sum::SumArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Timer(args) => timer::cmd(args).await,
            Commands::Sum(args) => sum::cmd(args),
        }
    }
}
