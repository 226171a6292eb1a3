use anyhow::Result;
use tomo::commands::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logs are only wanted when explicitly requested; the
    // message macros switch to tracing in the same condition.
    if std::env::var("RUST_LOG").is_ok() || std::env::var("TOMO_DEBUG").is_ok() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    Cli::menu().await
}
