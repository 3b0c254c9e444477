use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use nativeui_registry::cli::{Cli, run_command};
use nativeui_registry::config::Config;
use nativeui_registry::tracing_fmt::TruncatingStderr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let config = Config::from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nativeui_registry=info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(TruncatingStderr::new(config.log_max_event_bytes)),
        )
        .init();

    run_command(cli.command, &config).await
}
