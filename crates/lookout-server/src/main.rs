use clap::Parser;
use lookout_core::{LoggingConfig, LookoutConfig};
use lookout_report::{create_sink, ReportServer};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lookout", version, about = "CSP violation report server")]
struct Cli {
    /// Config file (.toml, .yaml or .yml). Defaults to ./lookout.toml if present.
    #[arg(long, env = "LOOKOUT_CONFIG")]
    config: Option<PathBuf>,

    /// Bind address, overrides `server.bind`.
    #[arg(long, env = "LOOKOUT_BIND")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = LookoutConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }

    init_tracing(&config.logging);
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded");

    let sink = create_sink(&config.sink)?;
    let server = ReportServer::new(config.server, sink)?;
    server.run(shutdown_signal()).await?;

    Ok(())
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(logging.ansi)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
