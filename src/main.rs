use clap::Parser;
use mercado::adapter::inbound::cli::Cli;
use mercado::adapter::inbound::http;
use mercado::error::Result;
use mercado::infrastructure::bootstrap;
use mercado::infrastructure::config::settings::Config;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    cli.apply(&mut config);

    config.init_logging();
    info!("mercado starting");

    if let Err(e) = run(config).await {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    info!("mercado stopped");
}

async fn run(config: Config) -> Result<()> {
    let app = bootstrap::build_app(&config)?;
    let listener = TcpListener::bind(config.server.bind_address()).await?;
    http::serve(listener, app, shutdown_signal()).await
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Unable to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
