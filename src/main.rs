use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use leave_desk::api::{AppState, create_router};
use leave_desk::config::ConfigLoader;
use leave_desk::pipeline::{LeavePipeline, NotificationDispatcher};
use leave_desk::store::InMemoryLeaveStore;
use leave_desk::{telemetry, transport};

#[derive(Parser, Debug)]
#[command(
    name = "leave-desk",
    about = "Accept leave requests, apply the leave policy and notify HR and the employee",
    version
)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::from_env()?,
    };
    let mut config = loader.into_config();

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let mail_transport = transport::from_config(&config.mail)?;
    let dispatcher = NotificationDispatcher::new(mail_transport, config.mail.send_timeout());
    let pipeline = LeavePipeline::new(
        Arc::new(InMemoryLeaveStore::new()),
        dispatcher,
        config.mail.admin_email.clone(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        %addr,
        transport = ?config.mail.transport,
        admin_email = %pipeline.admin_email(),
        "leave desk ready"
    );

    let app = create_router(AppState::new(pipeline));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("leave desk stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler, run until the process is killed.
        std::future::pending::<()>().await;
    }
}
