use anyhow::{Context, Result};
use clap::Parser;
use loqa_sessions::{create_router, AppState, Config, NatsClient, SessionStore, SimulatedTranscriber};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "loqa-sessions", about = "Session and transcript service", version)]
struct Cli {
    /// Config file path (extension optional)
    #[arg(short, long, default_value = "config/loqa-sessions")]
    config: String,

    /// Override the HTTP bind address
    #[arg(long)]
    bind: Option<String>,

    /// Override the HTTP port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loqa_sessions=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut cfg = Config::load(&cli.config)?;
    if let Some(bind) = cli.bind {
        cfg.service.http.bind = bind;
    }
    if let Some(port) = cli.port {
        cfg.service.http.port = port;
    }

    info!("Loqa Sessions v{}", env!("CARGO_PKG_VERSION"));
    info!("Loaded config: {}", cfg.service.name);

    let store = Arc::new(SessionStore::new());

    if let Some(url) = &cfg.nats.url {
        match NatsClient::connect(url, cfg.nats.subject.clone()).await {
            Ok(client) => {
                client.spawn_forwarder(store.subscribe());
            }
            Err(e) => warn!("Transcript events will not be published: {:#}", e),
        }
    }

    let transcriber = Arc::new(SimulatedTranscriber::new(
        cfg.transcription.simulated_delay(),
    ));
    let app = create_router(AppState::new(store, transcriber));

    let addr = cfg.http_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for ctrl-c: {}", e);
    }
}
