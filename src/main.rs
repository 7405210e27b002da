use anyhow::{Context, Result};
use clap::Parser;
use meeting_assistant::{
    create_router, AppState, Config, GeminiProvider, MeetingAssistant, ModelRouter,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "meeting-assistant", version, about = "AI meeting transcript Q&A service")]
struct Cli {
    /// Config file path (extension optional)
    #[arg(short, long, default_value = "config/meeting-assistant")]
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
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut cfg = Config::load(&cli.config)?;
    if let Some(bind) = cli.bind {
        cfg.service.http.bind = bind;
    }
    if let Some(port) = cli.port {
        cfg.service.http.port = port;
    }

    info!("Meeting Assistant v{}", env!("CARGO_PKG_VERSION"));
    info!("Loaded config: {}", cfg.service.name);
    info!(
        "Model routes: simple={} moderate={} complex={}",
        cfg.ai.models.simple, cfg.ai.models.moderate, cfg.ai.models.complex
    );

    let provider = GeminiProvider::new(
        cfg.ai.base_url.clone(),
        cfg.ai.system_instruction.clone(),
        Duration::from_secs(cfg.ai.request_timeout_secs),
    )
    .context("Failed to build AI client")?;

    let assistant = MeetingAssistant::new(
        Arc::new(provider),
        ModelRouter::new(cfg.ai.models.clone()),
        cfg.assistant.clone(),
    );
    let app = create_router(AppState::new(assistant));

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
