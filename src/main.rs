mod client;
mod db;
mod errors;
mod models;
mod repl;
mod routes;
mod service;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use dwed_chat_core::config::DEFAULT_API_BASE;
use dwed_chat_core::ClientConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::db::history_repository::HistoryRepository;
use crate::db::venue_repository::VenueRepository;
use crate::service::chat_service::ChatService;

#[derive(Parser)]
#[command(name = "dwed-chat", version, about = "DWed wedding venue assistant")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the development chat backend
    Serve {
        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,

        /// Venue catalog (JSON array); the bundled fixtures when unset
        #[arg(long, env = "DWED_VENUES_FILE")]
        venues: Option<PathBuf>,
    },
    /// Chat with a running backend from the terminal
    Chat {
        #[arg(long, env = "DWED_API_BASE", default_value = DEFAULT_API_BASE)]
        api_base: String,

        /// Seconds to wait for each reply; 0 waits forever
        #[arg(long, env = "DWED_TIMEOUT_SECS", default_value_t = 30)]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, venues } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                        "dwed_chat=debug,dwed_chat_core=info,tower_http=debug".into()
                    }),
                )
                .init();
            serve(port, venues).await
        }
        Command::Chat { api_base, timeout_secs } => {
            // Logs go to stderr so they don't interleave with the conversation.
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
                )
                .init();
            let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));
            repl::run(ClientConfig::new(api_base).with_timeout(timeout)).await?;
            Ok(())
        }
    }
}

async fn serve(port: u16, venues: Option<PathBuf>) -> anyhow::Result<()> {
    // ── Catalog ───────────────────────────────────────────────────────────────
    let venue_repo = match venues {
        Some(path) => VenueRepository::from_file(&path).await?,
        None => VenueRepository::builtin()?,
    };
    info!(venues = venue_repo.find_all().len(), "Venue catalog loaded");

    let chat_service = ChatService::new(venue_repo, HistoryRepository::default());
    let app = routes::router(chat_service);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
