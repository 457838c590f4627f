use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use volunteer_registry::{config::Config, create_app, db::Database, AppState};

#[derive(Parser, Debug)]
#[command(name = "volunteer-registry", version, about = "Volunteer and volunteer site registry API")]
struct Cli {
    /// Address to listen on, overrides SERVER_ADDRESS
    #[arg(long)]
    address: Option<String>,

    /// Record store URI, overrides DATABASE_URL (use memory:// for an in-process store)
    #[arg(long)]
    database_url: Option<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("volunteer_registry=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(address) = cli.address {
        config.server_address = address;
    }
    if let Some(database_url) = cli.database_url {
        config.database_url = database_url;
    }

    let db = Database::new(&config).await?;

    // The service still starts when the store is down; requests report it.
    if db.check_health().await {
        info!("Record store is reachable");
    } else {
        warn!("Record store is not reachable yet, requests will fail until it is");
    }

    let state = Arc::new(AppState { db, config: config.clone() });
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    info!("Server starting on {}", config.server_address);

    axum::serve(listener, app).await?;

    Ok(())
}
