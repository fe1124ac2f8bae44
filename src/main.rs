use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reviewer_assignment::api;
use reviewer_assignment::config::{AppConfig, SeedFile};
use reviewer_assignment::ReviewService;

#[derive(Parser)]
#[command(name = "reviewer-assignment")]
#[command(about = "Pull request reviewer assignment service")]
#[command(version)]
struct Cli {
    /// Interface to bind (overrides SERVER_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides SERVER_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// YAML or TOML file with teams to register at start-up (overrides SEED_FILE)
    #[arg(long)]
    seed_file: Option<PathBuf>,

    /// Fixed seed for reviewer selection (overrides RNG_SEED)
    #[arg(long)]
    rng_seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reviewer_assignment=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting reviewer assignment service");

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(host) = cli.host {
        config.server_host = host;
    }
    if let Some(port) = cli.port {
        config.server_port = port;
    }
    if cli.seed_file.is_some() {
        config.seed_file = cli.seed_file;
    }
    if cli.rng_seed.is_some() {
        config.rng_seed = cli.rng_seed;
    }
    info!("Configuration loaded");

    let service = ReviewService::new(config.rng_seed);

    if let Some(path) = &config.seed_file {
        let seed = SeedFile::load_from_path(path)?;
        for team in &seed.teams {
            service
                .register_team(team)
                .await
                .with_context(|| format!("Failed to seed team {}", team.team_name))?;
        }
        info!("Seeded {} team(s) from {:?}", seed.teams.len(), path);
    }

    let addr = config.bind_address();
    let app = api::router(config, service);

    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
