/// Phonebook Server - name and number directory
use clap::{Parser, Subcommand};
use phonebook_server::{config::ServerConfig, create_router, state::AppState};
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "phonebook-server")]
#[command(about = "Phonebook service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Listen port, overriding the configuration
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },
    /// Print the effective configuration
    CheckConfig {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phonebook_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, port } => {
            serve(config, port).await?;
        }
        Commands::CheckConfig { config } => {
            let config = ServerConfig::load_from(config.as_deref())?;
            config.validate()?;
            tracing::info!("Configuration OK: {:?}", config);
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = ServerConfig::load_from(config_path.as_deref())?;
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    tracing::info!("Starting Phonebook Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    if !config.frontend.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {:?} not found, serving the landing page only",
            config.frontend.static_dir
        );
    }

    let app_state = AppState::in_memory(config.frontend.static_dir.clone());
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
