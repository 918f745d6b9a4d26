//! User service CLI server
//!
//! Headless user API suitable for deployment as a systemd service, Docker
//! container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/user-service/config.toml)
//! user-service
//!
//! # Custom config path
//! user-service --config /etc/user-service/config.toml
//!
//! # Override port
//! user-service --port 8080
//!
//! # Validate config without starting
//! user-service --check
//!
//! # Write the effective config (defaults + overrides) and exit
//! user-service --port 8080 --init-config
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use user_api::config::{AppConfig, CONFIG_PATH_ENV};
use user_api::server::{init_tracing, ServerHandle, ServerOptions};

/// User API server with postal-code lookup.
#[derive(Parser, Debug)]
#[command(
    name = "user-service",
    version,
    about = "REST API for user records with Brazilian addresses",
    long_about = "User service: CRUD over user records stored in SQLite, \
                  plus a pass-through postal-code (CEP) lookup against ViaCEP.\n\n\
                  Default config: ~/.config/user-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long, conflicts_with = "check")]
    init_config: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(user_api::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(mut cfg) => {
            // The level override has to land before the subscriber is installed
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            // Fallback tracing init
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new(
                    cli.log_level.as_deref().unwrap_or("info"),
                ))
                .init();
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if cli.check || cli.init_config {
                return Err(e.into());
            }
            error!("Using default configuration.");
            AppConfig::default()
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    // ── Config file generation ─────────────────────────────────
    if cli.init_config {
        config.save(&config_path)?;
        println!("✅ Configuration written to {}", config_path.display());
        return Ok(());
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Database    : {}", config.database.connection_url());
        println!("   ViaCEP URL  : {}", config.postal.base_url);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    // Wait for shutdown signal, then clean up
    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
