//! Portico CLI
//!
//! Local entry point for the digital-library portal tooling.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use portico::{
    error::Result,
    models::Config,
    pipeline,
    services::{SessionService, search},
    storage::LocalStorage,
    utils::{self, http},
};

/// portico - Digital Library Portal Tool
#[derive(Parser, Debug)]
#[command(
    name = "portico",
    version,
    about = "Digital library portal statistics and navigation"
)]

struct Cli {
    /// Path to storage directory containing config files
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and display collection statistics
    Stats {
        /// Skip the loading animation
        #[arg(long)]
        plain: bool,
    },

    /// Build the search navigation target for a query
    Search {
        /// Query string (trimmed before dispatch)
        query: String,
    },

    /// List the landing categories and their targets
    Browse,

    /// Log out of the portal and clear the local session
    Logout,

    /// Validate configuration files
    Validate,

    /// Show current configuration and session info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
    portico::utils::log::init(level);
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let storage = LocalStorage::new(&cli.storage_dir);
    let config = Config::load_or_default(storage.config_path());

    log::debug!("Loaded configuration from {}", cli.storage_dir.display());

    let config = Arc::new(config);

    match cli.command {
        Command::Stats { plain } => {
            pipeline::run_stats(Arc::clone(&config), !plain).await?;
        }

        Command::Search { query } => {
            let Some(target) = search::search_target(&config.portal, &query) else {
                log::warn!("Empty search query; nothing to dispatch.");
                return Ok(());
            };
            log::info!("Search target: {target}");
            if let Some(url) = utils::resolve(&config.portal.base_url, &target) {
                log::info!("Full URL: {url}");
            }
        }

        Command::Browse => {
            for link in search::CATEGORIES {
                match link.path {
                    Some(path) => log::info!(
                        "{}: {}",
                        link.label,
                        utils::resolve(&config.portal.base_url, path)
                            .unwrap_or_else(|| path.to_string())
                    ),
                    None => log::info!("{}: (coming soon)", link.label),
                }
            }
        }

        Command::Logout => {
            let client = http::create_async_client(&config.client)?;
            let service = SessionService::new(Arc::clone(&config), client, storage);

            match service.logout().await {
                Ok(outcome) => {
                    if outcome.session_cleared {
                        log::info!("Local session cleared.");
                    } else {
                        log::info!("No local session was stored.");
                    }
                    log::info!("Logged out. Continue at {}", outcome.redirect);
                }
                Err(e) => {
                    log::error!("Failed to logout. Please try again: {}", e);
                    return Err(e);
                }
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK (portal endpoints, client, and animation)");

            log::info!("All validations passed!");
        }

        Command::Info => {
            log::info!("Storage directory: {}", cli.storage_dir.display());
            log::info!("Portal base URL: {}", config.portal.base_url);
            log::info!(
                "Endpoints: {} | {}",
                config.portal.aggregate_path,
                config.portal.catalog_path
            );
            log::info!(
                "Animation: every {} ms ({})",
                config.animation.tick_ms,
                if config.animation.enabled {
                    "enabled"
                } else {
                    "disabled"
                }
            );

            match storage.load_session().await {
                Ok(Some(session)) => {
                    log::info!(
                        "Session: {} (since {})",
                        session.user.as_deref().unwrap_or("unknown user"),
                        session.created_at.format("%Y-%m-%d %H:%M:%S")
                    );
                }
                Ok(None) => log::info!("Session: none"),
                Err(e) => log::warn!("Session state unreadable: {}", e),
            }
        }
    }

    Ok(())
}
