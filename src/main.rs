mod config;
mod consts;
mod error_classifier;
mod events;
mod gateway;
mod logging;
mod pretty;
mod refresh;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::gateway::{AnalyticsApi, AnalyticsClient};
use crate::logging::{LogSink, init_console_logger};
use crate::pretty::{print_cmd_error, print_cmd_info};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the live analytics dashboard
    Start {
        /// Base URL of the analytics API, e.g. http://localhost:8080/api/analytics
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Milliseconds between refresh cycles
        #[arg(long, value_name = "MS")]
        refresh_interval_ms: Option<u64>,

        /// Number of pages shown in the top pages chart
        #[arg(long, value_name = "N")]
        top_pages: Option<u32>,

        /// Number of users shown in the recent sessions table
        #[arg(long, value_name = "N")]
        recent_sessions: Option<u32>,

        /// Run without the terminal UI, printing refresh activity to stdout
        #[arg(long = "headless", action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Enable background colors
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Print the active sessions of one user
    Sessions {
        /// User whose sessions to fetch
        #[arg(long, value_name = "USER_ID")]
        user_id: String,

        /// Base URL of the analytics API
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Check that the analytics backend is up
    Health {
        /// Base URL of the analytics API
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Write a config file with default settings
    InitConfig {
        /// Base URL of the analytics API to store
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            api_url,
            refresh_interval_ms,
            top_pages,
            recent_sessions,
            headless,
            with_background,
        } => {
            let mut config = load_config(&config_path)?;
            if let Some(url) = api_url {
                config.api_url = url;
            }
            if let Some(ms) = refresh_interval_ms {
                config.refresh_interval_ms = ms;
            }
            if let Some(limit) = top_pages {
                config.top_pages_limit = limit;
            }
            if let Some(limit) = recent_sessions {
                config.recent_sessions_limit = limit;
            }
            validate(&config)?;
            start(config, headless, with_background).await
        }
        Command::Sessions { user_id, api_url } => {
            let client = one_shot_client(&config_path, api_url)?;
            let sessions = client.fetch_active_sessions_for_user(&user_id).await?;
            println!("{}", serde_json::to_string_pretty(&sessions)?);
            Ok(())
        }
        Command::Health { api_url } => {
            let client = one_shot_client(&config_path, api_url)?;
            match client.health().await {
                Ok(message) => {
                    print_cmd_info!("Backend is up", "{} -> {}", client.base_url(), message);
                    Ok(())
                }
                Err(e) => {
                    print_cmd_error!("Backend is unreachable", "{}: {}", client.base_url(), e);
                    Err(e.into())
                }
            }
        }
        Command::InitConfig { api_url } => {
            let mut config = Config::default();
            if let Some(url) = api_url {
                config.api_url = url;
            }
            validate(&config)?;
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Wrote default configuration to {}", config_path.display());
            Ok(())
        }
    }
}

fn load_config(config_path: &Path) -> Result<Config, Box<dyn Error>> {
    Config::load_or_default(config_path).map_err(|e| {
        print_cmd_error!("Failed to load config", "{}: {}", config_path.display(), e);
        e.into()
    })
}

fn validate(config: &Config) -> Result<(), Box<dyn Error>> {
    config.validate().map_err(|e| {
        print_cmd_error!("Invalid configuration", "{}", e);
        e.into()
    })
}

/// Builds a client for a single request, logging to the console.
fn one_shot_client(
    config_path: &Path,
    api_url: Option<String>,
) -> Result<AnalyticsClient, Box<dyn Error>> {
    let mut config = load_config(config_path)?;
    if let Some(url) = api_url {
        config.api_url = url;
    }
    validate(&config)?;
    init_console_logger()?;
    Ok(AnalyticsClient::new(&config.api_url)?)
}

/// Starts the dashboard.
///
/// # Arguments
/// * `config` - Validated configuration, CLI overrides applied.
/// * `headless` - Print refresh activity instead of drawing the TUI.
/// * `with_background` - Whether to enable background colors in the TUI.
async fn start(config: Config, headless: bool, with_background: bool) -> Result<(), Box<dyn Error>> {
    if headless {
        let session = setup_session(&config, LogSink::Console)?;
        run_headless_mode(session).await
    } else {
        // Log records would corrupt the alternate screen; route them to the activity feed.
        let session = setup_session(&config, LogSink::Activity)?;
        run_tui_mode(session, with_background).await
    }
}
