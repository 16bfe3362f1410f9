//! cinemaOcinema terminal client - Entry Point

use cinemaocinema::api::ApiClient;
use cinemaocinema::view::{ColorConfig, RunOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Terminal client for the cinemaOcinema catalog of books, movies and images
#[derive(Parser, Debug)]
#[command(name = "cinemaocinema")]
#[command(version)]
#[command(about = "Browse the cinemaOcinema books, movies and images catalog from the terminal")]
pub struct Args {
    /// Backend API root (default: http://localhost:8080/api)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Username to prefill on the login screen
    #[arg(short, long)]
    pub username: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = cinemaocinema::config::load_config_with_precedence(args.config.clone())?;
        let merged = cinemaocinema::config::merge_config(config_file);
        let with_env = cinemaocinema::config::apply_env_overrides(merged);
        cinemaocinema::config::apply_cli_overrides(with_env, args.base_url, args.username)
    };

    cinemaocinema::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    // Validate before touching the terminal so a bad URL prints normally.
    let api = ApiClient::new(&config.base_url)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let _runtime_guard = runtime.enter();

    let options = RunOptions {
        username: config.username,
        color: ColorConfig::from_env_and_args(args.no_color),
    };
    cinemaocinema::view::run(api, options)?;

    Ok(())
}
