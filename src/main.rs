//! Guides Searcher: HTTP middleware in front of the Guides search API
//!
//! This is the main entry point for the application.

use anyhow::Result;
use guides_searcher::{
    config::Settings,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration; missing upstream variables abort startup here
    let settings = load_settings()?;

    // Initialize logging
    let level = if settings.server.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .init();

    info!("Starting guides-searcher v{}", guides_searcher::VERSION);
    info!("Proxying searches to {}", settings.upstream.base_url);

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized");

    // Create application state and router
    let state = AppState::new(settings.clone(), client);
    let app = create_router(state);

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or defaults, merge the environment, validate
fn load_settings() -> Result<Settings> {
    let mut settings = read_settings_file()?.unwrap_or_default();
    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

/// Find and read a settings file, if one exists
fn read_settings_file() -> Result<Option<Settings>> {
    if let Ok(path) = std::env::var("GUIDES_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Ok(Some(Settings::from_file(&path)?));
        }
    }

    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/guides-searcher/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("guides-searcher/settings.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            return Ok(Some(Settings::from_file(path)?));
        }
    }

    Ok(None)
}
