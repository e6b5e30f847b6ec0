use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use onrails::infrastructure::{AppConfig, BackendClient, CliArgs, ConfigFile, ConfiguredLocation};
use onrails::presentation::theme::resolve_appearance;
use onrails::presentation::widgets::date_text;
use onrails::presentation::{App, AppOptions};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let mut config = ConfigFile::resolve(args.config.clone())?.load()?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_app(config: AppConfig) -> Result<App> {
    info!(
        version = onrails::VERSION,
        backend = %config.backend_url,
        config = ?config.effective_config_path(),
        "Starting On Rails"
    );

    let backend = Arc::new(BackendClient::with_base_url(&config.backend_url)?);
    let location = Arc::new(ConfiguredLocation::new(
        config.location.latitude,
        config.location.longitude,
    ));

    let options = AppOptions {
        appearance: resolve_appearance(config.theme.mode),
        request_timeout: config.request_timeout(),
        notification_duration: Duration::from_secs(config.ui.notification_duration),
        date_text: date_text(Local::now().date_naive(), &config.date_format),
        sos_categories: config.sos_categories,
        emergency_contact: config.emergency_contact,
        accent_color: config.theme.accent_color,
    };

    Ok(App::new(backend, location, options))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let config = load_config()?;
    init_logging(&config)?;

    let app = create_app(config)?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
