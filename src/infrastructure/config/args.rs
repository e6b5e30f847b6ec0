use super::app_config::{LogLevel, ThemeMode};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "onrails",
    version,
    about = "Train status, weather and emergency assistance in your terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the dashboard backend.
    #[arg(short, long, env = "ONRAILS_BACKEND_URL", value_name = "URL")]
    pub backend_url: Option<String>,

    /// Per-request timeout in seconds (0 disables).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Date header format (chrono format string).
    #[arg(long)]
    pub date_format: Option<String>,

    /// Prefill for the emergency contact input.
    #[arg(long, env = "ONRAILS_EMERGENCY_CONTACT")]
    pub emergency_contact: Option<String>,

    /// Device latitude in decimal degrees.
    #[arg(long, env = "ONRAILS_LAT", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Device longitude in decimal degrees.
    #[arg(long, env = "ONRAILS_LON", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Initial theme mode.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeMode>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Notification duration in seconds.
    #[arg(long)]
    pub notification_duration: Option<u64>,
}
