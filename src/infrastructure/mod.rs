//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Dashboard backend HTTP client.
pub mod backend;
/// Device location adapters.
pub mod location;

pub use backend::{BackendClient, DEFAULT_BACKEND_URL};
pub use config::{AppConfig, CliArgs, ConfigFile, LogLevel, ThemeMode};
pub use location::ConfiguredLocation;
