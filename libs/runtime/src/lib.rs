//! Process-level plumbing shared by the server binary: layered configuration,
//! logging setup and home directory resolution.

pub mod config;
pub mod logging;
pub mod paths;

pub use config::{AppConfig, CliArgs, LoggingConfig, Section, ServerConfig};
pub use logging::init_logging_from_config;
pub use paths::home_dir::resolve_home_dir;
