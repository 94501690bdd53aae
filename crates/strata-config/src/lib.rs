//! Configuration for Strata heightfield generation.
//!
//! Settings persist to disk as RON files, every section falls back to its
//! defaults when missing, and CLI flags override whatever the file says.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, OutputConfig, TerrainConfig, default_config_dir,
};
pub use error::ConfigError;
