//! Configuration for the skyline tool.
//!
//! Settings persist to disk as RON and can be overridden from the command
//! line via clap. Missing fields fall back to defaults and unknown fields are
//! ignored, so older and newer files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, OutputConfig, PanoramaConfig, SummitConfig, TerrainConfig, default_config_dir,
};
pub use error::ConfigError;
