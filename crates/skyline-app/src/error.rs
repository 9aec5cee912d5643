//! Errors surfaced by the binary.

use skyline_config::ConfigError;
use skyline_math::SkylineError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("computation error: {0}")]
    Core(#[from] SkylineError),

    #[error("failed to write summary: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),
}
