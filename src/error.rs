use crate::config::ConfigError;
use crate::engine::MatchElement;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No episode found in {path:?}")]
    MatchNotFound { path: PathBuf },

    #[error("{element} not found in {path:?}")]
    MatchElementNotFound { element: MatchElement, path: PathBuf },

    #[error("Seasons path not found for show '{show}'")]
    SeasonsPathNotFound { show: String },

    #[error("Episodes path not found for show '{show}' season {season}")]
    EpisodesPathNotFound { show: String, season: u32 },
}

pub type Result<T> = std::result::Result<T, AppError>;
