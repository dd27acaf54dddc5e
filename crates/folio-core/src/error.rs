use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Content file not found: {path}")]
    ContentNotFound { path: PathBuf },

    #[error("Failed to parse content {source_name}: {message}")]
    ContentParse {
        source_name: String,
        message: String,
    },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid config value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("Invalid pattern '{pattern}' in category '{category}': {message}")]
    InvalidPattern {
        category: String,
        pattern: String,
        message: String,
    },

    #[error("Category set '{set}' has no default bucket named '{name}'")]
    MissingDefaultBucket { set: String, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GUI error: {0}")]
    Gui(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ContentNotFound { .. } => 2,
            Self::ContentParse { .. } => 3,
            Self::ConfigParse { .. } | Self::ConfigKeyNotFound { .. } => 4,
            Self::InvalidConfigValue { .. } => 5,
            Self::InvalidPattern { .. } | Self::MissingDefaultBucket { .. } => 6,
            _ => 1,
        }
    }
}
