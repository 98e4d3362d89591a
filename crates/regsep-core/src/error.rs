use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegsepError {
    #[error("Unknown category type: '{kind}' for category '{name}' (expected any/anyparts/anypartsof or all/allparts)")]
    UnknownCategoryType { name: String, kind: String },

    #[error("Unknown separation strategy: '{name}' (expected first or all)")]
    UnknownStrategy { name: String },

    #[error("Category name must not be empty")]
    EmptyCategoryName,

    #[error("Case '{case}' has already been separated into a category")]
    InvalidState { case: String },

    #[error("Nothing has been separated - run the separation (with at least one match) before saving")]
    NothingSeparated,

    #[error("File already exists: {path} - pass overwrite to replace it")]
    FileExists { path: PathBuf },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Home directory not found")]
    HomeNotFound,
}

pub type Result<T> = std::result::Result<T, RegsepError>;

impl RegsepError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownCategoryType { .. } | Self::UnknownStrategy { .. } => 2,
            Self::NothingSeparated => 3,
            Self::FileExists { .. } => 4,
            Self::EmptyCategoryName => 5,
            Self::ConfigParse { .. }
            | Self::ConfigKeyNotFound { .. }
            | Self::InvalidConfigValue { .. } => 6,
            Self::InvalidState { .. } => 70,
            _ => 1,
        }
    }
}
