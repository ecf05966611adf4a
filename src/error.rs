use thiserror::Error;

/// Errors that can occur when loading bot settings from external input.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown timezone '{0}'; expected one of the supported IANA zone names")]
    UnknownTimezone(String),
}

/// Errors that can occur when exporting a generated workflow document.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize workflow document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Could not write workflow file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
