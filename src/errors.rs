use thiserror::Error;

/// Errors that can occur while loading provider configuration.
///
/// Resolution and classification themselves are infallible: an empty
/// provider table is a normal state reported as `None`.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Configuration is structurally valid but unusable.
    #[error("config error: {message}")]
    Config { message: String },
}

/// Convenience alias for `Result<T, ResolveError>`.
pub type Result<T> = std::result::Result<T, ResolveError>;
