//! Error types shared across the crate.
//!
//! Each stage owns its own error enum. The build and docs stages are
//! fail-fast, so their errors carry the path that broke; lookup errors are
//! user-facing and only ever mention the requested name.

use std::path::PathBuf;

/// Configuration errors raised while resolving environment variables.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from the registry build pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Registry source directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Failed to read component source {path}: {reason}")]
    SourceRead { path: PathBuf, reason: String },

    #[error("Failed to write registry artifact {path}: {reason}")]
    ArtifactWrite { path: PathBuf, reason: String },

    #[error("Failed to serialize registry item '{name}': {reason}")]
    Serialize { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned by the lookup service.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Component {name} not found")]
    NotFound { name: String },

    #[error("Registry file registry.json not found")]
    IndexNotFound,
}

impl LookupError {
    /// HTTP status the lookup endpoint answers with for this error.
    pub fn status_code(&self) -> u16 {
        404
    }

    /// JSON body returned to HTTP clients: `{"error": "<message>"}`.
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.to_string() })
    }
}

/// Errors from docs page generation.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    #[error("Artifact directory not found: {0}")]
    ArtifactDirNotFound(PathBuf),

    #[error("Failed to write docs page {path}: {reason}")]
    PageWrite { path: PathBuf, reason: String },

    #[error("Failed to serialize examples for '{name}': {reason}")]
    Serialize { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the HTTP server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("Server task failed: {0}")]
    Task(String),
}
