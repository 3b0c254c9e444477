use std::path::PathBuf;

use crate::config::RegistryConfig;
use crate::config::helpers::{optional_env, parse_optional_env, path_env, path_list_env};
use crate::error::ConfigError;

/// Lookup server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Env: `NATIVEUI_HOST` (default: `127.0.0.1`).
    pub host: String,
    /// Env: `NATIVEUI_PORT` (default: 3000).
    pub port: u16,
    /// Ordered lookup candidates; earlier directories win.
    ///
    /// Env: `NATIVEUI_ARTIFACT_DIRS` replaces the whole list. Otherwise the
    /// list is `{public}/r` followed by `{NATIVEUI_LEGACY_REGISTRY_DIR}/ui`
    /// (legacy default: `public/registry`).
    pub artifact_dirs: Vec<PathBuf>,
}

impl ServerConfig {
    pub(crate) fn resolve(registry: &RegistryConfig) -> Result<Self, ConfigError> {
        let artifact_dirs = match path_list_env("NATIVEUI_ARTIFACT_DIRS")? {
            Some(dirs) => dirs,
            None => {
                let legacy_root = path_env("NATIVEUI_LEGACY_REGISTRY_DIR", "public/registry")?;
                vec![registry.output_dir.clone(), legacy_root.join("ui")]
            }
        };

        Ok(Self {
            host: optional_env("NATIVEUI_HOST")?.unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_optional_env("NATIVEUI_PORT", 3000)?,
            artifact_dirs,
        })
    }

    /// `host:port` string the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
