use std::path::PathBuf;

use crate::config::helpers::path_env;
use crate::error::ConfigError;

/// Registry build configuration.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Component source root. Env: `NATIVEUI_REGISTRY_DIR` (default: `registry`).
    pub source_dir: PathBuf,
    /// Public site directory. Env: `NATIVEUI_PUBLIC_DIR` (default: `public`).
    pub public_dir: PathBuf,
    /// Where artifacts are written: always `{public_dir}/r`.
    pub output_dir: PathBuf,
}

impl RegistryConfig {
    /// Build a config rooted at explicit directories.
    pub fn new(source_dir: PathBuf, public_dir: PathBuf) -> Self {
        let output_dir = public_dir.join("r");
        Self {
            source_dir,
            public_dir,
            output_dir,
        }
    }

    pub(crate) fn resolve() -> Result<Self, ConfigError> {
        Ok(Self::new(
            path_env("NATIVEUI_REGISTRY_DIR", "registry")?,
            path_env("NATIVEUI_PUBLIC_DIR", "public")?,
        ))
    }
}
