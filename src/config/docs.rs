use std::path::PathBuf;

use crate::config::RegistryConfig;
use crate::config::helpers::{optional_env, path_env};
use crate::error::ConfigError;

/// Docs page generation configuration.
#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Artifacts to read; the build output directory.
    pub artifact_dir: PathBuf,
    /// Env: `NATIVEUI_DOCS_DIR` (default: `app/(site)/docs/components`).
    pub pages_dir: PathBuf,
    /// Package the generated examples import from.
    /// Env: `NATIVEUI_PACKAGE_NAME` (default: `@nativeui/ui`).
    pub package_name: String,
}

impl DocsConfig {
    pub(crate) fn resolve(registry: &RegistryConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            artifact_dir: registry.output_dir.clone(),
            pages_dir: path_env("NATIVEUI_DOCS_DIR", "app/(site)/docs/components")?,
            package_name: optional_env("NATIVEUI_PACKAGE_NAME")?
                .unwrap_or_else(|| crate::docs::DEFAULT_PACKAGE_NAME.to_string()),
        })
    }
}
