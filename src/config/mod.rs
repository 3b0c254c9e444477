//! Configuration resolved from environment variables.
//!
//! Every setting has a default matching the site layout, so running from the
//! repository root needs no configuration at all:
//!
//! ```text
//! registry/<name>/<name>.tsx      <- component sources  (NATIVEUI_REGISTRY_DIR)
//! public/r/<name>.json            <- generated artifacts (NATIVEUI_PUBLIC_DIR)
//! public/registry/ui/<name>.json  <- legacy artifacts    (NATIVEUI_LEGACY_REGISTRY_DIR)
//! app/(site)/docs/components/     <- generated pages     (NATIVEUI_DOCS_DIR)
//! ```

mod docs;
pub(crate) mod helpers;
mod registry;
mod server;

pub use docs::DocsConfig;
pub use registry::RegistryConfig;
pub use server::ServerConfig;

use crate::error::ConfigError;

/// Maximum bytes a single log event may occupy on the terminal.
const DEFAULT_LOG_MAX_EVENT_BYTES: usize = 500;

/// Top-level configuration for every subcommand.
#[derive(Debug, Clone)]
pub struct Config {
    pub registry: RegistryConfig,
    pub docs: DocsConfig,
    pub server: ServerConfig,
    /// Env: `NATIVEUI_LOG_MAX_EVENT_BYTES` (default: 500).
    pub log_max_event_bytes: usize,
}

impl Config {
    /// Resolve the full configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let registry = RegistryConfig::resolve()?;
        let docs = DocsConfig::resolve(&registry)?;
        let server = ServerConfig::resolve(&registry)?;
        let log_max_event_bytes =
            helpers::parse_optional_env("NATIVEUI_LOG_MAX_EVENT_BYTES", DEFAULT_LOG_MAX_EVENT_BYTES)?;

        Ok(Self {
            registry,
            docs,
            server,
            log_max_event_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::helpers::ENV_MUTEX;

    const VARS: &[&str] = &[
        "NATIVEUI_REGISTRY_DIR",
        "NATIVEUI_PUBLIC_DIR",
        "NATIVEUI_LEGACY_REGISTRY_DIR",
        "NATIVEUI_ARTIFACT_DIRS",
        "NATIVEUI_DOCS_DIR",
        "NATIVEUI_PACKAGE_NAME",
        "NATIVEUI_HOST",
        "NATIVEUI_PORT",
        "NATIVEUI_LOG_MAX_EVENT_BYTES",
    ];

    fn clear_env() {
        for var in VARS {
            // SAFETY: callers hold ENV_MUTEX.
            unsafe { std::env::remove_var(var) };
        }
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.registry.source_dir, PathBuf::from("registry"));
        assert_eq!(config.registry.output_dir, PathBuf::from("public").join("r"));
        assert_eq!(
            config.server.artifact_dirs,
            vec![
                PathBuf::from("public").join("r"),
                PathBuf::from("public/registry").join("ui"),
            ]
        );
        assert_eq!(config.docs.package_name, "@nativeui/ui");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.log_max_event_bytes, 500);
    }

    #[test]
    fn test_public_dir_moves_output_and_primary_candidate() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        // SAFETY: ENV_MUTEX held.
        unsafe { std::env::set_var("NATIVEUI_PUBLIC_DIR", "site/public") };

        let config = Config::from_env().unwrap();
        assert_eq!(config.registry.output_dir, PathBuf::from("site/public").join("r"));
        assert_eq!(config.server.artifact_dirs[0], config.registry.output_dir);
        assert_eq!(config.docs.artifact_dir, config.registry.output_dir);

        clear_env();
    }

    #[test]
    fn test_explicit_artifact_dirs_override_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let joined = std::env::join_paths(["a/r", "b/ui", "c/old"]).unwrap();
        // SAFETY: ENV_MUTEX held.
        unsafe { std::env::set_var("NATIVEUI_ARTIFACT_DIRS", &joined) };

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.server.artifact_dirs,
            vec![
                PathBuf::from("a/r"),
                PathBuf::from("b/ui"),
                PathBuf::from("c/old")
            ]
        );

        clear_env();
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        // SAFETY: ENV_MUTEX held.
        unsafe { std::env::set_var("NATIVEUI_PORT", "not-a-port") };

        let err = Config::from_env().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "NATIVEUI_PORT"),
            "unexpected error: {err}"
        );

        clear_env();
    }
}
