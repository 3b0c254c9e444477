use std::path::PathBuf;

use crate::error::ConfigError;

/// Crate-wide mutex for tests that mutate process environment variables.
///
/// The process environment is global state shared across all threads, so
/// every `unsafe { set_var / remove_var }` call in tests must hold this lock.
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Read an environment variable, treating empty values as unset.
pub(crate) fn optional_env(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(val) if val.is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::ParseError(format!("failed to read {key}: {e}"))),
    }
}

pub(crate) fn parse_optional_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    optional_env(key)?
        .map(|s| {
            s.parse().map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{e}"),
            })
        })
        .transpose()
        .map(|opt| opt.unwrap_or(default))
}

pub(crate) fn path_env(key: &str, default: &str) -> Result<PathBuf, ConfigError> {
    Ok(optional_env(key)?
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default)))
}

/// Read an OS path list (`:`-separated on Unix, `;` on Windows).
pub(crate) fn path_list_env(key: &str) -> Result<Option<Vec<PathBuf>>, ConfigError> {
    let Some(raw) = optional_env(key)? else {
        return Ok(None);
    };

    let paths: Vec<PathBuf> = std::env::split_paths(&raw)
        .filter(|p| !p.as_os_str().is_empty())
        .collect();

    if paths.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "must list at least one directory".to_string(),
        });
    }

    Ok(Some(paths))
}
