//! Persists registry items as pretty-printed JSON files.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::RegistryError;
use crate::registry::item::{RegistryIndex, RegistryItem};

/// File name of the aggregate index inside the artifact directory.
pub const INDEX_FILE_NAME: &str = "registry.json";

/// Write `item` to `{output_dir}/{item.name}.json`, creating the directory
/// and replacing any previous file. Returns the written path.
pub fn write(output_dir: &Path, item: &RegistryItem) -> Result<PathBuf, RegistryError> {
    let path = output_dir.join(format!("{}.json", item.name));
    write_json(output_dir, &path, &item.name, item)?;
    Ok(path)
}

/// Write the aggregate index to `{output_dir}/registry.json`.
pub fn write_index(output_dir: &Path, index: &RegistryIndex) -> Result<PathBuf, RegistryError> {
    let path = output_dir.join(INDEX_FILE_NAME);
    write_json(output_dir, &path, &index.name, index)?;
    Ok(path)
}

fn write_json<T: Serialize>(
    output_dir: &Path,
    path: &Path,
    name: &str,
    value: &T,
) -> Result<(), RegistryError> {
    std::fs::create_dir_all(output_dir).map_err(|e| RegistryError::ArtifactWrite {
        path: output_dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let json = serde_json::to_string_pretty(value).map_err(|e| RegistryError::Serialize {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    std::fs::write(path, json).map_err(|e| RegistryError::ArtifactWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
