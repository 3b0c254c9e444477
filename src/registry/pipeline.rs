//! The registry build: scan component sources, emit one artifact per
//! component plus the aggregate index.
//!
//! ```text
//! registry/badge/badge.tsx ──extract──> metadata ──build──> item ──write──> public/r/badge.json
//! registry/card/card.tsx   ──...                                   ──────> public/r/card.json
//!                                                                  ──────> public/r/registry.json
//! ```
//!
//! Components are processed one at a time in name order. A directory without
//! its main `{name}.tsx`, or named after the index, is skipped with a warning.
//! Sources are decoded lossily, so invalid UTF-8 becomes U+FFFD. Any read or
//! write failure aborts the run, leaving artifacts already written in place.

use std::path::{Path, PathBuf};

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::registry::item::RegistryIndex;
use crate::registry::lookup::INDEX_NAME;
use crate::registry::{builder, extract, writer};

/// Outcome of one build run.
#[derive(Debug, Default, Clone)]
pub struct BuildSummary {
    /// Names of components written, in processing order.
    pub generated: Vec<String>,
    /// Component directories without a main file, or using the reserved
    /// index name.
    pub skipped: Vec<String>,
    /// Path of the aggregate index.
    pub index_path: PathBuf,
}

/// Run the full build described by `config`.
pub fn build_registry(config: &RegistryConfig) -> Result<BuildSummary, RegistryError> {
    let component_dirs = list_component_dirs(&config.source_dir)?;
    let mut summary = BuildSummary::default();
    let mut entries = Vec::with_capacity(component_dirs.len());

    for name in component_dirs {
        if name == INDEX_NAME {
            tracing::warn!(component = %name, "Component name is reserved for the index, skipping");
            summary.skipped.push(name);
            continue;
        }

        let main_file = config.source_dir.join(&name).join(format!("{name}.tsx"));
        if !main_file.is_file() {
            tracing::warn!(component = %name, "Main component file not found, skipping");
            summary.skipped.push(name);
            continue;
        }

        let bytes = std::fs::read(&main_file).map_err(|e| RegistryError::SourceRead {
            path: main_file.clone(),
            reason: e.to_string(),
        })?;
        let raw_text = String::from_utf8_lossy(&bytes);

        let metadata = extract::extract(&name, &raw_text);
        let item = builder::build(&name, &raw_text, &metadata);
        let path = writer::write(&config.output_dir, &item)?;

        tracing::info!(
            component = %name,
            variants = metadata.variant_names.len(),
            sizes = metadata.size_names.len(),
            "Generated registry item for {} -> {}",
            name,
            path.display()
        );

        entries.push(item.to_index_entry());
        summary.generated.push(name);
    }

    summary.index_path = writer::write_index(&config.output_dir, &RegistryIndex::new(entries))?;

    tracing::info!(
        generated = summary.generated.len(),
        skipped = summary.skipped.len(),
        "Registry build complete! Generated {} components.",
        summary.generated.len()
    );

    Ok(summary)
}

/// Immediate subdirectories of `source_dir`, sorted by name.
fn list_component_dirs(source_dir: &Path) -> Result<Vec<String>, RegistryError> {
    if !source_dir.is_dir() {
        return Err(RegistryError::DirectoryNotFound(source_dir.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(source_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => {
                tracing::warn!("Skipping component directory with non UTF-8 name: {:?}", raw);
            }
        }
    }

    names.sort();
    Ok(names)
}
