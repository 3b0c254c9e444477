//! Assembles registry items from source text and extracted metadata.

use crate::registry::extract::ExtractedMetadata;
use crate::registry::item::{COMPONENT_TYPE, REGISTRY_ITEM_SCHEMA, RegistryFile, RegistryItem};

/// Build the registry item for one component. Pure: identical inputs always
/// produce identical items.
pub fn build(component_name: &str, raw_text: &str, metadata: &ExtractedMetadata) -> RegistryItem {
    RegistryItem {
        schema: REGISTRY_ITEM_SCHEMA.to_string(),
        name: component_name.to_string(),
        kind: COMPONENT_TYPE.to_string(),
        title: capitalize_first(component_name),
        description: metadata.description.clone(),
        dependencies: metadata.dependency_names.clone(),
        registry_dependencies: Vec::new(),
        files: vec![RegistryFile {
            path: source_path(component_name),
            content: Some(raw_text.to_string()),
            kind: COMPONENT_TYPE.to_string(),
        }],
    }
}

/// Conventional source path recorded in the item. Never read back.
pub fn source_path(component_name: &str) -> String {
    format!("registry/{component_name}/{component_name}.tsx")
}

/// Uppercase the first character and leave the rest untouched
/// (`"radio-group"` -> `"Radio-group"`).
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
