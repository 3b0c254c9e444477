//! Registry item schema: the JSON documents the external CLI consumes.

use serde::{Deserialize, Serialize};

/// Schema URL stamped on every per-component artifact.
pub const REGISTRY_ITEM_SCHEMA: &str = "https://ui.shadcn.com/schema/registry-item.json";

/// Schema URL stamped on the aggregate `registry.json` index.
pub const REGISTRY_INDEX_SCHEMA: &str = "https://ui.shadcn.com/schema/registry.json";

/// Type tag for component items and their files.
pub const COMPONENT_TYPE: &str = "registry:component";

/// Registry name written into the aggregate index.
pub const REGISTRY_NAME: &str = "nativeui";

/// Homepage written into the aggregate index.
pub const REGISTRY_HOMEPAGE: &str = "https://nativeui.io";

/// One file embedded in a registry item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryFile {
    pub path: String,
    /// Full source text. Omitted from index entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A per-component artifact, persisted as `{name}.json`.
///
/// Field order matches the serialized layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
    pub files: Vec<RegistryFile>,
}

impl RegistryItem {
    /// Source text of the first file, if the item embeds one.
    pub fn main_content(&self) -> Option<&str> {
        self.files.first().and_then(|f| f.content.as_deref())
    }

    /// The same item with file contents stripped, for index listings.
    pub fn to_index_entry(&self) -> RegistryIndexEntry {
        RegistryIndexEntry {
            name: self.name.clone(),
            kind: self.kind.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            dependencies: self.dependencies.clone(),
            registry_dependencies: self.registry_dependencies.clone(),
            files: self
                .files
                .iter()
                .map(|f| RegistryFile {
                    path: f.path.clone(),
                    content: None,
                    kind: f.kind.clone(),
                })
                .collect(),
        }
    }
}

/// One entry of the aggregate index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryIndexEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
    #[serde(default)]
    pub files: Vec<RegistryFile>,
}

/// The aggregate `registry.json` listing every generated component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryIndex {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    pub homepage: String,
    pub items: Vec<RegistryIndexEntry>,
}

impl RegistryIndex {
    pub fn new(items: Vec<RegistryIndexEntry>) -> Self {
        Self {
            schema: REGISTRY_INDEX_SCHEMA.to_string(),
            name: REGISTRY_NAME.to_string(),
            homepage: REGISTRY_HOMEPAGE.to_string(),
            items,
        }
    }
}
