//! Best-effort metadata extraction from component source text.
//!
//! Everything here is plain text matching; nothing parses the source. Inputs
//! that don't match simply produce the documented defaults, so a malformed
//! component never fails the build.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Package identifiers reported as dependencies when they appear anywhere in
/// the source. Order here is the order they are emitted in.
pub const KNOWN_DEPENDENCIES: &[&str] = &["class-variance-authority", "@radix-ui/react-slot"];

/// `/**` followed by a ` * text` line; captures the text.
static DOC_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*\*\s*\n\s*\*\s*(.*?)\s*\n").expect("valid doc regex"));

static VARIANT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)variant:\s*\{([^}]*)\}").expect("valid variant regex"));

static SIZE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)size:\s*\{([^}]*)\}").expect("valid size regex"));

/// A key followed by a colon and an opening quote.
static QUOTED_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+(\w+):\s*["|']"#).expect("valid key regex"));

const DEFAULT_NAME: &str = "default";

/// Facts derived from one component's source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMetadata {
    pub description: String,
    /// In order of first appearance; `["default"]` when none were found.
    pub variant_names: Vec<String>,
    /// Deduplicated; `["default"]` when none were found.
    pub size_names: Vec<String>,
    /// Subset of [`KNOWN_DEPENDENCIES`], in that order.
    pub dependency_names: Vec<String>,
}

/// Extract metadata from `raw_text`. Never fails.
pub fn extract(component_name: &str, raw_text: &str) -> ExtractedMetadata {
    ExtractedMetadata {
        description: extract_description(raw_text)
            .unwrap_or_else(|| default_description(component_name)),
        variant_names: extract_variants(raw_text),
        size_names: extract_sizes(raw_text),
        dependency_names: extract_dependencies(raw_text),
    }
}

/// Description used when the source has no leading doc comment.
pub fn default_description(component_name: &str) -> String {
    format!("A {component_name} component for React Native applications.")
}

fn extract_description(raw_text: &str) -> Option<String> {
    DOC_COMMENT
        .captures(raw_text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Variant keys of the first `variant: { ... }` map.
pub fn extract_variants(raw_text: &str) -> Vec<String> {
    let names = block_keys(&VARIANT_BLOCK, raw_text);
    or_default(names)
}

/// Size keys of the first `size: { ... }` map, deduplicated.
pub fn extract_sizes(raw_text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let names = block_keys(&SIZE_BLOCK, raw_text)
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect();
    or_default(names)
}

pub fn extract_dependencies(raw_text: &str) -> Vec<String> {
    KNOWN_DEPENDENCIES
        .iter()
        .filter(|dep| raw_text.contains(*dep))
        .map(|dep| dep.to_string())
        .collect()
}

fn block_keys(block: &Regex, raw_text: &str) -> Vec<String> {
    let Some(body) = block.captures(raw_text).and_then(|c| c.get(1)) else {
        return Vec::new();
    };

    QUOTED_KEY
        .captures_iter(body.as_str())
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn or_default(names: Vec<String>) -> Vec<String> {
    if names.is_empty() {
        vec![DEFAULT_NAME.to_string()]
    } else {
        names
    }
}
