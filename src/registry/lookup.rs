//! Artifact lookup: resolve a requested name against an ordered list of
//! artifact directories.
//!
//! The first candidate directory holding a readable, parseable
//! `{name}.json` wins. Missing files, read failures and malformed JSON all
//! fall through to the next candidate and, once every candidate is
//! exhausted, surface as [`LookupError`]. Nothing is cached: each call reads
//! the filesystem as it is at that moment.

use std::path::{Path, PathBuf};

use crate::error::LookupError;
use crate::registry::writer::INDEX_FILE_NAME;

/// Name that resolves to the aggregate index instead of a component.
pub const INDEX_NAME: &str = "registry";

/// What a request resolves to after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTarget {
    /// The aggregate `registry.json`.
    Index,
    /// A single component artifact.
    Component(String),
}

impl LookupTarget {
    /// Normalize a raw request name: strip one `.json` suffix and detect the
    /// index name.
    pub fn parse(raw_name: &str) -> Self {
        let name = normalize_name(raw_name);
        if name == INDEX_NAME {
            Self::Index
        } else {
            Self::Component(name.to_string())
        }
    }

    fn file_name(&self) -> String {
        match self {
            Self::Index => INDEX_FILE_NAME.to_string(),
            Self::Component(name) => format!("{name}.json"),
        }
    }

    fn not_found(&self) -> LookupError {
        match self {
            Self::Index => LookupError::IndexNotFound,
            Self::Component(name) => LookupError::NotFound { name: name.clone() },
        }
    }
}

/// Strip a single trailing `.json`.
pub fn normalize_name(raw_name: &str) -> &str {
    raw_name.strip_suffix(".json").unwrap_or(raw_name)
}

/// Names that would escape a candidate directory never touch the filesystem.
fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// Stateless lookup over an ordered list of artifact directories.
#[derive(Debug, Clone)]
pub struct RegistryLookup {
    candidates: Vec<PathBuf>,
}

impl RegistryLookup {
    /// `candidates` are tried in order; earlier directories win.
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Resolve `raw_name` (optionally suffixed with `.json`) to the stored
    /// artifact JSON.
    pub async fn lookup(&self, raw_name: &str) -> Result<serde_json::Value, LookupError> {
        let target = LookupTarget::parse(raw_name);

        if let LookupTarget::Component(name) = &target
            && !is_safe_name(name)
        {
            tracing::debug!(name = %name, "Rejected unsafe lookup name");
            return Err(target.not_found());
        }

        let file_name = target.file_name();
        for dir in &self.candidates {
            if let Some(value) = read_candidate(&dir.join(&file_name)).await {
                return Ok(value);
            }
        }

        Err(target.not_found())
    }
}

async fn read_candidate(path: &Path) -> Option<serde_json::Value> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(path = %path.display(), "Lookup candidate unreadable: {}", e);
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Ignoring malformed registry artifact: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::registry::builder::build;
    use crate::registry::extract::extract;
    use crate::registry::item::{RegistryIndex, RegistryItem};
    use crate::registry::writer::{write, write_index};

    struct Fixture {
        _tmp: tempfile::TempDir,
        primary: PathBuf,
        legacy: PathBuf,
        lookup: RegistryLookup,
    }

    fn fixture() -> Fixture {
        let tmp = tempfile::tempdir().unwrap();
        let primary = tmp.path().join("public").join("r");
        let legacy = tmp.path().join("public").join("registry").join("ui");
        fs::create_dir_all(&primary).unwrap();
        fs::create_dir_all(&legacy).unwrap();
        let lookup = RegistryLookup::new(vec![primary.clone(), legacy.clone()]);
        Fixture {
            _tmp: tmp,
            primary,
            legacy,
            lookup,
        }
    }

    fn item(name: &str) -> RegistryItem {
        let source = format!("export const {name} = 1;\n");
        build(name, &source, &extract(name, &source))
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(LookupTarget::parse("registry"), LookupTarget::Index);
        assert_eq!(LookupTarget::parse("registry.json"), LookupTarget::Index);
        assert_eq!(
            LookupTarget::parse("button.json"),
            LookupTarget::Component("button".to_string())
        );
        assert_eq!(
            LookupTarget::parse("button.json.json"),
            LookupTarget::Component("button.json".to_string())
        );
    }

    #[tokio::test]
    async fn test_round_trip_through_primary() {
        let fx = fixture();
        let original = item("button");
        write(&fx.primary, &original).unwrap();

        let value = fx.lookup.lookup("button").await.unwrap();
        let parsed: RegistryItem = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, original);
    }

    #[tokio::test]
    async fn test_json_suffix_is_equivalent() {
        let fx = fixture();
        write(&fx.primary, &item("button")).unwrap();

        let bare = fx.lookup.lookup("button").await.unwrap();
        let suffixed = fx.lookup.lookup("button.json").await.unwrap();
        assert_eq!(bare, suffixed);
    }

    #[tokio::test]
    async fn test_legacy_fallback() {
        let fx = fixture();
        fs::write(fx.legacy.join("card.json"), r#"{"name":"card","legacy":true}"#).unwrap();

        let value = fx.lookup.lookup("card").await.unwrap();
        assert_eq!(value["legacy"], true);
    }

    #[tokio::test]
    async fn test_primary_wins_over_legacy() {
        let fx = fixture();
        write(&fx.primary, &item("card")).unwrap();
        fs::write(fx.legacy.join("card.json"), r#"{"name":"card","legacy":true}"#).unwrap();

        let value = fx.lookup.lookup("card").await.unwrap();
        assert!(value.get("legacy").is_none());
        assert_eq!(value["title"], "Card");
    }

    #[tokio::test]
    async fn test_malformed_primary_falls_through() {
        let fx = fixture();
        fs::write(fx.primary.join("tabs.json"), "{ not json").unwrap();
        fs::write(fx.legacy.join("tabs.json"), r#"{"name":"tabs"}"#).unwrap();

        let value = fx.lookup.lookup("tabs").await.unwrap();
        assert_eq!(value["name"], "tabs");
    }

    #[tokio::test]
    async fn test_malformed_everywhere_is_not_found() {
        let fx = fixture();
        fs::write(fx.primary.join("tabs.json"), "{ not json").unwrap();

        let err = fx.lookup.lookup("tabs").await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound { ref name } if name == "tabs"));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_absent_name_reports_name() {
        let fx = fixture();

        let err = fx.lookup.lookup("does-not-exist").await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        let body = err.to_body();
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("does-not-exist"), "got: {message}");
    }

    #[tokio::test]
    async fn test_registry_name_resolves_index() {
        let fx = fixture();
        write(&fx.primary, &item("badge")).unwrap();
        let index = RegistryIndex::new(vec![item("badge").to_index_entry()]);
        write_index(&fx.primary, &index).unwrap();

        let by_name = fx.lookup.lookup("registry").await.unwrap();
        let by_file = fx.lookup.lookup("registry.json").await.unwrap();
        assert_eq!(by_name, by_file);
        assert_eq!(by_name["items"][0]["name"], "badge");
    }

    #[tokio::test]
    async fn test_missing_index_is_not_found() {
        let fx = fixture();
        let err = fx.lookup.lookup("registry").await.unwrap_err();
        assert!(matches!(err, LookupError::IndexNotFound));
        assert!(err.to_string().contains("registry"));
    }

    #[tokio::test]
    async fn test_unsafe_names_rejected() {
        let fx = fixture();
        // A file one level above the primary directory must stay unreachable.
        fs::write(fx.primary.parent().unwrap().join("secret.json"), "{}").unwrap();

        for name in ["../secret", "..", "a/b", "a\\b", "", ".json"] {
            let err = fx.lookup.lookup(name).await.unwrap_err();
            assert!(matches!(err, LookupError::NotFound { .. }), "{name}: {err}");
        }
    }

    #[tokio::test]
    async fn test_inner_double_dot_is_allowed() {
        let fx = fixture();
        fs::write(fx.primary.join("a..b.json"), r#"{"name":"a..b"}"#).unwrap();

        assert_eq!(fx.lookup.lookup("a..b").await.unwrap()["name"], "a..b");
        assert_eq!(fx.lookup.lookup("a..b.json").await.unwrap()["name"], "a..b");
    }

    #[tokio::test]
    async fn test_more_than_two_candidates() {
        let fx = fixture();
        let third = fx.legacy.parent().unwrap().join("older");
        fs::create_dir_all(&third).unwrap();
        fs::write(third.join("select.json"), r#"{"name":"select"}"#).unwrap();

        let lookup = RegistryLookup::new(vec![fx.primary.clone(), fx.legacy.clone(), third]);
        assert_eq!(lookup.lookup("select").await.unwrap()["name"], "select");
        assert!(fx.lookup.lookup("select").await.is_err());
    }

    #[tokio::test]
    async fn test_lookup_sees_current_directory_contents() {
        let fx = fixture();
        assert!(fx.lookup.lookup("badge").await.is_err());

        write(&fx.primary, &item("badge")).unwrap();
        assert!(fx.lookup.lookup("badge").await.is_ok());
    }
}
