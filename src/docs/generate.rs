//! Regenerates one docs page per published registry artifact.

use std::path::{Path, PathBuf};

use crate::config::DocsConfig;
use crate::docs::examples::synthesize_for_package;
use crate::docs::page::{PageInput, render_page};
use crate::error::DocsError;
use crate::registry::extract::{extract_sizes, extract_variants};
use crate::registry::item::RegistryItem;
use crate::registry::writer::INDEX_FILE_NAME;

/// Outcome of one docs run.
#[derive(Debug, Default, Clone)]
pub struct DocsSummary {
    /// Pages written, as `(component, path)`.
    pub pages: Vec<(String, PathBuf)>,
    /// Artifacts that could not be turned into a page.
    pub skipped: Vec<PathBuf>,
}

/// Write `{pages_dir}/{name}/page.tsx` for every artifact in
/// `config.artifact_dir`.
pub fn generate_docs(config: &DocsConfig) -> Result<DocsSummary, DocsError> {
    let mut summary = DocsSummary::default();

    for path in artifact_files(&config.artifact_dir)? {
        let Some(item) = load_item(&path) else {
            summary.skipped.push(path);
            continue;
        };
        let Some(code) = item.main_content() else {
            tracing::warn!(component = %item.name, "Artifact has no embedded source, skipping");
            summary.skipped.push(path);
            continue;
        };

        let variants = extract_variants(code);
        let sizes = extract_sizes(code);
        let examples = synthesize_for_package(&config.package_name, &item.name, &variants, &sizes);

        let page = render_page(&PageInput {
            component_name: &item.name,
            description: &item.description,
            examples: &examples,
            component_code: code,
            variants: &variants,
            package_name: &config.package_name,
        })
        .map_err(|e| DocsError::Serialize {
            name: item.name.clone(),
            reason: e.to_string(),
        })?;

        let page_dir = config.pages_dir.join(&item.name);
        let page_path = page_dir.join("page.tsx");
        std::fs::create_dir_all(&page_dir)
            .and_then(|_| std::fs::write(&page_path, page))
            .map_err(|e| DocsError::PageWrite {
                path: page_path.clone(),
                reason: e.to_string(),
            })?;

        tracing::info!(
            component = %item.name,
            examples = examples.len(),
            "Generated documentation page for {}",
            item.name
        );
        summary.pages.push((item.name, page_path));
    }

    tracing::info!(
        pages = summary.pages.len(),
        skipped = summary.skipped.len(),
        "Documentation generation complete!"
    );

    Ok(summary)
}

/// Component artifacts in `dir`, sorted, excluding the aggregate index.
fn artifact_files(dir: &Path) -> Result<Vec<PathBuf>, DocsError> {
    if !dir.is_dir() {
        return Err(DocsError::ArtifactDirNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        if path.file_name().and_then(|n| n.to_str()) == Some(INDEX_FILE_NAME) {
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

fn load_item(path: &Path) -> Option<RegistryItem> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(path = %path.display(), "Failed to read artifact: {}", e);
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(item) => Some(item),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Skipping malformed artifact: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::config::RegistryConfig;
    use crate::registry::pipeline::build_registry;

    const BUTTON: &str = r#"import { cva } from "class-variance-authority";

const buttonVariants = cva("flex-row", {
  variants: {
    variant: {
      default: "bg-primary",
      outline: "border",
    },
    size: {
      default: "h-12",
      icon: "h-12 w-12",
    },
  },
});
"#;

    fn setup(root: &Path) -> DocsConfig {
        let source = root.join("registry");
        fs::create_dir_all(source.join("button")).unwrap();
        fs::write(source.join("button").join("button.tsx"), BUTTON).unwrap();
        fs::create_dir_all(source.join("label")).unwrap();
        fs::write(source.join("label").join("label.tsx"), "export {};\n").unwrap();

        let registry = RegistryConfig::new(source, root.join("public"));
        build_registry(&registry).unwrap();

        DocsConfig {
            artifact_dir: registry.output_dir,
            pages_dir: root.join("docs"),
            package_name: "@nativeui/ui".to_string(),
        }
    }

    #[test]
    fn test_generates_one_page_per_component() {
        let tmp = tempfile::tempdir().unwrap();
        let config = setup(tmp.path());

        let summary = generate_docs(&config).unwrap();
        let names: Vec<_> = summary.pages.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["button", "label"]);
        assert!(summary.skipped.is_empty());
        assert!(!config.pages_dir.join("registry").exists());

        let page = fs::read_to_string(config.pages_dir.join("button").join("page.tsx")).unwrap();
        assert!(page.contains("export default function ButtonPage()"));
        assert!(page.contains("\"title\": \"Variants\""));
        assert!(page.contains("👋"));
    }

    #[test]
    fn test_default_only_component_gets_single_example() {
        let tmp = tempfile::tempdir().unwrap();
        let config = setup(tmp.path());
        generate_docs(&config).unwrap();

        let page = fs::read_to_string(config.pages_dir.join("label").join("page.tsx")).unwrap();
        assert!(page.contains("\"title\": \"Default\""));
        assert!(!page.contains("\"title\": \"Variants\""));
        assert!(!page.contains("\"title\": \"Sizes\""));
    }

    #[test]
    fn test_malformed_artifact_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let config = setup(tmp.path());
        fs::write(config.artifact_dir.join("broken.json"), "{").unwrap();

        let summary = generate_docs(&config).unwrap();
        assert_eq!(summary.pages.len(), 2);
        assert_eq!(summary.skipped, vec![config.artifact_dir.join("broken.json")]);
    }

    #[test]
    fn test_missing_artifact_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = DocsConfig {
            artifact_dir: tmp.path().join("missing"),
            pages_dir: tmp.path().join("docs"),
            package_name: "@nativeui/ui".to_string(),
        };
        assert!(matches!(
            generate_docs(&config),
            Err(DocsError::ArtifactDirNotFound(_))
        ));
    }
}
