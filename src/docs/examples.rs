//! Usage examples derived from a component's variant and size names.

use serde::{Deserialize, Serialize};

use crate::docs::DEFAULT_PACKAGE_NAME;
use crate::registry::builder::capitalize_first;

/// Label rendered for the `icon` size instead of a capitalized name.
pub const ICON_PLACEHOLDER: &str = "👋";

/// One tab of example code on a component page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub title: String,
    pub value: String,
    pub content: String,
    pub language: String,
}

impl Example {
    fn tsx(title: &str, value: &str, content: String) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            content,
            language: "tsx".to_string(),
        }
    }
}

/// Examples for `component_name` importing from the default package.
pub fn synthesize(component_name: &str, variants: &[String], sizes: &[String]) -> Vec<Example> {
    synthesize_for_package(DEFAULT_PACKAGE_NAME, component_name, variants, sizes)
}

/// Always a `Default` example; `Variants` only with more than one variant;
/// `Sizes` only with more than one size.
pub fn synthesize_for_package(
    package_name: &str,
    component_name: &str,
    variants: &[String],
    sizes: &[String],
) -> Vec<Example> {
    let comp = capitalize_first(component_name);
    let import = format!("import {{ {comp} }} from \"{package_name}\";");

    let mut examples = vec![Example::tsx(
        "Default",
        "default",
        format!(
            "{import}\n\nexport default function {comp}Demo() {{\n  return (\n    <{comp}>\n      Click me\n    </{comp}>\n  );\n}}"
        ),
    )];

    if variants.len() > 1 {
        let lines = variants
            .iter()
            .map(|v| format!("<{comp} variant=\"{v}\">{}</{comp}>", capitalize_first(v)))
            .collect::<Vec<_>>()
            .join("\n      ");
        examples.push(Example::tsx(
            "Variants",
            "variants",
            format!(
                "{import}\n\nexport default function {comp}Variants() {{\n  return (\n    <div className=\"flex flex-col gap-4\">\n      {lines}\n    </div>\n  );\n}}"
            ),
        ));
    }

    if sizes.len() > 1 {
        let lines = sizes
            .iter()
            .map(|s| format!("<{comp} size=\"{s}\">{}</{comp}>", size_label(s)))
            .collect::<Vec<_>>()
            .join("\n      ");
        examples.push(Example::tsx(
            "Sizes",
            "sizes",
            format!(
                "{import}\n\nexport default function {comp}Sizes() {{\n  return (\n    <div className=\"flex items-center gap-4\">\n      {lines}\n    </div>\n  );\n}}"
            ),
        ));
    }

    examples
}

fn size_label(size: &str) -> String {
    if size == "icon" {
        ICON_PLACEHOLDER.to_string()
    } else {
        capitalize_first(size)
    }
}
