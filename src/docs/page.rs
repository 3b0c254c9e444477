//! Renders the TSX docs page for one component.

use std::sync::LazyLock;

use regex::Regex;

use crate::docs::examples::Example;
use crate::registry::builder::capitalize_first;

/// `${...}` template expressions, which would be evaluated inside the page's
/// template literal.
static TEMPLATE_EXPR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]*)\}").expect("valid template regex"));

/// Inputs for one page.
#[derive(Debug, Clone)]
pub struct PageInput<'a> {
    pub component_name: &'a str,
    pub description: &'a str,
    pub examples: &'a [Example],
    pub component_code: &'a str,
    pub variants: &'a [String],
    pub package_name: &'a str,
}

/// Make `code` safe to embed in a JS template literal: template expressions
/// become `""`, then backslashes and backticks are escaped.
pub fn escape_template_literal(code: &str) -> String {
    TEMPLATE_EXPR
        .replace_all(code, "\"\"")
        .replace('\\', "\\\\")
        .replace('`', "\\`")
}

/// Preview snippet rendering the component once per variant.
pub fn preview_code(component_name: &str, variants: &[String], package_name: &str) -> String {
    let comp = capitalize_first(component_name);
    let mut lines = vec![format!("<{comp}>Default {comp}</{comp}>")];
    lines.extend(
        variants
            .iter()
            .filter(|v| v.as_str() != "default")
            .map(|v| format!("<{comp} variant=\"{v}\">{}</{comp}>", capitalize_first(v))),
    );

    format!(
        "import {{ {comp} }} from \"{package_name}\";\n\nexport default function {comp}Demo() {{\n  return (\n    <div className=\"flex flex-col gap-4\">\n      {}\n    </div>\n  );\n}}",
        lines.join("\n      ")
    )
}

/// Render the full page module.
pub fn render_page(input: &PageInput<'_>) -> Result<String, serde_json::Error> {
    let comp = capitalize_first(input.component_name);
    let examples = serde_json::to_string_pretty(input.examples)?;
    let description = serde_json::to_string(input.description)?;
    let component_code = escape_template_literal(input.component_code);
    let preview = escape_template_literal(&preview_code(
        input.component_name,
        input.variants,
        input.package_name,
    ));

    Ok(format!(
        r#"import {{ ComponentPreview }} from "@/components/docs/component-preview";

export default function {comp}Page() {{
  return (
    <ComponentPreview
      name="{comp}"
      description={{{description}}}
      examples={{{examples}}}
      componentCode={{`{component_code}`}}
      previewCode={{`{preview}`}}
      registryName="{name}"
      packageName="{package}"
    />
  );
}}
"#,
        name = input.component_name,
        package = input.package_name,
    ))
}
