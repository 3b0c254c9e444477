//! Documentation generation from published registry artifacts.
//!
//! Reads `public/r/*.json`, re-scans each embedded source for variant and
//! size names, and writes a `page.tsx` per component with usage examples.

pub mod examples;
pub mod generate;
pub mod page;

/// Package the generated examples import from.
pub const DEFAULT_PACKAGE_NAME: &str = "@nativeui/ui";

pub use examples::{Example, synthesize, synthesize_for_package};
pub use generate::{DocsSummary, generate_docs};
pub use page::{PageInput, render_page};
