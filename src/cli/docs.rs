use crate::config::Config;
use crate::docs::generate_docs;

/// Regenerate the docs page of every published component.
pub fn cmd_docs(config: &Config) -> anyhow::Result<()> {
    let summary = generate_docs(&config.docs)?;

    for path in &summary.skipped {
        println!("⚠️  Skipped {}", path.display());
    }
    println!(
        "🎉 Documentation generation complete! Wrote {} pages to {}",
        summary.pages.len(),
        config.docs.pages_dir.display()
    );

    Ok(())
}
