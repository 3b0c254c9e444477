//! Registry CLI commands: build the artifacts and inspect what was published.

use crate::config::Config;
use crate::registry::item::{RegistryIndex, RegistryItem};
use crate::registry::lookup::{INDEX_NAME, RegistryLookup};
use crate::registry::pipeline::build_registry;

/// Build every component artifact plus the aggregate index.
pub fn cmd_build(config: &Config) -> anyhow::Result<()> {
    let summary = build_registry(&config.registry)?;

    println!(
        "🎉 Registry build complete! Generated {} components ({} skipped) -> {}",
        summary.generated.len(),
        summary.skipped.len(),
        config.registry.output_dir.display()
    );

    Ok(())
}

/// Print the components listed in the published `registry.json`.
pub async fn cmd_list(config: &Config) -> anyhow::Result<()> {
    let lookup = RegistryLookup::new(config.server.artifact_dirs.clone());
    let index: RegistryIndex = serde_json::from_value(lookup.lookup(INDEX_NAME).await?)?;

    if index.items.is_empty() {
        println!("No components found in the registry index.");
        return Ok(());
    }

    println!("{:<20} {:<20} DESCRIPTION", "NAME", "TITLE");
    println!("{}", "-".repeat(72));
    for item in &index.items {
        println!("{:<20} {:<20} {}", item.name, item.title, item.description);
    }

    println!("\n{} component(s) in {}.", index.items.len(), index.name);
    println!("Use `nativeui-registry info <name>` for details.");

    Ok(())
}

/// Print one published component.
pub async fn cmd_info(config: &Config, name: &str) -> anyhow::Result<()> {
    let lookup = RegistryLookup::new(config.server.artifact_dirs.clone());
    let value = lookup.lookup(name).await?;
    let item: RegistryItem = serde_json::from_value(value)
        .map_err(|e| anyhow::anyhow!("'{}' is not a component artifact: {}", name, e))?;

    println!("{} ({})", item.title, item.kind);
    println!("  {}", item.description);

    if !item.dependencies.is_empty() {
        println!("  Dependencies: {}", item.dependencies.join(", "));
    }
    if !item.registry_dependencies.is_empty() {
        println!(
            "  Registry dependencies: {}",
            item.registry_dependencies.join(", ")
        );
    }

    println!("\nFiles:");
    for file in &item.files {
        match &file.content {
            Some(content) => println!("  {} ({} bytes)", file.path, content.len()),
            None => println!("  {}", file.path),
        }
    }

    Ok(())
}
