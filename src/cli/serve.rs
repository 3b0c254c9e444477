use std::sync::Arc;

use crate::config::Config;
use crate::registry::lookup::RegistryLookup;
use crate::server::RegistryServer;

/// Serve the registry until Ctrl-C.
pub async fn cmd_serve(config: &Config) -> anyhow::Result<()> {
    let addr = config.server.bind_addr();
    let server = RegistryServer::bind(&addr)?;
    let lookup = Arc::new(RegistryLookup::new(config.server.artifact_dirs.clone()));

    for dir in lookup.candidates() {
        tracing::info!(dir = %dir.display(), "Artifact directory");
    }
    println!(
        "Serving registry on http://{}:{}/registry/<name>",
        config.server.host,
        server.port()
    );

    let shutdown = server.shutdown_handle();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown requested");
                shutdown.shutdown();
            }
            Err(e) => tracing::warn!("Unable to listen for Ctrl-C: {}", e),
        }
    });

    server.run(lookup).await?;
    Ok(())
}
