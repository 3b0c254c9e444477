//! Registry generation and lookup for the nativeui component collection.
//!
//! The build scans `registry/<name>/<name>.tsx`, extracts best-effort
//! metadata from each source by text matching, and publishes one JSON item
//! per component under `public/r/` together with an aggregate
//! `registry.json`. The lookup service resolves names against an ordered
//! list of artifact directories and is exposed over HTTP for the external
//! `add` tooling.

pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod registry;
pub mod server;
pub mod tracing_fmt;
