//! Component registry: source scanning, artifact generation and lookup.
//!
//! Each component lives in its own directory and is published as one JSON
//! artifact, plus an aggregate index listing all of them:
//!
//! ```text
//! registry/                     public/r/
//! ├── badge/badge.tsx   ──>     ├── badge.json
//! ├── card/card.tsx     ──>     ├── card.json
//! └── ...                       └── registry.json   <- aggregate index
//! ```

pub mod builder;
pub mod extract;
pub mod item;
pub mod lookup;
pub mod pipeline;
pub mod writer;

pub use builder::build;
pub use extract::{ExtractedMetadata, extract};
pub use item::{RegistryFile, RegistryIndex, RegistryIndexEntry, RegistryItem};
pub use lookup::{LookupTarget, RegistryLookup};
pub use pipeline::{BuildSummary, build_registry};
pub use writer::{write, write_index};
