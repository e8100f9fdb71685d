//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod context;
pub mod error;
pub mod extension;
pub mod project;
pub mod snapshot;

pub use context::PmContext;
pub use error::DomainError;
pub use extension::{CommandSpec, EnvVarSpec, ExtensionInfo, EXTENSION};
pub use project::ProjectRef;
pub use snapshot::ConfigSnapshot;
