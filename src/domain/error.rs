//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the extension's own declarations.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid extension manifest: {message}")]
    InvalidManifest { message: String },
}
