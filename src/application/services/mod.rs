//! Application services
//!
//! Services encapsulate use cases and depend on I/O boundary traits.

pub mod extension;

pub use extension::ExtensionService;
