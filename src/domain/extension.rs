//! Static extension declaration
//!
//! Everything the extension says about itself lives here: metadata shown in
//! help, the commands it answers to, the `PM_*` variables it documents, and the
//! crates it is built on. Crate availability is declared, not detected.

use std::collections::HashSet;

use crate::domain::DomainError;

/// A command the extension answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub help: &'static str,
}

/// A host-provided environment variable documented in help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvVarSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Extension metadata, known at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// Implementation language as reported by `check`
    pub kind: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub homepage: &'static str,
    pub commands: &'static [CommandSpec],
    pub env_vars: &'static [EnvVarSpec],
    /// Core crates compiled into the binary
    pub capabilities: &'static [&'static str],
}

pub const EXTENSION: ExtensionInfo = ExtensionInfo {
    name: "test-rust",
    version: "1.0.0",
    kind: "Rust",
    description: "Test Rust extension for local installation testing",
    author: "testuser",
    homepage: "https://github.com/testuser/test-rust",
    commands: &[
        CommandSpec {
            name: "deploy",
            help: "Deploy using Rust extension",
        },
        CommandSpec {
            name: "check",
            help: "Check Rust extension health",
        },
        CommandSpec {
            name: "config",
            help: "Configure Rust extension",
        },
    ],
    env_vars: &[
        EnvVarSpec {
            name: crate::domain::context::PM_CURRENT_PROJECT,
            description: "Current project context",
        },
        EnvVarSpec {
            name: crate::domain::context::PM_CONFIG_PATH,
            description: "PM configuration path",
        },
        EnvVarSpec {
            name: crate::domain::context::PM_VERSION,
            description: "PM version",
        },
    ],
    capabilities: &["serde_json", "chrono", "colored"],
};

impl ExtensionInfo {
    /// Check the declaration against the host's manifest rules.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(manifest_err("extension name cannot be empty"));
        }
        if self.version.is_empty() {
            return Err(manifest_err("extension version cannot be empty"));
        }
        if self.description.is_empty() {
            return Err(manifest_err("extension description cannot be empty"));
        }
        if self.commands.is_empty() {
            return Err(manifest_err("extension must define at least one command"));
        }

        let mut seen = HashSet::new();
        for cmd in self.commands {
            if cmd.name.is_empty() {
                return Err(manifest_err("command name cannot be empty"));
            }
            if !seen.insert(cmd.name) {
                return Err(manifest_err(format!("duplicate command name: {}", cmd.name)));
            }
        }
        Ok(())
    }
}

fn manifest_err(message: impl Into<String>) -> DomainError {
    DomainError::InvalidManifest {
        message: message.into(),
    }
}
