//! Configuration snapshot built by the `config` command

use std::collections::BTreeMap;

use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;

use crate::domain::ExtensionInfo;
use crate::infrastructure::traits::EnvSource;

/// Point-in-time view of the extension's configuration. Never persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfigSnapshot {
    pub extension: String,
    pub version: String,
    pub rust_version: String,
    /// RFC 3339 timestamp with local offset
    pub timestamp: String,
    /// Full copy of the process environment
    pub environment: BTreeMap<String, String>,
}

impl ConfigSnapshot {
    pub fn capture(
        info: &ExtensionInfo,
        rust_version: &str,
        env: &dyn EnvSource,
        now: DateTime<Local>,
    ) -> Self {
        Self {
            extension: info.name.to_string(),
            version: info.version.to_string(),
            rust_version: rust_version.to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Micros, false),
            environment: env.vars(),
        }
    }
}
