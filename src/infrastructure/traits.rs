//! I/O boundary traits for testability
//!
//! These traits abstract the process environment and the system clock,
//! allowing services to be tested with deterministic implementations.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Local};

/// Read-only key-value view of the environment.
pub trait EnvSource: Send + Sync {
    /// Value of `key`, or None if unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;

    /// All variables, sorted by name.
    fn vars(&self) -> BTreeMap<String, String>;
}

/// Wall clock abstraction.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Environment of the running process.
#[derive(Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn vars(&self) -> BTreeMap<String, String> {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

// ============================================================
// IN-MEMORY IMPLEMENTATIONS
// ============================================================

/// Fixed set of variables, independent of the process environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: BTreeMap<String, String>,
}

impl StaticEnv {
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn vars(&self) -> BTreeMap<String, String> {
        self.vars.clone()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

// ============================================================
// RUNTIME INFO
// ============================================================

/// Toolchain and host details reported by `deploy`, `check` and `config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    /// `rustc --version` captured at build time
    pub full_version: String,
    /// Path of the running binary
    pub executable: PathBuf,
    /// Target operating system, e.g. `linux`
    pub platform: String,
}

impl RuntimeInfo {
    pub fn detect() -> Self {
        let executable = std::env::current_exe()
            .ok()
            .or_else(|| std::env::args_os().next().map(PathBuf::from))
            .unwrap_or_default();
        Self {
            full_version: option_env!("RUSTC_VERSION").unwrap_or("unknown").to_string(),
            executable,
            platform: std::env::consts::OS.to_string(),
        }
    }

    /// Bare version number, e.g. `1.80.0` out of `rustc 1.80.0 (051478957 2024-07-21)`.
    pub fn short_version(&self) -> &str {
        self.full_version
            .split_whitespace()
            .find(|tok| tok.starts_with(|c: char| c.is_ascii_digit()))
            .unwrap_or(self.full_version.as_str())
    }
}
