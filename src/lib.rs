//! `test-rust`: a demonstration PM extension
//!
//! The PM host runs `pm test-rust <command>` by spawning this binary with
//! `PM_*` variables describing the current project. The extension prints
//! status lines for `deploy`, `check` and `config`, and usage text for
//! anything else.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod util;
