//! Extension command service
//!
//! Implements the `deploy`, `check`, `config` and help behaviors. Every call
//! reads the host context afresh; nothing is cached between calls.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::Report;
use crate::domain::{ConfigSnapshot, ExtensionInfo, PmContext, ProjectRef};
use crate::infrastructure::traits::{Clock, EnvSource, RuntimeInfo};

/// Width of the command column in help output.
const COMMAND_COLUMN: usize = 10;
/// Width of the variable column in help output.
const ENV_VAR_COLUMN: usize = 18;

pub struct ExtensionService {
    info: ExtensionInfo,
    env: Arc<dyn EnvSource>,
    clock: Arc<dyn Clock>,
    runtime: RuntimeInfo,
}

impl ExtensionService {
    pub fn new(
        info: ExtensionInfo,
        env: Arc<dyn EnvSource>,
        clock: Arc<dyn Clock>,
        runtime: RuntimeInfo,
    ) -> Self {
        Self {
            info,
            env,
            clock,
            runtime,
        }
    }

    fn context(&self) -> PmContext {
        let ctx = PmContext::from_env(self.env.as_ref());
        debug!(
            pm_version = ?ctx.pm_version,
            extension_dir = ?ctx.extension_dir,
            extension_name = ?ctx.extension_name,
            command_name = ?ctx.command_name,
            "host context"
        );
        ctx
    }

    fn banner(&self, report: &mut Report, command: &str) {
        report.success(format!("{} Extension - {} Command", self.info.name, command));
    }

    #[instrument(skip(self))]
    pub fn deploy(&self) -> Report {
        let mut report = Report::new();
        self.banner(&mut report, "Deploy");
        report.info(format!(
            "Executing {} extension functionality...",
            self.info.kind
        ));

        let ctx = self.context();
        if let Some(project) = &ctx.current_project {
            report.info(format!("Current PM project: {project}"));
        }
        if let Some(config_path) = &ctx.config_path {
            report.info(format!("PM config: {config_path}"));
        }

        report.plain("🦀 Rust extension is running successfully!");
        report.plain("📦 Working with crates and Cargo workspaces");
        report.plain("🚀 Rich ecosystem and powerful libraries available");
        report.plain("⚡ Native performance with memory safety");

        report.info(format!("Checking {} environment...", self.info.kind));
        report.info(format!(
            "{} version: {}",
            self.info.kind,
            self.runtime.short_version()
        ));
        report.info(format!(
            "{} executable: {}",
            self.info.kind,
            self.runtime.executable.display()
        ));
        report
    }

    #[instrument(skip(self))]
    pub fn check(&self) -> Report {
        let mut report = Report::new();
        self.banner(&mut report, "Check");
        report.info(format!("Extension Type: {}", self.info.kind));
        report.info(format!("Version: {}", self.info.version));
        report.info("Status: Active and ready");

        report.info(format!("{}: {}", self.info.kind, self.runtime.full_version));
        report.info(format!("Platform: {}", self.runtime.platform));

        let ctx = self.context();
        match ctx.current_project.as_deref() {
            Some(raw) => {
                report.success("Running in PM project context");
                let project = ProjectRef::parse(raw);
                report.info(format!("Project: {}", project.display_name()));
                if let ProjectRef::Parsed { path, .. } = &project {
                    report.info(format!("Path: {path}"));
                }
            }
            None => report.warning("Not running in PM project context"),
        }

        report.success(format!(
            "Core {} crates available: {}",
            self.info.kind,
            self.info.capabilities.join(", ")
        ));
        report
    }

    #[instrument(skip(self))]
    pub fn config(&self) -> Report {
        let mut report = Report::new();
        self.banner(&mut report, "Config");
        report.info(format!("{} extension configuration", self.info.kind));

        let snapshot = ConfigSnapshot::capture(
            &self.info,
            self.runtime.short_version(),
            self.env.as_ref(),
            self.clock.now(),
        );
        debug!(
            environment = snapshot.environment.len(),
            "config snapshot captured"
        );
        if tracing::enabled!(tracing::Level::TRACE) {
            if let Ok(json) = serde_json::to_string(&snapshot) {
                tracing::trace!("snapshot: {json}");
            }
        }

        report.info("Current configuration:");
        report.plain(format!("  Extension: {}", snapshot.extension));
        report.plain(format!("  Version: {}", snapshot.version));
        report.plain(format!("  {}: {}", self.info.kind, snapshot.rust_version));
        report.plain(format!("  Timestamp: {}", snapshot.timestamp));

        let ctx = self.context();
        if let Some(project) = &ctx.current_project {
            report.plain(format!("  PM Project: {project}"));
        }
        if let Some(config_path) = &ctx.config_path {
            report.plain(format!("  PM Config: {config_path}"));
        }
        report
    }

    /// Static usage text. Does not consult the environment.
    pub fn help(&self) -> Report {
        let mut report = Report::new();
        report.plain(format!("Usage: pm {} [COMMAND]", self.info.name));
        report.plain("");
        report.plain("Available Commands:");
        for cmd in self.info.commands {
            report.plain(format!(
                "  {:<width$} {}",
                cmd.name,
                cmd.help,
                width = COMMAND_COLUMN
            ));
        }
        report.plain("");
        report.plain("PM Environment Variables:");
        for var in self.info.env_vars {
            report.plain(format!(
                "  {:<width$} - {}",
                var.name,
                var.description,
                width = ENV_VAR_COLUMN
            ));
        }
        report.plain("");
        report.plain(format!("Extension: {}", self.info.name));
        report.plain(format!("Description: {}", self.info.description));
        report.plain(format!("Author: {}", self.info.author));
        report.plain(format!("Homepage: {}", self.info.homepage));
        report
    }
}
