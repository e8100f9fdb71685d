//! Command dispatch

use std::io::Write;

use tracing::{debug, instrument};

use crate::application::services::ExtensionService;
use crate::application::Report;
use crate::cli::args::CommandKind;
use crate::cli::error::CliResult;
use crate::cli::output;

/// Run exactly one behavior and return what it produced.
#[instrument(skip(service))]
pub fn build_report(kind: CommandKind, service: &ExtensionService) -> Report {
    match kind {
        CommandKind::Deploy => service.deploy(),
        CommandKind::Check => service.check(),
        CommandKind::Config => service.config(),
        CommandKind::Help => service.help(),
    }
}

/// Run `kind` and write its output to `out`.
pub fn execute_command(
    kind: CommandKind,
    service: &ExtensionService,
    out: &mut impl Write,
) -> CliResult<()> {
    let report = build_report(kind, service);
    debug!("{:?}: {} lines", kind, report.lines().len());
    output::write_report(out, &report)
}
