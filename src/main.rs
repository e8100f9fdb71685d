use std::io;
use std::process::ExitCode;

use colored::control;
use pm_ext_test_rust::cli::commands::execute_command;
use pm_ext_test_rust::cli::Cli;
use pm_ext_test_rust::config::{ColorChoice, Settings, ENV_PREFIX};
use pm_ext_test_rust::infrastructure::di::ServiceContainer;
use pm_ext_test_rust::infrastructure::traits::ProcessEnv;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

// Always exits 0: bad settings, unknown commands and a closed stdout all
// degrade to alternate output or a log line.
fn main() -> ExitCode {
    let (settings, settings_errors) = Settings::load(&ProcessEnv);
    let container = ServiceContainer::new(settings);

    setup_logging(
        container
            .settings
            .level_filter()
            .unwrap_or(LevelFilter::WARN),
    );
    for e in settings_errors {
        tracing::warn!("using default for {}_* setting: {}", ENV_PREFIX, e);
    }
    apply_color(container.settings.color);

    if let Err(e) = container.validate() {
        tracing::warn!("{}", e);
    }

    let cli = Cli::parse_lenient(std::env::args_os());
    let kind = cli.command_kind();
    tracing::debug!(?kind, "dispatching");

    let service = container.extension_service();
    let mut stdout = io::stdout().lock();
    if let Err(e) = execute_command(kind, &service, &mut stdout) {
        if e.is_broken_pipe() {
            tracing::debug!("{}", e);
        } else {
            tracing::warn!("{}", e);
        }
    }

    ExitCode::SUCCESS
}

fn apply_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => control::set_override(true),
        ColorChoice::Never => control::set_override(false),
        ColorChoice::Auto => {}
    }
}

fn setup_logging(filter: LevelFilter) {
    tracing::debug!("INIT: Attempting logger init from main.rs");

    // Create a noisy module filter
    let noisy_modules = ["config"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Formatted output goes to stderr; stdout carries command output only
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter).with_filter(module_filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
