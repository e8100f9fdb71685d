//! Test setup shared by unit and integration tests

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Directives used when `RUST_LOG` is not set. The `config` crate logs every
/// lookup at debug, which drowns out the extension's own lines.
const DEFAULT_TEST_FILTER: &str = "debug,config=warn";

/// Switch colors off and route tracing to the test writer, once per process.
///
/// Plain output lets tests compare rendered lines byte for byte.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        colored::control::set_override(false);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));
        let layer = fmt::layer()
            .with_target(true)
            .with_test_writer()
            .with_filter(filter);

        // another harness may already own the global subscriber
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
        tracing::debug!("test setup complete");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_repeated_calls_when_initializing_then_colors_stay_off() {
        init_test_setup();
        init_test_setup();
        assert_eq!(colored::Colorize::red("x").to_string(), "x");
    }
}
