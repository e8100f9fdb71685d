//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::ExtensionService;
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::EXTENSION;
use crate::infrastructure::traits::{Clock, EnvSource, ProcessEnv, RuntimeInfo, SystemClock};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Environment abstraction
    pub env: Arc<dyn EnvSource>,

    /// Clock abstraction
    pub clock: Arc<dyn Clock>,

    pub runtime: RuntimeInfo,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(ProcessEnv),
            Arc::new(SystemClock),
            RuntimeInfo::detect(),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        env: Arc<dyn EnvSource>,
        clock: Arc<dyn Clock>,
        runtime: RuntimeInfo,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            env,
            clock,
            runtime,
        }
    }

    /// Service answering the extension's commands.
    pub fn extension_service(&self) -> ExtensionService {
        ExtensionService::new(
            EXTENSION,
            Arc::clone(&self.env),
            Arc::clone(&self.clock),
            self.runtime.clone(),
        )
    }

    /// Check the built-in extension declaration against the host's manifest rules.
    pub fn validate(&self) -> ApplicationResult<()> {
        EXTENSION.validate()?;
        Ok(())
    }
}
