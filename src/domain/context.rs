//! PM host context
//!
//! The PM host launches an extension with a set of `PM_*` variables. They are
//! read fresh from an [`EnvSource`] on every call.

use crate::infrastructure::traits::EnvSource;

pub const PM_CURRENT_PROJECT: &str = "PM_CURRENT_PROJECT";
pub const PM_CONFIG_PATH: &str = "PM_CONFIG_PATH";
pub const PM_VERSION: &str = "PM_VERSION";
pub const PM_EXTENSION_DIR: &str = "PM_EXTENSION_DIR";
pub const PM_EXTENSION_NAME: &str = "PM_EXTENSION_NAME";
pub const PM_COMMAND_NAME: &str = "PM_COMMAND_NAME";

/// Snapshot of the host-provided variables for one invocation.
///
/// `None` means the variable is unset or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PmContext {
    /// Current project, possibly a JSON object with `name` and `path`
    pub current_project: Option<String>,
    pub config_path: Option<String>,
    /// Host version. Not displayed by any command.
    pub pm_version: Option<String>,
    pub extension_dir: Option<String>,
    pub extension_name: Option<String>,
    pub command_name: Option<String>,
}

impl PmContext {
    pub fn from_env(env: &dyn EnvSource) -> Self {
        let read = |key: &str| env.var(key).filter(|v| !v.is_empty());
        Self {
            current_project: read(PM_CURRENT_PROJECT),
            config_path: read(PM_CONFIG_PATH),
            pm_version: read(PM_VERSION),
            extension_dir: read(PM_EXTENSION_DIR),
            extension_name: read(PM_EXTENSION_NAME),
            command_name: read(PM_COMMAND_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::traits::StaticEnv;

    #[test]
    fn given_no_variables_when_reading_then_all_absent() {
        let ctx = PmContext::from_env(&StaticEnv::default());
        assert_eq!(ctx, PmContext::default());
    }

    #[test]
    fn given_empty_project_when_reading_then_treated_as_unset() {
        let env = StaticEnv::from_pairs([(PM_CURRENT_PROJECT, ""), (PM_CONFIG_PATH, "/etc/pm")]);

        let ctx = PmContext::from_env(&env);

        assert_eq!(ctx.current_project, None);
        assert_eq!(ctx.config_path.as_deref(), Some("/etc/pm"));
    }

    #[test]
    fn given_host_launch_variables_when_reading_then_all_captured() {
        let env = StaticEnv::from_pairs([
            (PM_CURRENT_PROJECT, "demo"),
            (PM_VERSION, "0.1.0"),
            (PM_EXTENSION_DIR, "/home/u/.config/pm/extensions/test-rust"),
            (PM_EXTENSION_NAME, "test-rust"),
            (PM_COMMAND_NAME, "check"),
        ]);

        let ctx = PmContext::from_env(&env);

        assert_eq!(ctx.current_project.as_deref(), Some("demo"));
        assert_eq!(ctx.pm_version.as_deref(), Some("0.1.0"));
        assert_eq!(ctx.extension_name.as_deref(), Some("test-rust"));
        assert_eq!(ctx.command_name.as_deref(), Some("check"));
        assert!(ctx.extension_dir.is_some());
    }
}
