//! Runtime settings: command-line flags first, then `STOCKROOM_*`
//! environment variables, then defaults.

use clap::ValueEnum;
use stockroom_observability::LogFormat;

use crate::cli::Cli;
use crate::report::ReportFormat;

pub const ENV_NO_SEED: &str = "STOCKROOM_NO_SEED";
pub const ENV_NO_CLEAR: &str = "STOCKROOM_NO_CLEAR";
pub const ENV_NO_PAUSE: &str = "STOCKROOM_NO_PAUSE";
pub const ENV_LOG_FORMAT: &str = "STOCKROOM_LOG_FORMAT";
pub const ENV_REPORT_FORMAT: &str = "STOCKROOM_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub seed_demo_data: bool,
    pub clear_screen: bool,
    pub pause_after_action: bool,
    pub log_format: LogFormat,
    pub report_format: ReportFormat,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            clear_screen: true,
            pause_after_action: true,
            log_format: LogFormat::Text,
            report_format: ReportFormat::Text,
        }
    }
}

impl ShellConfig {
    /// Non-interactive settings: no clearing, no pauses. Used for piped input and tests.
    pub fn batch() -> Self {
        Self {
            clear_screen: false,
            pause_after_action: false,
            ..Self::default()
        }
    }

    pub fn from_env_and_args(cli: &Cli) -> Self {
        Self::resolve(cli, |key| std::env::var(key).ok())
    }

    /// `lookup` stands in for the process environment.
    pub fn resolve(cli: &Cli, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |set: bool, key: &str| set || lookup(key).is_some_and(|v| is_truthy(&v));

        let log_format = cli.log_format.unwrap_or_else(|| {
            lookup(ENV_LOG_FORMAT)
                .and_then(|v| v.parse::<LogFormat>().ok())
                .unwrap_or_default()
        });
        let report_format = cli.format.unwrap_or_else(|| {
            lookup(ENV_REPORT_FORMAT)
                .and_then(|v| ReportFormat::from_str(v.trim(), true).ok())
                .unwrap_or_default()
        });

        Self {
            seed_demo_data: !flag(cli.no_seed, ENV_NO_SEED),
            clear_screen: !flag(cli.no_clear, ENV_NO_CLEAR),
            pause_after_action: !flag(cli.no_pause, ENV_NO_PAUSE),
            log_format,
            report_format,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
