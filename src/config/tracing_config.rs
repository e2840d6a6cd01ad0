use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use crate::helper::logging::event_targets::*;

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct TracingConfig {
    /// Level used when `RUST_LOG` isn't set
    pub default_level: LogLevel,

    /// Controls how errors are logged in the app
    ///
    /// For a demo/example, see the [color_eyre::eyre::Report] documentation
    pub error_style: ErrorLogStyle,

    /// Vec of log filters, that control what log targets will be logged
    ///
    /// By creating a log filter, you can ignore events from certain log targets (such as [UI_PERFRAME_SPAMMY])
    pub target_filters: Vec<LogTargetFilter>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_level: LogLevel::Debug,
            error_style: ErrorLogStyle::WithBacktrace,
            target_filters: vec![
                // These fire every frame, so they drown out everything else
                LogTargetFilter::new(UI_PERFRAME_SPAMMY, false),
                LogTargetFilter::new(DATA_DUMP, false),
            ],
        }
    }
}

/// Enables or disables every event logged with a given target
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct LogTargetFilter {
    pub target: String,
    pub enabled: bool,
}

impl LogTargetFilter {
    pub fn new(target: &str, enabled: bool) -> LogTargetFilter {
        LogTargetFilter { target: target.to_string(), enabled }
    }
}

/// Serialisable mirror of [LevelFilter]
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Enum that controls how errors ([color_eyre::eyre::Report]) are formatted
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub enum ErrorLogStyle {
    Short,
    ShortWithCause,
    WithBacktrace,
    Debug,
}
