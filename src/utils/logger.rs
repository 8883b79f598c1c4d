use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry};

use crate::utils::error::SdkError;

const CRATE_TARGET: &str = "arise_mobile_sdk";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

static FILTER_HANDLE: OnceLock<FilterHandle> = OnceLock::new();
static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

/// SDK 日誌等級 (由低到高越詳細)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    None = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Debug = 4,
    Verbose = 5,
}

impl LogLevel {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::None,
            1 => LogLevel::Error,
            2 => LogLevel::Warning,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => LogLevel::Verbose,
        }
    }

    fn tracing_level(&self) -> &'static str {
        match self {
            LogLevel::None => "off",
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Verbose => "trace",
        }
    }

    /// 只調整本 crate 的等級，其他 crate 維持 info
    pub fn directive(&self) -> String {
        format!("{}={},info", CRATE_TARGET, self.tracing_level())
    }

    pub fn is_detailed(&self) -> bool {
        matches!(self, LogLevel::Debug | LogLevel::Verbose)
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LogLevel::None => "NONE",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Verbose => "VERBOSE",
        };
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(LogLevel::None),
            "error" => Ok(LogLevel::Error),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "verbose" | "trace" => Ok(LogLevel::Verbose),
            other => Err(SdkError::InvalidConfigValueError {
                field: "log_level".to_string(),
                value: other.to_string(),
                reason: "Valid levels: none, error, warning, info, debug, verbose".to_string(),
            }),
        }
    }
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{}=debug,info", CRATE_TARGET)))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", CRATE_TARGET)))
    }
}

pub fn init_cli_logger(verbose: bool) {
    let (filter, handle) = reload::Layer::new(default_filter(verbose));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    if installed.is_ok() {
        let _ = FILTER_HANDLE.set(handle);
        if verbose {
            CURRENT_LEVEL.store(LogLevel::Debug as u8, Ordering::Relaxed);
        }
    }
}

pub fn init_json_logger() {
    let (filter, handle) = reload::Layer::new(default_filter(false));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // 結構化輸出，方便送進集中式日誌
        )
        .try_init();

    if installed.is_ok() {
        let _ = FILTER_HANDLE.set(handle);
    }
}

/// 執行期調整日誌等級；尚未初始化 subscriber 時只記錄等級
pub fn set_log_level(level: LogLevel) {
    CURRENT_LEVEL.store(level as u8, Ordering::Relaxed);

    if let Some(handle) = FILTER_HANDLE.get() {
        if let Err(e) = handle.reload(EnvFilter::new(level.directive())) {
            tracing::warn!("Failed to reload log filter: {}", e);
        }
    }
}

pub fn log_level() -> LogLevel {
    LogLevel::from_u8(CURRENT_LEVEL.load(Ordering::Relaxed))
}
