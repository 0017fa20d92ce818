use tracing::Level;

use super::settings::LogLevel;

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Installs the global subscriber: browser console on web, stdout on desktop.
/// Later calls keep the first subscriber.
pub fn init_logger(level: LogLevel) {
    let _ = dioxus::logger::init(level.into());
}
