use crate::record::Record;

mod filtered;
mod sync;

pub use self::filtered::SeverityFilteredLoggerAdapter;
pub use self::sync::SyncLogger;

/// Loggers are, well, responsible for logging. Nuff said.
pub trait Logger: Send + Sync {
    /// Logs the given record, returning the number of appenders it was delivered to.
    fn log(&self, rec: &Record) -> usize;
}

/// Formats a message and logs it with the given severity.
///
/// ```
/// #[macro_use] extern crate appendlog;
///
/// use std::sync::Arc;
///
/// use appendlog::{AppenderRegistry, Logger};
/// use appendlog::logger::SyncLogger;
///
/// fn main() {
///     let logger = SyncLogger::new(Arc::new(AppenderRegistry::new()));
///
///     log!(logger, 0, "file does not exist: /var/www/favicon.ico");
///     log!(logger, 0, "{} {} HTTP/1.1 {}", "GET", "/static/image.png", 404);
/// }
/// ```
#[macro_export]
macro_rules! log (
    ($log:expr, $sev:expr, $fmt:expr) => {{
        $log.log(&$crate::Record::new($sev, $fmt))
    }};
    ($log:expr, $sev:expr, $fmt:expr, $($args:tt)*) => {{
        let message = format!($fmt, $($args)*);
        $log.log(&$crate::Record::new($sev, &message))
    }};
);
