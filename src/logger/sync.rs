use std::sync::Arc;

use crate::logger::Logger;
use crate::record::Record;
use crate::registry::AppenderRegistry;

/// Blocking, but still fast, thread-safe reconfigurable synchronous logger.
///
/// Represents a logger, which handles incoming records by broadcasting them to all appenders of
/// the underlying registry in the calling thread.
///
/// Appenders are invoked while the registry lock is held, so it's strongly recommended that
/// appenders won't block no matter what. A slow appender freezes every other thread logging
/// through or reconfiguring the same registry.
///
/// Clones share the same registry, so appenders added or removed through one clone are
/// immediately visible to all of them.
#[derive(Clone, Default)]
pub struct SyncLogger {
    registry: Arc<AppenderRegistry>,
}

impl SyncLogger {
    pub fn new(registry: Arc<AppenderRegistry>) -> SyncLogger {
        SyncLogger { registry }
    }

    /// Returns the registry of appenders this logger dispatches to.
    pub fn registry(&self) -> &Arc<AppenderRegistry> {
        &self.registry
    }
}

impl Logger for SyncLogger {
    fn log(&self, rec: &Record) -> usize {
        self.registry.dispatch(rec)
    }
}
