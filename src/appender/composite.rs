use std::sync::Arc;

use crate::appender::Appender;
use crate::record::Record;
use crate::registry::AppenderRegistry;

/// An appender that has appenders attached to it, forwarding every record to all of them.
///
/// The attached registry is shared, so the same set of appenders can be reconfigured from the
/// outside while this appender is in use.
///
/// Attaching a composite to the registry it forwards to makes a cycle. Such forwarding is refused
/// by the registry with a warning instead of deadlocking.
pub struct CompositeAppender {
    name: String,
    registry: Arc<AppenderRegistry>,
}

impl CompositeAppender {
    /// Constructs a composite appender with no appenders attached.
    pub fn new<N: Into<String>>(name: N) -> CompositeAppender {
        CompositeAppender::with_registry(name, Arc::new(AppenderRegistry::new()))
    }

    pub fn with_registry<N: Into<String>>(name: N, registry: Arc<AppenderRegistry>) -> CompositeAppender {
        CompositeAppender {
            name: name.into(),
            registry,
        }
    }

    /// Returns the registry of attached appenders.
    pub fn registry(&self) -> &Arc<AppenderRegistry> {
        &self.registry
    }
}

impl Appender for CompositeAppender {
    fn name(&self) -> &str {
        &self.name
    }

    fn append(&self, rec: &Record) {
        self.registry.dispatch(rec);
    }
}
