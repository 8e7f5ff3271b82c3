use std::sync::atomic::{AtomicIsize, Ordering};
use std::sync::Arc;

use crate::logger::Logger;
use crate::record::Record;

/// Extends the given logger with an ability to fast filter incoming records by their severity.
///
/// Records with severity less than the threshold are dropped without reaching the wrapped
/// logger.
#[derive(Clone)]
pub struct SeverityFilteredLoggerAdapter<L> {
    logger: L,
    threshold: Arc<AtomicIsize>,
}

impl<L: Logger> SeverityFilteredLoggerAdapter<L> {
    /// Constructs an adaptor by wrapping the given logger.
    ///
    /// By default a 0 value is set as a threshold.
    pub fn new(logger: L) -> SeverityFilteredLoggerAdapter<L> {
        SeverityFilteredLoggerAdapter {
            logger,
            threshold: Arc::new(AtomicIsize::new(0)),
        }
    }

    /// Replaces the current threshold with the given one.
    pub fn filter(&self, value: i32) {
        self.threshold.store(value as isize, Ordering::Release);
    }

    pub fn threshold(&self) -> i32 {
        self.threshold.load(Ordering::Acquire) as i32
    }

    pub fn inner(&self) -> &L {
        &self.logger
    }
}

impl<L: Logger> Logger for SeverityFilteredLoggerAdapter<L> {
    fn log(&self, rec: &Record) -> usize {
        if rec.severity() >= self.threshold.load(Ordering::Relaxed) as i32 {
            self.logger.log(rec)
        } else {
            0
        }
    }
}
