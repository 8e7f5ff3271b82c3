use crate::appender::Appender;
use crate::record::Record;

/// A null appender merely exists, it never outputs a record to any device.
///
/// This struct exists primarily for testing and benchmarking reasons to measure the dispatching
/// overhead. It never fails, because it does nothing.
///
/// ```
/// use appendlog::{Appender, Record};
/// use appendlog::appender::NullAppender;
///
/// let appender = NullAppender::new("null");
/// appender.append(&Record::new(0, "le message"));
///
/// assert_eq!("null", appender.name());
/// ```
#[derive(Debug)]
pub struct NullAppender {
    name: String,
}

impl NullAppender {
    pub fn new<N: Into<String>>(name: N) -> NullAppender {
        NullAppender { name: name.into() }
    }
}

impl Appender for NullAppender {
    fn name(&self) -> &str {
        &self.name
    }

    fn append(&self, _rec: &Record) {}
}
