use std::fmt::{self, Debug, Formatter};
use std::io::{Error, Write};

use chrono::{DateTime, Utc};

use crate::severity::Severity;

pub type SeverityFormat = fn(i32, &mut dyn Write) -> Result<(), Error>;

/// A single logging event.
///
/// Records are constructed upstream and passed by reference through loggers and registries down
/// to appenders, which are the only ones that look inside.
pub struct Record<'a> {
    severity: i32,
    format: SeverityFormat,
    timestamp: DateTime<Utc>,
    message: &'a str,
}

impl<'a> Record<'a> {
    /// Constructs a new record stamped with the current time.
    pub fn new<S: Severity>(severity: S, message: &'a str) -> Record<'a> {
        Record {
            severity: severity.as_i32(),
            format: S::format,
            timestamp: Utc::now(),
            message,
        }
    }

    pub fn severity(&self) -> i32 {
        self.severity
    }

    /// Returns a function, which knows how to format this record's severity.
    pub fn severity_format(&self) -> SeverityFormat {
        self.format
    }

    pub fn datetime(&self) -> &DateTime<Utc> {
        &self.timestamp
    }

    pub fn message(&self) -> &str {
        self.message
    }
}

impl<'a> Debug for Record<'a> {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        fmt.debug_struct("Record")
            .field("severity", &self.severity)
            .field("timestamp", &self.timestamp)
            .field("message", &self.message)
            .finish()
    }
}
