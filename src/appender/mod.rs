use std::io::{Error, Write};
use std::sync::Arc;

use chrono::SecondsFormat;

use crate::record::Record;

mod composite;
mod file;
mod null;
mod term;

pub use self::composite::CompositeAppender;
pub use self::file::FileAppender;
pub use self::null::NullAppender;
pub use self::term::{Stream, TermAppender};

/// Appenders are responsible for delivering logging records to their destination.
///
/// An appender is usually shared between several registries, that's why it is always accessed
/// through an immutable reference and must synchronize its own state.
pub trait Appender: Send + Sync {
    /// Returns the appender name, which is used as a lookup key, but not required to be unique.
    fn name(&self) -> &str;

    /// Consumes the given record.
    ///
    /// Appenders are responsible for handling their own failures, there is no one to report them
    /// to upstream.
    fn append(&self, rec: &Record);
}

/// Reference-counted appender, as it is stored in registries.
pub type SharedAppender = Arc<dyn Appender>;

/// Writes a record as a single line: `{timestamp} {severity} {message}\n`.
fn format(rec: &Record, wr: &mut dyn Write) -> Result<(), Error> {
    write!(wr, "{} ", rec.datetime().to_rfc3339_opts(SecondsFormat::Micros, true))?;
    rec.severity_format()(rec.severity(), wr)?;
    wr.write_all(b" ")?;
    wr.write_all(rec.message().as_bytes())?;
    wr.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use log::Level;

    use crate::record::Record;
    use super::format;

    #[test]
    fn format_line() {
        let rec = Record::new(Level::Info, "nginx/1.6 configured");

        let mut buf = Vec::new();
        format(&rec, &mut buf).unwrap();
        let line = String::from_utf8(buf).unwrap();

        assert!(line.ends_with(" Info nginx/1.6 configured\n"));
        assert!(line.starts_with(&rec.datetime().format("%Y-%m-%dT%H:%M:%S").to_string()));
    }
}
