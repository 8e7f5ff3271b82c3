use std::io::{self, Write};

use log::error;

use crate::appender::{format, Appender};
use crate::record::Record;

/// Standard stream to write into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Parses a stream from its config name.
    pub fn from_name(name: &str) -> Option<Stream> {
        match name {
            "stdout" => Some(Stream::Stdout),
            "stderr" => Some(Stream::Stderr),
            _ => None,
        }
    }
}

/// Writes every record as a single line into the terminal.
pub struct TermAppender {
    name: String,
    stream: Stream,
}

impl TermAppender {
    pub fn new<N: Into<String>>(name: N, stream: Stream) -> TermAppender {
        TermAppender {
            name: name.into(),
            stream,
        }
    }

    pub fn stream(&self) -> Stream {
        self.stream
    }
}

impl Appender for TermAppender {
    fn name(&self) -> &str {
        &self.name
    }

    fn append(&self, rec: &Record) {
        // Format into the buffer first to write the whole line at once.
        let mut buf = Vec::with_capacity(128);
        if let Err(err) = format(rec, &mut buf) {
            error!("failed to format record in \"{}\" appender: {}", self.name, err);
            return;
        }

        let res = match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(&buf),
            Stream::Stderr => io::stderr().lock().write_all(&buf),
        };

        if let Err(err) = res {
            error!("failed to write record in \"{}\" appender: {}", self.name, err);
        }
    }
}
