//! Thread-safe registry of appenders with ordered broadcasting of logging records.
//!
//! The central piece is the [`AppenderRegistry`], an ordered set of shared appenders that
//! loggers dispatch records to. Appenders are compared by identity, dispatched to in insertion
//! order, and can be added or removed from any thread at any time.

#[macro_use]
extern crate quick_error;

pub mod appender;
mod error;
mod factory;
pub mod logger;
mod record;
mod registry;
mod severity;
mod thread;

pub use self::appender::{Appender, SharedAppender};
pub use self::error::Error;
pub use self::factory::{Builder, Config, Factory};
pub use self::logger::Logger;
pub use self::record::Record;
pub use self::registry::AppenderRegistry;
pub use self::severity::Severity;
