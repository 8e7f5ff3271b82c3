use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::appender::{CompositeAppender, FileAppender, NullAppender, SharedAppender, Stream, TermAppender};
use crate::error::Error;
use crate::logger::{SeverityFilteredLoggerAdapter, SyncLogger};
use crate::registry::AppenderRegistry;

pub type Config = Value;

/// Constructs appenders of a concrete type from their config.
pub trait Factory: Send + Sync {
    /// Returns type as a string that is used mainly for concrete component identification.
    fn ty() -> &'static str
    where
        Self: Sized;

    /// Constructs a new appender by configuring it with the given config.
    ///
    /// The builder is passed to allow constructing nested appenders.
    fn from(&self, cfg: &Config, builder: &Builder) -> Result<SharedAppender, Error>;
}

fn find_str<'a>(cfg: &'a Config, name: &'static str) -> Result<&'a str, Error> {
    cfg.get(name)
        .ok_or(Error::MissingField(name))?
        .as_str()
        .ok_or(Error::InvalidField(name, "a string"))
}

fn find_array<'a>(cfg: &'a Config, name: &'static str) -> Result<&'a [Config], Error> {
    let empty: &'a [Config] = &[];

    match cfg.get(name) {
        Some(val) => val
            .as_array()
            .map(Vec::as_slice)
            .ok_or(Error::InvalidField(name, "an array")),
        None => Ok(empty),
    }
}

struct NullAppenderFactory;

impl Factory for NullAppenderFactory {
    fn ty() -> &'static str {
        "null"
    }

    fn from(&self, cfg: &Config, _builder: &Builder) -> Result<SharedAppender, Error> {
        Ok(Arc::new(NullAppender::new(find_str(cfg, "name")?)))
    }
}

struct TermAppenderFactory;

impl Factory for TermAppenderFactory {
    fn ty() -> &'static str {
        "term"
    }

    fn from(&self, cfg: &Config, _builder: &Builder) -> Result<SharedAppender, Error> {
        let stream = match cfg.get("stream") {
            Some(stream) => stream
                .as_str()
                .and_then(Stream::from_name)
                .ok_or(Error::InvalidField("stream", "either \"stdout\" or \"stderr\""))?,
            None => Stream::Stdout,
        };

        Ok(Arc::new(TermAppender::new(find_str(cfg, "name")?, stream)))
    }
}

struct FileAppenderFactory;

impl Factory for FileAppenderFactory {
    fn ty() -> &'static str {
        "file"
    }

    fn from(&self, cfg: &Config, _builder: &Builder) -> Result<SharedAppender, Error> {
        let name = find_str(cfg, "name")?;
        let path = find_str(cfg, "path")?;

        Ok(Arc::new(FileAppender::new(name, path)?))
    }
}

struct CompositeAppenderFactory;

impl Factory for CompositeAppenderFactory {
    fn ty() -> &'static str {
        "composite"
    }

    fn from(&self, cfg: &Config, builder: &Builder) -> Result<SharedAppender, Error> {
        let name = find_str(cfg, "name")?;
        let registry = builder.registry(cfg)?;

        Ok(Arc::new(CompositeAppender::with_registry(name, Arc::new(registry))))
    }
}

/// Builds appenders, registries and loggers from JSON configs.
///
/// Appenders are described by objects with required `type` and `name` fields, the rest of fields
/// is type specific:
///
/// ```json
/// {
///     "severity": 2,
///     "appenders": [
///         {"type": "term", "name": "console", "stream": "stderr"},
///         {"type": "file", "name": "main", "path": "/var/log/app.log"}
///     ]
/// }
/// ```
pub struct Builder {
    factories: HashMap<&'static str, Box<dyn Factory>>,
}

impl Builder {
    /// Constructs a builder with all built-in appender factories registered.
    pub fn new() -> Builder {
        let mut result = Builder {
            factories: HashMap::new(),
        };

        result.register(NullAppenderFactory);
        result.register(TermAppenderFactory);
        result.register(FileAppenderFactory);
        result.register(CompositeAppenderFactory);

        result
    }

    /// Registers the given factory, replacing a previous one with the same type.
    pub fn register<F: Factory + 'static>(&mut self, factory: F) {
        self.factories.insert(F::ty(), Box::new(factory));
    }

    pub fn appender(&self, cfg: &Config) -> Result<SharedAppender, Error> {
        let ty = find_str(cfg, "type")?;

        self.factories
            .get(ty)
            .ok_or_else(|| Error::UnknownType(ty.into()))?
            .from(cfg, self)
    }

    /// Constructs a registry with appenders from the `appenders` array, in their config order.
    pub fn registry(&self, cfg: &Config) -> Result<AppenderRegistry, Error> {
        let registry = AppenderRegistry::new();

        for cfg in find_array(cfg, "appenders")? {
            registry.add(self.appender(cfg)?);
        }

        Ok(registry)
    }

    /// Constructs a synchronous logger, filtering records below the `severity` threshold.
    pub fn logger(&self, cfg: &Config) -> Result<SeverityFilteredLoggerAdapter<SyncLogger>, Error> {
        let severity = match cfg.get("severity") {
            Some(val) => val
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .ok_or(Error::InvalidField("severity", "an integer"))?,
            None => 0,
        };

        let logger = SeverityFilteredLoggerAdapter::new(SyncLogger::new(Arc::new(self.registry(cfg)?)));
        logger.filter(severity);

        Ok(logger)
    }
}

impl Default for Builder {
    fn default() -> Builder {
        Builder::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use crate::appender::{Appender, NullAppender, SharedAppender};
    use crate::error::Error;
    use crate::logger::Logger;
    use crate::record::Record;
    use super::*;

    #[test]
    fn appender_null() {
        let appender = Builder::new().appender(&json!({"type": "null", "name": "void"})).unwrap();

        assert_eq!("void", appender.name());
    }

    #[test]
    fn appender_requires_type() {
        match Builder::new().appender(&json!({"name": "void"})) {
            Err(Error::MissingField("type")) => {}
            _ => panic!("expected missing type"),
        }
    }

    #[test]
    fn appender_requires_string_name() {
        match Builder::new().appender(&json!({"type": "null", "name": 42})) {
            Err(Error::InvalidField("name", _)) => {}
            _ => panic!("expected invalid name"),
        }
    }

    #[test]
    fn appender_unknown_type() {
        match Builder::new().appender(&json!({"type": "syslog", "name": "sys"})) {
            Err(Error::UnknownType(ty)) => assert_eq!("syslog", ty),
            _ => panic!("expected unknown type"),
        }
    }

    #[test]
    fn appender_term_invalid_stream() {
        let cfg = json!({"type": "term", "name": "console", "stream": "tty"});

        assert!(Builder::new().appender(&cfg).is_err());
    }

    #[test]
    fn appender_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let cfg = json!({"type": "file", "name": "main", "path": path.to_str().unwrap()});

        let appender = Builder::new().appender(&cfg).unwrap();
        appender.append(&Record::new(0, "hello"));

        assert!(path.exists());
    }

    #[test]
    fn appender_file_requires_path() {
        match Builder::new().appender(&json!({"type": "file", "name": "main"})) {
            Err(Error::MissingField("path")) => {}
            _ => panic!("expected missing path"),
        }
    }

    #[test]
    fn registry_keeps_config_order() {
        let cfg = json!({
            "appenders": [
                {"type": "null", "name": "a"},
                {"type": "term", "name": "b"},
                {"type": "composite", "name": "c", "appenders": [
                    {"type": "null", "name": "nested"}
                ]}
            ]
        });

        let registry = Builder::new().registry(&cfg).unwrap();
        let names: Vec<String> = registry.get_all().iter().map(|v| v.name().to_string()).collect();

        assert_eq!(vec!["a", "b", "c"], names);
    }

    #[test]
    fn registry_without_appenders() {
        assert!(Builder::new().registry(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn logger_filters_by_severity() {
        let logger = Builder::new()
            .logger(&json!({"severity": 2, "appenders": [{"type": "null", "name": "a"}]}))
            .unwrap();

        assert_eq!(0, logger.log(&Record::new(1, "")));
        assert_eq!(1, logger.log(&Record::new(2, "")));
    }

    #[test]
    fn register_custom_factory() {
        struct VoidFactory;

        impl Factory for VoidFactory {
            fn ty() -> &'static str {
                "void"
            }

            fn from(&self, _cfg: &Config, _builder: &Builder) -> Result<SharedAppender, Error> {
                Ok(Arc::new(NullAppender::new("custom")))
            }
        }

        let mut builder = Builder::new();
        builder.register(VoidFactory);

        let appender = builder.appender(&json!({"type": "void"})).unwrap();

        assert_eq!("custom", appender.name());
    }
}
