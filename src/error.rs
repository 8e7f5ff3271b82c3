use std::io;

quick_error! {
    /// Errors, that may occur while building components from a config.
    #[derive(Debug)]
    pub enum Error {
        MissingField(name: &'static str) {
            display("field \"{}\" is required", name)
        }
        InvalidField(name: &'static str, expected: &'static str) {
            display("field \"{}\" must be {}", name, expected)
        }
        UnknownType(ty: String) {
            display("appender with \"{}\" type not found", ty)
        }
        Io(err: io::Error) {
            from()
            source(err)
            display("I/O error: {}", err)
        }
    }
}
