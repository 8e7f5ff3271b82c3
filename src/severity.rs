use std::io::{Error, Write};

use log::Level;

/// Severity level of a logging record.
///
/// Records carry severity as a plain integer, while the concrete type is remembered only through
/// its formatting function, allowing both raw integers and `log::Level` to be used together.
pub trait Severity {
    /// Returns an integer severity representation.
    fn as_i32(&self) -> i32;

    /// Writes a human-readable representation of the given severity value.
    fn format(val: i32, wr: &mut dyn Write) -> Result<(), Error>
    where
        Self: Sized;
}

impl Severity for i32 {
    fn as_i32(&self) -> i32 {
        *self
    }

    fn format(val: i32, wr: &mut dyn Write) -> Result<(), Error>
    where
        Self: Sized,
    {
        write!(wr, "{}", val)
    }
}

impl Severity for Level {
    fn as_i32(&self) -> i32 {
        match *self {
            Level::Error => 1,
            Level::Warn  => 2,
            Level::Info  => 3,
            Level::Debug => 4,
            Level::Trace => 5,
        }
    }

    fn format(val: i32, wr: &mut dyn Write) -> Result<(), Error>
    where
        Self: Sized,
    {
        match val {
            1 => wr.write_all(b"Error"),
            2 => wr.write_all(b"Warn"),
            3 => wr.write_all(b"Info"),
            4 => wr.write_all(b"Debug"),
            5 => wr.write_all(b"Trace"),
            val => <i32 as Severity>::format(val, wr),
        }
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::Severity;

    fn formatted<S: Severity>(val: i32) -> String {
        let mut buf = Vec::new();
        S::format(val, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn level_maps_to_integers() {
        assert_eq!(1, Level::Error.as_i32());
        assert_eq!(3, Level::Info.as_i32());
        assert_eq!(5, Level::Trace.as_i32());
    }

    #[test]
    fn level_format_by_name() {
        assert_eq!("Warn", formatted::<Level>(2));
        assert_eq!("Debug", formatted::<Level>(4));
    }

    #[test]
    fn level_format_unknown_falls_back_to_number() {
        assert_eq!("42", formatted::<Level>(42));
    }

    #[test]
    fn integer_format() {
        assert_eq!("-1", formatted::<i32>(-1));
    }
}
