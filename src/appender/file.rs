use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::error;

use crate::appender::{format, Appender};
use crate::record::Record;

/// Appends every record as a single line to the end of a file.
///
/// The file is created if it does not exist. Writes are buffered, but flushed after each record,
/// so no record is lost when the process dies after `append` returns. The remaining buffer is
/// flushed on drop.
pub struct FileAppender {
    name: String,
    path: PathBuf,
    file: Mutex<BufWriter<File>>,
}

impl FileAppender {
    pub fn new<N, P>(name: N, path: P) -> Result<FileAppender, Error>
    where
        N: Into<String>,
        P: AsRef<Path>,
    {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().append(true).create(true).open(&path)?;

        let res = FileAppender {
            name: name.into(),
            path,
            file: Mutex::new(BufWriter::new(file)),
        };

        Ok(res)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn name(&self) -> &str {
        &self.name
    }

    fn append(&self, rec: &Record) {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);

        let res = format(rec, &mut *file).and_then(|()| file.flush());
        if let Err(err) = res {
            error!("failed to write record into {:?} in \"{}\" appender: {}", self.path, self.name, err);
        }
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        let file = self.file.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = file.flush() {
            error!("failed to flush {:?} in \"{}\" appender: {}", self.path, self.name, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use log::Level;
    use tempfile::TempDir;

    use crate::appender::Appender;
    use crate::record::Record;
    use super::FileAppender;

    #[test]
    fn append_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let appender = FileAppender::new("file", &path).unwrap();

        appender.append(&Record::new(Level::Info, "first"));
        appender.append(&Record::new(Level::Error, "second"));

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(2, lines.len());
        assert!(lines[0].ends_with(" Info first"));
        assert!(lines[1].ends_with(" Error second"));
    }

    #[test]
    fn append_to_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "existing\n").unwrap();

        let appender = FileAppender::new("file", &path).unwrap();
        appender.append(&Record::new(0, "appended"));
        drop(appender);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("existing\n"));
        assert!(content.ends_with(" 0 appended\n"));
    }

    #[test]
    fn new_fails_for_missing_directory() {
        let dir = TempDir::new().unwrap();

        assert!(FileAppender::new("file", dir.path().join("nope/app.log")).is_err());
    }
}
