use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use ordermill_core::{WorkflowError, WorkflowResult};

/// Append-only action journal.
///
/// Records are written as `[YYYY-MM-DD HH:MM:SS] <message>`, one per line.
/// The file is opened in append mode and closed again on every single write;
/// no handle or buffer is held across calls, so each record is flushed before
/// `append` returns.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped record, creating the file if it does not exist.
    ///
    /// An unwritable path propagates as [`WorkflowError::Journal`]; there is
    /// no retry.
    pub fn append(&self, message: &str) -> WorkflowResult<()> {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(WorkflowError::journal)?;
        writeln!(file, "[{stamp}] {message}").map_err(WorkflowError::journal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn append_creates_file_and_writes_timestamped_record() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("log.txt"));

        journal.append("hello").unwrap();

        let lines = read_lines(journal.path());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("] hello"), "line was: {}", lines[0]);

        // `[YYYY-MM-DD HH:MM:SS] ` prefix is 22 characters.
        let stamp = &lines[0][1..20];
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[7..8], "-");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
        assert_eq!(&stamp[16..17], ":");
        assert!(
            stamp
                .chars()
                .enumerate()
                .all(|(i, c)| matches!(i, 4 | 7 | 10 | 13 | 16) || c.is_ascii_digit())
        );
    }

    #[test]
    fn appends_accumulate_in_call_order() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("log.txt"));

        journal.append("first").unwrap();
        journal.append("second").unwrap();
        journal.append("third").unwrap();

        let lines = read_lines(journal.path());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("] first"));
        assert!(lines[1].ends_with("] second"));
        assert!(lines[2].ends_with("] third"));
    }

    #[test]
    fn unwritable_path_propagates_as_journal_error() {
        let dir = TempDir::new().unwrap();
        // The directory itself is not an appendable file.
        let journal = Journal::new(dir.path());

        let err = journal.append("nope").unwrap_err();
        assert!(matches!(err, WorkflowError::Journal(_)));
    }
}
