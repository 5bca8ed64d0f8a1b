//! Append-only TOC writer.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::codec::encode_record;
use crate::error::Result;
use crate::model::{TocArgs, TocEntry};

/// Appends TOC records to the store, one open/append/close per record.
///
/// No handle is held between calls, so records already written survive a
/// failure in a later chapter pass.
#[derive(Debug, Clone)]
pub struct TocWriter {
    path: PathBuf,
}

impl TocWriter {
    /// Start a fresh store at `path`, discarding any previous contents.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        File::create(&path)?;
        tracing::debug!(path = %path.display(), "created TOC store");
        Ok(Self { path })
    }

    /// Append to the store at `path`, creating it on the first write.
    pub fn append_to(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record.
    pub fn add_item(&self, level: usize, filename: &str, title: &str, args: &TocArgs) -> Result<()> {
        let mut line = encode_record(level, filename, title, args);
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        tracing::debug!(
            path = %self.path().display(),
            level,
            filename,
            title,
            "appended TOC record"
        );
        Ok(())
    }

    pub fn add_entry(&self, entry: &TocEntry) -> Result<()> {
        self.add_item(entry.level, &entry.filename, &entry.title, &entry.args)
    }
}
