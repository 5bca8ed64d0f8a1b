//! Single-pass TOC replay.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::codec::decode_record;
use crate::error::{Error, Result};
use crate::model::TocEntry;

/// Replays a TOC store once, in file order.
///
/// Replay stops at the first record that does not decode; nothing after a
/// corrupt line is ever yielded.
#[derive(Debug)]
pub struct TocReader {
    path: PathBuf,
}

impl TocReader {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Call `visit` once per record, in file order.
    pub fn each_item<F>(self, mut visit: F) -> Result<()>
    where
        F: FnMut(TocEntry),
    {
        let reader = BufReader::new(File::open(&self.path)?);
        for (index, line) in reader.lines().enumerate() {
            let entry = line
                .map_err(|e| match e.kind() {
                    io::ErrorKind::InvalidData => Error::StreamCorruption {
                        line: index + 1,
                        reason: "line is not valid UTF-8".to_string(),
                    },
                    _ => Error::Io(e),
                })
                .and_then(|line| decode_record(&line, index + 1))
                .inspect_err(|e| {
                    tracing::error!(
                        path = %self.path().display(),
                        error = %e,
                        "TOC replay aborted"
                    );
                })?;
            visit(entry);
        }
        Ok(())
    }

    /// Read every record, failing if any line is corrupt.
    pub fn entries(self) -> Result<Vec<TocEntry>> {
        let mut entries = Vec::new();
        self.each_item(|entry| entries.push(entry))?;
        Ok(entries)
    }
}
