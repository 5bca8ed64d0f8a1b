//! Persisted TOC stream.
//!
//! Each chapter pass appends records with [`TocWriter`]; final assembly
//! replays the whole stream once with [`TocReader`].

mod codec;
mod reader;
mod writer;

pub use reader::TocReader;
pub use writer::TocWriter;

/// Conventional file name of the TOC store inside a build directory.
pub const TOC_FILE_NAME: &str = "toc.txt";

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::model::{TocArgs, TocEntry};

    #[test]
    fn test_round_trip_single_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TOC_FILE_NAME);

        let writer = TocWriter::create(&path).unwrap();
        writer
            .add_item(2, "ch01", "Intro", &TocArgs::new().with("foo", Some("bar")))
            .unwrap();

        let mut seen = Vec::new();
        TocReader::open(&path)
            .each_item(|entry| seen.push(entry))
            .unwrap();

        assert_eq!(
            seen,
            vec![TocEntry::new(2, "ch01", "Intro", TocArgs::new().with("foo", Some("bar")))]
        );
    }

    #[test]
    fn test_writer_and_reader_share_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TOC_FILE_NAME);

        let writer = TocWriter::create(&path).unwrap();
        assert_eq!(writer.path(), path.as_path());
        assert_eq!(TocReader::open(writer.path()).path(), path.as_path());
    }

    #[test]
    fn test_create_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TOC_FILE_NAME);

        TocWriter::create(&path)
            .unwrap()
            .add_item(1, "old", "Old", &TocArgs::new())
            .unwrap();
        TocWriter::create(&path).unwrap();

        assert!(TocReader::open(&path).entries().unwrap().is_empty());
    }

    #[test]
    fn test_append_to_creates_missing_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TOC_FILE_NAME);

        TocWriter::append_to(&path)
            .add_item(1, "ch01", "One", &TocArgs::new())
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1\tch01\tOne\t\n");
    }

    #[test]
    fn test_missing_store_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = TocReader::open(dir.path().join("absent.txt"))
            .entries()
            .unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }

    #[test]
    fn test_corrupt_line_stops_replay() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TOC_FILE_NAME);
        fs::write(&path, "1\tch01\tOne\t\n2\tch01\tbroken\n2\tch01\tTwo\t\n").unwrap();

        let mut seen = Vec::new();
        let err = TocReader::open(&path)
            .each_item(|entry| seen.push(entry.title))
            .unwrap_err();

        assert!(err.is_corruption());
        assert_eq!(seen, vec!["One".to_string()]);
    }

    #[test]
    fn test_invalid_utf8_is_corruption() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TOC_FILE_NAME);
        fs::write(&path, b"1\tch01\t\xFF\t\n").unwrap();

        assert!(TocReader::open(&path).entries().unwrap_err().is_corruption());
    }

    #[test]
    fn test_invalid_utf8_stops_after_earlier_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TOC_FILE_NAME);
        fs::write(&path, b"1\tch01\tOne\t\n2\tch01\t\xFF\t\n").unwrap();

        let mut seen = Vec::new();
        let err = TocReader::open(&path)
            .each_item(|entry| seen.push(entry.title))
            .unwrap_err();
        match err {
            crate::Error::StreamCorruption { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected StreamCorruption, got {other:?}"),
        }
        assert_eq!(seen, vec!["One".to_string()]);
    }

    #[test]
    fn test_blank_line_in_middle_is_corruption() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TOC_FILE_NAME);
        fs::write(&path, "1\tch01\tOne\t\n\n1\tch02\tTwo\t\n").unwrap();

        assert!(TocReader::open(&path).entries().unwrap_err().is_corruption());
    }
}
