//! Flat TOC records as emitted per heading during a chapter pass.

use std::collections::BTreeMap;

use serde::Serialize;

/// Arg key marking a chapter boundary; its value is the output file stem.
pub const ARG_NAME: &str = "name";
/// Arg key marking a part boundary, valued [`PART_BEGIN`] or [`PART_END`].
pub const ARG_PART: &str = "part";
pub const PART_BEGIN: &str = "begin";
pub const PART_END: &str = "end";

/// String arguments attached to a TOC record.
///
/// Keys are kept sorted so a record always encodes the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TocArgs(BTreeMap<String, String>);

impl TocArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, dropping it when the value is absent.
    pub fn with(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        let key = key.into();
        match value {
            Some(v) => {
                self.0.insert(key, v.into());
            }
            None => {
                self.0.remove(&key);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TocArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// One persisted TOC record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Heading depth; 1 is a chapter title.
    pub level: usize,
    pub filename: String,
    pub title: String,
    #[serde(skip_serializing_if = "TocArgs::is_empty")]
    pub args: TocArgs,
}

/// How the renderer treats a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind<'a> {
    /// Switches the current output path; not rendered.
    ChapterBoundary(&'a str),
    /// Closes the innermost nested list; not rendered.
    PartEnd,
    /// A visible row.
    Row,
}

impl TocEntry {
    pub fn new(
        level: usize,
        filename: impl Into<String>,
        title: impl Into<String>,
        args: TocArgs,
    ) -> Self {
        Self {
            level,
            filename: filename.into(),
            title: title.into(),
            args,
        }
    }

    /// A chapter boundary marker for the output file `name`.
    pub fn chapter_boundary(level: usize, name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(level, name.clone(), "", TocArgs::new().with(ARG_NAME, Some(name)))
    }

    /// A marker closing the list opened by the current part.
    pub fn part_end(level: usize) -> Self {
        Self::new(level, "", "", TocArgs::new().with(ARG_PART, Some(PART_END)))
    }

    pub fn kind(&self) -> EntryKind<'_> {
        if let Some(name) = self.args.get(ARG_NAME) {
            EntryKind::ChapterBoundary(name)
        } else if self.args.get(ARG_PART) == Some(PART_END) {
            EntryKind::PartEnd
        } else {
            EntryKind::Row
        }
    }
}
