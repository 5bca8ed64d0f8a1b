use super::Book;
use crate::error::Result;
use crate::model::{ARG_NAME, ARG_PART, TocArgs};
use crate::numbering::SectionCounter;
use crate::store::TocWriter;

/// Arg key carrying a heading's anchor id.
const ARG_ID: &str = "id";

/// Numbering for one heading, as handed back to the page builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub anchor: String,
    /// Display label such as `Chapter 1. ` or `1.2 `, when numbers are shown.
    pub prefix: Option<String>,
}

/// Numbering and TOC logging for one chapter compile pass.
///
/// Dropped when the chapter is done; its counter is never reused.
pub struct ChapterPass<'a> {
    book: &'a Book,
    writer: TocWriter,
    counter: SectionCounter,
    stem: String,
}

impl<'a> ChapterPass<'a> {
    pub(super) fn new(book: &'a Book, writer: TocWriter, counter: SectionCounter, stem: &str) -> Self {
        Self {
            book,
            writer,
            counter,
            stem: stem.to_string(),
        }
    }

    pub fn counter(&self) -> &SectionCounter {
        &self.counter
    }

    /// Number a heading and log it to the TOC store.
    ///
    /// The stored title carries the display prefix so the rendered TOC shows
    /// the same numbering as the page. Marker keys (`name`, `part`) in `args`
    /// are dropped so a heading always stays a visible row.
    pub fn heading(&mut self, level: usize, title: &str, args: TocArgs) -> Result<Heading> {
        let config = self.book.config();
        self.counter.inc(level);
        let anchor = self.counter.anchor(level);
        let prefix = self
            .counter
            .prefix(level, config.secnolevel, self.book.labels());

        let toc_title = match &prefix {
            Some(p) => format!("{p}{title}"),
            None => title.to_string(),
        };
        let args = args
            .with(ARG_NAME, None::<&str>)
            .with(ARG_PART, None::<&str>)
            .with(ARG_ID, Some(anchor.as_str()));
        self.writer.add_item(level, &self.stem, &toc_title, &args)?;

        Ok(Heading { anchor, prefix })
    }
}
