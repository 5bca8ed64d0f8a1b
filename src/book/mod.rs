//! Per-book build context.
//!
//! A [`Book`] ties together the build directory holding intermediate
//! artifacts, the resolved configuration, and the string catalog. Chapter
//! passes are started from it and the final TOC is rendered from it.

mod pass;

use std::path::PathBuf;

pub use pass::{ChapterPass, Heading};

use crate::config::TocConfig;
use crate::error::Result;
use crate::i18n::Catalog;
use crate::model::{ARG_PART, Division, PART_BEGIN, TocArgs, TocEntry};
use crate::numbering::{Labels, SectionCounter};
use crate::store::{TOC_FILE_NAME, TocReader, TocWriter};

#[derive(Debug, Clone)]
pub struct Book {
    build_dir: PathBuf,
    config: TocConfig,
    catalog: Catalog,
}

impl Book {
    /// A book building into `build_dir` with default configuration.
    pub fn new(build_dir: impl Into<PathBuf>) -> Self {
        Self::with_config(build_dir, TocConfig::default())
    }

    pub fn with_config(build_dir: impl Into<PathBuf>, config: TocConfig) -> Self {
        let catalog = config.catalog();
        Self {
            build_dir: build_dir.into(),
            config,
            catalog,
        }
    }

    pub fn config(&self) -> &TocConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Location of the TOC store.
    pub fn toc_path(&self) -> PathBuf {
        self.build_dir.join(TOC_FILE_NAME)
    }

    pub fn labels(&self) -> Labels<'_> {
        Labels::new(&self.catalog, &self.config.appendix_format)
    }

    /// Truncate the TOC store at the start of a whole-book build.
    pub fn start_toc(&self) -> Result<TocWriter> {
        TocWriter::create(self.toc_path())
    }

    pub fn toc_writer(&self) -> TocWriter {
        TocWriter::append_to(self.toc_path())
    }

    pub fn toc_reader(&self) -> TocReader {
        TocReader::open(self.toc_path())
    }

    /// Fresh numbering state for one chapter.
    pub fn section_counter(&self, division: Division) -> SectionCounter {
        SectionCounter::new(self.config.section_depth, division)
    }

    /// Begin compiling the chapter written to output `stem`.
    ///
    /// Records the chapter boundary so later rows link to this chapter.
    pub fn begin_chapter(&self, division: Division, stem: &str) -> Result<ChapterPass<'_>> {
        let writer = self.toc_writer();
        writer.add_entry(&TocEntry::chapter_boundary(1, stem))?;
        Ok(ChapterPass::new(self, writer, self.section_counter(division), stem))
    }

    /// Record a part title row, which opens a nested list in the TOC.
    ///
    /// A part without its own output file is listed as a plain label.
    pub fn begin_part(&self, division: Division, stem: Option<&str>, title: &str) -> Result<()> {
        let writer = self.toc_writer();
        writer.add_entry(&TocEntry::chapter_boundary(1, stem.unwrap_or_default()))?;

        let counter = self.section_counter(division);
        let label = counter
            .prefix(1, self.config.secnolevel, self.labels())
            .unwrap_or_default();
        let args = TocArgs::new().with(ARG_PART, Some(PART_BEGIN));
        writer.add_item(
            self.config.part_level,
            stem.unwrap_or_default(),
            &format!("{label}{title}"),
            &args,
        )
    }

    /// Record the end of the current part.
    pub fn end_part(&self) -> Result<()> {
        self.toc_writer()
            .add_entry(&TocEntry::part_end(self.config.part_level))
    }
}
