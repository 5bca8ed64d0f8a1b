//! # booktoc
//!
//! Section numbering and table-of-contents staging for multi-chapter book
//! builds.
//!
//! ## Features
//!
//! - Per-chapter section counters producing labels (`3.1.2`) and anchors (`3-1-2`)
//! - Localized chapter, part and appendix labels
//! - An append-only TOC store written once per heading across chapter passes
//! - Rendering of the replayed store into nested HTML navigation
//!
//! ## Quick Start
//!
//! ```no_run
//! use booktoc::{Book, Division, TocArgs, TocRenderer};
//!
//! let book = Book::new("build");
//! book.start_toc()?;
//!
//! let mut chapter = book.begin_chapter(Division::chapter(1), "ch01")?;
//! chapter.heading(1, "Getting Started", TocArgs::new())?;
//! let section = chapter.heading(2, "Installation", TocArgs::new())?;
//! assert_eq!(section.anchor, "1-1");
//!
//! let html = TocRenderer::render(&book)?;
//! println!("{html}");
//! # Ok::<(), booktoc::Error>(())
//! ```

pub mod appendix;
pub mod book;
pub mod config;
pub mod error;
pub mod i18n;
pub mod model;
pub mod numbering;
pub mod render;
pub mod store;
pub(crate) mod util;

pub use appendix::AppendixFormat;
pub use book::{Book, ChapterPass, Heading};
pub use config::TocConfig;
pub use error::{Error, Result};
pub use i18n::Catalog;
pub use model::{Division, EntryKind, TocArgs, TocEntry};
pub use numbering::{FormatAppendix, Labels, SectionCounter, Translate};
pub use render::TocRenderer;
pub use store::{TOC_FILE_NAME, TocReader, TocWriter};
