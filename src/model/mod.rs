//! Core data model for section numbering and TOC staging.
//!
//! This module contains:
//! - Chapter/part references consumed by the numbering engine
//! - Flat TOC records and their arguments

mod division;
mod toc;

pub use division::Division;
pub use toc::{ARG_NAME, ARG_PART, EntryKind, PART_BEGIN, PART_END, TocArgs, TocEntry};
