//! Whole-book navigation rendering.
//!
//! Folds the replayed TOC stream into a nested HTML list:
//!
//! ```text
//! <ul class="book-toc">
//! <li><a href="index.html">TOP</a></li>
//! <li>Part 1. Basics
//! <ul>
//! <li><a href="ch01.html">Chapter 1. Intro</a></li>
//! </ul>
//! </li>
//! </ul>
//! ```

use crate::book::Book;
use crate::config::TocConfig;
use crate::error::Result;
use crate::model::{EntryKind, TocEntry};
use crate::numbering::Translate;
use crate::util::escape_html;

/// Title shown for rows that carry none.
const UNTITLED: &str = "-";

/// Renders TOC records into nested list markup.
#[derive(Debug, Clone)]
pub struct TocRenderer {
    config: TocConfig,
    top_label: String,
}

impl TocRenderer {
    pub fn new(config: &TocConfig, i18n: &dyn Translate) -> Self {
        Self {
            config: config.clone(),
            top_label: i18n.translate("toc_top", &[]),
        }
    }

    /// Replay the book's TOC store and render it.
    ///
    /// The whole stream is read before anything is rendered, so a corrupt
    /// store never yields partial navigation.
    pub fn render(book: &Book) -> Result<String> {
        let entries = book.toc_reader().entries()?;
        tracing::debug!(records = entries.len(), "rendering TOC");
        Ok(Self::new(book.config(), book.catalog()).render_entries(&entries))
    }

    /// Render an already replayed sequence. Same input, same output.
    pub fn render_entries(&self, entries: &[TocEntry]) -> String {
        let mut out = String::new();
        out.push_str("<ul class=\"book-toc\">\n");
        out.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape_html(&self.config.top_href()),
            escape_html(&self.top_label)
        ));

        let mut path = String::new();
        let mut open_lists = 0usize;

        for entry in entries {
            match entry.kind() {
                EntryKind::ChapterBoundary(name) => {
                    path = if name.is_empty() {
                        String::new()
                    } else {
                        self.config.output_path(name)
                    };
                }
                EntryKind::PartEnd => {
                    if open_lists == 0 {
                        tracing::warn!(level = entry.level, "part end without an open part");
                        continue;
                    }
                    out.push_str("</ul>\n</li>\n");
                    open_lists -= 1;
                }
                EntryKind::Row => {
                    let opens_list = entry.level == self.config.part_level;
                    if !opens_list && entry.level > self.config.toclevel {
                        continue;
                    }

                    let item = row_item(&path, &entry.title);
                    if opens_list {
                        out.push_str(&format!("<li>{item}\n<ul>\n"));
                        open_lists += 1;
                    } else {
                        out.push_str(&format!("<li>{item}</li>\n"));
                    }
                }
            }
        }

        if open_lists > 0 {
            tracing::warn!(open_lists, "closing parts left open at end of TOC");
            for _ in 0..open_lists {
                out.push_str("</ul>\n</li>\n");
            }
        }

        out.push_str("</ul>\n");
        out
    }
}

fn row_item(path: &str, title: &str) -> String {
    let label = if title.is_empty() {
        UNTITLED.to_string()
    } else {
        escape_html(title)
    };
    if path.is_empty() {
        label
    } else {
        format!("<a href=\"{}\">{label}</a>", escape_html(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::model::TocArgs;

    fn renderer(part_level: usize) -> TocRenderer {
        let config = TocConfig {
            part_level,
            ..TocConfig::default()
        };
        TocRenderer::new(&config, &Catalog::builtin("en"))
    }

    fn row(level: usize, title: &str) -> TocEntry {
        TocEntry::new(level, "", title, TocArgs::new())
    }

    #[test]
    fn test_empty_stream_has_top_link_only() {
        assert_eq!(
            renderer(0).render_entries(&[]),
            "<ul class=\"book-toc\">\n<li><a href=\"index.html\">TOP</a></li>\n</ul>\n"
        );
    }

    #[test]
    fn test_rows_link_to_current_chapter() {
        let entries = [
            TocEntry::chapter_boundary(1, "ch01"),
            row(1, "Intro"),
            row(2, "Q&A"),
            TocEntry::chapter_boundary(1, "ch02"),
            row(1, "Next"),
        ];
        let html = renderer(0).render_entries(&entries);
        assert!(html.contains("<li><a href=\"ch01.html\">Intro</a></li>\n"));
        assert!(html.contains("<li><a href=\"ch01.html\">Q&amp;A</a></li>\n"));
        assert!(html.contains("<li><a href=\"ch02.html\">Next</a></li>\n"));
        assert!(!html.contains("ch01\"") && !html.contains(">ch02<"));
    }

    #[test]
    fn test_rows_before_any_chapter_are_plain() {
        let html = renderer(0).render_entries(&[row(1, "Preface"), row(2, "")]);
        assert!(html.contains("<li>Preface</li>\n"));
        assert!(html.contains("<li>-</li>\n"));
    }

    #[test]
    fn test_part_boundary_is_balanced() {
        let entries = [
            TocEntry::chapter_boundary(1, "ch01"),
            row(1, "Introduction"),
            TocEntry::chapter_boundary(1, "ch02"),
            TocEntry::part_end(1),
        ];
        let html = renderer(1).render_entries(&entries);
        assert_eq!(html.matches("<ul").count(), 2);
        assert_eq!(html.matches("</ul>").count(), 2);
        assert!(html.contains("<li><a href=\"ch01.html\">Introduction</a>\n<ul>\n</ul>\n</li>\n"));
    }

    #[test]
    fn test_unclosed_part_is_closed_at_end() {
        let html = renderer(0).render_entries(&[row(0, "Part 1"), row(1, "Chapter")]);
        assert_eq!(html.matches("<ul").count(), html.matches("</ul>").count());
        assert!(html.ends_with("</ul>\n</li>\n</ul>\n"));
    }

    #[test]
    fn test_stray_part_end_is_ignored() {
        let html = renderer(0).render_entries(&[TocEntry::part_end(0)]);
        assert_eq!(html.matches("</ul>").count(), 1);
    }

    #[test]
    fn test_toclevel_limits_rows() {
        let html = renderer(0).render_entries(&[row(3, "Shown"), row(4, "Hidden")]);
        assert!(html.contains("Shown"));
        assert!(!html.contains("Hidden"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let entries = [
            TocEntry::chapter_boundary(1, "ch01"),
            row(0, "Part"),
            row(1, "One"),
            TocEntry::part_end(0),
        ];
        let r = renderer(0);
        assert_eq!(r.render_entries(&entries), r.render_entries(&entries));
    }
}
