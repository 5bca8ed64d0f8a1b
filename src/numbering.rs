//! Per-chapter section numbering.
//!
//! A [`SectionCounter`] tracks the numbers of headings below a chapter title
//! while that chapter is compiled. It produces dotted display labels such as
//! `3.1.2` and hyphenated anchors such as `3-1-2`.
//!
//! Heading levels follow the markup convention: level 1 is the chapter title
//! itself, level 2 its sections, and so on.

use crate::model::Division;

/// Localized string lookup.
///
/// `%s` and `%d` placeholders in the looked-up string are replaced by `args`
/// in order.
pub trait Translate {
    fn translate(&self, key: &str, args: &[&str]) -> String;
}

/// Formats the number of a back-matter chapter (e.g. `1` -> `A`).
pub trait FormatAppendix {
    fn format_appendix(&self, number: u32) -> String;
}

/// Collaborators needed to build display labels.
#[derive(Clone, Copy)]
pub struct Labels<'a> {
    pub i18n: &'a dyn Translate,
    pub appendix: &'a dyn FormatAppendix,
}

impl<'a> Labels<'a> {
    pub fn new(i18n: &'a dyn Translate, appendix: &'a dyn FormatAppendix) -> Self {
        Self { i18n, appendix }
    }
}

/// Numbering state for one chapter compile pass.
#[derive(Debug, Clone)]
pub struct SectionCounter {
    counter: Vec<u32>,
    division: Division,
}

impl SectionCounter {
    /// Create a counter with `max_depth` zeroed slots for `division`.
    pub fn new(max_depth: usize, division: Division) -> Self {
        Self {
            counter: vec![0; max_depth],
            division,
        }
    }

    /// Current counter values, shallowest first.
    pub fn counters(&self) -> &[u32] {
        &self.counter
    }

    /// Advance the counter for a heading at `level`.
    ///
    /// Every deeper slot restarts at 0. Levels deeper than the allocated
    /// slots leave the state unchanged.
    pub fn inc(&mut self, level: usize) {
        let Some(n) = level.checked_sub(2) else {
            // A chapter title restarts all sections.
            self.counter.fill(0);
            return;
        };

        match self.counter.get_mut(n) {
            Some(slot) => *slot += 1,
            None => {
                tracing::debug!(level, slots = self.counter.len(), "heading deeper than counter");
                return;
            }
        }
        for slot in &mut self.counter[n + 1..] {
            *slot = 0;
        }
    }

    /// Hyphenated anchor id for a heading at `level`, e.g. `3-1-2`.
    ///
    /// An unnumbered chapter yields an id without the leading number.
    pub fn anchor(&self, level: usize) -> String {
        let mut id = self
            .division
            .number()
            .map(|n| n.to_string())
            .unwrap_or_default();
        for value in self.section_numbers(level) {
            id.push('-');
            id.push_str(&value.to_string());
        }
        id
    }

    /// Localized display label for a heading at `level`.
    ///
    /// Returns `None` when the chapter is unnumbered, `secnolevel` hides
    /// numbers at this depth, or the level is deeper than the counter slots.
    pub fn prefix(&self, level: usize, secnolevel: usize, labels: Labels<'_>) -> Option<String> {
        let number = self.division.number()?;
        let postfix = labels.i18n.translate("chapter_postfix", &[]);

        if level <= 1 {
            if secnolevel < 1 {
                return None;
            }
            let (key, shown) = if self.division.is_part() {
                ("part", number.to_string())
            } else if self.division.in_back_matter() {
                ("appendix", labels.appendix.format_appendix(number))
            } else {
                ("chapter", number.to_string())
            };
            return Some(format!("{}{}", labels.i18n.translate(key, &[&shown]), postfix));
        }

        if secnolevel < level || level - 1 > self.counter.len() {
            return None;
        }
        let mut label = if self.division.in_back_matter() {
            labels.appendix.format_appendix(number)
        } else {
            number.to_string()
        };
        for value in self.section_numbers(level) {
            label.push('.');
            label.push_str(&value.to_string());
        }
        label.push_str(&postfix);
        Some(label)
    }

    /// Counter slots 0 through `level - 2`, clipped to the allocated range.
    fn section_numbers(&self, level: usize) -> &[u32] {
        let len = level.saturating_sub(1).min(self.counter.len());
        &self.counter[..len]
    }
}
