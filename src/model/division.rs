//! Chapter and part references handed to the numbering engine.

/// A top-level unit of a book as seen by section numbering.
///
/// Whether a unit is a part or a chapter, and whether a chapter sits in the
/// back matter, is fixed when the value is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Division {
    /// A chapter. Back-matter chapters are numbered as appendices.
    Chapter {
        number: Option<u32>,
        back_matter: bool,
    },
    /// A part grouping several chapters, numbered independently.
    Part { number: Option<u32> },
}

impl Division {
    /// A numbered chapter in the main body.
    pub fn chapter(number: u32) -> Self {
        Division::Chapter {
            number: Some(number),
            back_matter: false,
        }
    }

    /// A numbered appendix.
    pub fn appendix(number: u32) -> Self {
        Division::Chapter {
            number: Some(number),
            back_matter: true,
        }
    }

    /// A numbered part.
    pub fn part(number: u32) -> Self {
        Division::Part {
            number: Some(number),
        }
    }

    /// An unnumbered chapter, such as a preface.
    pub fn unnumbered() -> Self {
        Division::Chapter {
            number: None,
            back_matter: false,
        }
    }

    pub fn number(&self) -> Option<u32> {
        match *self {
            Division::Chapter { number, .. } | Division::Part { number } => number,
        }
    }

    pub fn is_part(&self) -> bool {
        matches!(self, Division::Part { .. })
    }

    pub fn in_back_matter(&self) -> bool {
        matches!(
            self,
            Division::Chapter {
                back_matter: true,
                ..
            }
        )
    }
}
