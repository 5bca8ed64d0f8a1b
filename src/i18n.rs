//! Built-in string catalog for numbering labels.

use std::collections::HashMap;

use crate::numbering::Translate;

const EN: &[(&str, &str)] = &[
    ("chapter", "Chapter %d"),
    ("part", "Part %s"),
    ("appendix", "Appendix %s"),
    ("chapter_postfix", ". "),
    ("toc_top", "TOP"),
];

const JA: &[(&str, &str)] = &[
    ("chapter", "第%d章"),
    ("part", "第%s部"),
    ("appendix", "付録%s"),
    ("chapter_postfix", "　"),
    ("toc_top", "TOP"),
];

/// Key/format table implementing [`Translate`].
///
/// Unknown keys translate to the key itself so a missing entry shows up in
/// output rather than vanishing.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    strings: HashMap<String, String>,
}

impl Catalog {
    /// The built-in table for `language`, falling back to English.
    pub fn builtin(language: &str) -> Self {
        let table = match language.split(['-', '_']).next().unwrap_or_default() {
            "ja" => JA,
            "en" => EN,
            other => {
                tracing::debug!(language = other, "no built-in catalog, using en");
                EN
            }
        };
        Self {
            strings: table
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    /// Replace or add entries.
    pub fn with_overrides<'a>(mut self, overrides: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        for (key, value) in overrides {
            self.strings.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str, args: &[&str]) -> String {
        match self.get(key) {
            Some(format) => substitute(format, args),
            None => key.to_string(),
        }
    }
}

/// Replace `%s`/`%d` with `args` in order; `%%` is a literal percent.
fn substitute(format: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(format.len());
    let mut args = args.iter();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some('s') | Some('d') => {
                chars.next();
                if let Some(arg) = args.next() {
                    result.push_str(arg);
                }
            }
            Some('%') => {
                chars.next();
                result.push('%');
            }
            _ => result.push('%'),
        }
    }

    result
}
