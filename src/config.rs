//! Resolved book configuration consumed by numbering and TOC rendering.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::appendix::AppendixFormat;
use crate::error::{Error, Result};
use crate::i18n::Catalog;

/// Configuration for numbering and TOC rendering.
///
/// Values are expected to be fully resolved; no inheritance between config
/// files is performed here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Deepest heading level that shows a section number.
    pub secnolevel: usize,
    /// Deepest heading level listed in the rendered TOC.
    pub toclevel: usize,
    /// Counter slots allocated per chapter (heading levels 2 and deeper).
    pub section_depth: usize,
    /// Extension appended to chapter output names.
    pub htmlext: String,
    /// Level whose rows open a nested list.
    pub part_level: usize,
    pub language: String,
    pub appendix_format: AppendixFormat,
    /// Per-key catalog overrides.
    pub translations: BTreeMap<String, String>,
    /// Target of the leading "top" link. Defaults to `index.<htmlext>`.
    pub top_href: Option<String>,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            secnolevel: 2,
            toclevel: 3,
            section_depth: 5,
            htmlext: "html".to_string(),
            part_level: 0,
            language: "en".to_string(),
            appendix_format: AppendixFormat::default(),
            translations: BTreeMap::new(),
            top_href: None,
        }
    }
}

impl TocConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TocConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.toclevel == 0 {
            return Err(Error::Config("toclevel must be at least 1".to_string()));
        }
        if self.htmlext.starts_with('.') {
            return Err(Error::Config(format!(
                "htmlext must not start with a dot: {:?}",
                self.htmlext
            )));
        }
        Ok(())
    }

    /// Output path for a chapter stem, e.g. `ch01` -> `ch01.html`.
    pub fn output_path(&self, stem: &str) -> String {
        if self.htmlext.is_empty() {
            stem.to_string()
        } else {
            format!("{stem}.{}", self.htmlext)
        }
    }

    pub fn top_href(&self) -> String {
        self.top_href
            .clone()
            .unwrap_or_else(|| self.output_path("index"))
    }

    /// String catalog for the configured language with overrides applied.
    pub fn catalog(&self) -> Catalog {
        Catalog::builtin(&self.language).with_overrides(&self.translations)
    }
}
