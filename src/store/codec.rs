//! Line encoding for TOC records.
//!
//! A record is four TAB-separated fields: `level`, `filename`, `title` and
//! `args`. Text fields are percent-encoded so that delimiters inside values
//! can never split a record. Args are `key=value` pairs joined by `, `.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use crate::error::{Error, Result};
use crate::model::{TocArgs, TocEntry};

pub(crate) const FIELD_SEPARATOR: char = '\t';
const PAIR_SEPARATOR: &str = ", ";
const FIELD_COUNT: usize = 4;

/// Bytes escaped in `filename` and `title`. `CONTROLS` covers TAB, CR and LF.
const TEXT: &AsciiSet = &CONTROLS.add(b'%');

/// Bytes escaped in arg keys and values.
const ARG: &AsciiSet = &TEXT.add(b'=').add(b',').add(b' ');

/// Encode one record, without the trailing newline.
pub(crate) fn encode_record(level: usize, filename: &str, title: &str, args: &TocArgs) -> String {
    let mut line = String::with_capacity(filename.len() + title.len() + 16);
    line.push_str(&level.to_string());
    line.push(FIELD_SEPARATOR);
    line.extend(utf8_percent_encode(filename, TEXT));
    line.push(FIELD_SEPARATOR);
    line.extend(utf8_percent_encode(title, TEXT));
    line.push(FIELD_SEPARATOR);
    line.push_str(&encode_args(args));
    line
}

pub(crate) fn encode_args(args: &TocArgs) -> String {
    args.iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, ARG),
                utf8_percent_encode(value, ARG)
            )
        })
        .collect::<Vec<_>>()
        .join(PAIR_SEPARATOR)
}

/// Decode one line. `line_no` is 1-based and only used for error reporting.
pub(crate) fn decode_record(line: &str, line_no: usize) -> Result<TocEntry> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [level, filename, title, args] = fields[..] else {
        return Err(corruption(
            line_no,
            format!(
                "expected {FIELD_COUNT} fields, found {} in {line:?}",
                fields.len()
            ),
        ));
    };

    let level = level
        .parse::<usize>()
        .map_err(|_| corruption(line_no, format!("invalid level {level:?}")))?;

    Ok(TocEntry {
        level,
        filename: decode_text(filename, line_no)?.into_owned(),
        title: decode_text(title, line_no)?.into_owned(),
        args: decode_args(args, line_no)?,
    })
}

pub(crate) fn decode_args(field: &str, line_no: usize) -> Result<TocArgs> {
    if field.is_empty() {
        return Ok(TocArgs::new());
    }

    field
        .split(PAIR_SEPARATOR)
        .map(|pair| -> Result<(String, String)> {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Ok((
                decode_text(key, line_no)?.into_owned(),
                decode_text(value, line_no)?.into_owned(),
            ))
        })
        .collect()
}

fn decode_text(text: &str, line_no: usize) -> Result<Cow<'_, str>> {
    percent_decode_str(text)
        .decode_utf8()
        .map_err(|e| corruption(line_no, format!("invalid UTF-8 after unescaping: {e}")))
}

fn corruption(line: usize, reason: String) -> Error {
    Error::StreamCorruption { line, reason }
}
