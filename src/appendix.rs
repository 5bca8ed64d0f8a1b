//! Appendix number formats.

use serde::Deserialize;

use crate::numbering::FormatAppendix;

/// How back-matter chapter numbers are displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum AppendixFormat {
    /// `1`, `2`, `3`
    #[serde(rename = "arabic")]
    Arabic,
    /// `a`, `b`, ..., `z`, `aa`
    #[serde(rename = "alpha")]
    Alpha,
    /// `A`, `B`, ..., `Z`, `AA`
    #[default]
    #[serde(rename = "ALPHA")]
    AlphaUpper,
    /// `i`, `ii`, `iii`
    #[serde(rename = "roman")]
    Roman,
    /// `I`, `II`, `III`
    #[serde(rename = "ROMAN")]
    RomanUpper,
}

impl FormatAppendix for AppendixFormat {
    fn format_appendix(&self, number: u32) -> String {
        match self {
            AppendixFormat::Arabic => number.to_string(),
            AppendixFormat::Alpha => to_alpha(number).to_ascii_lowercase(),
            AppendixFormat::AlphaUpper => to_alpha(number),
            AppendixFormat::Roman => to_roman(number).to_ascii_lowercase(),
            AppendixFormat::RomanUpper => to_roman(number),
        }
    }
}

/// Bijective base-26: 1 -> A, 26 -> Z, 27 -> AA.
fn to_alpha(mut number: u32) -> String {
    if number == 0 {
        return "0".to_string();
    }
    let mut letters = Vec::new();
    while number > 0 {
        number -= 1;
        letters.push(b'A' + (number % 26) as u8);
        number /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

fn to_roman(mut number: u32) -> String {
    const NUMERALS: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    if number == 0 {
        return "0".to_string();
    }
    let mut result = String::new();
    for (value, numeral) in NUMERALS {
        while number >= value {
            result.push_str(numeral);
            number -= value;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha() {
        assert_eq!(AppendixFormat::AlphaUpper.format_appendix(1), "A");
        assert_eq!(AppendixFormat::AlphaUpper.format_appendix(26), "Z");
        assert_eq!(AppendixFormat::AlphaUpper.format_appendix(27), "AA");
        assert_eq!(AppendixFormat::Alpha.format_appendix(2), "b");
    }

    #[test]
    fn test_roman() {
        assert_eq!(AppendixFormat::RomanUpper.format_appendix(4), "IV");
        assert_eq!(AppendixFormat::RomanUpper.format_appendix(1994), "MCMXCIV");
        assert_eq!(AppendixFormat::Roman.format_appendix(9), "ix");
    }

    #[test]
    fn test_arabic_and_zero() {
        assert_eq!(AppendixFormat::Arabic.format_appendix(12), "12");
        assert_eq!(AppendixFormat::AlphaUpper.format_appendix(0), "0");
    }

    #[test]
    fn test_deserialize_names() {
        let format: AppendixFormat = serde_json::from_str("\"roman\"").unwrap();
        assert_eq!(format, AppendixFormat::Roman);
        let format: AppendixFormat = serde_json::from_str("\"ALPHA\"").unwrap();
        assert_eq!(format, AppendixFormat::AlphaUpper);
    }
}
