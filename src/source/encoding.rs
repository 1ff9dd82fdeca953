//! Source encoding detection and conversion
//!
//! A Python file declares its own encoding: a UTF-8 byte order mark, or a
//! `coding[:=] <name>` comment on line 1 (or line 2, when line 1 is blank
//! or itself a comment). Everything else is UTF-8. The detected encoding
//! is used for both the decode on read and the encode on write, so a
//! Latin-1 file stays Latin-1.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

static CODING_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t\f]*#.*?coding[:=][ \t]*([-_.a-zA-Z0-9]+)").expect("valid regex")
});

/// Encoding family a source file can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8 { bom: bool },
    Latin1,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The file declares an encoding this tool does not handle
    UnknownEncoding(String),
    InvalidUtf8,
    /// A character with no representation in the target encoding
    Unencodable(char),
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::UnknownEncoding(name) => {
                write!(f, "unsupported declared encoding '{}'", name)
            }
            EncodingError::InvalidUtf8 => write!(f, "source is not valid UTF-8"),
            EncodingError::Unencodable(c) => {
                write!(f, "character {:?} cannot be encoded", c)
            }
        }
    }
}

impl std::error::Error for EncodingError {}

/// Detect the declared encoding from the raw bytes of a file
pub fn detect(raw: &[u8]) -> Result<SourceEncoding, EncodingError> {
    if raw.starts_with(UTF8_BOM) {
        return Ok(SourceEncoding::Utf8 { bom: true });
    }

    let mut lines = raw.split(|&b| b == b'\n');
    let first = lines.next().unwrap_or_default();
    if let Some(encoding) = declared_on(first)? {
        return Ok(encoding);
    }
    // Line 2 only counts when line 1 is blank or a comment
    let first_text = String::from_utf8_lossy(first);
    let first_trimmed = first_text.trim();
    if first_trimmed.is_empty() || first_trimmed.starts_with('#') {
        if let Some(line) = lines.next() {
            if let Some(encoding) = declared_on(line)? {
                return Ok(encoding);
            }
        }
    }

    Ok(SourceEncoding::Utf8 { bom: false })
}

fn declared_on(line: &[u8]) -> Result<Option<SourceEncoding>, EncodingError> {
    let text = String::from_utf8_lossy(line);
    match CODING_DECLARATION.captures(&text) {
        Some(caps) => by_name(&caps[1]).map(Some),
        None => Ok(None),
    }
}

fn by_name(name: &str) -> Result<SourceEncoding, EncodingError> {
    let normalized = name.to_lowercase().replace(['-', '_'], "");
    match normalized.as_str() {
        "utf8" | "utf8sig" | "ascii" | "usascii" => Ok(SourceEncoding::Utf8 { bom: false }),
        "latin1" | "latin" | "iso88591" | "8859" | "cp819" => Ok(SourceEncoding::Latin1),
        _ => Err(EncodingError::UnknownEncoding(name.to_string())),
    }
}

impl SourceEncoding {
    pub fn decode(&self, raw: &[u8]) -> Result<String, EncodingError> {
        match self {
            SourceEncoding::Utf8 { bom } => {
                let body = if *bom { &raw[UTF8_BOM.len()..] } else { raw };
                std::str::from_utf8(body)
                    .map(str::to_string)
                    .map_err(|_| EncodingError::InvalidUtf8)
            }
            SourceEncoding::Latin1 => Ok(raw.iter().map(|&b| b as char).collect()),
        }
    }

    /// Encode cleaned text for writing, restoring the BOM when one was read
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        match self {
            SourceEncoding::Utf8 { bom } => {
                let mut bytes = Vec::with_capacity(text.len() + UTF8_BOM.len());
                if *bom {
                    bytes.extend_from_slice(UTF8_BOM);
                }
                bytes.extend_from_slice(text.as_bytes());
                Ok(bytes)
            }
            SourceEncoding::Latin1 => text
                .chars()
                .map(|c| {
                    let code = c as u32;
                    if code <= 0xFF {
                        Ok(code as u8)
                    } else {
                        Err(EncodingError::Unencodable(c))
                    }
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(detect(b"x = 1\n"), Ok(SourceEncoding::Utf8 { bom: false }));
    }

    #[test]
    fn test_bom_wins() {
        let raw = [UTF8_BOM, b"x = 1\n".as_slice()].concat();
        assert_eq!(detect(&raw), Ok(SourceEncoding::Utf8 { bom: true }));
    }

    #[test]
    fn test_coding_comment_on_line_one() {
        assert_eq!(
            detect(b"# -*- coding: latin-1 -*-\nx = 1\n"),
            Ok(SourceEncoding::Latin1)
        );
    }

    #[test]
    fn test_coding_comment_on_line_two_after_shebang() {
        assert_eq!(
            detect(b"#!/usr/bin/env python\n# coding=iso-8859-1\n"),
            Ok(SourceEncoding::Latin1)
        );
    }

    #[test]
    fn test_coding_comment_after_code_is_ignored() {
        assert_eq!(
            detect(b"x = 1\n# coding: latin-1\n"),
            Ok(SourceEncoding::Utf8 { bom: false })
        );
    }

    #[test]
    fn test_unknown_encoding_is_an_error() {
        assert_eq!(
            detect(b"# coding: shift-jis\n"),
            Err(EncodingError::UnknownEncoding("shift-jis".to_string()))
        );
    }

    #[test]
    fn test_latin1_roundtrip() {
        let raw: Vec<u8> = vec![b'x', b' ', 0xE9, b'\n'];
        let text = SourceEncoding::Latin1.decode(&raw).unwrap();
        assert_eq!(text, "x \u{e9}\n");
        assert_eq!(SourceEncoding::Latin1.encode(&text).unwrap(), raw);
    }

    #[test]
    fn test_latin1_rejects_wide_chars() {
        assert_eq!(
            SourceEncoding::Latin1.encode("\u{0142}"),
            Err(EncodingError::Unencodable('\u{0142}'))
        );
    }

    #[test]
    fn test_utf8_bom_roundtrip() {
        let raw = [UTF8_BOM, "x = \u{e9}\n".as_bytes()].concat();
        let encoding = detect(&raw).unwrap();
        let text = encoding.decode(&raw).unwrap();
        assert_eq!(text, "x = \u{e9}\n");
        assert_eq!(encoding.encode(&text).unwrap(), raw);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let raw = vec![0xFF, 0xFE];
        assert_eq!(
            SourceEncoding::Utf8 { bom: false }.decode(&raw),
            Err(EncodingError::InvalidUtf8)
        );
    }
}
