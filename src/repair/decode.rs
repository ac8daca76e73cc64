//! Byte decoding with a fixed encoding preference order.
//!
//! Config files edited on Windows arrive in a handful of encodings. Decoding
//! tries each candidate in order and stops at the first success: UTF-8,
//! UTF-8 with BOM, Latin-1, Windows-1252, ISO-8859-1. Latin-1 maps every
//! byte, so the later entries are only reachable through an explicit caller
//! subset, but the full order is kept as the documented contract.

/// The encoding a file was successfully decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Utf8Bom,
    Latin1,
    Windows1252,
    Iso8859_1,
}

impl SourceEncoding {
    /// Human-readable encoding label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Bom => "utf-8-sig",
            Self::Latin1 => "latin-1",
            Self::Windows1252 => "windows-1252",
            Self::Iso8859_1 => "iso-8859-1",
        }
    }
}

const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Windows-1252 mappings for 0x80..=0x9F; `None` marks undefined bytes.
const CP1252_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

/// Decode file bytes, trying encodings in preference order.
///
/// Returns the decoded text and the encoding that succeeded, or `None` when
/// every candidate fails.
pub fn decode_bytes(bytes: &[u8]) -> Option<(String, SourceEncoding)> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some((text.to_string(), SourceEncoding::Utf8));
    }

    if let Some(rest) = bytes.strip_prefix(BOM_UTF8) {
        if let Ok(text) = std::str::from_utf8(rest) {
            return Some((text.to_string(), SourceEncoding::Utf8Bom));
        }
    }

    if let Some(text) = decode_latin1(bytes) {
        return Some((text, SourceEncoding::Latin1));
    }

    if let Some(text) = decode_windows1252(bytes) {
        return Some((text, SourceEncoding::Windows1252));
    }

    decode_latin1(bytes).map(|text| (text, SourceEncoding::Iso8859_1))
}

fn decode_latin1(bytes: &[u8]) -> Option<String> {
    Some(bytes.iter().map(|&b| b as char).collect())
}

fn decode_windows1252(bytes: &[u8]) -> Option<String> {
    let mut text = String::with_capacity(bytes.len());
    for &b in bytes {
        let c = match b {
            0x80..=0x9F => CP1252_HIGH[(b - 0x80) as usize]?,
            _ => b as char,
        };
        text.push(c);
    }
    Some(text)
}
