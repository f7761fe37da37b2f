// src/document.rs
// =============================================================================
// This module turns a response body into a DOM tree.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Is built on html5ever (Mozilla's HTML parser)
// - Recovers from broken markup the way browsers do
//
// Because html5ever accepts any text, the only body we reject is one that
// isn't text at all. We use the "binary data byte" check from the WHATWG
// MIME sniffing standard: control bytes that never show up in a text file.
// =============================================================================

use scraper::Html;

use crate::error::ParseError;

// How much of the body to look at when deciding if it's binary
const SNIFF_LEN: usize = 1024;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];

/// Parses a response body into an HTML document.
///
/// Bodies starting with a byte order mark are decoded accordingly; anything
/// else is read as UTF-8, replacing invalid sequences.
///
/// # Errors
///
/// Returns [`ParseError::Binary`] if the body holds binary data.
pub fn parse_document(body: &[u8]) -> Result<Html, ParseError> {
    let text = decode_text(body)?;
    Ok(Html::parse_document(&text))
}

fn decode_text(body: &[u8]) -> Result<String, ParseError> {
    if let Some(rest) = body.strip_prefix(UTF16_BE_BOM) {
        return Ok(decode_utf16(rest, u16::from_be_bytes));
    }
    if let Some(rest) = body.strip_prefix(UTF16_LE_BOM) {
        return Ok(decode_utf16(rest, u16::from_le_bytes));
    }

    let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);

    if let Some(offset) = body.iter().take(SNIFF_LEN).position(|&b| is_binary_byte(b)) {
        return Err(ParseError::Binary {
            byte: body[offset],
            offset,
        });
    }

    Ok(String::from_utf8_lossy(body).into_owned())
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| to_unit([pair[0], pair[1]]))
        .collect();
    let mut text = String::from_utf16_lossy(&units);
    // A truncated body leaves half a code unit behind
    if bytes.len() % 2 == 1 {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}

// 0x00-0x08, 0x0B, 0x0E-0x1A, 0x1C-0x1F
// (tab, newline, form feed, carriage return and escape are allowed)
fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}
