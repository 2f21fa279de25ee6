//! Escaped-Unicode body decoding.
//!
//! Some servers send JSON with `\uXXXX` escapes left in place. For display we
//! expand them into the characters they stand for. The expansion is
//! best-effort: any malformed input is reported as an error so the caller can
//! fall back to the raw bytes.

use thiserror::Error;

/// Why a body could not be decoded for display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("body is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("malformed \\u escape at byte {offset}")]
    MalformedEscape { offset: usize },

    #[error("unpaired surrogate escape at byte {offset}")]
    LoneSurrogate { offset: usize },
}

/// Expands literal `\uXXXX` sequences into the characters they encode.
///
/// - A high surrogate escape must be followed by a low surrogate escape; the
///   pair becomes one character.
/// - An escaped backslash (`\\`) is copied through untouched, so `\\u0041`
///   stays as written.
/// - Other backslashes are kept as they are.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the body is not UTF-8, a `\u` is not followed
/// by four hex digits, or a surrogate escape is unpaired.
pub fn decode_unicode_escapes(body: &[u8]) -> Result<String, DecodeError> {
    let text = std::str::from_utf8(body).map_err(|e| DecodeError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })?;

    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while let Some(found) = text[i..].find('\\') {
        let at = i + found;
        out.push_str(&text[i..at]);
        let tail = &text[at..];
        if tail.starts_with("\\\\") {
            out.push_str("\\\\");
            i = at + 2;
        } else if tail.starts_with("\\u") {
            let (ch, len) = decode_escape(tail, at)?;
            out.push(ch);
            i = at + len;
        } else {
            out.push('\\');
            i = at + 1;
        }
    }
    out.push_str(&text[i..]);

    Ok(out)
}

/// Decodes the escape at the start of `tail`, returning the character and the
/// number of bytes consumed (6, or 12 for a surrogate pair).
fn decode_escape(tail: &str, offset: usize) -> Result<(char, usize), DecodeError> {
    let unit = parse_hex4(&tail[2..]).ok_or(DecodeError::MalformedEscape { offset })?;

    let (code, len) = match unit {
        0xD800..=0xDBFF => {
            let low = tail
                .get(6..)
                .filter(|next| next.starts_with("\\u"))
                .and_then(|next| parse_hex4(&next[2..]))
                .filter(|low| (0xDC00..=0xDFFF).contains(low))
                .ok_or(DecodeError::LoneSurrogate { offset })?;
            (0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00), 12)
        }
        0xDC00..=0xDFFF => return Err(DecodeError::LoneSurrogate { offset }),
        _ => (unit, 6),
    };

    char::from_u32(code)
        .map(|ch| (ch, len))
        .ok_or(DecodeError::MalformedEscape { offset })
}

/// Parses exactly four leading hex digits.
fn parse_hex4(s: &str) -> Option<u32> {
    let digits = s.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
