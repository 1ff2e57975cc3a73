#![forbid(unsafe_code)]

//! ANSI escape sequence handling.
//!
//! Widgets embed SGR sequences (`ESC [ ... m`) in their output, so every
//! measurement and truncation step has to look through them. Recognized
//! forms:
//! - CSI sequences: `ESC [` ... final byte (0x40-0x7E)
//! - OSC sequences: `ESC ]` ... BEL (0x07) or ST (ESC \)
//! - DCS/PM/APC sequences: `ESC P`/`ESC ^`/`ESC _` ... ST
//! - Two-character sequences: `ESC` + single char

use std::borrow::Cow;

const ESC: u8 = 0x1B;

/// A run of a string that is either visible text or one escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Escape(&'a str),
}

/// Iterator splitting a string into [`Segment`]s.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
}

/// Split `s` into alternating text and escape segments.
#[must_use]
pub fn segments(s: &str) -> Segments<'_> {
    Segments { text: s, pos: 0 }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        let start = self.pos;
        if start >= bytes.len() {
            return None;
        }
        if bytes[start] == ESC {
            let end = skip_escape_sequence(bytes, start);
            self.pos = end;
            return Some(Segment::Escape(&self.text[start..end]));
        }
        // ESC is a single ASCII byte, so splitting at ESC positions never
        // breaks a UTF-8 sequence.
        let end = bytes[start..]
            .iter()
            .position(|&b| b == ESC)
            .map_or(bytes.len(), |offset| start + offset);
        self.pos = end;
        Some(Segment::Text(&self.text[start..end]))
    }
}

/// Strip ANSI escape sequences from a string.
///
/// Returns `Cow::Borrowed` when no escape sequences are present.
#[must_use]
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&ESC) {
        return Cow::Borrowed(s);
    }
    let mut result = String::with_capacity(s.len());
    for segment in segments(s) {
        if let Segment::Text(text) = segment {
            result.push_str(text);
        }
    }
    Cow::Owned(result)
}

/// Whether `seq` is a complete SGR sequence (`ESC [ <digits/;> m`).
#[must_use]
pub fn is_sgr(seq: &str) -> bool {
    seq.strip_prefix("\x1b[")
        .and_then(|rest| rest.strip_suffix('m'))
        .is_some_and(|params| params.bytes().all(|b| b.is_ascii_digit() || b == b';'))
}

/// Whether `seq` is an SGR sequence that resets every attribute.
#[must_use]
pub fn is_sgr_reset(seq: &str) -> bool {
    matches!(seq, "\x1b[0m" | "\x1b[m")
}

/// Remove everything that could move the cursor or corrupt the grid.
///
/// SGR sequences survive; every other escape sequence and every control
/// character is dropped, except tabs, which become a single space so
/// adjacent words stay apart.
#[must_use]
pub fn sanitize(s: &str) -> Cow<'_, str> {
    if !s.chars().any(char::is_control) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len());
    for segment in segments(s) {
        match segment {
            Segment::Escape(seq) if is_sgr(seq) => out.push_str(seq),
            Segment::Escape(_) => {}
            Segment::Text(text) => {
                for c in text.chars() {
                    if c == '\t' {
                        out.push(' ');
                    } else if !c.is_control() {
                        out.push(c);
                    }
                }
            }
        }
    }
    Cow::Owned(out)
}

/// Skip an escape sequence starting at `pos` (which points to ESC).
/// Returns the byte index after the complete sequence.
fn skip_escape_sequence(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    if next >= bytes.len() {
        return bytes.len();
    }
    match bytes[next] {
        b'[' => skip_csi(bytes, next + 1),
        b']' | b'P' | b'^' | b'_' => skip_string_terminated(bytes, next + 1),
        // Two-character sequence; the second byte is ASCII here unless the
        // input is malformed, in which case only ESC is consumed.
        b if b.is_ascii() => next + 1,
        _ => next,
    }
}

/// Skip a CSI sequence. `pos` is the byte after `[`.
///
/// Parameter bytes (0x30-0x3F), intermediate bytes (0x20-0x2F), final byte
/// (0x40-0x7E).
fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        let b = bytes[i];
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            // Invalid byte: abort the sequence here.
            return i;
        }
        i += 1;
    }
    bytes.len()
}

/// Skip a string-terminated sequence (OSC, DCS, PM, APC).
/// Terminates with BEL or ST (ESC \); unterminated runs to the end.
fn skip_string_terminated(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}
