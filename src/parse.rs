//! Textual quaternion literals.
//!
//! The accepted form is one to four signed terms with no interior
//! whitespace, each an `f64` literal optionally tagged with a unit
//! `i`, `j` or `k`, the whole thing optionally wrapped in a single pair
//! of parentheses: `"1.2-3.4i+5.6j-7.8k"`, `"( 2.4 )"`, `"-infj"`.
//! Untagged terms are the real component. Each component may appear at
//! most once.

use crate::error::{QuatError, Result};
use crate::Quaternion;

use std::str::FromStr;

impl FromStr for Quaternion {
    type Err = QuatError;

    fn from_str(s: &str) -> Result<Self> {
        parse_literal(s)
    }
}

/// Slot order: real, `i`, `j`, `k`.
const SLOT_NAMES: [&str; 4] = ["real", "'i'", "'j'", "'k'"];

fn parse_literal(input: &str) -> Result<Quaternion> {
    let mut body = input.trim();
    if let Some(open) = body.strip_prefix('(') {
        body = open
            .strip_suffix(')')
            .ok_or_else(|| QuatError::value(format!("unbalanced parenthesis in {input:?}")))?
            .trim();
    }
    if body.is_empty() {
        return Err(QuatError::value("empty quaternion literal"));
    }

    let bytes = body.as_bytes();
    let mut slots: [Option<f64>; 4] = [None; 4];
    let mut pos = 0;
    let mut first = true;

    while pos < bytes.len() {
        let start = pos;
        if bytes[pos] == b'+' || bytes[pos] == b'-' {
            pos += 1;
        } else if !first {
            let offender = body[pos..].chars().next().unwrap_or('?');
            return Err(QuatError::value(format!(
                "unexpected character {offender:?} in {input:?}"
            )));
        }

        pos = scan_number(bytes, pos)
            .ok_or_else(|| QuatError::value(format!("expected a number in {input:?}")))?;
        let text = &body[start..pos];
        let value: f64 = text
            .parse()
            .map_err(|_| QuatError::value(format!("invalid number {text:?} in {input:?}")))?;

        let slot = match bytes.get(pos) {
            Some(b'i') => {
                pos += 1;
                1
            }
            Some(b'j') => {
                pos += 1;
                2
            }
            Some(b'k') => {
                pos += 1;
                3
            }
            _ => 0,
        };
        if slots[slot].is_some() {
            return Err(QuatError::value(format!(
                "duplicate {} component in {input:?}",
                SLOT_NAMES[slot]
            )));
        }
        slots[slot] = Some(value);
        first = false;
    }

    Ok(Quaternion::new(
        slots[0].unwrap_or(0.0),
        slots[1].unwrap_or(0.0),
        slots[2].unwrap_or(0.0),
        slots[3].unwrap_or(0.0),
    ))
}

/// Advances past the digits of one number (decimal or exponent form, or
/// the `inf`/`infinity`/`nan` keywords). Returns `None` when no number
/// starts at `pos`. The sign, if any, has already been consumed.
fn scan_number(bytes: &[u8], pos: usize) -> Option<usize> {
    for keyword in [&b"infinity"[..], b"inf", b"nan"] {
        if bytes.len() - pos >= keyword.len()
            && bytes[pos..pos + keyword.len()].eq_ignore_ascii_case(keyword)
        {
            return Some(pos + keyword.len());
        }
    }

    let mut end = pos;
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.') {
        end += 1;
    }
    if end == pos {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        if exp < bytes.len() && bytes[exp].is_ascii_digit() {
            end = exp;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
        }
    }
    Some(end)
}
