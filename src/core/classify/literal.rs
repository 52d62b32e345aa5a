//! Decoding of Python literal tokens into values.
//!
//! Works on the raw token text so it does not depend on how the grammar
//! splits string contents into child nodes.

use crate::core::LiteralValue;

/// Decoded string token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringLiteral {
    Text(String),
    Bytes(Vec<u8>),
    /// f-string or t-string; its value is only known at runtime.
    Formatted,
}

/// Decode a single Python string token such as `'a'`, `r"\d"`, `b"\x00"`
/// or a triple-quoted string.
///
/// Returns None for malformed tokens and for text containing a named
/// escape (`\N{EM DASH}`), whose value needs the Unicode name table.
pub fn decode_string_literal(raw: &str) -> Option<StringLiteral> {
    let quote_at = raw.find(['\'', '"'])?;
    let prefix = raw[..quote_at].to_ascii_lowercase();
    if !prefix.chars().all(|c| matches!(c, 'r' | 'b' | 'u' | 'f' | 't')) {
        return None;
    }

    let rest = &raw[quote_at..];
    let quote = &rest[..1];
    let triple = quote.repeat(3);
    let delimiter = if rest.starts_with(&triple) && rest.len() >= 6 {
        triple.as_str()
    } else {
        quote
    };

    if rest.len() < delimiter.len() * 2 || !rest.ends_with(delimiter) {
        return None;
    }
    let body = &rest[delimiter.len()..rest.len() - delimiter.len()];

    if prefix.contains('f') || prefix.contains('t') {
        return Some(StringLiteral::Formatted);
    }

    let is_raw = prefix.contains('r');
    let is_bytes = prefix.contains('b');

    let units = if is_raw {
        body.chars().map(Unit::Char).collect()
    } else {
        unescape(body, is_bytes)?
    };

    if is_bytes {
        let mut bytes = Vec::with_capacity(units.len());
        for unit in units {
            match unit {
                Unit::Byte(b) => bytes.push(b),
                Unit::Char(c) => {
                    let mut buf = [0u8; 4];
                    bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                }
            }
        }
        Some(StringLiteral::Bytes(bytes))
    } else {
        let text = units
            .into_iter()
            .map(|unit| match unit {
                Unit::Char(c) => c,
                Unit::Byte(b) => char::from(b),
            })
            .collect();
        Some(StringLiteral::Text(text))
    }
}

/// One decoded element: a character from the source, or a byte produced
/// by an escape inside a bytes literal.
enum Unit {
    Char(char),
    Byte(u8),
}

fn unescape(body: &str, is_bytes: bool) -> Option<Vec<Unit>> {
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(Unit::Char(c));
            continue;
        }
        let Some(next) = chars.next() else {
            out.push(Unit::Char('\\'));
            break;
        };
        match next {
            // Line continuation
            '\n' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\\' | '\'' | '"' => out.push(Unit::Char(next)),
            'a' => out.push(Unit::Char('\x07')),
            'b' => out.push(Unit::Char('\x08')),
            'f' => out.push(Unit::Char('\x0c')),
            'n' => out.push(Unit::Char('\n')),
            'r' => out.push(Unit::Char('\r')),
            't' => out.push(Unit::Char('\t')),
            'v' => out.push(Unit::Char('\x0b')),
            '0'..='7' => {
                let mut value = next.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            chars.next();
                        }
                        None => break,
                    }
                }
                push_code_point(&mut out, value, is_bytes);
            }
            'x' => match take_hex(&mut chars, 2) {
                Some(value) => push_code_point(&mut out, value, is_bytes),
                None => {
                    out.push(Unit::Char('\\'));
                    out.push(Unit::Char('x'));
                }
            },
            'u' | 'U' if !is_bytes => {
                let width = if next == 'u' { 4 } else { 8 };
                match take_hex(&mut chars, width).and_then(char::from_u32) {
                    Some(ch) => out.push(Unit::Char(ch)),
                    None => {
                        out.push(Unit::Char('\\'));
                        out.push(Unit::Char(next));
                    }
                }
            }
            'N' if !is_bytes => return None,
            // Unknown escapes are kept verbatim.
            other => {
                out.push(Unit::Char('\\'));
                out.push(Unit::Char(other));
            }
        }
    }

    Some(out)
}

fn push_code_point(out: &mut Vec<Unit>, value: u32, is_bytes: bool) {
    if is_bytes {
        out.push(Unit::Byte((value & 0xff) as u8));
    } else {
        out.push(Unit::Char(char::from_u32(value).unwrap_or('\u{fffd}')));
    }
}

fn take_hex(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, width: usize) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..width {
        let digit = chars.peek()?.to_digit(16)?;
        chars.next();
        value = value.checked_mul(16)? + digit;
    }
    Some(value)
}

/// Decode an `integer` token, which also covers imaginary literals like `3j`.
pub fn decode_integer_literal(raw: &str) -> Option<LiteralValue> {
    let cleaned: String = raw.chars().filter(|c| *c != '_').collect();
    if cleaned.ends_with(['j', 'J']) {
        return Some(LiteralValue::Complex(raw.to_string()));
    }
    let cleaned = cleaned.trim_end_matches(['l', 'L']);

    let lower = cleaned.to_ascii_lowercase();
    let (digits, radix) = if let Some(hex) = lower.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        (oct, 8)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        (bin, 2)
    } else {
        (lower.as_str(), 10)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    match i64::from_str_radix(digits, radix) {
        Ok(value) => Some(LiteralValue::Int(value)),
        Err(_) => Some(LiteralValue::BigInt(cleaned.to_string())),
    }
}

/// Decode a `float` token, which also covers imaginary literals like `1.5j`.
pub fn decode_float_literal(raw: &str) -> Option<LiteralValue> {
    let cleaned: String = raw.chars().filter(|c| *c != '_').collect();
    if cleaned.ends_with(['j', 'J']) {
        return Some(LiteralValue::Complex(raw.to_string()));
    }
    cleaned.parse::<f64>().ok().map(LiteralValue::Float)
}
