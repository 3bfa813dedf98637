//! Shared escape/unescape tables for string and template literals.
//!
//! Used by both directions: the parser calls `decode` while building
//! `StringLiteral`/`TemplateLiteral` payloads, the stringifier calls `encode`
//! to re-quote them. Kept in one place so the two stay in lockstep, the same
//! reasoning the teacher applies to its single `unescape` dependency in
//! `ast/string_literal.rs` — here folded into a tiny hand-rolled pass since
//! the escape set (`\n \r \t \" \\ \uXXXX \UXXXXXXXX`, plus template-only
//! `$$`/`%%`) is small and fixed by the grammar rather than delegated to an
//! external crate.

/// Decodes the escape sequences recognized inside a plain (non-template)
/// quoted string, i.e. block labels: `\n \r \t \" \\ \uXXXX \UXXXXXXXX`.
pub(crate) fn decode_string_escapes(raw: &str) -> String {
    decode_escapes(raw, false)
}

/// Decodes the escape sequences recognized inside template literal runs:
/// the same set as `decode_string_escapes` plus `$$` → `$` and `%%` → `%`.
pub(crate) fn decode_template_escapes(raw: &str) -> String {
    decode_escapes(raw, true)
}

fn decode_escapes(raw: &str, template: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if template && c == '$' && chars.peek() == Some(&'$') {
            chars.next();
            out.push('$');
            continue;
        }
        if template && c == '%' && chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('u') => {
                let hex: String = (0..4).filter_map(|_| chars.next()).collect();
                push_unicode_escape(&mut out, &hex);
            }
            Some('U') => {
                let hex: String = (0..8).filter_map(|_| chars.next()).collect();
                push_unicode_escape(&mut out, &hex);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

fn push_unicode_escape(out: &mut String, hex: &str) {
    if let Ok(code) = u32::from_str_radix(hex, 16) {
        if let Some(ch) = char::from_u32(code) {
            out.push(ch);
            return;
        }
    }
    out.push_str(hex);
}

/// Re-encodes a decoded string for emission inside a plain quoted literal.
pub(crate) fn encode_string_escapes(value: &str) -> String {
    encode_escapes(value, false)
}

/// Re-encodes a decoded string for emission inside a template literal run.
pub(crate) fn encode_template_escapes(value: &str) -> String {
    encode_escapes(value, true)
}

fn encode_escapes(value: &str, template: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '$' if template => out.push_str("$$"),
            '%' if template => out.push_str("%%"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_common_escapes() {
        assert_eq!(decode_string_escapes("a\\nb"), "a\nb");
        assert_eq!(decode_string_escapes("\\\"q\\\""), "\"q\"");
        assert_eq!(decode_string_escapes("\\u00e9"), "é");
    }

    #[test]
    fn decodes_template_only_escapes() {
        assert_eq!(decode_template_escapes("$$$"), "$$");
        assert_eq!(decode_template_escapes("%%{"), "%{");
    }

    #[test]
    fn encode_decode_round_trip() {
        let original = "line\nwith\ttabs and \"quotes\"\\backslash";
        let encoded = encode_string_escapes(original);
        assert_eq!(decode_string_escapes(&encoded), original);
    }
}
