//! Scalar classification, quoting and decoding.

use std::fmt::Write as _;
use std::sync::OnceLock;

use meshcfg_core::bytes::{self, BASE64_PREFIX};
use meshcfg_core::Value;
use regex::Regex;
use serde_json::Number;

use super::{ByteStyle, ParseErrorReason};

/// Integer or decimal literal, with optional exponent.
pub const NUMERIC_PATTERN: &str = r"^-?\d+(\.\d+)?([eE][-+]?\d+)?$";

/// Characters that force quoting anywhere in a scalar.
const RESERVED_PATTERN: &str = r"[:\[\]{}#,]";

/// Characters that force quoting at the start of a scalar.
const INDICATORS: &[char] = &['-', '?', '!', '&', '*', '%', '@', '`', '|', '>', '\'', '"', '~'];

/// Words other YAML readers resolve to booleans or null.
const RESERVED_WORDS: &[&str] = &["true", "false", "null", "yes", "no", "on", "off", "y", "n", "~"];

fn numeric() -> &'static Regex {
    static NUMERIC: OnceLock<Regex> = OnceLock::new();
    NUMERIC.get_or_init(|| Regex::new(NUMERIC_PATTERN).expect("numeric pattern is valid"))
}

fn reserved() -> &'static Regex {
    static RESERVED: OnceLock<Regex> = OnceLock::new();
    RESERVED.get_or_init(|| Regex::new(RESERVED_PATTERN).expect("reserved pattern is valid"))
}

pub fn is_numeric(text: &str) -> bool {
    numeric().is_match(text)
}

/// True when `text` can be written without quotes and read back unchanged.
pub fn is_plain(text: &str) -> bool {
    if text.is_empty() || text != text.trim() {
        return false;
    }
    if RESERVED_WORDS.iter().any(|w| text.eq_ignore_ascii_case(w)) || is_numeric(text) {
        return false;
    }
    if text.starts_with(INDICATORS) || reserved().is_match(text) {
        return false;
    }
    text.chars().all(|c| c.is_ascii_graphic() || c == ' ')
}

/// Double-quote `text`, escaping everything outside printable ASCII.
///
/// Code points above the BMP use `\UXXXXXXXX` rather than a surrogate pair.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            ' '..='~' => out.push(c),
            c if (c as u32) <= 0xFFFF => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => {
                let _ = write!(out, "\\U{:08X}", c as u32);
            }
        }
    }
    out.push('"');
    out
}

/// Render a scalar value. Containers are handled by the emitter.
pub fn render(value: &Value, byte_style: ByteStyle) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Text(s) if is_plain(s) => s.clone(),
        Value::Text(s) => quote(s),
        Value::Bytes(raw) if raw.is_empty() => "\"\"".to_string(),
        Value::Bytes(raw) => {
            let tagged = format!("{BASE64_PREFIX}{}", bytes::encode(raw));
            match byte_style {
                ByteStyle::Quoted => quote(&tagged),
                ByteStyle::Plain => tagged,
            }
        }
        Value::List(items) if items.is_empty() => "[]".to_string(),
        Value::Map(map) if map.is_empty() => "{}".to_string(),
        Value::List(_) | Value::Map(_) => String::new(),
    }
}

/// Decode an inline token: a scalar or one of the `{}` / `[]` empty containers.
pub fn parse_inline(token: &str) -> Result<Value, ParseErrorReason> {
    match token {
        "{}" => Ok(Value::Map(Default::default())),
        "[]" => Ok(Value::List(Vec::new())),
        "null" | "~" => Ok(Value::Null),
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        _ if token.starts_with('"') => parse_double_quoted(token).map(Value::Text),
        _ if token.starts_with('\'') => parse_single_quoted(token).map(Value::Text),
        _ if is_numeric(token) => Ok(parse_number(token)),
        _ => Ok(Value::Text(strip_comment(token).to_string())),
    }
}

fn parse_number(token: &str) -> Value {
    let integral = !token.contains(['.', 'e', 'E']);
    if integral {
        if let Ok(n) = token.parse::<i64>() {
            return Value::Number(n.into());
        }
        if let Ok(n) = token.parse::<u64>() {
            return Value::Number(n.into());
        }
    }
    token
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::Text(token.to_string()))
}

/// A plain scalar ends where ` #` starts a trailing comment.
fn strip_comment(token: &str) -> &str {
    match token.find(" #") {
        Some(at) => token[..at].trim_end(),
        None => token,
    }
}

/// Only whitespace or a comment may follow a closing quote.
fn check_trailing(rest: &str) -> Result<(), ParseErrorReason> {
    let rest = rest.trim_start();
    if rest.is_empty() || rest.starts_with('#') {
        Ok(())
    } else {
        Err(ParseErrorReason::UnterminatedQuote)
    }
}

fn parse_single_quoted(token: &str) -> Result<String, ParseErrorReason> {
    let mut out = String::new();
    let mut chars = token[1..].char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '\'' {
            if matches!(chars.peek(), Some((_, '\''))) {
                chars.next();
                out.push('\'');
                continue;
            }
            check_trailing(&token[1 + i + 1..])?;
            return Ok(out);
        }
        out.push(c);
    }
    Err(ParseErrorReason::UnterminatedQuote)
}

fn parse_double_quoted(token: &str) -> Result<String, ParseErrorReason> {
    let body = &token[1..];
    let mut out = String::new();
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                check_trailing(&body[i + 1..])?;
                return Ok(out);
            }
            '\\' => {
                let (_, escape) = chars.next().ok_or(ParseErrorReason::UnterminatedQuote)?;
                match escape {
                    '"' => out.push('"'),
                    '\\' => out.push('\\'),
                    '/' => out.push('/'),
                    'b' => out.push('\u{08}'),
                    'f' => out.push('\u{0c}'),
                    'n' => out.push('\n'),
                    'r' => out.push('\r'),
                    't' => out.push('\t'),
                    '0' => out.push('\0'),
                    'x' => out.push(read_code_point(&mut chars, 2)?),
                    'U' => out.push(read_code_point(&mut chars, 8)?),
                    'u' => {
                        let unit = read_hex(&mut chars, 4)?;
                        out.push(combine_utf16(unit, &mut chars)?);
                    }
                    _ => return Err(ParseErrorReason::BadEscape),
                }
            }
            c => out.push(c),
        }
    }
    Err(ParseErrorReason::UnterminatedQuote)
}

fn read_hex(chars: &mut std::str::CharIndices<'_>, digits: usize) -> Result<u32, ParseErrorReason> {
    let mut value = 0u32;
    for _ in 0..digits {
        let (_, c) = chars.next().ok_or(ParseErrorReason::BadEscape)?;
        let digit = c.to_digit(16).ok_or(ParseErrorReason::BadEscape)?;
        value = value * 16 + digit;
    }
    Ok(value)
}

fn read_code_point(
    chars: &mut std::str::CharIndices<'_>,
    digits: usize,
) -> Result<char, ParseErrorReason> {
    char::from_u32(read_hex(chars, digits)?).ok_or(ParseErrorReason::BadEscape)
}

/// Resolve a `\uXXXX` unit, consuming the low half of a surrogate pair if needed.
fn combine_utf16(
    unit: u32,
    chars: &mut std::str::CharIndices<'_>,
) -> Result<char, ParseErrorReason> {
    if !(0xD800..0xDC00).contains(&unit) {
        return char::from_u32(unit).ok_or(ParseErrorReason::BadEscape);
    }
    match (chars.next(), chars.next()) {
        (Some((_, '\\')), Some((_, 'u'))) => {
            let low = read_hex(chars, 4)?;
            if !(0xDC00..0xE000).contains(&low) {
                return Err(ParseErrorReason::BadEscape);
            }
            let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
            char::from_u32(code).ok_or(ParseErrorReason::BadEscape)
        }
        _ => Err(ParseErrorReason::BadEscape),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_strings() {
        assert!(is_plain("LongFast"));
        assert!(is_plain("pool.ntp.org"));
        assert!(is_plain("Base Station"));

        for quoted in [
            "", " lead", "trail ", "true", "Null", "yes", "42", "-1.5", "1e3", "a:b", "[x]",
            "x#y", "a,b", "-dash", "*star", "'q", "~", "h\u{e9}llo", "tab\tin",
        ] {
            assert!(!is_plain(quoted), "{quoted:?} should be quoted");
        }
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("say \"hi\"\n"), r#""say \"hi\"\n""#);
        assert_eq!(quote("\u{e9}"), r#""\u00E9""#);
        assert_eq!(quote("\u{1}"), r#""\u0001""#);
        assert_eq!(
            quote("Nicco Pisa Berry \u{1F1EE}\u{1F1F9}"),
            r#""Nicco Pisa Berry \U0001F1EE\U0001F1F9""#
        );
    }

    #[test]
    fn test_render_bytes() {
        let key = Value::Bytes(vec![1, 2, 3]);
        assert_eq!(render(&key, ByteStyle::Quoted), "\"base64:AQID\"");
        assert_eq!(render(&key, ByteStyle::Plain), "base64:AQID");
        assert_eq!(render(&Value::Bytes(vec![]), ByteStyle::Plain), "\"\"");
    }

    #[test]
    fn test_parse_scalars() {
        assert_eq!(parse_inline("null"), Ok(Value::Null));
        assert_eq!(parse_inline("true"), Ok(Value::Bool(true)));
        assert_eq!(parse_inline("-12"), Ok(Value::from(-12i64)));
        assert_eq!(parse_inline("45.1234567"), Ok(Value::float(45.1234567)));
        assert_eq!(parse_inline("1e-7"), Ok(Value::float(1e-7)));
        assert_eq!(parse_inline("'it''s'"), Ok(Value::from("it's")));
        assert_eq!(parse_inline("plain text # note"), Ok(Value::from("plain text")));
        assert_eq!(parse_inline("base64:AQID"), Ok(Value::from("base64:AQID")));
        assert_eq!(parse_inline("{}"), Ok(Value::Map(Default::default())));
        assert_eq!(parse_inline("[]"), Ok(Value::List(vec![])));
    }

    #[test]
    fn test_parse_escapes() {
        assert_eq!(
            parse_inline(r#""\U0001F1EE\U0001F1F9 \x41\u00e9 \ud83d\ude00""#),
            Ok(Value::from("\u{1F1EE}\u{1F1F9} A\u{e9} \u{1F600}"))
        );
        assert_eq!(parse_inline(r#""a\qb""#), Err(ParseErrorReason::BadEscape));
        assert_eq!(parse_inline(r#""\ud83c""#), Err(ParseErrorReason::BadEscape));
        assert_eq!(parse_inline(r#""open"#), Err(ParseErrorReason::UnterminatedQuote));
        assert_eq!(parse_inline(r#""a" b"#), Err(ParseErrorReason::UnterminatedQuote));
        assert_eq!(parse_inline("'open"), Err(ParseErrorReason::UnterminatedQuote));
    }
}
