//! Backup text format.
//!
//! A small, strict subset of block-style YAML: nested mappings, block lists,
//! `[]`/`{}` empty containers, and plain, single-quoted or double-quoted
//! scalars. Output is deterministic: the same value always produces the same
//! bytes.

mod emit;
mod parse;
pub mod scalar;

pub use emit::emit;
pub use parse::parse;

use thiserror::Error;

/// How byte values tagged as key material are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteStyle {
    /// `key: "base64:..."`
    #[default]
    Quoted,
    /// `key: base64:...`, as written by the command line tools.
    Plain,
}

/// Serializer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Spaces per nesting level. Zero is written as one.
    pub indent: usize,
    pub byte_style: ByteStyle,
}

impl EmitOptions {
    /// Effective indent step; nested blocks always sit deeper than their key.
    pub fn step(&self) -> usize {
        self.indent.max(1)
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            byte_style: ByteStyle::Quoted,
        }
    }
}

/// Malformed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Malformed document at line {line}: {reason}")]
pub struct ParseError {
    /// 1-based line number in the source text.
    pub line: usize,
    pub reason: ParseErrorReason,
}

impl ParseError {
    pub fn new(line: usize, reason: ParseErrorReason) -> Self {
        Self { line, reason }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorReason {
    #[error("list entry has no content")]
    EmptyListItem,

    #[error("mapping entry has no ':' separator")]
    MissingSeparator,

    #[error("indentation does not match any enclosing block")]
    BadIndentation,

    #[error("invalid escape sequence")]
    BadEscape,

    #[error("unterminated quoted scalar")]
    UnterminatedQuote,
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshcfg_core::{Mapping, Value};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_emit_then_parse_preserves_tree() {
        let mut settings = Mapping::new();
        settings.insert("name", Value::from("Nicco Pisa Berry \u{1F1EE}\u{1F1F9}"));
        settings.insert("psk", Value::Bytes(vec![0xAA; 16]));
        let mut channel = Mapping::new();
        channel.insert("index", Value::from(0i64));
        channel.insert("settings", Value::Map(settings));
        channel.insert("role", Value::from("PRIMARY"));

        let mut root = Mapping::new();
        root.insert("owner", Value::from("true"));
        root.insert("ratio", Value::float(0.25));
        root.insert("ids", Value::List(vec![Value::from(1i64), Value::from(2i64)]));
        root.insert("channels", Value::List(vec![Value::Map(channel)]));
        let tree = Value::Map(root);

        for byte_style in [ByteStyle::Quoted, ByteStyle::Plain] {
            let text = emit(&tree, &EmitOptions { indent: 2, byte_style });
            let parsed = parse(&text).unwrap();

            // key material comes back as tagged text; the prefix is stripped on reconstruction
            let psk = parsed.as_map().unwrap().get("channels").unwrap().as_list().unwrap()[0]
                .as_map()
                .unwrap()
                .get("settings")
                .unwrap()
                .as_map()
                .unwrap()
                .get("psk")
                .cloned();
            assert_eq!(psk, Some(Value::from("base64:qqqqqqqqqqqqqqqqqqqqqg==")));
            assert_eq!(parsed.as_map().unwrap().get("owner"), Some(&Value::from("true")));
            assert_eq!(parsed.as_map().unwrap().get("ratio"), Some(&Value::float(0.25)));
        }
    }

    #[test]
    fn test_error_display() {
        let err = ParseError::new(3, ParseErrorReason::MissingSeparator);
        assert_eq!(
            err.to_string(),
            "Malformed document at line 3: mapping entry has no ':' separator"
        );
    }
}
