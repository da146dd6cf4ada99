//! Indentation-driven parser for the block document subset.
//!
//! Accepted shapes:
//! - `key: scalar`, `key: {}`, `key: []`
//! - `key:` followed by a deeper block, or by list items at the same indent
//! - `- scalar`, `-` followed by a deeper block, and compact `- key: value` items
//!
//! Blank lines and full-line `#` comments are skipped. Any structural
//! violation fails the whole parse; no partial tree is returned.

use meshcfg_core::{Mapping, Value};

use super::scalar::parse_inline;
use super::{ParseError, ParseErrorReason};

#[derive(Debug, Clone)]
struct Line<'a> {
    number: usize,
    indent: usize,
    text: &'a str,
}

fn is_list_item(text: &str) -> bool {
    text == "-" || text.starts_with("- ")
}

/// A compact list item holds a mapping entry when it has a `key:` or `key: `
/// separator outside quotes.
fn is_map_entry(text: &str) -> bool {
    if text.starts_with(['"', '\'']) {
        return false;
    }
    text.ends_with(':') || text.contains(": ")
}

struct Parser<'a> {
    lines: Vec<Line<'a>>,
    pos: usize,
}

/// Parse a document into a canonical value.
///
/// An empty document (only blanks and comments) parses to `Null`.
pub fn parse(source: &str) -> Result<Value, ParseError> {
    let mut lines = Vec::new();
    for (i, raw) in source.lines().enumerate() {
        let raw = raw.trim_end_matches('\r');
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let stripped = raw.trim_start_matches(' ');
        if stripped.starts_with('\t') {
            return Err(ParseError::new(i + 1, ParseErrorReason::BadIndentation));
        }
        lines.push(Line {
            number: i + 1,
            indent: raw.len() - stripped.len(),
            text,
        });
    }

    let Some(first) = lines.first() else {
        return Ok(Value::Null);
    };
    let root_indent = first.indent;

    let mut parser = Parser { lines, pos: 0 };
    let value = parser.parse_block(root_indent)?;
    match parser.lines.get(parser.pos) {
        Some(line) => Err(parser.error_at(line, ParseErrorReason::BadIndentation)),
        None => Ok(value),
    }
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Line<'a>> {
        self.lines.get(self.pos)
    }

    fn error_at(&self, line: &Line<'_>, reason: ParseErrorReason) -> ParseError {
        ParseError::new(line.number, reason)
    }

    fn inline(&self, line: &Line<'_>, token: &str) -> Result<Value, ParseError> {
        parse_inline(token).map_err(|reason| self.error_at(line, reason))
    }

    fn parse_block(&mut self, indent: usize) -> Result<Value, ParseError> {
        match self.peek().map(|line| is_list_item(line.text)) {
            Some(true) => self.parse_list(indent),
            Some(false) => self.parse_map(indent).map(Value::Map),
            None => Ok(Value::Null),
        }
    }

    fn parse_map(&mut self, indent: usize) -> Result<Mapping, ParseError> {
        let mut map = Mapping::new();
        while let Some(line) = self.peek().cloned() {
            if line.indent < indent || is_list_item(line.text) {
                break;
            }
            if line.indent > indent {
                return Err(self.error_at(&line, ParseErrorReason::BadIndentation));
            }

            let (key, rest) = line
                .text
                .split_once(':')
                .ok_or_else(|| self.error_at(&line, ParseErrorReason::MissingSeparator))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(self.error_at(&line, ParseErrorReason::MissingSeparator));
            }
            let rest = rest.trim();
            self.pos += 1;

            let value = if rest.is_empty() {
                match self.peek().map(|next| (next.indent, is_list_item(next.text))) {
                    Some((nested, _)) if nested > indent => self.parse_block(nested)?,
                    Some((nested, true)) if nested == indent => self.parse_list(indent)?,
                    _ => Value::Null,
                }
            } else {
                self.inline(&line, rest)?
            };
            map.insert(key, value);
        }
        Ok(map)
    }

    fn parse_list(&mut self, indent: usize) -> Result<Value, ParseError> {
        let mut items = Vec::new();
        while let Some(line) = self.peek().cloned() {
            if line.indent < indent || !is_list_item(line.text) {
                break;
            }
            if line.indent > indent {
                return Err(self.error_at(&line, ParseErrorReason::BadIndentation));
            }

            if line.text == "-" {
                self.pos += 1;
                match self.peek().map(|next| next.indent) {
                    Some(nested) if nested > indent => items.push(self.parse_block(nested)?),
                    _ => return Err(self.error_at(&line, ParseErrorReason::EmptyListItem)),
                }
                continue;
            }

            let rest = line.text[1..].trim_start();
            if rest.is_empty() {
                return Err(self.error_at(&line, ParseErrorReason::EmptyListItem));
            }

            if is_list_item(rest) || is_map_entry(rest) {
                // Re-read the item content as the first line of a nested
                // block starting at its own column.
                let column = indent + (line.text.len() - rest.len());
                self.lines[self.pos] = Line {
                    number: line.number,
                    indent: column,
                    text: rest,
                };
                items.push(self.parse_block(column)?);
                continue;
            }

            items.push(self.inline(&line, rest)?);
            self.pos += 1;
        }
        Ok(Value::List(items))
    }
}
