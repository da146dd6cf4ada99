//! Block-style text emitter.

use meshcfg_core::{Mapping, Value};

use super::scalar::render;
use super::EmitOptions;

/// Render a value as an indented block document.
///
/// Null map entries are omitted; empty containers that survived pruning render
/// inline as `{}` and `[]`. The output always ends with a newline.
pub fn emit(value: &Value, options: &EmitOptions) -> String {
    let mut out = String::new();
    match value {
        Value::Map(map) if !map.is_empty() => write_map(&mut out, map, 0, options),
        Value::List(items) if !items.is_empty() => write_list(&mut out, items, 0, options),
        scalar => {
            out.push_str(&render(scalar, options.byte_style));
            out.push('\n');
        }
    }
    out
}

fn is_block(value: &Value) -> bool {
    match value {
        Value::Map(map) => !map.is_empty(),
        Value::List(items) => !items.is_empty(),
        _ => false,
    }
}

fn write_line(out: &mut String, indent: usize, text: &str) {
    out.extend(std::iter::repeat(' ').take(indent));
    out.push_str(text);
    out.push('\n');
}

fn write_map(out: &mut String, map: &Mapping, indent: usize, options: &EmitOptions) {
    for (key, value) in map.iter() {
        match value {
            Value::Null => {}
            Value::Map(nested) if !nested.is_empty() => {
                write_line(out, indent, &format!("{key}:"));
                write_map(out, nested, indent + options.step(), options);
            }
            Value::List(items) if !items.is_empty() => {
                write_line(out, indent, &format!("{key}:"));
                write_list(out, items, indent + options.step(), options);
            }
            scalar => {
                let text = render(scalar, options.byte_style);
                write_line(out, indent, &format!("{key}: {text}"));
            }
        }
    }
}

fn write_list(out: &mut String, items: &[Value], indent: usize, options: &EmitOptions) {
    for item in items {
        if is_block(item) {
            write_line(out, indent, "-");
            match item {
                Value::Map(map) => write_map(out, map, indent + options.step(), options),
                Value::List(nested) => write_list(out, nested, indent + options.step(), options),
                _ => {}
            }
        } else {
            let text = render(item, options.byte_style);
            write_line(out, indent, &format!("- {text}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ByteStyle;
    use pretty_assertions::assert_eq;

    fn sample() -> Value {
        let mut device = Mapping::new();
        device.insert("role", Value::from("ROUTER"));
        device.insert("nodeInfoBroadcastSecs", Value::from(900i64));
        device.insert("unset", Value::Null);

        let mut channel = Mapping::new();
        channel.insert("index", Value::from(0i64));
        channel.insert("psk", Value::Bytes(vec![1]));

        let mut root = Mapping::new();
        root.insert("device", Value::Map(device));
        root.insert("empty", Value::Map(Mapping::new()));
        root.insert("ignore", Value::List(vec![]));
        root.insert("names", Value::List(vec![Value::from("a"), Value::from("b c")]));
        root.insert("channels", Value::List(vec![Value::Map(channel)]));
        Value::Map(root)
    }

    #[test]
    fn test_emit_default_indent() {
        let expected = "\
device:
  role: ROUTER
  nodeInfoBroadcastSecs: 900
empty: {}
ignore: []
names:
  - a
  - b c
channels:
  -
    index: 0
    psk: \"base64:AQ==\"
";
        assert_eq!(emit(&sample(), &EmitOptions::default()), expected);
    }

    #[test]
    fn test_emit_wide_indent_plain_bytes() {
        let options = EmitOptions {
            indent: 4,
            byte_style: ByteStyle::Plain,
        };
        let text = emit(&sample(), &options);
        assert!(text.contains("\n    role: ROUTER\n"));
        assert!(text.contains("\n        psk: base64:AQ==\n"));
    }

    #[test]
    fn test_zero_indent_still_nests() {
        let options = EmitOptions {
            indent: 0,
            byte_style: ByteStyle::Quoted,
        };
        let text = emit(&sample(), &options);
        assert!(text.starts_with("device:\n role: ROUTER\n"));
        let default_text = emit(&sample(), &EmitOptions::default());
        assert_eq!(
            crate::document::parse(&text).unwrap(),
            crate::document::parse(&default_text).unwrap()
        );
    }

    #[test]
    fn test_emit_is_deterministic() {
        let options = EmitOptions::default();
        assert_eq!(emit(&sample(), &options), emit(&sample(), &options));
    }
}
