//! LuaML text encoding.
//!
//! The encoder is the inverse of [`decode`](crate::decode): it walks a
//! [`Value`] tree and writes canonical LuaML text. It never fails.
//!
//! ## Layout
//!
//! In [`Mode::Global`] the root table's positional entries are written first,
//! one bare value per line, followed by one `key = value` line per keyed entry.
//! In [`Mode::Table`] the whole tree is written as a single `{ ... }`
//! expression.
//!
//! Non-empty tables put every entry on its own line, positional entries first,
//! each followed by a comma:
//!
//! ```text
//! {
//!     1,
//!     "two",
//! }
//! ```
//!
//! ## Scalars
//!
//! - `nil`, `true`, `false`
//! - numbers in shortest round-tripping decimal form; infinities as `1e999` /
//!   `-1e999`, NaN as `nil`
//! - strings with a newline in `[[ ... ]]` raw form, everything else in double
//!   quotes with `\\`, `\"`, `\n` and `\t` escaped
//!
//! A multi-line string ending in `]` is quoted instead, since its last
//! bracket would run into the closing `]]`. A string that contains both a
//! newline and `]]` is written as-is and will not decode back to the same
//! value.
//!
//! Keys that are identifiers are written bare; anything else (including the
//! words `true`, `false` and `nil`) is written as `["key"]`, a form the decoder
//! does not read back.

use crate::options::{EncodeOptions, Mode};
use crate::{Table, Value};

/// Encodes a value with the given top-level mode and default indentation.
///
/// # Examples
///
/// ```rust
/// use serde_luaml::{decode, encode, Mode};
///
/// let value = decode("name = 'luaml'\nports = { 80, 443 }").unwrap();
/// assert_eq!(
///     encode(&value, Mode::Global),
///     "name = \"luaml\"\nports = {\n    80,\n    443,\n}\n"
/// );
/// ```
#[must_use]
pub fn encode(value: &Value, mode: Mode) -> String {
    encode_with_options(value, &EncodeOptions::new().with_mode(mode))
}

/// Encodes a value with custom options.
#[must_use]
pub fn encode_with_options(value: &Value, options: &EncodeOptions) -> String {
    let mut encoder = Encoder::new(options);
    match (options.mode, value) {
        (Mode::Global, Value::Table(root)) => encoder.write_statements(root),
        (Mode::Global, scalar) => {
            encoder.write_value(scalar, 0);
            encoder.output.push('\n');
        }
        (Mode::Table, value) => encoder.write_value(value, 0),
    }
    encoder.output
}

struct Encoder<'o> {
    output: String,
    options: &'o EncodeOptions,
}

/// Pending output while walking a tree. Tables are expanded onto an explicit
/// stack so arbitrarily deep values never exhaust the call stack.
enum Step<'v> {
    Value(&'v Value, usize),
    Entry(Option<&'v str>, &'v Value, usize),
    Close(usize),
    Text(&'static str),
}

impl<'o> Encoder<'o> {
    fn new(options: &'o EncodeOptions) -> Self {
        Encoder {
            output: String::with_capacity(256),
            options,
        }
    }

    fn write_indent(&mut self, level: usize) {
        for _ in 0..level * self.options.indent {
            self.output.push(' ');
        }
    }

    fn write_statements(&mut self, root: &Table) {
        for value in root.values() {
            self.write_value(value, 0);
            self.output.push('\n');
        }
        for (key, value) in root.iter() {
            self.write_key(key);
            self.output.push_str(" = ");
            self.write_value(value, 0);
            self.output.push('\n');
        }
    }

    fn write_value(&mut self, value: &Value, level: usize) {
        let mut stack = vec![Step::Value(value, level)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Value(Value::Nil, _) => self.output.push_str("nil"),
                Step::Value(Value::Bool(b), _) => {
                    self.output.push_str(if *b { "true" } else { "false" })
                }
                Step::Value(Value::Number(n), _) => write_number(&mut self.output, *n),
                Step::Value(Value::String(s), _) => write_string(&mut self.output, s),
                Step::Value(Value::Table(t), _) if t.is_empty() => self.output.push_str("{}"),
                Step::Value(Value::Table(t), level) => {
                    self.output.push_str("{\n");
                    stack.push(Step::Close(level));
                    for (key, value) in t.iter().rev() {
                        stack.push(Step::Entry(Some(key.as_str()), value, level + 1));
                    }
                    for value in t.values().rev() {
                        stack.push(Step::Entry(None, value, level + 1));
                    }
                }
                Step::Entry(key, value, level) => {
                    self.write_indent(level);
                    if let Some(key) = key {
                        self.write_key(key);
                        self.output.push_str(" = ");
                    }
                    stack.push(Step::Text(",\n"));
                    stack.push(Step::Value(value, level));
                }
                Step::Close(level) => {
                    self.write_indent(level);
                    self.output.push('}');
                }
                Step::Text(text) => self.output.push_str(text),
            }
        }
    }

    fn write_key(&mut self, key: &str) {
        if is_identifier(key) {
            self.output.push_str(key);
        } else {
            self.output.push('[');
            write_quoted(&mut self.output, key);
            self.output.push(']');
        }
    }
}

fn write_number(output: &mut String, n: f64) {
    if n.is_nan() {
        output.push_str("nil");
    } else if n.is_infinite() {
        output.push_str(if n > 0.0 { "1e999" } else { "-1e999" });
    } else {
        output.push_str(&n.to_string());
    }
}

fn write_string(output: &mut String, s: &str) {
    // a trailing ']' would merge with the closing "]]"
    if s.contains('\n') && !s.ends_with(']') {
        output.push_str("[[");
        output.push_str(s);
        output.push_str("]]");
    } else {
        write_quoted(output, s);
    }
}

fn write_quoted(output: &mut String, s: &str) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\t' => output.push_str("\\t"),
            _ => output.push(ch),
        }
    }
    output.push('"');
}

/// Returns `true` if `key` can be written bare on the left of `=`.
#[must_use]
pub fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    let starts_well = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');
    starts_well
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && !matches!(key, "true" | "false" | "nil")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(entries: Vec<(&str, Value)>) -> Value {
        Value::Table(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_scalars() {
        let encode_table = |v: Value| encode(&v, Mode::Table);
        assert_eq!(encode_table(Value::Nil), "nil");
        assert_eq!(encode_table(Value::Bool(true)), "true");
        assert_eq!(encode_table(Value::Number(42.0)), "42");
        assert_eq!(encode_table(Value::Number(-0.25)), "-0.25");
        assert_eq!(encode_table(Value::Number(f64::INFINITY)), "1e999");
        assert_eq!(encode_table(Value::Number(f64::NEG_INFINITY)), "-1e999");
        assert_eq!(encode_table(Value::Number(f64::NAN)), "nil");
    }

    #[test]
    fn test_strings() {
        let encode_table = |s: &str| encode(&Value::from(s), Mode::Table);
        assert_eq!(encode_table("plain"), "\"plain\"");
        assert_eq!(encode_table(""), "\"\"");
        assert_eq!(encode_table("say \"hi\""), r#""say \"hi\"""#);
        assert_eq!(encode_table("a\tb\\c"), r#""a\tb\\c""#);
        assert_eq!(encode_table("it's"), r#""it's""#);
        assert_eq!(encode_table("two\nlines"), "[[two\nlines]]");
        assert_eq!(encode_table("a]\nb"), "[[a]\nb]]");
        assert_eq!(encode_table("list\n[1]"), r#""list\n[1]""#);
    }

    #[test]
    fn test_multiline_string_ending_in_bracket_roundtrips() {
        let mut table = Table::new();
        table.insert("s", Value::from("line one\nends with ]"));
        let value = Value::Table(table);

        let text = encode(&value, Mode::Global);
        assert_eq!(text, "s = \"line one\\nends with ]\"\n");
        assert_eq!(crate::decode(&text).unwrap(), value);
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let mut value = Value::from(1);
        for _ in 0..100_000 {
            value = Value::from(vec![value]);
        }

        let text = encode_with_options(&value, &EncodeOptions::table().with_indent(0));
        assert!(text.starts_with("{\n{\n"));
        assert_eq!(text.matches('{').count(), 100_000);

        // release the tree level by level so dropping stays shallow
        while let Value::Table(table) = value {
            value = table.into_parts().0.pop().unwrap_or(Value::Nil);
        }
    }

    #[test]
    fn test_table_layout() {
        let value = object(vec![
            ("list", Value::from(vec![Value::from(1), Value::from("a")])),
            ("empty", Value::Table(Table::new())),
            ("nested", object(vec![("flag", Value::Bool(false))])),
        ]);
        let expected = "{\n    list = {\n        1,\n        \"a\",\n    },\n    empty = {},\n    nested = {\n        flag = false,\n    },\n}";
        assert_eq!(encode(&value, Mode::Table), expected);
    }

    #[test]
    fn test_global_layout() {
        let mut root = Table::new();
        root.push(Value::from("bare"));
        root.insert("x", Value::from(1));
        root.insert("y", Value::from(vec![Value::Nil]));

        assert_eq!(
            encode(&Value::Table(root), Mode::Global),
            "\"bare\"\nx = 1\ny = {\n    nil,\n}\n"
        );
        assert_eq!(encode(&Value::Table(Table::new()), Mode::Global), "");
        assert_eq!(encode(&Value::from(7), Mode::Global), "7\n");
    }

    #[test]
    fn test_custom_indent() {
        let value = object(vec![("a", Value::from(vec![Value::from(1)]))]);
        let options = EncodeOptions::table().with_indent(2);
        assert_eq!(
            encode_with_options(&value, &options),
            "{\n  a = {\n    1,\n  },\n}"
        );
    }

    #[test]
    fn test_keys() {
        assert!(is_identifier("name"));
        assert!(is_identifier("_private2"));
        assert!(!is_identifier("2nd"));
        assert!(!is_identifier("with-dash"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("nil"));

        let value = object(vec![("user-id", Value::from(1)), ("true", Value::from(2))]);
        assert_eq!(
            encode(&value, Mode::Global),
            "[\"user-id\"] = 1\n[\"true\"] = 2\n"
        );
    }

    #[test]
    fn test_deterministic() {
        let value = object(vec![("b", Value::from(1)), ("a", Value::from(2))]);
        assert_eq!(encode(&value, Mode::Global), encode(&value, Mode::Global));
        assert_eq!(encode(&value, Mode::Global), "b = 1\na = 2\n");
    }
}
