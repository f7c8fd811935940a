//! Configuration options for LuaML encoding.
//!
//! - [`Mode`]: whether the document is written as top-level statements or as
//!   a single table expression
//! - [`EncodeOptions`]: the mode plus the indentation unit
//!
//! ## Examples
//!
//! ```rust
//! use serde_luaml::{encode_with_options, EncodeOptions, Mode, Value};
//!
//! let value = Value::from(vec![Value::from(1), Value::from(2)]);
//!
//! let options = EncodeOptions::table().with_indent(2);
//! assert_eq!(encode_with_options(&value, &options), "{\n  1,\n  2,\n}");
//!
//! let options = EncodeOptions::new().with_mode(Mode::Global);
//! assert_eq!(encode_with_options(&value, &options), "1\n2\n");
//! ```

/// Top-level layout of an encoded document.
///
/// # Examples
///
/// ```rust
/// use serde_luaml::Mode;
///
/// assert_eq!(Mode::default(), Mode::Global);
/// assert_eq!(Mode::Table.as_str(), "table");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// One statement per line: bare values first, then `key = value`.
    #[default]
    Global,
    /// A single `{ ... }` expression.
    Table,
}

impl Mode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::Global => "global",
            Mode::Table => "table",
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "global" => Ok(Mode::Global),
            "table" => Ok(Mode::Table),
            other => Err(crate::Error::custom(format!(
                "unknown encoding mode '{}', expected 'global' or 'table'",
                other
            ))),
        }
    }
}

/// Configuration options for LuaML encoding.
///
/// # Examples
///
/// ```rust
/// use serde_luaml::{EncodeOptions, Mode};
///
/// let options = EncodeOptions::new();
/// assert_eq!(options.mode, Mode::Global);
/// assert_eq!(options.indent, 4);
///
/// let options = EncodeOptions::table().with_indent(2);
/// assert_eq!(options.mode, Mode::Table);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    pub mode: Mode,
    /// Spaces added per nesting level.
    pub indent: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            mode: Mode::default(),
            indent: 4,
        }
    }
}

impl EncodeOptions {
    /// Creates default options (global mode, 4-space indent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for table-mode output.
    #[must_use]
    pub fn table() -> Self {
        EncodeOptions {
            mode: Mode::Table,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the indentation size (number of spaces per level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
