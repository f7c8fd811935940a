//! Error types for LuaML decoding, encoding and file access.
//!
//! ## Error Categories
//!
//! - **Lex errors**: a character that cannot start any token, or a numeric
//!   literal that does not parse
//! - **Parse errors**: an unexpected token, a table mixing list values with
//!   object fields, or input that ends in the middle of a construct
//! - **I/O errors**: the file behind [`load`](crate::load) or
//!   [`save`](crate::save) could not be opened, read or written, or a
//!   reader/writer passed to the serde helpers failed
//! - **Serde errors**: custom messages raised while converting between Rust
//!   types and [`Value`](crate::Value)
//!
//! Every error is terminal for the call that raised it. The decoder has no
//! recovery points and never returns a partial tree.
//!
//! ## Examples
//!
//! ```rust
//! use serde_luaml::decode;
//!
//! let err = decode("{a = 1, 2}").unwrap_err();
//! assert!(err.is_parse());
//! assert!(err.to_string().contains("cannot mix list values with object fields"));
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The lexer met a character or literal it cannot turn into a token.
    #[error("Lex error at line {line}, column {col}: {msg}")]
    Lex { line: usize, col: usize, msg: String },

    /// The parser met a token that does not fit the grammar.
    #[error("Parse error at line {line}, column {col}: {msg}")]
    Parse { line: usize, col: usize, msg: String },

    /// The token stream ended while the parser still expected input.
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    /// Opening, reading or writing a document failed.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from or writing to a caller-supplied stream failed.
    #[error("IO error on stream: {0}")]
    Stream(#[from] io::Error),

    /// Unsupported type for conversion into a [`Value`](crate::Value)
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a lex error at the given position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_luaml::Error;
    ///
    /// let err = Error::lex(3, 7, "unexpected character '@'");
    /// assert!(err.to_string().contains("line 3, column 7"));
    /// ```
    pub fn lex(line: usize, col: usize, msg: impl Into<String>) -> Self {
        Error::Lex {
            line,
            col,
            msg: msg.into(),
        }
    }

    /// Creates a parse error at the given position.
    pub fn parse(line: usize, col: usize, msg: impl Into<String>) -> Self {
        Error::Parse {
            line,
            col,
            msg: msg.into(),
        }
    }

    /// Creates an unexpected end-of-input error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_luaml::Error;
    ///
    /// let err = Error::unexpected_eof("'}'");
    /// assert!(err.is_parse());
    /// ```
    pub fn unexpected_eof(expected: impl Into<String>) -> Self {
        Error::UnexpectedEof {
            expected: expected.into(),
        }
    }

    /// Wraps an I/O failure together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an unsupported type error for Rust types with no LuaML form.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` if the lexer rejected the input.
    #[must_use]
    pub const fn is_lex(&self) -> bool {
        matches!(self, Error::Lex { .. })
    }

    /// Returns `true` if the parser rejected the token stream, including a
    /// premature end of input.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. } | Error::UnexpectedEof { .. })
    }

    /// Returns `true` if the error came from a file or a stream.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. } | Error::Stream(_))
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
