//! # serde_luaml
//!
//! A reader/writer for LuaML, a declarative configuration format that borrows
//! Lua's table syntax without any of its execution semantics.
//!
//! ## What does LuaML look like?
//!
//! ```text
//! -- server settings
//! name = "edge-01"
//! mode = fast                 -- bare words are plain strings
//! ports = { 80, 443, }        -- array-shaped table, trailing comma allowed
//! limits = { conns = 0x400, timeout = 2.5e1 }
//! motd = [[Welcome!
//! Have a nice day.]]
//! ```
//!
//! A document is either a sequence of statements (global mode, as above) or a
//! single `{ ... }` table (table mode). There are no expressions, no function
//! calls and no variable lookup.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_luaml::{decode, encode, Mode, Value};
//!
//! let value = decode("name = 'edge-01'\nports = { 80, 443 }").unwrap();
//! assert_eq!(value["name"], Value::from("edge-01"));
//! assert_eq!(value["ports"][0], Value::from(80));
//!
//! let text = encode(&value, Mode::Global);
//! assert_eq!(decode(&text).unwrap(), value);
//! ```
//!
//! ### With Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_luaml::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Server {
//!     name: String,
//!     ports: Vec<u16>,
//! }
//!
//! let server = Server { name: "edge-01".to_string(), ports: vec![80, 443] };
//! let text = to_string(&server).unwrap();
//! let back: Server = from_str(&text).unwrap();
//! assert_eq!(server, back);
//! ```
//!
//! ## Pipeline
//!
//! Text flows through [`lexer`] → [`parser`] → [`Value`] → [`encoder`]. Every
//! call is independent: there is no global state, and values are plain owned
//! trees that can be moved across threads.
//!
//! ## Known limitations
//!
//! - A string holding both a newline and `]]` is written in `[[ ... ]]` form
//!   unchanged and will not decode back to the same string.
//! - Blocks nest at most [`parser::MAX_DEPTH`] levels deep.
//! - Keys that are not identifiers are written as `["key"] = ...`, which the
//!   decoder does not accept.
//! - Hex literals decode to plain numbers; re-encoding writes decimal.

pub mod de;
pub mod encoder;
pub mod error;
pub mod lexer;
pub mod macros;
pub mod options;
pub mod parser;
pub mod ser;
pub mod table;
pub mod value;

pub use de::from_value;
pub use encoder::{encode, encode_with_options};
pub use error::{Error, Result};
pub use options::{EncodeOptions, Mode};
pub use ser::{to_value, ValueSerializer};
pub use table::Table;
pub use value::Value;

use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Decodes LuaML text into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_luaml::{decode, Value};
///
/// let value = decode("{ 1, 2, 3, }").unwrap();
/// assert_eq!(value, decode("{1, 2, 3}").unwrap());
/// assert_eq!(decode("answer = 0x2A").unwrap()["answer"], Value::from(42));
/// ```
///
/// # Errors
///
/// Returns [`Error::Lex`] for text that cannot be tokenized, and
/// [`Error::Parse`] or [`Error::UnexpectedEof`] for tokens that do not form a
/// document. Both carry the line and column of the offending input.
pub fn decode(text: &str) -> Result<Value> {
    let tokens = lexer::tokenize(text)?;
    log::trace!("tokenized {} bytes into {} tokens", text.len(), tokens.len());
    parser::parse(&tokens)
}

/// Reads and decodes the document at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, otherwise any
/// error [`decode`] returns.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let mut file = fs::File::open(path).map_err(|e| Error::io(path, e))?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|e| Error::io(path, e))?;
    drop(file);

    log::debug!("loaded {} bytes from {}", text.len(), path.display());
    decode(&text)
}

/// Encodes `value` in global mode and writes it to `path`, replacing any
/// existing content.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn save<P: AsRef<Path>>(path: P, value: &Value) -> Result<()> {
    let path = path.as_ref();
    let text = encode(value, Mode::Global);
    let mut file = fs::File::create(path).map_err(|e| Error::io(path, e))?;
    file.write_all(text.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| Error::io(path, e))?;

    log::debug!("saved {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Serialize any `T: Serialize` to a global-mode LuaML string.
///
/// Structs and maps become `key = value` statements; sequences become bare
/// value statements.
///
/// # Errors
///
/// Returns an error if the value cannot be converted (e.g. non-string map keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a LuaML string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_luaml::{to_string_with_options, EncodeOptions};
///
/// let text = to_string_with_options(&vec![1, 2], &EncodeOptions::table()).unwrap();
/// assert_eq!(text, "{\n    1,\n    2,\n}");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(encode_with_options(&value, options))
}

/// Serialize any `T: Serialize` to a writer in global mode.
///
/// # Errors
///
/// Returns an error if conversion fails, or [`Error::Stream`] if writing to the
/// writer fails.
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Deserialize an instance of type `T` from LuaML text.
///
/// # Examples
///
/// ```rust
/// use serde_luaml::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x = 1\ny = 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
///
/// let point: Point = from_str("{ x = 1, y = 2 }").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the text does not decode or the value does not fit `T`.
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decode(s)?)
}

/// Deserialize an instance of type `T` from an I/O stream of LuaML.
///
/// # Errors
///
/// Returns [`Error::Stream`] if reading fails, otherwise an error if the text
/// does not decode or the value does not fit `T`.
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader.read_to_string(&mut string)?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of LuaML text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, do not decode, or do not
/// fit `T`.
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(Error::custom)?;
    from_str(s)
}
