//! Recursive-descent parsing of LuaML token streams.
//!
//! ## Grammar
//!
//! ```text
//! document  := table                      (table mode: first token is '{')
//!            | statement*                 (global mode)
//! statement := IDENT '=' value | value
//! value     := STRING | NUMBER | BOOL | NIL | IDENT | table
//! table     := '{' ( entry ( ',' entry )* ','? )? '}'
//! entry     := IDENT '=' value | value
//! ```
//!
//! A bare `IDENT` in value position is an atom and decodes to a string.
//!
//! Each `{ ... }` block takes its shape from its first entry: either every
//! entry is positional (the array part) or every entry is `key = value` (the
//! object part). Mixing the two in one block is an error; nested blocks pick
//! their own shape. The root table of a global-mode document is exempt and may
//! hold both bare values and keyed statements.
//!
//! In table mode anything after the closing `}` of the first block is ignored.
//!
//! Blocks may nest at most [`MAX_DEPTH`] levels deep; deeper input is a parse
//! error rather than unbounded recursion.
//!
//! ```rust
//! use serde_luaml::{lexer::tokenize, parser::parse, Value};
//!
//! let tokens = tokenize("{ 1, 2, 3, }").unwrap();
//! let value = parse(&tokens).unwrap();
//! assert_eq!(value[2], Value::from(3));
//! ```

use crate::lexer::{Token, TokenKind};
use crate::{Error, Result, Table, Value};

/// Maximum number of nested `{ ... }` blocks in one document.
pub const MAX_DEPTH: usize = 128;

/// Parses a complete token stream into the document's root value.
///
/// # Errors
///
/// Returns [`Error::Parse`] for a token that does not fit the grammar or a
/// block that mixes list values with object fields, and
/// [`Error::UnexpectedEof`] when the tokens run out mid-construct.
pub fn parse(tokens: &[Token]) -> Result<Value> {
    Parser::new(tokens).parse_document()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Shape {
    Undecided,
    List,
    Fields,
}

/// Cursor over a borrowed token slice.
pub struct Parser<'t> {
    tokens: &'t [Token],
    position: usize,
    depth: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Parser {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    fn peek_kind_at(&self, offset: usize) -> Option<&'t TokenKind> {
        self.tokens.get(self.position + offset).map(|t| &t.kind)
    }

    fn next(&mut self, expected: &str) -> Result<&'t Token> {
        let token = self
            .tokens
            .get(self.position)
            .ok_or_else(|| Error::unexpected_eof(expected))?;
        self.position += 1;
        Ok(token)
    }

    /// Returns the key if the cursor sits on `IDENT '='`, consuming both.
    fn take_key(&mut self) -> Option<String> {
        match (self.peek_kind_at(0), self.peek_kind_at(1)) {
            (Some(TokenKind::Ident(key)), Some(TokenKind::Eq)) => {
                self.position += 2;
                Some(key.clone())
            }
            _ => None,
        }
    }

    pub fn parse_document(&mut self) -> Result<Value> {
        if let Some(open) = self.peek().filter(|t| t.kind == TokenKind::LBrace) {
            self.position += 1;
            return self.parse_table(open);
        }

        let mut root = Table::new();
        while self.peek().is_some() {
            match self.take_key() {
                Some(key) => {
                    let value = self.parse_value()?;
                    root.insert(key, value);
                }
                None => root.push(self.parse_value()?),
            }
        }
        Ok(Value::Table(root))
    }

    fn parse_value(&mut self) -> Result<Value> {
        let token = self.next("a value")?;
        match &token.kind {
            TokenKind::String(s) => Ok(Value::String(s.clone())),
            TokenKind::Number(n) => Ok(Value::Number(*n)),
            TokenKind::Bool(b) => Ok(Value::Bool(*b)),
            TokenKind::Nil => Ok(Value::Nil),
            TokenKind::Ident(word) => Ok(Value::String(word.clone())),
            TokenKind::LBrace => self.parse_table(token),
            other => Err(Error::parse(
                token.line,
                token.column,
                format!("unexpected {}, expected a value", other),
            )),
        }
    }

    /// Parses the block opened by `open`, which has already been consumed.
    fn parse_table(&mut self, open: &Token) -> Result<Value> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::parse(
                open.line,
                open.column,
                format!("nesting too deep, at most {} levels are allowed", MAX_DEPTH),
            ));
        }
        self.depth += 1;
        let table = self.parse_table_body();
        self.depth -= 1;
        table
    }

    fn parse_table_body(&mut self) -> Result<Value> {
        let mut table = Table::new();
        let mut shape = Shape::Undecided;

        loop {
            match self.peek() {
                None => return Err(Error::unexpected_eof("a value or '}'")),
                Some(token) if token.kind == TokenKind::RBrace => {
                    self.position += 1;
                    return Ok(Value::Table(table));
                }
                Some(token) => {
                    let key = self.take_key();
                    let entry_shape = if key.is_some() {
                        Shape::Fields
                    } else {
                        Shape::List
                    };
                    if shape == Shape::Undecided {
                        shape = entry_shape;
                    } else if shape != entry_shape {
                        return Err(Error::parse(
                            token.line,
                            token.column,
                            "cannot mix list values with object fields",
                        ));
                    }

                    let value = self.parse_value()?;
                    match key {
                        Some(key) => {
                            table.insert(key, value);
                        }
                        None => table.push(value),
                    }
                }
            }

            let token = self.next("',' or '}'")?;
            match token.kind {
                TokenKind::Comma => continue,
                TokenKind::RBrace => return Ok(Value::Table(table)),
                ref other => {
                    return Err(Error::parse(
                        token.line,
                        token.column,
                        format!("unexpected {}, expected ',' or '}}'", other),
                    ))
                }
            }
        }
    }
}
