//! LuaML tokenization.
//!
//! The [`Lexer`] turns raw text into a flat sequence of [`Token`]s, dropping
//! whitespace and comments. At each position the first matching rule wins:
//!
//! | Input | Result |
//! |-------|--------|
//! | whitespace | skipped |
//! | `--[[ ... ]]` | block comment, skipped |
//! | `-- ...` | line comment up to the newline, skipped |
//! | `{` `}` `,` `=` | structural token |
//! | `[[ ... ]]` | raw string, no escape processing |
//! | `'...'` / `"..."` | quoted string with `\n`, `\t`, `\\` and escaped-quote sequences |
//! | letter or `_` | `true`/`false`, `nil`, or an identifier |
//! | digit, or `+`/`-` before a digit | number (`0x` prefix for hex) |
//!
//! Anything else is a lex error. Because comments are checked first, `--5` is
//! always a comment, never a double negation.
//!
//! Unterminated block comments, raw strings and quoted strings do not raise an
//! error: they consume the rest of the input. Strings cut short this way are
//! still emitted as tokens.
//!
//! ```rust
//! use serde_luaml::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("answer = 0x2A -- hex").unwrap();
//! let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Ident("answer".to_string()),
//!         TokenKind::Eq,
//!         TokenKind::Number(42.0),
//!     ]
//! );
//! ```

use crate::{Error, Result};
use std::fmt;

/// The kind of a token, carrying the decoded payload for scalars.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    LBrace,
    RBrace,
    Comma,
    Eq,
    String(String),
    Number(f64),
    Bool(bool),
    Nil,
    Ident(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LBrace => f.write_str("'{'"),
            TokenKind::RBrace => f.write_str("'}'"),
            TokenKind::Comma => f.write_str("','"),
            TokenKind::Eq => f.write_str("'='"),
            TokenKind::String(s) => write!(f, "string {:?}", s),
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::Bool(b) => write!(f, "boolean {}", b),
            TokenKind::Nil => f.write_str("nil"),
            TokenKind::Ident(word) => write!(f, "identifier '{}'", word),
        }
    }
}

/// A token and the 1-based position of its first character.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

/// Tokenizes a whole document.
///
/// # Errors
///
/// Returns [`Error::Lex`] for a character that cannot start a token or a
/// numeric literal that does not parse.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

/// A single-pass scanner over LuaML text.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Advances up to the byte offset `end`, keeping line/column in step.
    fn advance_to(&mut self, end: usize) {
        while self.position < end && self.next_char().is_some() {}
    }

    /// Consumes input up to and including `terminator`, returning the text
    /// before it. Without a terminator the rest of the input is consumed.
    fn take_until(&mut self, terminator: &str) -> &'a str {
        let start = self.position;
        match self.rest().find(terminator) {
            Some(offset) => {
                let end = start + offset;
                self.advance_to(end + terminator.len());
                &self.input[start..end]
            }
            None => {
                self.advance_to(self.input.len());
                &self.input[start..]
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            self.skip_whitespace();

            let (line, column) = (self.line, self.column);
            let ch = match self.peek_char() {
                Some(ch) => ch,
                None => return Ok(None),
            };

            if self.rest().starts_with("--") {
                self.advance_to(self.position + 2);
                if self.rest().starts_with("[[") {
                    self.advance_to(self.position + 2);
                    self.take_until("]]");
                } else {
                    while let Some(c) = self.next_char() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                continue;
            }

            let kind = match ch {
                '{' | '}' | ',' | '=' => {
                    self.next_char();
                    match ch {
                        '{' => TokenKind::LBrace,
                        '}' => TokenKind::RBrace,
                        ',' => TokenKind::Comma,
                        _ => TokenKind::Eq,
                    }
                }
                '[' if self.rest().starts_with("[[") => {
                    self.advance_to(self.position + 2);
                    TokenKind::String(self.take_until("]]").to_string())
                }
                '\'' | '"' => TokenKind::String(self.scan_quoted(ch)),
                c if c.is_alphabetic() || c == '_' => self.scan_word(),
                c if c.is_ascii_digit() => self.scan_number(line, column)?,
                '+' | '-' if self.peek_second().is_some_and(|c| c.is_ascii_digit()) => {
                    self.scan_number(line, column)?
                }
                other => {
                    return Err(Error::lex(
                        line,
                        column,
                        format!("unexpected character '{}'", other.escape_default()),
                    ))
                }
            };

            return Ok(Some(Token { kind, line, column }));
        }
    }

    fn scan_quoted(&mut self, quote: char) -> String {
        self.next_char(); // opening quote
        let start = self.position;
        let mut end = self.input.len();

        while let Some(ch) = self.next_char() {
            if ch == '\\' {
                self.next_char();
            } else if ch == quote {
                end = self.position - quote.len_utf8();
                break;
            }
        }

        unescape(&self.input[start..end], quote)
    }

    fn scan_word(&mut self) -> TokenKind {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch.is_alphanumeric() || ch == '_' {
                self.next_char();
            } else {
                break;
            }
        }

        match &self.input[start..self.position] {
            "true" => TokenKind::Bool(true),
            "false" => TokenKind::Bool(false),
            "nil" => TokenKind::Nil,
            word => TokenKind::Ident(word.to_string()),
        }
    }

    fn scan_number(&mut self, line: usize, column: usize) -> Result<TokenKind> {
        let start = self.position;
        let negative = match self.peek_char() {
            Some('-') => {
                self.next_char();
                true
            }
            Some('+') => {
                self.next_char();
                false
            }
            _ => false,
        };

        let invalid =
            |text: &str| Error::lex(line, column, format!("invalid number literal '{}'", text));

        if self.rest().starts_with("0x") || self.rest().starts_with("0X") {
            self.advance_to(self.position + 2);
            let digits_start = self.position;
            while self.peek_char().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.next_char();
            }
            let text = &self.input[start..self.position];
            let magnitude = u64::from_str_radix(&self.input[digits_start..self.position], 16)
                .map_err(|_| invalid(text))? as f64;
            return Ok(TokenKind::Number(if negative { -magnitude } else { magnitude }));
        }

        let mut seen_dot = false;
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                self.next_char();
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                self.next_char();
            } else {
                break;
            }
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            self.next_char();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.next_char();
            }
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.next_char();
            }
        }

        let text = &self.input[start..self.position];
        text.parse::<f64>()
            .map(TokenKind::Number)
            .map_err(|_| invalid(text))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.next_token().transpose();
        if matches!(item, Some(Err(_))) {
            // stop after the first error
            self.position = self.input.len();
        }
        item
    }
}

/// Decodes the escape sequences of a quoted string body. Only `\n`, `\t`,
/// `\\` and an escaped enclosing quote are recognised; any other backslash
/// sequence is kept as written.
fn unescape(raw: &str, quote: char) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some(c) if c == quote => result.push(quote),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}
