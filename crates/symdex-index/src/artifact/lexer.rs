//! Artifact lexer (tokenizer).
//!
//! Converts the literal subset of JavaScript used by generated search data into a stream of
//! tokens. JSON is a subset of what is accepted here.

use std::{iter::Peekable, str::Chars};

use serde_json::Number;

use crate::error::SyntaxError;

/// A token in an artifact.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Left bracket.
    LBracket,
    /// Right bracket.
    RBracket,
    /// Comma separator.
    Comma,
    /// Assignment operator.
    Equals,
    /// Statement terminator.
    Semicolon,
    /// A string literal with escapes resolved.
    Str(String),
    /// A numeric literal.
    Number(Number),
    /// A bare identifier, including `var`, `null`, `true` and `false`.
    Ident(String),
}

/// A token with the byte position where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    /// The token.
    pub token: Token,
    /// Byte position of the first character.
    pub position: usize,
}

/// Tokenizes an artifact.
struct Lexer<'a> {
    /// The original input string.
    input: &'a str,
    /// Character iterator with one-character lookahead.
    chars: Peekable<Chars<'a>>,
    /// Current byte position in input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().peekable(),
            position: 0,
        }
    }

    /// Creates an error at a specific position.
    fn error_at(&self, message: impl Into<String>, position: usize) -> SyntaxError {
        SyntaxError::new(message, position, self.input)
    }

    /// Tokenizes the entire input, returning all tokens or an error.
    fn tokenize(mut self) -> Result<Vec<Spanned>, SyntaxError> {
        let mut tokens = Vec::new();

        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }

        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input.
    fn next_token(&mut self) -> Result<Option<Spanned>, SyntaxError> {
        self.skip_trivia()?;

        let position = self.position;
        let Some(&ch) = self.chars.peek() else {
            return Ok(None);
        };

        let token = match ch {
            '[' => self.single(Token::LBracket),
            ']' => self.single(Token::RBracket),
            ',' => self.single(Token::Comma),
            '=' => self.single(Token::Equals),
            ';' => self.single(Token::Semicolon),
            '\'' | '"' => self.read_string(ch)?,
            '-' | '0'..='9' => self.read_number()?,
            c if is_ident_start(c) => self.read_ident(),
            other => {
                return Err(self.error_at(format!("unexpected character '{other}'"), position));
            }
        };

        Ok(Some(Spanned { token, position }))
    }

    /// Consumes one character and returns the given token.
    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    /// Reads a quoted string, resolving escapes.
    fn read_string(&mut self, quote: char) -> Result<Token, SyntaxError> {
        let start_pos = self.position;
        self.advance(); // opening quote

        let mut content = String::new();

        loop {
            match self.chars.peek() {
                Some(&c) if c == quote => {
                    self.advance();
                    return Ok(Token::Str(content));
                }
                Some(&'\\') => {
                    self.advance();
                    content.push(self.read_escape()?);
                }
                Some(&'\n') | None => {
                    return Err(self.error_at("unterminated string", start_pos));
                }
                Some(&c) => {
                    content.push(c);
                    self.advance();
                }
            }
        }
    }

    /// Reads the character following a backslash.
    fn read_escape(&mut self) -> Result<char, SyntaxError> {
        let escape_pos = self.position.saturating_sub(1);
        let Some(c) = self.chars.next() else {
            return Err(self.error_at("unterminated escape", escape_pos));
        };
        self.position += c.len_utf8();

        Ok(match c {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            'b' => '\u{8}',
            'f' => '\u{c}',
            '0' => '\0',
            'u' => return self.read_unicode_escape(escape_pos),
            // JavaScript keeps the character for any other escape (\\, \', \", \/, ...)
            other => other,
        })
    }

    /// Reads the four hex digits of a `\u` escape, joining surrogate pairs.
    fn read_unicode_escape(&mut self, escape_pos: usize) -> Result<char, SyntaxError> {
        let high = self.read_hex4(escape_pos)?;
        if !(0xD800..0xDC00).contains(&high) {
            return char::from_u32(high)
                .ok_or_else(|| self.error_at("invalid unicode escape", escape_pos));
        }

        // High surrogate must be followed by an escaped low surrogate
        if self.chars.next_if_eq(&'\\').is_none() || self.chars.next_if_eq(&'u').is_none() {
            return Err(self.error_at("unpaired surrogate in unicode escape", escape_pos));
        }
        self.position += 2;
        let low = self.read_hex4(escape_pos)?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(self.error_at("unpaired surrogate in unicode escape", escape_pos));
        }
        let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        char::from_u32(combined).ok_or_else(|| self.error_at("invalid unicode escape", escape_pos))
    }

    /// Reads exactly four hex digits.
    fn read_hex4(&mut self, escape_pos: usize) -> Result<u32, SyntaxError> {
        let mut value = 0;
        for _ in 0..4 {
            let digit = self
                .chars
                .peek()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error_at("expected four hex digits after \\u", escape_pos))?;
            self.advance();
            value = value * 16 + digit;
        }
        Ok(value)
    }

    /// Reads an integer or decimal number.
    fn read_number(&mut self) -> Result<Token, SyntaxError> {
        let start_pos = self.position;
        let mut text = String::new();

        if self.chars.peek() == Some(&'-') {
            text.push('-');
            self.advance();
        }

        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+') {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if let Ok(n) = text.parse::<i64>() {
            return Ok(Token::Number(n.into()));
        }

        text.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Token::Number)
            .ok_or_else(|| self.error_at(format!("invalid number: {text}"), start_pos))
    }

    /// Reads an identifier.
    fn read_ident(&mut self) -> Token {
        let mut word = String::new();
        while let Some(&ch) = self.chars.peek() {
            if is_ident_start(ch) || ch.is_ascii_digit() {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        Token::Ident(word)
    }

    /// Skips whitespace and `//` or `/* */` comments.
    fn skip_trivia(&mut self) -> Result<(), SyntaxError> {
        loop {
            match self.chars.peek() {
                Some(&ch) if ch.is_whitespace() || ch == '\u{feff}' => self.advance(),
                Some(&'/') => self.skip_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Skips a comment starting at the current `/`.
    fn skip_comment(&mut self) -> Result<(), SyntaxError> {
        let start_pos = self.position;
        self.advance();
        match self.chars.peek() {
            Some(&'/') => {
                while let Some(&ch) = self.chars.peek() {
                    if ch == '\n' {
                        break;
                    }
                    self.advance();
                }
                Ok(())
            }
            Some(&'*') => {
                self.advance();
                let mut prev = '\0';
                while let Some(&ch) = self.chars.peek() {
                    self.advance();
                    if prev == '*' && ch == '/' {
                        return Ok(());
                    }
                    prev = ch;
                }
                Err(self.error_at("unterminated comment", start_pos))
            }
            _ => Err(self.error_at("unexpected character '/'", start_pos)),
        }
    }

    /// Advances to the next character.
    fn advance(&mut self) {
        if let Some(ch) = self.chars.next() {
            self.position += ch.len_utf8();
        }
    }
}

/// Returns true for characters that may start an identifier.
fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

/// Tokenizes an artifact.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, SyntaxError> {
    Lexer::new(input).tokenize()
}
