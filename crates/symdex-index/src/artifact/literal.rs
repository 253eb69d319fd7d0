//! Literal parser.
//!
//! Turns the token stream into a [`serde_json::Value`], accepting either a bare literal (JSON)
//! or a single assignment statement (`var searchData = [...];`) as emitted by documentation
//! generators.

use serde_json::Value;

use super::{
    ArtifactFormat,
    lexer::{Spanned, Token, tokenize},
};
use crate::error::SyntaxError;

/// Maximum array nesting accepted before the artifact is rejected.
const MAX_DEPTH: usize = 64;

/// Keywords that may introduce the assignment statement.
const DECLARATION_KEYWORDS: &[&str] = &["var", "let", "const"];

/// A parsed artifact literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    /// The literal value.
    pub value: Value,
    /// Which surface syntax the artifact used.
    pub format: ArtifactFormat,
}

/// Recursive-descent parser over artifact tokens.
struct Parser<'a> {
    /// The original input, for error positions.
    input: &'a str,
    /// Tokens to parse.
    tokens: Vec<Spanned>,
    /// Index of the next token.
    index: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over the tokens of `input`.
    fn new(input: &'a str, tokens: Vec<Spanned>) -> Self {
        Self {
            input,
            tokens,
            index: 0,
        }
    }

    /// Parses the whole artifact.
    fn parse(mut self) -> Result<Literal, SyntaxError> {
        let format = self.parse_prologue()?;
        let value = self.parse_value(0)?;

        if matches!(self.peek(), Some(Token::Semicolon)) {
            self.index += 1;
        }
        if let Some(extra) = self.tokens.get(self.index) {
            return Err(self.error_at("unexpected content after literal", extra.position));
        }

        Ok(Literal { value, format })
    }

    /// Consumes an optional `var name =` prologue and reports the format.
    fn parse_prologue(&mut self) -> Result<ArtifactFormat, SyntaxError> {
        let Some(Token::Ident(word)) = self.peek() else {
            return Ok(ArtifactFormat::Json);
        };
        if matches!(word.as_str(), "null" | "true" | "false") {
            return Ok(ArtifactFormat::Json);
        }

        if DECLARATION_KEYWORDS.contains(&word.as_str()) {
            self.index += 1;
            match self.next() {
                Some(Spanned {
                    token: Token::Ident(_),
                    ..
                }) => {}
                other => return Err(self.unexpected(other, "variable name")),
            }
        } else {
            self.index += 1;
        }

        match self.next() {
            Some(Spanned {
                token: Token::Equals,
                ..
            }) => Ok(ArtifactFormat::Script),
            other => Err(self.unexpected(other, "'='")),
        }
    }

    /// Parses a single value.
    fn parse_value(&mut self, depth: usize) -> Result<Value, SyntaxError> {
        let Some(spanned) = self.next() else {
            return Err(self.error_at("unexpected end of input", self.input.len()));
        };

        match spanned.token {
            Token::LBracket => self.parse_array(spanned.position, depth + 1),
            Token::Str(s) => Ok(Value::String(s)),
            Token::Number(n) => Ok(Value::Number(n)),
            Token::Ident(ref word) => match word.as_str() {
                "null" => Ok(Value::Null),
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(self.error_at(format!("unexpected identifier '{word}'"), spanned.position)),
            },
            _ => Err(self.unexpected(Some(spanned), "a value")),
        }
    }

    /// Parses array elements after the opening bracket.
    ///
    /// A trailing comma before `]` is accepted.
    fn parse_array(&mut self, open_pos: usize, depth: usize) -> Result<Value, SyntaxError> {
        if depth > MAX_DEPTH {
            return Err(self.error_at("arrays nested too deeply", open_pos));
        }

        let mut items = Vec::new();
        loop {
            match self.peek() {
                Some(Token::RBracket) => {
                    self.index += 1;
                    return Ok(Value::Array(items));
                }
                None => return Err(self.error_at("unclosed '['", open_pos)),
                _ => {}
            }

            items.push(self.parse_value(depth)?);

            match self.next() {
                Some(Spanned {
                    token: Token::Comma,
                    ..
                }) => {}
                Some(Spanned {
                    token: Token::RBracket,
                    ..
                }) => return Ok(Value::Array(items)),
                None => return Err(self.error_at("unclosed '['", open_pos)),
                other => return Err(self.unexpected(other, "',' or ']'")),
            }
        }
    }

    /// Returns the next token without consuming it.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|s| &s.token)
    }

    /// Consumes and returns the next token.
    fn next(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.get(self.index).cloned();
        if spanned.is_some() {
            self.index += 1;
        }
        spanned
    }

    /// Builds an "expected X" error for the given token.
    fn unexpected(&self, found: Option<Spanned>, expected: &str) -> SyntaxError {
        match found {
            Some(spanned) => self.error_at(format!("expected {expected}"), spanned.position),
            None => self.error_at(
                format!("expected {expected}, found end of input"),
                self.input.len(),
            ),
        }
    }

    /// Creates an error at a specific position.
    fn error_at(&self, message: impl Into<String>, position: usize) -> SyntaxError {
        SyntaxError::new(message, position, self.input)
    }
}

/// Parses an artifact into a literal value.
pub fn parse(input: &str) -> Result<Literal, SyntaxError> {
    let tokens = tokenize(input)?;
    Parser::new(input, tokens).parse()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_json_array() {
        let literal = parse(r#"[["tile", ["Tile", "a.html", null]]]"#).unwrap();
        assert_eq!(literal.format, ArtifactFormat::Json);
        assert_eq!(literal.value, json!([["tile", ["Tile", "a.html", null]]]));
    }

    #[test]
    fn parses_script_assignment() {
        let literal = parse("var searchData=\n[\n  ['tson',['tson',['../namespacetson.html',1,'']]]\n];\n")
            .unwrap();
        assert_eq!(literal.format, ArtifactFormat::Script);
        assert_eq!(
            literal.value,
            json!([["tson", ["tson", ["../namespacetson.html", 1, ""]]]])
        );
    }

    #[test]
    fn parses_bare_assignment() {
        let literal = parse("searchData = [];").unwrap();
        assert_eq!(literal.format, ArtifactFormat::Script);
        assert_eq!(literal.value, json!([]));
    }

    #[test]
    fn accepts_trailing_comma() {
        assert_eq!(parse("[1, 2,]").unwrap().value, json!([1, 2]));
    }

    #[test]
    fn rejects_missing_comma() {
        let err = parse("[1 2]").unwrap_err();
        assert_eq!(err.position, 3);
        assert!(err.message.contains("expected ',' or ']'"));
    }

    #[test]
    fn rejects_unclosed_array() {
        let err = parse("var x = [1,").unwrap_err();
        assert!(err.message.contains("unclosed"));
        assert_eq!(err.position, 8);
    }

    #[test]
    fn rejects_trailing_content() {
        let err = parse("[] []").unwrap_err();
        assert_eq!(err.position, 3);
    }

    #[test]
    fn rejects_missing_equals() {
        let err = parse("var searchData [];").unwrap_err();
        assert!(err.message.contains("'='"));
    }

    #[test]
    fn rejects_deep_nesting() {
        let input = format!("{}{}", "[".repeat(MAX_DEPTH + 1), "]".repeat(MAX_DEPTH + 1));
        assert!(parse(&input).unwrap_err().message.contains("nested"));
    }

    #[test]
    fn rejects_empty_input() {
        let err = parse("   ").unwrap_err();
        assert!(err.message.contains("end of input"));
    }
}
