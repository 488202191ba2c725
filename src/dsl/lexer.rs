//! Lexer (tokenizer) for the network DSL.

use crate::error::{PulseError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A module name
    Identifier,
    /// Flip-flop prefix '%'
    FlipFlopPrefix,
    /// Conjunction prefix '&'
    ConjunctionPrefix,
    /// Separator '->'
    Arrow,
    /// Destination separator ','
    Comma,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing network DSL input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let start_line = self.line;
        let start_column = self.column;

        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => return Ok(self.token(TokenKind::Eof, String::new(), start_line, start_column)),
        };

        let (kind, text) = match ch {
            '\n' => {
                self.advance();
                (TokenKind::Newline, "\n".to_string())
            }
            '%' => {
                self.advance();
                (TokenKind::FlipFlopPrefix, "%".to_string())
            }
            '&' => {
                self.advance();
                (TokenKind::ConjunctionPrefix, "&".to_string())
            }
            ',' => {
                self.advance();
                (TokenKind::Comma, ",".to_string())
            }
            '-' => {
                self.advance();
                if self.chars.peek() != Some(&'>') {
                    return Err(PulseError::lexer(
                        start_line,
                        start_column,
                        "expected '>' after '-'",
                    ));
                }
                self.advance();
                (TokenKind::Arrow, "->".to_string())
            }
            _ if ch.is_alphanumeric() || ch == '_' => (TokenKind::Identifier, self.read_identifier()),
            _ => {
                return Err(PulseError::lexer(
                    start_line,
                    start_column,
                    format!("unexpected character '{}'", ch),
                ));
            }
        };

        Ok(self.token(kind, text, start_line, start_column))
    }

    fn token(&self, kind: TokenKind, text: String, line: usize, column: usize) -> Token {
        Token {
            kind,
            text,
            line,
            column,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else if ch == '#' {
                // Skip comment until end of line
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            out.push(tok.kind);
            if tok.kind == TokenKind::Eof {
                return out;
            }
        }
    }

    #[test]
    fn test_lexer_definition() {
        use TokenKind::*;
        assert_eq!(
            kinds("%a -> b, c"),
            vec![FlipFlopPrefix, Identifier, Arrow, Identifier, Comma, Identifier, Eof]
        );
    }

    #[test]
    fn test_lexer_positions() {
        let mut lexer = Lexer::new("broadcaster -> a\n&inv -> b");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.text, "broadcaster");
        assert_eq!((tok.line, tok.column), (1, 1));

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Arrow);
        assert_eq!(tok.column, 13);

        lexer.next_token().unwrap();
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Newline);

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::ConjunctionPrefix);
        assert_eq!((tok.line, tok.column), (2, 1));
    }

    #[test]
    fn test_lexer_comments_and_crlf() {
        use TokenKind::*;
        assert_eq!(
            kinds("# header\r\n%a -> b # trailing\r\n"),
            vec![Newline, FlipFlopPrefix, Identifier, Arrow, Identifier, Newline, Eof]
        );
    }

    #[test]
    fn test_lexer_rejects_unknown_prefix() {
        let mut lexer = Lexer::new("!a -> b");
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, PulseError::LexerError { line: 1, column: 1, .. }));
    }

    #[test]
    fn test_lexer_rejects_bare_dash() {
        let mut lexer = Lexer::new("a - b");
        lexer.next_token().unwrap();
        assert!(matches!(
            lexer.next_token(),
            Err(PulseError::LexerError { column: 3, .. })
        ));
    }
}
