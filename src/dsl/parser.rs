//! Parser for the network DSL.

use std::collections::HashMap;

use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{PulseError, Result};
use crate::ENTRY_MODULE;

/// Parser for network DSL.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    ///
    /// Fails if the very first token cannot be lexed.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire network description.
    pub fn parse(&mut self) -> Result<NetworkAst> {
        let mut ast = NetworkAst::new();
        let mut defined: HashMap<String, usize> = HashMap::new();

        while self.current.kind != TokenKind::Eof {
            // Skip empty lines
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
                continue;
            }

            let def = self.parse_definition()?;
            if defined.insert(def.name.clone(), def.line).is_some() {
                return Err(PulseError::DuplicateModule {
                    name: def.name,
                    line: def.line,
                });
            }
            ast.modules.push(def);

            match self.current.kind {
                TokenKind::Newline => self.advance()?,
                TokenKind::Eof => break,
                _ => {
                    return Err(PulseError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(PulseError::parse(
                self.current.line,
                format!("expected {}, got {:?}", what, self.current.kind),
            ))
        }
    }

    fn parse_definition(&mut self) -> Result<ModuleDef> {
        let line = self.current.line;

        let prefixed = match self.current.kind {
            TokenKind::FlipFlopPrefix | TokenKind::ConjunctionPrefix => {
                self.current.text.chars().next().and_then(ModuleKind::from_prefix)
            }
            _ => None,
        };
        if prefixed.is_some() {
            self.advance()?;
        }

        let name = self.expect(TokenKind::Identifier, "module name")?.text;

        // Unprefixed definitions are reserved for the entry module
        let kind = match prefixed {
            Some(kind) => kind,
            None if name == ENTRY_MODULE => ModuleKind::Broadcast,
            None => return Err(PulseError::UnknownModuleType { name, line }),
        };

        self.expect(TokenKind::Arrow, "'->'")?;

        let mut destinations: Vec<String> = Vec::new();
        loop {
            let dest = self.expect(TokenKind::Identifier, "destination name")?.text;
            if destinations.contains(&dest) {
                return Err(PulseError::DuplicateDestination {
                    module: name,
                    destination: dest,
                    line,
                });
            }
            destinations.push(dest);

            if self.current.kind != TokenKind::Comma {
                break;
            }
            self.advance()?;
        }

        Ok(ModuleDef {
            kind,
            name,
            destinations,
            line,
        })
    }
}
