//! Recursive-descent parser.
//!
//! Inputs: the token sequence produced by [`crate::lexer::tokenize`]. There is no EOF token;
//! running off the end of the sequence while a token is required is a terminal
//! [`ParseError::UnexpectedEof`]. No backtracking and no recovery: the first error aborts
//! the parse and no partial tree is returned.
//!
//! ```text
//! def        := 'def' IDENT arg_names body 'end'
//! arg_names  := '(' [ IDENT (',' IDENT)* ] ')'
//! body       := integer | call | variable
//! call       := IDENT '(' [ body (',' body)* ] ')'
//! variable   := IDENT
//! integer    := INTEGER
//! ```

use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};
use crate::span::Span;

pub mod ast;
mod expr;
mod pretty;

use ast::Node;

/// Parse a whole program. The returned tree is always rooted at [`Node::Def`].
pub fn parse(tokens: Vec<Token>) -> Result<Node, ParseError> {
    Parser::new(tokens).parse()
}

/// Parse a single `body` production that must span the whole token sequence.
pub fn parse_expr(tokens: Vec<Token>) -> Result<Node, ParseError> {
    let mut parser = Parser::new(tokens);
    let node = parser.parse_body()?;
    parser.expect_exhausted()?;
    Ok(node)
}

/// Owned cursor over the remaining tokens of one parse.
pub struct TokenCursor {
    pub tokens: Vec<Token>,
    pub pos: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.pos.min(self.tokens.len())..]
    }

    /// Empty span just past the last token.
    fn end_span(&self) -> Span {
        let end = self.tokens.last().map_or(0, |t| t.span.end as usize);
        Span::empty(end)
    }
}

pub struct Parser {
    token_cursor: TokenCursor,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            token_cursor: TokenCursor::new(tokens),
        }
    }

    /// Whether the token `offset` positions ahead has kind `kind`.
    ///
    /// Looking past the end of the sequence is an error, not `false`.
    fn peek(&self, kind: TokenKind, offset: usize) -> Result<bool, ParseError> {
        match self.token_cursor.remaining().get(offset) {
            Some(tok) => Ok(tok.is(kind)),
            None => Err(self.unexpected_eof(Some(kind))),
        }
    }

    /// Remove and return the next token if it has kind `kind`.
    fn consume(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let Some(tok) = self.token_cursor.remaining().first() else {
            return Err(self.unexpected_eof(Some(kind)));
        };
        if !tok.is(kind) {
            return Err(ParseError::UnexpectedToken {
                expected: kind,
                found: tok.kind,
                span: tok.span,
            });
        }

        let tok = tok.clone();
        self.token_cursor.pos += 1;
        Ok(tok)
    }

    fn expect_exhausted(&self) -> Result<(), ParseError> {
        match self.token_cursor.remaining().first() {
            None => Ok(()),
            Some(tok) => Err(ParseError::TrailingToken {
                found: tok.kind,
                span: tok.span,
            }),
        }
    }

    fn unexpected_eof(&self, expected: Option<TokenKind>) -> ParseError {
        ParseError::UnexpectedEof {
            expected,
            span: self.token_cursor.end_span(),
        }
    }
}
