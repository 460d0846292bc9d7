//! Grammar productions.
//!
//! `parse_body` is the only place that needs lookahead: an integer token starts an integer,
//! an identifier followed by `(` starts a call, and anything else is read as a variable.

use tracing::{debug, warn};

use super::Parser;
use super::ast::{Call, Def, Ident, IntLiteral, Node, Var};
use crate::error::ParseError;
use crate::lexer::TokenKind;
use crate::span::Span;

impl Parser {
    /// Parser's entry point.
    ///
    /// Tokens left over after the closing `end` are ignored.
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        let def = self.parse_def()?;

        let leftover = self.token_cursor.remaining();
        if let Some(first) = leftover.first() {
            warn!(
                count = leftover.len(),
                start = first.span.start,
                "ignoring tokens after `end`"
            );
        }
        debug!(name = %def.name.text, params = def.params.len(), "parsed definition");
        Ok(Node::Def(def))
    }

    fn parse_def(&mut self) -> Result<Def, ParseError> {
        let def_tok = self.consume(TokenKind::Def)?;
        let name = self.parse_ident()?;
        let params = self.parse_arg_names()?;
        let body = self.parse_body()?;
        let end_tok = self.consume(TokenKind::End)?;

        Ok(Def {
            name,
            params,
            body: Box::new(body),
            span: def_tok.span.to(end_tok.span),
        })
    }

    fn parse_arg_names(&mut self) -> Result<Vec<Ident>, ParseError> {
        let mut arg_names = Vec::new();

        self.consume(TokenKind::OParen)?;
        if self.peek(TokenKind::Identifier, 0)? {
            arg_names.push(self.parse_ident()?);
            while self.peek(TokenKind::Comma, 0)? {
                self.consume(TokenKind::Comma)?;
                arg_names.push(self.parse_ident()?);
            }
        }
        self.consume(TokenKind::CParen)?;

        Ok(arg_names)
    }

    pub(super) fn parse_body(&mut self) -> Result<Node, ParseError> {
        if self.peek(TokenKind::Integer, 0)? {
            self.parse_integer()
        } else if self.peek(TokenKind::Identifier, 0)? && self.peek(TokenKind::OParen, 1)? {
            self.parse_function_call()
        } else {
            self.parse_variable_reference()
        }
    }

    fn parse_integer(&mut self) -> Result<Node, ParseError> {
        let tok = self.consume(TokenKind::Integer)?;
        Ok(Node::Int(IntLiteral::from_digits(&tok.text, tok.span)))
    }

    fn parse_function_call(&mut self) -> Result<Node, ParseError> {
        let name = self.parse_ident()?;
        let (args, close) = self.parse_function_args()?;

        Ok(Node::Call(Call {
            span: name.span.to(close),
            name,
            args,
        }))
    }

    /// Returns the arguments and the span of the closing `)`.
    fn parse_function_args(&mut self) -> Result<(Vec<Node>, Span), ParseError> {
        let mut args = Vec::new();

        self.consume(TokenKind::OParen)?;
        if !self.peek(TokenKind::CParen, 0)? {
            args.push(self.parse_body()?);
            while self.peek(TokenKind::Comma, 0)? {
                self.consume(TokenKind::Comma)?;
                args.push(self.parse_body()?);
            }
        }
        let close = self.consume(TokenKind::CParen)?;

        Ok((args, close.span))
    }

    fn parse_variable_reference(&mut self) -> Result<Node, ParseError> {
        Ok(Node::Var(Var {
            name: self.parse_ident()?,
        }))
    }

    fn parse_ident(&mut self) -> Result<Ident, ParseError> {
        let tok = self.consume(TokenKind::Identifier)?;
        Ok(Ident {
            text: tok.text,
            span: tok.span,
        })
    }
}
