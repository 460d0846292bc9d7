//! Errors for each pipeline stage.
//!
//! Every stage fails fast: the first error aborts the compilation and is propagated to
//! the caller unchanged, wrapped in [`CompileError`] by the driver.

use snafu::Snafu;

use crate::lexer::TokenKind;
use crate::span::Span;

pub type Result<T, E = CompileError> = ::core::result::Result<T, E>;

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub))]
pub enum LexError {
    /// No token pattern matches at the cursor. `remainder` is the unconsumed input.
    #[snafu(display("couldn't match token on {remainder:?}"))]
    NoMatch { remainder: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::NoMatch { span, .. } => *span,
        }
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub))]
pub enum ParseError {
    #[snafu(display("expected token {expected} but got {found}"))]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },
    #[snafu(display(
        "unexpected end of input{}",
        expected.map(|kind| format!(", expected {kind}")).unwrap_or_default()
    ))]
    UnexpectedEof {
        expected: Option<TokenKind>,
        span: Span,
    },
    #[snafu(display("unexpected token {found} after expression"))]
    TrailingToken { found: TokenKind, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::TrailingToken { span, .. } => *span,
        }
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub))]
pub enum GenError {
    /// A node variant that is not allowed where it occurs, e.g. a `def` used as an argument.
    #[snafu(display("unexpected node type {kind}"))]
    UnexpectedNode { kind: &'static str, span: Span },
}

impl GenError {
    pub fn span(&self) -> Span {
        match self {
            GenError::UnexpectedNode { span, .. } => *span,
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CompileError {
    #[snafu(display("{source}"))]
    Lex { source: LexError },
    #[snafu(display("{source}"))]
    Parse { source: ParseError },
    #[snafu(display("{source}"))]
    Gen { source: GenError },
    #[snafu(display("i/o error: {source}"))]
    Io { source: std::io::Error },
}

impl CompileError {
    /// Span of the offending source text. I/O failures have none.
    pub fn span(&self) -> Option<Span> {
        match self {
            CompileError::Lex { source } => Some(source.span()),
            CompileError::Parse { source } => Some(source.span()),
            CompileError::Gen { source } => Some(source.span()),
            CompileError::Io { .. } => None,
        }
    }
}
