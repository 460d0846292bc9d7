//! Lexer tokens.
//!
//! Every [`Token`] keeps the exact source text it was matched from, plus its [`Span`]
//! (UTF-8 byte offsets, half-open `[start, end)`).

use std::fmt;

use serde::Serialize;

use crate::span::Span;

/// The closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// `def`
    Def,
    /// `end`
    End,
    /// One or more ASCII letters.
    Identifier,
    /// One or more ASCII digits.
    Integer,
    /// `(`
    OParen,
    /// `)`
    CParen,
    /// `,`
    Comma,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Def => "def",
            TokenKind::End => "end",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::OParen => "oparen",
            TokenKind::CParen => "cparen",
            TokenKind::Comma => "comma",
        }
    }

    /// Keywords, identifiers and integers must end on a word boundary.
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            TokenKind::Def | TokenKind::End | TokenKind::Identifier | TokenKind::Integer
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A token with its source span.
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
