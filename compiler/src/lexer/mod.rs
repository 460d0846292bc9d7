//! Tokenizer.
//!
//! Patterns are tried in a fixed priority order at the cursor, after skipping ASCII
//! whitespace (newlines included) and NUL. The first pattern matching a non-empty prefix
//! wins. Keywords come
//! before identifiers, and every word-like pattern must end on a word boundary, so
//! `define` is one identifier and never `def` followed by `ine`.

use tracing::{debug, trace};

use crate::error::{LexError, NoMatchSnafu};
use crate::span::Span;

mod token;

pub use token::{Token, TokenKind};

#[derive(Debug, Clone, Copy)]
enum Pattern {
    Keyword(&'static str),
    Letters,
    Digits,
    Punct(char),
}

impl Pattern {
    /// Length in bytes of the prefix of `rest` matched by this pattern.
    fn match_len(&self, rest: &str) -> Option<usize> {
        let len = match self {
            Pattern::Keyword(word) => {
                if rest.starts_with(word) {
                    word.len()
                } else {
                    0
                }
            }
            Pattern::Letters => run_len(rest, |c| c.is_ascii_alphabetic()),
            Pattern::Digits => run_len(rest, |c| c.is_ascii_digit()),
            Pattern::Punct(ch) => {
                if rest.starts_with(*ch) {
                    ch.len_utf8()
                } else {
                    0
                }
            }
        };
        (len > 0).then_some(len)
    }
}

const TOKEN_TYPES: [(TokenKind, Pattern); 7] = [
    (TokenKind::Def, Pattern::Keyword("def")),
    (TokenKind::End, Pattern::Keyword("end")),
    (TokenKind::Identifier, Pattern::Letters),
    (TokenKind::Integer, Pattern::Digits),
    (TokenKind::OParen, Pattern::Punct('(')),
    (TokenKind::CParen, Pattern::Punct(')')),
    (TokenKind::Comma, Pattern::Punct(',')),
];

/// Tokenize the whole input.
///
/// Fails with [`LexError::NoMatch`] carrying the unmatched remainder when no pattern
/// applies at the cursor.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    loop {
        pos += leading_whitespace(&input[pos..]);
        if pos >= input.len() {
            break;
        }

        let token = tokenize_one_token(input, pos)?;
        trace!(kind = %token.kind, text = %token.text, start = token.span.start, "token");
        pos = token.span.end as usize;
        tokens.push(token);
    }

    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

fn tokenize_one_token(input: &str, pos: usize) -> Result<Token, LexError> {
    let rest = &input[pos..];

    for (kind, pattern) in TOKEN_TYPES {
        let Some(len) = pattern.match_len(rest) else {
            continue;
        };
        if kind.is_word() && !at_word_boundary(&rest[len..]) {
            continue;
        }
        return Ok(Token::new(kind, &rest[..len], Span::new(pos, pos + len)));
    }

    let first_len = rest.chars().next().map_or(0, char::len_utf8);
    NoMatchSnafu {
        remainder: rest,
        span: Span::new(pos, pos + first_len),
    }
    .fail()
}

/// ASCII whitespace plus NUL. Other Unicode spaces are not token separators.
fn is_skippable(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r' | '\0')
}

fn leading_whitespace(rest: &str) -> usize {
    rest.len() - rest.trim_start_matches(is_skippable).len()
}

fn run_len(rest: &str, pred: impl Fn(char) -> bool) -> usize {
    rest.find(|c: char| !pred(c)).unwrap_or(rest.len())
}

/// `after` is the input following a candidate match; the boundary holds at end of input
/// or before any non-word character.
fn at_word_boundary(after: &str) -> bool {
    after.chars().next().is_none_or(|c| !is_word_char(c))
}

fn is_word_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}
