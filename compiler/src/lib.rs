//! Compiler for a one-function source language.
//!
//! Pipeline: tokenize → parse → generate, then the driver wraps the generated definition
//! with a fixed runtime preamble and test invocation.
//! All spans are UTF-8 byte offsets into the original source, using `[start, end)`.

pub mod codegen;
mod diagnostics;
pub mod driver;
pub mod error;
pub mod lexer;
pub mod parser;
mod source_map;
mod span;
mod tests;

pub use codegen::generate;
pub use diagnostics::format_diagnostic;
pub use driver::{RUNTIME, TEST, compile, format_source, run};
pub use error::{CompileError, GenError, LexError, ParseError};
pub use lexer::{Token, TokenKind, tokenize};
pub use parser::ast;
pub use parser::{parse, parse_expr};
pub use source_map::SourceMap;
pub use span::Span;
