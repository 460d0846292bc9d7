//! Assembles a runnable program around the generated definition.
//!
//! The driver owns the fixed runtime preamble and the trailing test invocation; the
//! generator itself only ever sees the tree.

use std::io::{Read, Write};

use snafu::ResultExt;
use tracing::debug;

use crate::codegen::generate;
use crate::error::{GenSnafu, IoSnafu, LexSnafu, ParseSnafu, Result};
use crate::lexer::tokenize;
use crate::parser::parse;

/// Runtime support emitted before the generated definition.
pub const RUNTIME: &str = "function add(x,y) { return x + y };";

/// Invocation emitted after the generated definition.
pub const TEST: &str = "console.log(f(1, 2));";

/// Compile `source` into the assembled program: preamble, definition, invocation, one per
/// line, without a trailing newline.
pub fn compile(source: &str) -> Result<String> {
    let tokens = tokenize(source).context(LexSnafu)?;
    let tree = parse(tokens).context(ParseSnafu)?;
    let generated = generate(&tree).context(GenSnafu)?;
    debug!(len = generated.len(), "generated definition");

    Ok([RUNTIME, generated.as_str(), TEST].join("\n"))
}

/// Parse `source` and print the tree back in the source language, with normalized
/// spacing and integer literals.
pub fn format_source(source: &str) -> Result<String> {
    let tokens = tokenize(source).context(LexSnafu)?;
    let tree = parse(tokens).context(ParseSnafu)?;
    Ok(tree.pretty())
}

/// Read all of `input`, compile it, and write the program to `output` in a single write.
///
/// Nothing is written if reading or compiling fails.
pub fn run<R: Read, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let mut source = String::new();
    input.read_to_string(&mut source).context(IoSnafu)?;

    let mut program = compile(&source)?;
    program.push('\n');

    output.write_all(program.as_bytes()).context(IoSnafu)?;
    output.flush().context(IoSnafu)
}
