use std::fmt::Write;

use crate::error::CompileError;
use crate::source_map::SourceMap;

/// Render `err` against the source it was produced from:
///
/// ```text
/// error: expected token cparen but got integer
///   --> <input>:2:1 [8..9]
/// ```
///
/// Errors without a source location (I/O) render as the `error:` line alone.
pub fn format_diagnostic(source: &str, err: &CompileError) -> String {
    let mut out = String::new();
    let _ = writeln!(&mut out, "error: {err}");

    if let Some(span) = err.span() {
        let sm = SourceMap::new(source);
        let (line, col) = sm.line_col(span.start);
        let _ = writeln!(
            &mut out,
            "  --> <input>:{}:{} [{}..{}]",
            line, col, span.start, span.end
        );
    }
    out
}
