/// Byte offset → line/column lookup for one source text.
pub struct SourceMap {
    /// Byte offset at which each line begins; always starts with `0`.
    line_starts: Vec<u32>,
}

impl SourceMap {
    pub fn new(src: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                src.match_indices('\n')
                    .map(|(i, _)| u32::try_from(i + 1).unwrap_or(u32::MAX)),
            )
            .collect();
        Self { line_starts }
    }

    /// Returns `(line, col)`, both 1-based. Columns count bytes.
    pub fn line_col(&self, offset: u32) -> (usize, usize) {
        let line_idx = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let col = offset - self.line_starts[line_idx];
        (line_idx + 1, col as usize + 1)
    }
}
