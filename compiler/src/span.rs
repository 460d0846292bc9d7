use serde::Serialize;

/// Half-open byte span into the source string: `[start, end)`.
///
/// `start` and `end` must be valid UTF-8 slice boundaries for that same source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Offsets past `u32::MAX` saturate to `u32::MAX`.
    pub fn new(start: usize, end: usize) -> Span {
        Span {
            start: u32::try_from(start).unwrap_or(u32::MAX),
            end: u32::try_from(end).unwrap_or(u32::MAX),
        }
    }

    /// Empty span at `offset`, used for end-of-input positions.
    pub fn empty(offset: usize) -> Span {
        Span::new(offset, offset)
    }

    pub fn to(&self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
