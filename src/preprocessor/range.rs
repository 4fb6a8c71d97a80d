/// A half-open byte range `[start, end)` of source text to take out of the
/// live code.
///
/// Without a replacement the text is commented out. With one, the text is
/// swapped for the replacement, which is how an expanded include takes the
/// place of its directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeRange {
    /// First excluded byte.
    pub start:       usize,
    /// One past the last excluded byte.
    pub end:         usize,
    /// Text to put in place of the range instead of commenting it out.
    pub replacement: Option<String>,
}

impl ExcludeRange {
    /// Creates a range to comment out.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start,
               end,
               replacement: None }
    }

    /// Creates a range to replace with `text`.
    #[must_use]
    pub const fn replaced(start: usize, end: usize, text: String) -> Self {
        Self { start,
               end,
               replacement: Some(text) }
    }

    /// Returns `true` if the range covers no text.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if the range is replaced rather than commented out.
    #[must_use]
    pub const fn is_replacement(&self) -> bool {
        self.replacement.is_some()
    }

    /// Returns `true` if `next`, starting at or after `self`, should be
    /// folded into `self`. Plain ranges also fold when they merely touch.
    const fn absorbs(&self, next: &Self) -> bool {
        next.start < self.end
        || (next.start == self.end && !self.is_replacement() && !next.is_replacement())
    }
}

/// Merges ranges into a sorted list of pairwise disjoint ranges.
///
/// Overlapping or touching plain ranges are united. A replacement that
/// overlaps commented-out text is dropped, since excluded text wins; when a
/// plain range starts inside a replacement, the replacement is widened into a
/// plain range. Empty ranges are discarded.
///
/// # Example
/// ```
/// use pascond::preprocessor::range::{ExcludeRange, merge};
///
/// let merged = merge(vec![ExcludeRange::new(10, 20),
///                         ExcludeRange::new(0, 5),
///                         ExcludeRange::new(15, 30),
///                         ExcludeRange::new(5, 8)]);
///
/// assert_eq!(merged, vec![ExcludeRange::new(0, 8), ExcludeRange::new(10, 30)]);
/// ```
#[must_use]
pub fn merge(mut ranges: Vec<ExcludeRange>) -> Vec<ExcludeRange> {
    ranges.retain(|range| !range.is_empty());
    ranges.sort_by_key(|range| (range.start, range.is_replacement(), range.end));

    let mut merged: Vec<ExcludeRange> = Vec::with_capacity(ranges.len());

    for range in ranges {
        if let Some(last) = merged.last_mut()
           && last.absorbs(&range)
        {
            match (last.is_replacement(), range.is_replacement()) {
                (false, false) => last.end = last.end.max(range.end),
                (true, false) => *last = ExcludeRange::new(last.start, last.end.max(range.end)),
                (_, true) => {},
            }
            continue;
        }
        merged.push(range);
    }

    merged
}
