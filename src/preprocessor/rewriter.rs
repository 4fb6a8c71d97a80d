use crate::preprocessor::range::ExcludeRange;

/// Opens the comment that wraps excluded text.
pub const COMMENT_OPEN: &str = "(*";
/// Closes the comment that wraps excluded text.
pub const COMMENT_CLOSE: &str = "*)";

/// Applies merged exclusion ranges to `source`.
///
/// Each plain range is wrapped in `(*` and `*)` instead of being deleted, so
/// no line break disappears and every line keeps its number. Any `*)` inside
/// the range is split into `* )` so it cannot end the wrapping comment
/// early. A range with a replacement is swapped for its replacement text.
///
/// `ranges` must be sorted and disjoint, as produced by
/// [`merge`](crate::preprocessor::range::merge). Each edit shifts the text
/// after it; `shift` tracks the total so every range lands at its original
/// offset plus the growth so far.
///
/// # Example
/// ```
/// use pascond::preprocessor::{range::ExcludeRange, rewriter::rewrite};
///
/// let source = "A{$ELSE}B";
/// let text = rewrite(source, &[ExcludeRange::new(0, 8)]);
///
/// assert_eq!(text, "(*A{$ELSE}*)B");
/// ```
#[must_use]
pub fn rewrite(source: &str, ranges: &[ExcludeRange]) -> String {
    let mut text = source.to_string();
    let mut shift: isize = 0;

    for range in ranges {
        let (Some(start), Some(end)) = (range.start.checked_add_signed(shift),
                                        range.end.checked_add_signed(shift))
        else {
            continue;
        };
        let Some(excluded) = text.get(start..end)
        else {
            continue;
        };

        let edit = match &range.replacement {
            Some(replacement) => replacement.clone(),
            None => {
                format!("{COMMENT_OPEN}{}{COMMENT_CLOSE}",
                        excluded.replace(COMMENT_CLOSE, "* )"))
            },
        };

        shift += growth(edit.len(), end - start);
        text.replace_range(start..end, &edit);
    }

    text
}

/// How many bytes longer `new_len` is than `old_len`.
fn growth(new_len: usize, old_len: usize) -> isize {
    if new_len >= old_len {
        isize::try_from(new_len - old_len).unwrap_or(isize::MAX)
    } else {
        isize::try_from(old_len - new_len).map_or(isize::MIN, |n| -n)
    }
}
