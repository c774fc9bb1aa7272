/// Result of a single literal replacement pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub content: String,
    pub count: usize,
}

/// Replaces every occurrence of `old` in `content` with `new`.
///
/// The scan runs once, left to right, and resumes right after each match, so
/// matches never overlap and text inserted from `new` is never scanned again.
/// Matching is literal and case-sensitive.
///
/// An empty `old` matches at every char boundary, the same as `str::replace`:
/// `new` lands before each character and once more at the end.
///
/// # Examples
///
/// ```ignore
/// let r = replace_all("ab ab ab", "ab", "X");
/// assert_eq!(r.content, "X X X");
/// assert_eq!(r.count, 3);
/// ```
pub fn replace_all(content: &str, old: &str, new: &str) -> Replacement {
    let mut result = String::with_capacity(content.len());
    let mut last_end = 0;
    let mut count = 0;
    for (start, part) in content.match_indices(old) {
        result.push_str(&content[last_end..start]);
        result.push_str(new);
        last_end = start + part.len();
        count += 1;
    }
    result.push_str(&content[last_end..]);
    Replacement {
        content: result,
        count,
    }
}
