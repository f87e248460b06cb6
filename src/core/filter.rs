// DataStream - core/filter.rs
//
// Substring filter over document lines.
// Matching is exact, case-sensitive containment; no regex, no tokenising.
// Core layer: pure logic, no I/O or UI dependencies.

/// Trim a user-entered term. Returns `None` if nothing is left.
pub fn normalise_term(term: &str) -> Option<&str> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Lazily yield every line containing `term`, in source order.
///
/// Identical lines are tested independently, so duplicates that match
/// all appear in the output.
pub fn matching_lines<'a>(
    lines: &'a [String],
    term: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    lines
        .iter()
        .map(String::as_str)
        .filter(move |line| line.contains(term))
}
