//! Summary section extraction

/// Heading that opens the summary block of a public advisory
pub const SUMMARY_MARKER: &str = "SUMMARY OF";

/// Heading of the section following the summary
pub const WARNINGS_MARKER: &str = "WATCHES AND WARNINGS";

/// Slice `text` from `SUMMARY OF` up to, but not including, `WATCHES AND WARNINGS`.
///
/// When either heading is missing, the summary heading sits at the very start
/// of the text, or the headings are out of order, the whole text is returned.
#[must_use]
pub fn extract_summary(text: &str) -> &str {
    match (text.find(SUMMARY_MARKER), text.find(WARNINGS_MARKER)) {
        (Some(start), Some(end)) if start > 0 && end > start => &text[start..end],
        _ => text,
    }
}
