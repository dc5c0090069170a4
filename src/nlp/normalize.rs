//! Text normalization
//!
//! [`normalize`] is the first pipeline stage: it lowercases the input,
//! strips everything that is neither a word character nor whitespace, and
//! collapses whitespace runs into single spaces. The output contains only
//! lowercase word characters separated by single spaces, which makes the
//! function idempotent.

/// Normalize raw text for frequency counting.
///
/// Word characters are Unicode alphanumerics plus `_`. Anything else that
/// is not whitespace is dropped.
///
/// ```
/// use rapid_wordcloud::nlp::normalize::normalize;
///
/// assert_eq!(normalize("Hello, World! Hello world."), "hello world hello world");
/// ```
pub fn normalize(text: &str) -> String {
    let mut kept = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_whitespace() {
            kept.push(' ');
        } else if c.is_alphanumeric() || c == '_' {
            // Lowercasing can expand to multiple chars; keep only the ones
            // that are still word characters so a second pass is a no-op.
            for lc in c.to_lowercase() {
                if lc.is_alphanumeric() || lc == '_' {
                    kept.push(lc);
                }
            }
        }
    }

    let mut collapsed = String::with_capacity(kept.len());
    for segment in kept.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(segment);
    }
    collapsed
}
