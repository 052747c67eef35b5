//! Categorical text normalization.

/// Trims surrounding whitespace and title-cases the value: the first
/// letter of each whitespace-delimited word is uppercased, the remainder
/// lowercased. Internal whitespace is preserved as-is.
pub fn title_case(value: &str) -> String {
    let trimmed = value.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut at_word_start = true;
    for ch in trimmed.chars() {
        if ch.is_whitespace() {
            out.push(ch);
            at_word_start = true;
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
