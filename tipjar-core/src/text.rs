//! Canonical text forms for free-text labels such as city names and
//! venue types.

/// Collapses runs of whitespace into a single space and trims both ends.
pub fn normalize_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Naive ASCII-oriented title case: lower-cases everything, then
/// capitalizes each letter that follows a non-letter (string start
/// included). Acronyms and names like "McDonald's" come out as
/// "Mcdonald'S", which is an accepted quirk of the rule.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_boundary = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = true;
        }
    }
    out
}

/// Canonical display form: whitespace-collapsed and title-cased.
pub fn canonical(text: &str) -> String {
    title_case(&normalize_spaces(text))
}

/// Short state codes are stored upper-cased.
pub fn canonical_state(text: &str) -> String {
    normalize_spaces(text).to_uppercase()
}

/// Lowercase, whitespace-collapsed key used purely for equality
/// comparison, never for display.
pub fn normalized_key(text: &str) -> String {
    normalize_spaces(text).to_lowercase()
}
