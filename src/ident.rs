//! Name normalization.
//!
//! Two distinct forms, never interchangeable: the *match key* joins
//! calendar rows to grey-market rows and is never displayed; the
//! *display name* is what readers see and what slugs derive from.

/// Join key for cross-page matching: lowercase, the first occurrence of
/// the substring "ipo" removed, trimmed.
///
/// Both sides of the join run through this, so the aggressive strip is
/// consistent even for names that contain "ipo" mid-word.
pub(crate) fn match_key(raw: &str) -> String {
    raw.to_lowercase().replacen("ipo", "", 1).trim().to_string()
}

/// Presentation form: a trailing " IPO" suffix (case-sensitive, trailing
/// only) is dropped, then the result is trimmed.
pub(crate) fn display_name(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_suffix(" IPO")
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// First character of the display name, uppercased, for avatar display.
pub(crate) fn initial(name: &str) -> Option<char> {
    name.chars().next()?.to_uppercase().next()
}

/// Deterministic URL identifier for a display name.
///
/// Lowercase, whitespace runs become single hyphens, anything outside
/// word characters and hyphens is dropped, hyphen runs collapse, and no
/// hyphen survives at either end. Re-slugifying a clean slug is a
/// no-op.
pub(crate) fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        let mapped = if c.is_whitespace() { '-' } else { c };
        if mapped != '-' && mapped != '_' && !mapped.is_ascii_alphanumeric() {
            continue;
        }
        if mapped == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(mapped);
    }
    slug.trim_matches('-').to_string()
}
