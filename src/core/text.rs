//! Display and search helpers for people and place names.

use unicode_normalization::UnicodeNormalization;

/// Keeps the first word and reduces every later word to its upper-cased
/// initial: `"Jean Pierre Martin"` becomes `"Jean P M"`.
pub fn shorten_name(full_name: &str) -> String {
    let mut words = full_name.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut short = first.to_string();
    for word in words {
        short.push(' ');
        if let Some(initial) = word.chars().next() {
            short.extend(initial.to_uppercase());
        }
    }
    short
}

/// [`shorten_name`] over raw API values; anything but a string gives `""`.
pub fn shorten_name_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => shorten_name(s),
        _ => String::new(),
    }
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Lower-cased, accent-free, trimmed form used for comparisons only.
pub fn normalize_string(input: Option<&str>) -> String {
    let input = match input {
        None | Some("") => return String::new(),
        Some(s) => s,
    };

    let folded: String = input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect();
    folded.trim().to_string()
}

/// Accent- and case-insensitive containment; an empty query matches everything.
pub fn matches_search(haystack: &str, query: &str) -> bool {
    let query = normalize_string(Some(query));
    if query.is_empty() {
        return true;
    }
    normalize_string(Some(haystack)).contains(&query)
}

/// Loose name equality used when reconciling imported names with existing
/// records: either normalized side may contain the other.
pub fn fuzzy_match(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let a = normalize_string(Some(a));
    let b = normalize_string(Some(b));
    a.contains(&b) || b.contains(&a)
}
