use scraper::ElementRef;

/// Descendant text concatenated as written, then whitespace-collapsed and trimmed.
/// Inline tags add no separator: `Malm<b>ö</b>.` reads `Malmö.`.
pub fn element_text(element: &ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Each descendant text node trimmed and joined with a single space.
pub fn joined_text(element: &ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a trailing all-digit token off a display name.
///
/// `"Johan Dahlin 27"` becomes `("Johan Dahlin", Some("27"))`; a name without a
/// trailing number is returned whitespace-normalised with `None`.
pub fn split_trailing_number(text: &str) -> (String, Option<String>) {
    let words: Vec<&str> = text.split_whitespace().collect();
    match words.split_last() {
        Some((last, rest)) if last.chars().all(|c| c.is_ascii_digit()) => {
            (rest.join(" "), Some(last.to_string()))
        }
        _ => (words.join(" "), None),
    }
}

/// Case-insensitive substring test against a list of needles.
pub fn contains_any_ignore_case(haystack: &str, needles: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    needles
        .iter()
        .any(|needle| haystack.contains(&needle.to_lowercase()))
}
