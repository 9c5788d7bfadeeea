//! Display-name normalization to repository order
//!
//! Repository metadata lists people as `Family, Given`. Roster names come as
//! `Given Family`, where the given part may hold any number of tokens
//! (`S. Sunjai Nakshatharan`). The last token is always the family name.

/// Split a display name into `(given, family)`.
///
/// A single token is a family name with an empty given name. Never fails.
pub fn split_name(full_name: &str) -> (String, String) {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    match tokens.split_last() {
        Some((family, given)) => (given.join(" "), family.to_string()),
        None => (String::new(), String::new()),
    }
}

/// Format a display name as `Family, Given` for repository lookups
pub fn repository_name(full_name: &str) -> String {
    let (given, family) = split_name(full_name);
    if given.is_empty() {
        family
    } else {
        format!("{}, {}", family, given)
    }
}
