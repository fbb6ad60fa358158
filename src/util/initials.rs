//! Avatar initials derived from a display name.

#[cfg(test)]
#[path = "initials_test.rs"]
mod initials_test;

/// Initials for the avatar fallback.
///
/// The name is split on single spaces. A single token yields its first two
/// characters; otherwise the first character of the first and last tokens.
/// Degenerate names (empty, or empty tokens from repeated spaces) produce a
/// shorter result rather than failing.
pub fn initials(name: &str) -> String {
    let tokens: Vec<&str> = name.split(' ').collect();
    if tokens.len() == 1 {
        return tokens[0].chars().take(2).collect::<String>().to_uppercase();
    }
    let first = tokens.first().and_then(|t| t.chars().next());
    let last = tokens.last().and_then(|t| t.chars().next());
    first
        .into_iter()
        .chain(last)
        .collect::<String>()
        .to_uppercase()
}
