//! Note log helpers.
//!
//! The note log is opaque text; entries are separated by `\n` and only the
//! most recent one is ever surfaced.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

/// The most recent entry of a note log, or `None` when there are no notes.
pub fn latest_note(notes: Option<&str>) -> Option<&str> {
    notes
        .filter(|n| !n.is_empty())
        .and_then(|n| n.split('\n').next_back())
}

/// Append `note` as a new entry at the end of the log.
pub fn append_note(notes: Option<&str>, note: &str) -> String {
    match notes {
        Some(existing) if !existing.is_empty() => format!("{existing}\n{note}"),
        _ => note.to_owned(),
    }
}
