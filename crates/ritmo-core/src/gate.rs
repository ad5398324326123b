//! Confirmation gate for the reminder prompt.

/// Check whether a submitted line dismisses the reminder.
///
/// Matches the confirmation word ignoring ASCII case and surrounding
/// whitespace; anything else keeps the gate closed.
#[must_use]
pub fn accepts(input: &str, word: &str) -> bool {
    input.trim().eq_ignore_ascii_case(word)
}
