//! Client-side filtering of the user list.
//!
//! Matching is a case-insensitive substring test against the username. The
//! source slice is never reordered or modified.

use crate::models::UserProfile;

/// Check if text contains a search term (case-insensitive).
/// An empty term matches everything.
pub fn text_contains_term(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Profiles whose username contains `term`, in source order.
/// Surrounding whitespace in `term` is ignored.
pub fn filter_profiles<'a>(profiles: &'a [UserProfile], term: &str) -> Vec<&'a UserProfile> {
    let term = term.trim();
    profiles
        .iter()
        .filter(|p| text_contains_term(&p.username, term))
        .collect()
}
