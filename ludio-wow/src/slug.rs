//! Guild and realm name slug normalization.

use deunicode::deunicode;

/// Normalize a display name into the slug form the profile API routes on:
/// transliterated to ASCII, lowercased, runs of non-alphanumeric
/// characters collapsed to single dashes, leading/trailing dashes
/// trimmed.
#[must_use]
pub fn slugify(name: &str) -> String {
    let ascii = deunicode(name);
    let mut out = String::with_capacity(ascii.len());
    let mut pending_dash = false;
    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}
