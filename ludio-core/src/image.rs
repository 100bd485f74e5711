//! Image URL template resolution.

/// Substitute literal `{width}`/`{height}` placeholder tokens in an image
/// URL template with concrete dimensions.
///
/// An empty input is returned unchanged; a URL without placeholders is a
/// no-op.
#[must_use]
pub fn resolve_dimensions(url: &str, width: u32, height: u32) -> String {
    if url.is_empty() {
        return String::new();
    }
    url.replace("{width}", &width.to_string())
        .replace("{height}", &height.to_string())
}
