//! Trims a downloaded body to the XML document it carries.

use crate::constants::{DOCUMENT_END_MARKER, DOCUMENT_START_MARKER};

/// Returns the slice from the first `"<?"` through the first `"</rss>"` inclusive.
///
/// A missing start marker leaves the front untouched and a missing end marker
/// leaves the back untouched. The end marker is searched for after the front
/// has been trimmed.
pub fn sanitize_feed(raw: &str) -> &str {
    let trimmed = match raw.find(DOCUMENT_START_MARKER) {
        Some(start) => &raw[start..],
        None => raw,
    };

    match trimmed.find(DOCUMENT_END_MARKER) {
        Some(end) => &trimmed[..end + DOCUMENT_END_MARKER.len()],
        None => trimmed,
    }
}
