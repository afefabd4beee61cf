//! File format resolution.

use std::path::Path;

use super::types::ContentType;

/// Resolve the file format of a content item from its location.
///
/// Links never have a format. For everything else this is the extension of
/// the location without the leading dot, or `None` if there is none.
#[must_use]
pub fn resolve_format(content_type: ContentType, location: Option<&str>) -> Option<String> {
    if content_type == ContentType::Link {
        return None;
    }

    location
        .and_then(|loc| Path::new(loc).extension())
        .map(|ext| ext.to_string_lossy().into_owned())
        .filter(|ext| !ext.is_empty())
}
