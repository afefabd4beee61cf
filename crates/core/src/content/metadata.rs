//! Type-specific metadata synthesis.
//!
//! Values are estimated from the byte size of the stored file; nothing here
//! inspects actual content.

use serde::Serialize;

use super::error::ContentError;
use super::types::ContentType;

/// Bytes per estimated PDF page.
const PDF_BYTES_PER_PAGE: u64 = 50_000;
/// Bytes per estimated second of video.
const VIDEO_BYTES_PER_SECOND: u64 = 100_000;
/// Bytes per estimated line of text.
const TXT_BYTES_PER_LINE: u64 = 100;

const MIN_PDF_PAGES: u64 = 1;
const MIN_VIDEO_DURATION: u64 = 10;
const MIN_TXT_LINES: u64 = 1;

/// Metadata attached to a provisioned content item, one variant per type.
///
/// Serializes as the flat field set of the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContentMetadata {
    /// PDF document metadata.
    Pdf {
        /// Document author.
        author: String,
        /// Estimated page count.
        pages: u64,
        /// Whether the document is encrypted.
        encrypted: bool,
    },
    /// Image metadata.
    Image {
        /// Pixel resolution, `WxH`.
        resolution: String,
        /// Aspect ratio, `W:H`.
        aspect_ratio: String,
    },
    /// Video metadata.
    Video {
        /// Estimated duration in seconds.
        duration: u64,
        /// Resolution label.
        resolution: String,
    },
    /// Link metadata.
    Link {
        /// Whether the link uses HTTPS.
        trusted: bool,
    },
    /// Plain text metadata.
    Txt {
        /// Text encoding.
        encoding: String,
        /// Estimated number of lines.
        line_count: u64,
    },
}

impl ContentMetadata {
    /// Synthesize metadata for a known content type.
    #[must_use]
    pub fn synthesize(content_type: ContentType, bytes: u64, location: Option<&str>) -> Self {
        match content_type {
            ContentType::Pdf => Self::Pdf {
                author: "Unknown".to_string(),
                pages: (bytes / PDF_BYTES_PER_PAGE).max(MIN_PDF_PAGES),
                encrypted: false,
            },
            ContentType::Image => Self::Image {
                resolution: "1920x1080".to_string(),
                aspect_ratio: "16:9".to_string(),
            },
            ContentType::Video => Self::Video {
                duration: (bytes / VIDEO_BYTES_PER_SECOND).max(MIN_VIDEO_DURATION),
                resolution: "1080p".to_string(),
            },
            ContentType::Link => Self::Link {
                trusted: location.is_some_and(|url| url.starts_with("https")),
            },
            ContentType::Txt => Self::Txt {
                encoding: "UTF-8".to_string(),
                line_count: (bytes / TXT_BYTES_PER_LINE).max(MIN_TXT_LINES),
            },
        }
    }

    /// Synthesize metadata from a raw stored type value.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedMetadataType` if the value is absent or not a known type.
    pub fn synthesize_raw(
        content_type: Option<&str>,
        bytes: u64,
        location: Option<&str>,
    ) -> Result<Self, ContentError> {
        let parsed = content_type.and_then(ContentType::parse).ok_or_else(|| {
            ContentError::UnsupportedMetadataType(content_type.unwrap_or("<none>").to_string())
        })?;
        Ok(Self::synthesize(parsed, bytes, location))
    }

    /// The content type this metadata belongs to.
    #[must_use]
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Pdf { .. } => ContentType::Pdf,
            Self::Image { .. } => ContentType::Image,
            Self::Video { .. } => ContentType::Video,
            Self::Link { .. } => ContentType::Link,
            Self::Txt { .. } => ContentType::Txt,
        }
    }
}
