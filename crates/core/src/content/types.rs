//! Content types and data structures.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::metadata::ContentMetadata;

/// Content type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentType {
    /// PDF document.
    Pdf,
    /// Still image.
    Image,
    /// Video file.
    Video,
    /// External link.
    Link,
    /// Plain text file.
    Txt,
}

impl ContentType {
    /// Every known content type.
    pub const ALL: [Self; 5] = [Self::Pdf, Self::Image, Self::Video, Self::Link, Self::Txt];

    /// Convert to the stored string value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::Link => "LINK",
            Self::Txt => "TXT",
        }
    }

    /// Parse from the stored string value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PDF" => Some(Self::Pdf),
            "IMAGE" => Some(Self::Image),
            "VIDEO" => Some(Self::Video),
            "LINK" => Some(Self::Link),
            "TXT" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Whether clients may download the underlying file.
    #[must_use]
    pub fn allows_download(&self) -> bool {
        !matches!(self, Self::Link | Self::Video)
    }

    /// Whether the content can be embedded inline.
    #[must_use]
    pub fn is_embeddable(&self) -> bool {
        *self != Self::Pdf
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored content record, as returned by the content store.
///
/// `content_type` is kept as the raw stored value so that rows with an
/// absent or unknown type can still be loaded and rejected by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRecord {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Cover image reference.
    pub cover: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Description.
    pub description: String,
    /// Number of likes.
    pub total_likes: i64,
    /// Raw content type.
    pub content_type: Option<String>,
    /// File path or external URL.
    pub url: Option<String>,
}

impl ContentRecord {
    /// Parsed content type, if the stored value is known.
    #[must_use]
    pub fn parsed_type(&self) -> Option<ContentType> {
        self.content_type.as_deref().and_then(ContentType::parse)
    }
}

/// Client-facing representation of a content record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionedContent {
    /// Content identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Cover image reference.
    pub cover: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Description.
    pub description: String,
    /// Number of likes.
    pub total_likes: i64,
    /// Content type.
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Signed, time-limited access URL.
    pub url: String,
    /// Whether clients may download the file.
    pub allow_download: bool,
    /// Whether the content can be embedded inline.
    pub is_embeddable: bool,
    /// File extension, when one can be determined.
    pub format: Option<String>,
    /// Size of the underlying file in bytes (0 when unknown).
    pub bytes: u64,
    /// Type-specific metadata.
    pub metadata: ContentMetadata,
}
