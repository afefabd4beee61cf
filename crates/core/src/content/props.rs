//! Property-based tests for content provisioning.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use super::builder::build_provisioned;
use super::format::resolve_format;
use super::metadata::ContentMetadata;
use super::signer::UrlSigner;
use super::types::{ContentRecord, ContentType};

/// Strategy to generate any content type.
fn content_type_strategy() -> impl Strategy<Value = ContentType> {
    prop_oneof![
        Just(ContentType::Pdf),
        Just(ContentType::Image),
        Just(ContentType::Video),
        Just(ContentType::Link),
        Just(ContentType::Txt),
    ]
}

/// Strategy to generate any non-link content type.
fn file_type_strategy() -> impl Strategy<Value = ContentType> {
    content_type_strategy().prop_filter("links have no format", |t| *t != ContentType::Link)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Links never resolve to a format, whatever the location.
    #[test]
    fn prop_link_has_no_format(location in proptest::option::of(".*")) {
        prop_assert_eq!(resolve_format(ContentType::Link, location.as_deref()), None);
    }

    /// Non-link locations ending in `.ext` resolve to `ext`.
    #[test]
    fn prop_extension_is_format(
        content_type in file_type_strategy(),
        stem in "[a-zA-Z0-9_/-]{0,20}[a-zA-Z0-9_-]",
        ext in "[a-z0-9]{1,5}",
    ) {
        let location = format!("{stem}.{ext}");
        prop_assert_eq!(resolve_format(content_type, Some(&location)), Some(ext));
    }

    /// Byte-size estimates follow their floor/minimum formulas.
    #[test]
    fn prop_size_estimates(bytes in any::<u64>()) {
        match ContentMetadata::synthesize(ContentType::Pdf, bytes, None) {
            ContentMetadata::Pdf { pages, .. } => prop_assert_eq!(pages, (bytes / 50_000).max(1)),
            other => prop_assert!(false, "unexpected metadata: {:?}", other),
        }
        match ContentMetadata::synthesize(ContentType::Video, bytes, None) {
            ContentMetadata::Video { duration, .. } => {
                prop_assert_eq!(duration, (bytes / 100_000).max(10));
            }
            other => prop_assert!(false, "unexpected metadata: {:?}", other),
        }
        match ContentMetadata::synthesize(ContentType::Txt, bytes, None) {
            ContentMetadata::Txt { line_count, .. } => {
                prop_assert_eq!(line_count, (bytes / 100).max(1));
            }
            other => prop_assert!(false, "unexpected metadata: {:?}", other),
        }
    }

    /// Metadata never carries a tag for a different type.
    #[test]
    fn prop_metadata_tag_matches_type(
        content_type in content_type_strategy(),
        bytes in any::<u64>(),
        location in proptest::option::of("[a-z:/.]{0,30}"),
    ) {
        let meta = ContentMetadata::synthesize(content_type, bytes, location.as_deref());
        prop_assert_eq!(meta.content_type(), content_type);
    }

    /// Signed URLs keep the base as a prefix and expose numeric expiry plus
    /// a lower-case alphanumeric signature.
    #[test]
    fn prop_signed_url_shape(
        base in "[a-zA-Z0-9:/._-]{0,40}",
        ttl in 0u64..1_000_000,
        token_len in 1usize..32,
        secs in 0i64..4_000_000_000,
    ) {
        let now = Utc.timestamp_opt(secs, 0).unwrap();
        let signed = UrlSigner::new(ttl, token_len).sign_at(&base, now);

        let rest = signed.strip_prefix(base.as_str()).expect("base prefix");
        let rest = rest.strip_prefix("?expires=").expect("expires param");
        let (expires, signature) = rest.split_once("&signature=").expect("signature param");

        prop_assert!(!expires.is_empty() && expires.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(expires.parse::<i64>().unwrap(), secs + i64::try_from(ttl).unwrap());
        prop_assert_eq!(signature.len(), token_len);
        prop_assert!(signature.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    /// Download/embed flags depend only on the content type.
    #[test]
    fn prop_access_flags(content_type in content_type_strategy(), bytes in any::<u64>()) {
        let record = ContentRecord {
            id: "id".to_string(),
            title: String::new(),
            cover: String::new(),
            created_at: Utc::now(),
            description: String::new(),
            total_likes: 0,
            content_type: Some(content_type.as_str().to_string()),
            url: Some("item.bin".to_string()),
        };
        let built = build_provisioned(&record, bytes, &UrlSigner::default()).unwrap();

        prop_assert_eq!(
            built.allow_download,
            !matches!(content_type, ContentType::Link | ContentType::Video)
        );
        prop_assert_eq!(built.is_embeddable, content_type != ContentType::Pdf);
        prop_assert_eq!(built.metadata.content_type(), content_type);
    }
}
