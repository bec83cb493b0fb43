//! Wire models exchanged with the service.

use serde::{Deserialize, Serialize};

use crate::options::TransformOptions;

/// One cached rendition as reported by the service.
///
/// `signature` is the content signature the server assigned to the cached
/// artifact; it addresses the artifact and is distinct from any request
/// signature. `short_url` is minted client-side after the record arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Source image URL this record was created from.
    #[serde(default)]
    pub img: String,
    /// Server-assigned content signature of the cached artifact.
    #[serde(default)]
    pub signature: String,
    /// Signed short URL addressing the cached artifact.
    #[serde(default)]
    pub short_url: String,
}

/// One (image, options) pair submitted in a batch cache request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProxyTarget {
    /// Source image URL to cache.
    pub img: String,
    /// Transform options applied before caching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<TransformOptions>,
}

impl ProxyTarget {
    /// Create a target for `img` with the given options.
    pub fn new(img: impl Into<String>, options: Option<TransformOptions>) -> Self {
        Self {
            img: img.into(),
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ImageType;

    #[test]
    fn test_cache_record_parses_wire_names() {
        let record: CacheRecord = serde_json::from_str(
            r#"{"img":"https://example.com/cat.jpg","signature":"abc123","short_url":""}"#,
        )
        .unwrap();

        assert_eq!(record.img, "https://example.com/cat.jpg");
        assert_eq!(record.signature, "abc123");
        assert_eq!(record.short_url, "");
    }

    #[test]
    fn test_cache_record_tolerates_missing_fields() {
        let record: CacheRecord = serde_json::from_str(r#"{"signature":"abc123"}"#).unwrap();

        assert_eq!(record.img, "");
        assert_eq!(record.signature, "abc123");
    }

    #[test]
    fn test_proxy_target_serializes_lowercase_keys() {
        let target = ProxyTarget::new(
            "https://example.com/cat.jpg",
            Some(TransformOptions {
                width: Some(100),
                image_type: Some(ImageType::Webp),
                ..Default::default()
            }),
        );

        assert_eq!(
            serde_json::to_string(&target).unwrap(),
            r#"{"img":"https://example.com/cat.jpg","options":{"width":100,"type":2}}"#
        );
    }

    #[test]
    fn test_proxy_target_omits_unset_options() {
        let target = ProxyTarget::new("https://example.com/cat.jpg", None);

        assert_eq!(
            serde_json::to_string(&target).unwrap(),
            r#"{"img":"https://example.com/cat.jpg"}"#
        );
    }
}
