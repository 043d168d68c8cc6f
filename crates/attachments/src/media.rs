//! Staging policy: media-type allow-list and size cap.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum size of a single staged attachment: 5 MiB.
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

/// Media types accepted for staging.
///
/// Attachments are clinical documents and images; the form accepts only
/// JPEG, PNG, and PDF. The check applies to the *declared* type supplied
/// with the candidate (what the picker reported), not to sniffed content —
/// content sniffing is recorded separately as best-effort metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "application/pdf")]
    Pdf,
}

impl MediaType {
    /// Parses a MIME string against the allow-list.
    ///
    /// Returns `None` for any type outside the allow-list; callers treat
    /// that as a policy rejection, not an error in parsing.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "application/pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Returns the canonical MIME string for this media type.
    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Pdf => "application/pdf",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mime())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime_accepts_allow_list() {
        assert_eq!(MediaType::from_mime("image/jpeg"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::from_mime("image/png"), Some(MediaType::Png));
        assert_eq!(
            MediaType::from_mime("application/pdf"),
            Some(MediaType::Pdf)
        );
    }

    #[test]
    fn test_from_mime_rejects_everything_else() {
        assert_eq!(MediaType::from_mime("image/gif"), None);
        assert_eq!(MediaType::from_mime("application/zip"), None);
        assert_eq!(MediaType::from_mime(""), None);
        // Case-sensitive, as reported by browsers.
        assert_eq!(MediaType::from_mime("IMAGE/JPEG"), None);
    }

    #[test]
    fn test_media_type_serializes_as_mime_string() {
        let json = serde_json::to_string(&MediaType::Pdf).unwrap();
        assert_eq!(json, "\"application/pdf\"");
        let back: MediaType = serde_json::from_str("\"image/png\"").unwrap();
        assert_eq!(back, MediaType::Png);
    }
}
