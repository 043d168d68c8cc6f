//! Session-scoped, content-addressed attachment store.
//!
//! Staged bytes are held in memory and addressed by their SHA-256 hash.
//! The draft form keeps [`AttachmentRef`] metadata in its buckets; the
//! bytes themselves live here and are resolved on demand through the
//! [`ContentHandle`]. Identical content is stored once, so re-staging the
//! same file from two buckets costs one blob.
//!
//! # Content Addressing
//!
//! Using the hash as the handle gives:
//!
//! - **Deduplication**: identical files are stored once
//! - **Integrity**: content can be verified against its handle
//! - **Immutability**: staged content cannot be modified, only removed
//!   with the session
//!
//! The store performs no I/O and never transmits anything; it is the
//! in-memory analogue of a content-addressed file area, scoped to a single
//! editing session.

use crate::media::{MediaType, MAX_ATTACHMENT_BYTES};
use crate::{AttachmentError, AttachmentResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use umrs_types::NonEmptyText;

/// Handle to staged content: the lowercase hex SHA-256 digest of the bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHandle(String);

impl ContentHandle {
    fn for_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(hex::encode(hasher.finalize()))
    }

    /// Returns the hex digest as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file offered for staging: name, declared media type, and content.
///
/// The declared type is whatever the file picker reported. It is checked
/// against the allow-list; content sniffing happens separately and is
/// advisory only.
#[derive(Clone, Debug)]
pub struct CandidateFile {
    name: String,
    declared_type: String,
    bytes: Vec<u8>,
}

impl CandidateFile {
    /// Creates a candidate from a filename, declared MIME type, and content.
    pub fn new(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            bytes,
        }
    }

    /// Returns the candidate's filename.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the candidate's size in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Metadata for a staged attachment
///
/// This is what a draft's attachment buckets hold: everything about the
/// file except the bytes. The `handle` resolves the content against the
/// session's [`AttachmentStore`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRef {
    /// Original filename as supplied by the picker
    pub name: NonEmptyText,

    /// Content handle resolvable against the session store
    pub handle: ContentHandle,

    /// Declared media type, already checked against the allow-list
    pub media_type: MediaType,

    /// Size of the staged content in bytes
    pub size_bytes: u64,

    /// Best-effort media type sniffed from the content, if any
    ///
    /// May disagree with `media_type`; it is recorded for audit purposes
    /// and should not be considered authoritative.
    pub detected_media_type: Option<NonEmptyText>,

    /// When the content was staged in this session
    pub staged_at: DateTime<Utc>,
}

/// Session-scoped store of staged attachment content
///
/// Owns the bytes for every staged attachment in one editing session.
/// Dropped with the session; nothing survives navigation away.
#[derive(Debug, Default)]
pub struct AttachmentStore {
    blobs: HashMap<ContentHandle, Vec<u8>>,
}

impl AttachmentStore {
    /// Creates an empty store for a new editing session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a candidate file, enforcing the staging policy.
    ///
    /// The policy is checked before anything is stored: a rejected
    /// candidate leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns `AttachmentError` if:
    /// - the content exceeds [`MAX_ATTACHMENT_BYTES`] (5 MiB)
    /// - the declared media type is not JPEG, PNG, or PDF
    /// - the filename is empty
    pub fn stage(&mut self, candidate: CandidateFile) -> AttachmentResult<AttachmentRef> {
        let size_bytes = candidate.size_bytes();
        if size_bytes > MAX_ATTACHMENT_BYTES {
            return Err(AttachmentError::TooLarge {
                name: candidate.name,
                size_bytes,
            });
        }

        let Some(media_type) = MediaType::from_mime(&candidate.declared_type) else {
            return Err(AttachmentError::UnsupportedType {
                name: candidate.name,
                declared: candidate.declared_type,
            });
        };

        let name = NonEmptyText::new(&candidate.name)?;

        // Best-effort content sniffing; disagreement with the declared
        // type is recorded, not rejected.
        let detected_media_type = infer::get(&candidate.bytes)
            .and_then(|kind| NonEmptyText::new(kind.mime_type()).ok());

        let handle = ContentHandle::for_bytes(&candidate.bytes);
        self.blobs.entry(handle.clone()).or_insert(candidate.bytes);

        Ok(AttachmentRef {
            name,
            handle,
            media_type,
            size_bytes,
            detected_media_type,
            staged_at: Utc::now(),
        })
    }

    /// Resolves staged content by handle.
    ///
    /// # Errors
    ///
    /// Returns `AttachmentError::UnknownHandle` if no content was staged
    /// under the given handle in this session.
    pub fn read(&self, handle: &ContentHandle) -> AttachmentResult<&[u8]> {
        self.blobs
            .get(handle)
            .map(Vec::as_slice)
            .ok_or_else(|| AttachmentError::UnknownHandle(handle.to_string()))
    }

    /// Number of distinct blobs currently staged.
    pub fn blob_count(&self) -> usize {
        self.blobs.len()
    }
}
