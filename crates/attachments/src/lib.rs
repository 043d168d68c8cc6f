//! UMRS Attachment Staging
//!
//! This crate provides session-scoped staging of file attachments for
//! in-progress medical record drafts.
//!
//! ## Design Principles
//!
//! - Record fields and attachment bytes are deliberately separated: a draft
//!   holds [`AttachmentRef`] metadata only, never the content itself.
//! - Staged content is addressed by its SHA-256 hash. Identical bytes are
//!   stored once; references remain valid for the lifetime of the store.
//! - Nothing is persisted. The store lives exactly as long as the editing
//!   session and is discarded with it — there is no transfer, so there is
//!   nothing to retry, cancel, or time out.
//! - Candidates are checked against the staging policy (size cap, media-type
//!   allow-list) *before* insertion; a rejected candidate never enters the
//!   store.
//!
//! ## Example Usage
//!
//! ```
//! use umrs_attachments::{AttachmentStore, CandidateFile};
//!
//! # fn main() -> Result<(), umrs_attachments::AttachmentError> {
//! let mut store = AttachmentStore::new();
//! let candidate = CandidateFile::new("cbc.pdf", "application/pdf", vec![0x25, 0x50, 0x44, 0x46]);
//! let attachment = store.stage(candidate)?;
//! let bytes = store.read(&attachment.handle)?;
//! assert_eq!(bytes.len(), 4);
//! # Ok(())
//! # }
//! ```

mod media;
mod store;

pub use media::{MediaType, MAX_ATTACHMENT_BYTES};
pub use store::{AttachmentRef, AttachmentStore, CandidateFile, ContentHandle};

/// Errors that can occur during attachment staging
#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    /// Candidate exceeds the per-file size cap
    #[error("File {name} exceeds 5MB limit")]
    TooLarge { name: String, size_bytes: u64 },

    /// Candidate's declared media type is not in the allow-list
    #[error("File {name} must be JPEG, PNG, or PDF")]
    UnsupportedType { name: String, declared: String },

    /// Candidate filename was empty
    #[error("Invalid filename: {0}")]
    InvalidName(#[from] umrs_types::TextError),

    /// No staged content exists for the given handle
    #[error("No staged content for handle {0}")]
    UnknownHandle(String),
}

/// Result type for attachment operations.
pub type AttachmentResult<T> = Result<T, AttachmentError>;
