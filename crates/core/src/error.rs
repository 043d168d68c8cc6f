use umrs_attachments::AttachmentError;

/// Errors returned by record form operations.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Submit was attempted while required fields were missing
    #[error("record has {failed} unresolved required field(s)")]
    ValidationFailed { failed: usize },

    /// The draft could not be serialized for hand-off
    #[error("failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Attachment content could not be resolved
    #[error("attachment error: {0}")]
    Attachment(#[from] AttachmentError),

    /// The record sink refused or failed to accept the draft
    #[error("record sink failed: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for record form operations.
pub type RecordResult<T> = std::result::Result<T, RecordError>;
