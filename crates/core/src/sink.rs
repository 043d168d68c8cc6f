//! The submit boundary.
//!
//! On successful validation the engine hands the complete draft to a
//! [`RecordSink`]. What happens next — persistence, transmission — is the
//! sink's concern, not the engine's. The shipped [`LoggingSink`] only logs
//! the serialized record.

use crate::error::RecordResult;
use crate::record::MedicalRecordDraft;

/// Receives a validated draft at submit time.
pub trait RecordSink {
    /// Accepts a draft that has passed validation.
    ///
    /// # Errors
    ///
    /// Implementations return `RecordError::Sink` (or `Serialization`)
    /// when the hand-off fails; the draft itself remains untouched and the
    /// user may retry.
    fn save(&mut self, draft: &MedicalRecordDraft) -> RecordResult<()>;
}

/// Sink that logs the serialized record and discards it.
///
/// This is the whole of the current system's persistence story: the record
/// is written to the log at `info` level and nothing is stored.
#[derive(Debug, Default)]
pub struct LoggingSink;

impl RecordSink for LoggingSink {
    fn save(&mut self, draft: &MedicalRecordDraft) -> RecordResult<()> {
        let payload = serde_json::to_string(draft)?;
        tracing::info!(draft_id = %draft.id, %payload, "medical record submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_sink_accepts_any_draft() {
        let mut sink = LoggingSink;
        sink.save(&MedicalRecordDraft::new())
            .expect("logging sink should not fail on a serializable draft");
    }
}
