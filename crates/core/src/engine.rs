//! The record form engine.
//!
//! [`RecordFormEngine`] owns everything an editing session holds: the
//! draft, the section capability flags, the accordion focus, the staging
//! store for attachment content, the derived completion progress, and two
//! disjoint error maps (submit-time validation errors and attachment
//! staging rejections).
//!
//! Every operation runs to completion synchronously within one UI event
//! turn; there is no background work and no concurrent writer. Progress is
//! recomputed after every mutation that could change the filled count or
//! the denominator, so reads never observe a stale percentage.

use crate::error::{RecordError, RecordResult};
use crate::progress::completion_progress;
use crate::record::{
    AttachmentBucket, DischargeSummary, MedicalRecordDraft, Procedures, VisitType, VitalSigns,
};
use crate::sections::{SectionFocus, SectionId, SectionVisibility};
use crate::sink::RecordSink;
use crate::validation::{validate, ValidationErrors};
use std::collections::BTreeMap;
use umrs_attachments::{AttachmentStore, CandidateFile, ContentHandle};

/// Attachment staging rejections, keyed by bucket. Last rejection per
/// bucket wins; accepted files in the same batch are unaffected.
pub type StagingErrors = BTreeMap<AttachmentBucket, String>;

/// State and operations for one record-authoring session.
#[derive(Debug)]
pub struct RecordFormEngine {
    draft: MedicalRecordDraft,
    visibility: SectionVisibility,
    focus: SectionFocus,
    store: AttachmentStore,
    progress: u8,
    validation_errors: ValidationErrors,
    staging_errors: StagingErrors,
}

impl RecordFormEngine {
    /// Creates a fresh session: empty draft, both optional sections
    /// disabled, basic section expanded, zero progress.
    pub fn new() -> Self {
        let draft = MedicalRecordDraft::new();
        let visibility = SectionVisibility::default();
        let progress = completion_progress(&draft, &visibility);
        Self {
            draft,
            visibility,
            focus: SectionFocus::new(),
            store: AttachmentStore::new(),
            progress,
            validation_errors: ValidationErrors::new(),
            staging_errors: StagingErrors::new(),
        }
    }

    // --- reads ---

    /// The draft as it currently stands.
    pub fn draft(&self) -> &MedicalRecordDraft {
        &self.draft
    }

    /// Current section capability flags.
    pub fn visibility(&self) -> SectionVisibility {
        self.visibility
    }

    /// Current accordion focus.
    pub fn focus(&self) -> SectionFocus {
        self.focus
    }

    /// Completion percentage, 0–100, current as of the last mutation.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Validation errors from the most recent [`Self::validate`] call.
    pub fn validation_errors(&self) -> &ValidationErrors {
        &self.validation_errors
    }

    /// Staging rejections, one message per affected bucket.
    pub fn staging_errors(&self) -> &StagingErrors {
        &self.staging_errors
    }

    /// Resolves a staged attachment's content for preview.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Attachment` if the handle was not staged in
    /// this session.
    pub fn attachment_bytes(&self, handle: &ContentHandle) -> RecordResult<&[u8]> {
        Ok(self.store.read(handle)?)
    }

    // --- field updates ---

    /// Applies an arbitrary typed edit to the draft, then recomputes
    /// progress. This is the single mutation gate; the convenience setters
    /// below all go through it.
    pub fn update_draft(&mut self, edit: impl FnOnce(&mut MedicalRecordDraft)) {
        edit(&mut self.draft);
        self.recompute_progress();
    }

    pub fn set_visit_type(&mut self, visit_type: Option<VisitType>) {
        self.update_draft(|d| d.visit_type = visit_type);
    }

    pub fn set_visit_date(&mut self, visit_date: Option<chrono::NaiveDate>) {
        self.update_draft(|d| d.visit_date = visit_date);
    }

    pub fn set_chief_complaint(&mut self, text: impl Into<String>) {
        self.update_draft(|d| d.chief_complaint = text.into());
    }

    pub fn set_impressions(&mut self, text: impl Into<String>) {
        self.update_draft(|d| d.impressions = text.into());
    }

    pub fn set_diagnosis(&mut self, text: impl Into<String>) {
        self.update_draft(|d| d.diagnosis = text.into());
    }

    /// Edits the vital-signs sub-record, preserving sibling fields.
    pub fn update_vital_signs(&mut self, edit: impl FnOnce(&mut VitalSigns)) {
        self.update_draft(|d| edit(&mut d.vital_signs));
    }

    /// Edits the hospital-stay sub-record. Allowed regardless of whether
    /// the section is enabled; enablement only affects validation and
    /// progress.
    pub fn update_discharge_summary(&mut self, edit: impl FnOnce(&mut DischargeSummary)) {
        self.update_draft(|d| edit(&mut d.discharge_summary));
    }

    /// Edits the surgical sub-record. Same enablement rules as
    /// [`Self::update_discharge_summary`].
    pub fn update_procedures(&mut self, edit: impl FnOnce(&mut Procedures)) {
        self.update_draft(|d| edit(&mut d.procedures));
    }

    // --- section state ---

    /// Enables or disables the hospital-stay section. Never clears the
    /// underlying discharge-summary data.
    pub fn set_include_hospital_stay(&mut self, include: bool) {
        self.visibility.include_hospital_stay = include;
        self.recompute_progress();
    }

    /// Enables or disables the surgery section. Never clears the
    /// underlying procedures data.
    pub fn set_include_surgery(&mut self, include: bool) {
        self.visibility.include_surgery = include;
        self.recompute_progress();
    }

    /// Accordion selection: expand the section, or collapse it if it is
    /// already the expanded one.
    pub fn toggle_section(&mut self, section: SectionId) {
        self.focus.toggle(section);
    }

    // --- attachments ---

    /// Stages a batch of candidate files into a bucket.
    ///
    /// Each candidate is checked independently: rejected files record a
    /// message under the bucket's key (last rejection wins) and are
    /// dropped; accepted files are appended to the bucket in order, even
    /// when the same batch contains rejections. Returns the number of
    /// files accepted.
    pub fn stage_attachments(
        &mut self,
        bucket: AttachmentBucket,
        candidates: impl IntoIterator<Item = CandidateFile>,
    ) -> usize {
        let mut accepted = 0;
        for candidate in candidates {
            match self.store.stage(candidate) {
                Ok(attachment) => {
                    self.draft.bucket_mut(bucket).push(attachment);
                    accepted += 1;
                }
                Err(err) => {
                    tracing::warn!(bucket = %bucket, %err, "attachment rejected");
                    self.staging_errors.insert(bucket, err.to_string());
                }
            }
        }
        self.recompute_progress();
        accepted
    }

    /// Removes the attachment at `index` from a bucket, shifting later
    /// entries down. Out-of-range indices are a no-op.
    pub fn remove_attachment(&mut self, bucket: AttachmentBucket, index: usize) {
        let entries = self.draft.bucket_mut(bucket);
        if index < entries.len() {
            entries.remove(index);
        }
        self.recompute_progress();
    }

    // --- validation and submit ---

    /// Runs submit-time validation, replacing the validation error map
    /// with exactly the currently failing fields. Returns `true` iff the
    /// resulting map is empty.
    pub fn validate(&mut self) -> bool {
        self.validation_errors = validate(&self.draft, &self.visibility);
        self.validation_errors.is_empty()
    }

    /// Validates and, on success, hands the draft to the sink.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::ValidationFailed` without touching the sink
    /// when required fields are missing; otherwise propagates any sink
    /// error. The draft is retained either way so the user can correct and
    /// retry.
    pub fn submit(&mut self, sink: &mut dyn RecordSink) -> RecordResult<()> {
        if !self.validate() {
            return Err(RecordError::ValidationFailed {
                failed: self.validation_errors.len(),
            });
        }
        sink.save(&self.draft)
    }

    fn recompute_progress(&mut self) {
        self.progress = completion_progress(&self.draft, &self.visibility);
    }
}

impl Default for RecordFormEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
    }

    fn pdf(name: &str, len: usize) -> CandidateFile {
        CandidateFile::new(name, "application/pdf", vec![0u8; len])
    }

    fn fill_required(engine: &mut RecordFormEngine) {
        engine.set_visit_type(Some(VisitType::Outpatient));
        engine.set_visit_date(Some(date("2024-01-01")));
        engine.set_chief_complaint("cough");
        engine.update_vital_signs(|v| {
            v.blood_pressure = "120/80".into();
            v.heart_rate = "70".into();
            v.temperature = "98.6".into();
        });
        engine.set_diagnosis("flu");
    }

    /// Sink that records what it was handed.
    #[derive(Default)]
    struct CapturingSink {
        saved: Vec<MedicalRecordDraft>,
    }

    impl RecordSink for CapturingSink {
        fn save(&mut self, draft: &MedicalRecordDraft) -> RecordResult<()> {
            self.saved.push(draft.clone());
            Ok(())
        }
    }

    #[test]
    fn test_new_session_starts_at_zero_progress() {
        let engine = RecordFormEngine::new();
        assert_eq!(engine.progress(), 0);
        assert!(engine.validation_errors().is_empty());
        assert!(engine.staging_errors().is_empty());
    }

    #[test]
    fn test_progress_tracks_mutations() {
        let mut engine = RecordFormEngine::new();
        engine.set_diagnosis("flu");
        assert_eq!(engine.progress(), 17); // 1/6

        engine.set_diagnosis("");
        assert_eq!(engine.progress(), 0);
    }

    #[test]
    fn test_enabling_a_section_lowers_progress_share() {
        let mut engine = RecordFormEngine::new();
        fill_required(&mut engine);
        assert_eq!(engine.progress(), 100);

        engine.set_include_surgery(true);
        assert_eq!(engine.progress(), 75); // 6/8

        engine.update_procedures(|p| {
            p.surgery_type = "appendectomy".into();
            p.surgery_date = Some(date("2024-01-02"));
        });
        assert_eq!(engine.progress(), 100);
    }

    #[test]
    fn test_toggling_a_section_off_and_on_preserves_entries() {
        let mut engine = RecordFormEngine::new();
        engine.set_include_hospital_stay(true);
        engine.update_discharge_summary(|s| {
            s.admission_date = Some(date("2024-02-01"));
            s.inpatient_summary = "three nights, uneventful".into();
        });

        engine.set_include_hospital_stay(false);
        engine.set_include_hospital_stay(true);

        let summary = &engine.draft().discharge_summary;
        assert_eq!(summary.admission_date, Some(date("2024-02-01")));
        assert_eq!(summary.inpatient_summary, "three nights, uneventful");
    }

    #[test]
    fn test_oversize_file_is_rejected_and_bucket_unchanged() {
        let mut engine = RecordFormEngine::new();
        let accepted =
            engine.stage_attachments(AttachmentBucket::BloodTests, [pdf("big.pdf", 6 * 1024 * 1024)]);

        assert_eq!(accepted, 0);
        assert!(engine.draft().bucket(AttachmentBucket::BloodTests).is_empty());
        assert_eq!(
            engine.staging_errors().get(&AttachmentBucket::BloodTests).map(String::as_str),
            Some("File big.pdf exceeds 5MB limit")
        );
    }

    #[test]
    fn test_mixed_batch_appends_accepted_and_records_rejection() {
        let mut engine = RecordFormEngine::new();
        let batch = [
            CandidateFile::new("chest.jpg", "image/jpeg", vec![1u8; 1024 * 1024]),
            pdf("huge.pdf", 6 * 1024 * 1024),
        ];

        let accepted = engine.stage_attachments(AttachmentBucket::RadiologyReports, batch);

        assert_eq!(accepted, 1);
        let bucket = engine.draft().bucket(AttachmentBucket::RadiologyReports);
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket[0].name.as_str(), "chest.jpg");
        assert!(engine
            .staging_errors()
            .contains_key(&AttachmentBucket::RadiologyReports));
    }

    #[test]
    fn test_last_rejection_per_bucket_wins() {
        let mut engine = RecordFormEngine::new();
        engine.stage_attachments(AttachmentBucket::OtherTests, [pdf("first.pdf", 6 * 1024 * 1024)]);
        engine.stage_attachments(
            AttachmentBucket::OtherTests,
            [CandidateFile::new("second.gif", "image/gif", vec![0])],
        );

        assert_eq!(
            engine.staging_errors().get(&AttachmentBucket::OtherTests).map(String::as_str),
            Some("File second.gif must be JPEG, PNG, or PDF")
        );
    }

    #[test]
    fn test_remove_attachment_shifts_later_entries_down() {
        let mut engine = RecordFormEngine::new();
        engine.stage_attachments(
            AttachmentBucket::UrineTests,
            [pdf("a.pdf", 1), pdf("b.pdf", 2), pdf("c.pdf", 3)],
        );

        engine.remove_attachment(AttachmentBucket::UrineTests, 1);

        let bucket = engine.draft().bucket(AttachmentBucket::UrineTests);
        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket[0].name.as_str(), "a.pdf");
        assert_eq!(bucket[1].name.as_str(), "c.pdf");
    }

    #[test]
    fn test_remove_attachment_out_of_range_is_a_no_op() {
        let mut engine = RecordFormEngine::new();
        engine.stage_attachments(AttachmentBucket::UrineTests, [pdf("a.pdf", 1)]);

        engine.remove_attachment(AttachmentBucket::UrineTests, 5);

        assert_eq!(engine.draft().bucket(AttachmentBucket::UrineTests).len(), 1);
    }

    #[test]
    fn test_staged_bytes_are_resolvable_through_the_engine() {
        let mut engine = RecordFormEngine::new();
        engine.stage_attachments(
            AttachmentBucket::BloodTests,
            [CandidateFile::new("cbc.pdf", "application/pdf", vec![7, 8, 9])],
        );

        let handle = engine.draft().bucket(AttachmentBucket::BloodTests)[0]
            .handle
            .clone();
        assert_eq!(engine.attachment_bytes(&handle).unwrap(), &[7, 8, 9]);
    }

    #[test]
    fn test_submit_hands_draft_to_sink_when_valid() {
        let mut engine = RecordFormEngine::new();
        fill_required(&mut engine);

        let mut sink = CapturingSink::default();
        engine.submit(&mut sink).expect("valid draft should submit");

        assert_eq!(sink.saved.len(), 1);
        assert_eq!(sink.saved[0].diagnosis, "flu");
        assert!(engine.validation_errors().is_empty());
    }

    #[test]
    fn test_submit_on_invalid_draft_never_reaches_the_sink() {
        let mut engine = RecordFormEngine::new();
        let mut sink = CapturingSink::default();

        let err = engine.submit(&mut sink).expect_err("empty draft must fail");

        assert!(matches!(err, RecordError::ValidationFailed { failed: 7 }));
        assert!(sink.saved.is_empty());
        assert_eq!(engine.validation_errors().len(), 7);
    }

    #[test]
    fn test_correcting_fields_clears_their_validation_errors() {
        let mut engine = RecordFormEngine::new();
        assert!(!engine.validate());

        fill_required(&mut engine);
        assert!(engine.validate());
        assert!(engine.validation_errors().is_empty());
    }

    #[test]
    fn test_staging_errors_survive_validation() {
        let mut engine = RecordFormEngine::new();
        engine.stage_attachments(AttachmentBucket::BloodTests, [pdf("big.pdf", 6 * 1024 * 1024)]);

        engine.validate();

        // Disjoint maps: validate replaces only validation errors.
        assert!(engine
            .staging_errors()
            .contains_key(&AttachmentBucket::BloodTests));
    }

    #[test]
    fn test_accordion_focus_is_independent_of_enablement() {
        let mut engine = RecordFormEngine::new();
        engine.toggle_section(SectionId::Surgery);
        assert!(engine.focus().is_expanded(SectionId::Surgery));

        // Expanding the surgery disclosure does not enable the section.
        assert!(!engine.visibility().include_surgery);

        engine.toggle_section(SectionId::Surgery);
        assert_eq!(engine.focus().expanded(), None);
    }
}
