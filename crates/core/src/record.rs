//! Medical record draft data model.
//!
//! The draft is the in-memory, unsaved visit record being composed in one
//! editing session. Optional sections (`discharge_summary`, `procedures`)
//! always exist structurally; whether they participate in validation and
//! progress is decided by the section capability flags, never by clearing
//! the data. This keeps previously entered values intact when a section is
//! toggled off and back on.
//!
//! Field names serialize in camelCase so the submitted JSON matches the
//! record shape consumed downstream.

use serde::{Deserialize, Serialize};
use std::fmt;
use umrs_attachments::AttachmentRef;
use uuid::Uuid;

/// Type of visit that produced this record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitType {
    Outpatient,
    Inpatient,
    Emergency,
}

impl fmt::Display for VisitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Outpatient => "Outpatient",
            Self::Inpatient => "Inpatient",
            Self::Emergency => "Emergency",
        };
        f.write_str(s)
    }
}

/// Free-text vital sign observations.
///
/// Values are kept as entered ("120/80 mmHg", "98.6"); format is not
/// constrained at entry time. Blood pressure, heart rate, and temperature
/// are required at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VitalSigns {
    pub blood_pressure: String,
    pub heart_rate: String,
    pub temperature: String,
    pub respiratory_rate: String,
    pub oxygen_saturation: String,
}

/// Lab result attachments, grouped into three named buckets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LabResults {
    pub blood_tests: Vec<AttachmentRef>,
    pub urine_tests: Vec<AttachmentRef>,
    pub other_tests: Vec<AttachmentRef>,
}

/// Hospital stay details (optional section).
///
/// Admission and discharge dates become required when the hospital-stay
/// section is enabled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DischargeSummary {
    pub admission_date: Option<chrono::NaiveDate>,
    pub discharge_date: Option<chrono::NaiveDate>,
    pub inpatient_summary: String,
    pub referrals: Vec<String>,
}

/// Surgical procedure details (optional section).
///
/// Surgery type and date become required when the surgery section is
/// enabled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Procedures {
    pub surgery_type: String,
    pub surgery_date: Option<chrono::NaiveDate>,
    pub anesthesia_type: String,
    pub procedure_summary: String,
    pub complications: String,
    pub post_op_instructions: String,
}

/// One of the four named attachment collections on a draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttachmentBucket {
    BloodTests,
    UrineTests,
    OtherTests,
    RadiologyReports,
}

impl AttachmentBucket {
    /// camelCase key for this bucket, as used in error maps and JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Self::BloodTests => "bloodTests",
            Self::UrineTests => "urineTests",
            Self::OtherTests => "otherTests",
            Self::RadiologyReports => "radiologyReports",
        }
    }
}

impl fmt::Display for AttachmentBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The in-progress medical record being authored.
///
/// Created empty at form mount, mutated field-by-field through the editing
/// session, and discarded on navigation away. Submission hands the whole
/// draft to the session's record sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MedicalRecordDraft {
    /// Session-scoped draft identifier
    pub id: Uuid,

    pub visit_type: Option<VisitType>,
    pub visit_date: Option<chrono::NaiveDate>,
    pub chief_complaint: String,

    pub vital_signs: VitalSigns,

    /// Ordered diagnostic test identifiers (part of the record shape;
    /// currently populated only by callers, not by the form itself)
    pub diagnostic_tests: Vec<String>,

    pub lab_results: LabResults,
    pub radiology_reports: Vec<AttachmentRef>,

    pub impressions: String,
    pub diagnosis: String,

    /// Hospital stay details; participates in validation and progress only
    /// when the hospital-stay section is enabled
    pub discharge_summary: DischargeSummary,

    /// Surgical details; participates in validation and progress only when
    /// the surgery section is enabled
    pub procedures: Procedures,
}

impl MedicalRecordDraft {
    /// Creates an empty draft with a fresh session identifier.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            visit_type: None,
            visit_date: None,
            chief_complaint: String::new(),
            vital_signs: VitalSigns::default(),
            diagnostic_tests: Vec::new(),
            lab_results: LabResults::default(),
            radiology_reports: Vec::new(),
            impressions: String::new(),
            diagnosis: String::new(),
            discharge_summary: DischargeSummary::default(),
            procedures: Procedures::default(),
        }
    }

    /// Returns the attachments in the given bucket, in insertion order.
    pub fn bucket(&self, bucket: AttachmentBucket) -> &[AttachmentRef] {
        match bucket {
            AttachmentBucket::BloodTests => &self.lab_results.blood_tests,
            AttachmentBucket::UrineTests => &self.lab_results.urine_tests,
            AttachmentBucket::OtherTests => &self.lab_results.other_tests,
            AttachmentBucket::RadiologyReports => &self.radiology_reports,
        }
    }

    pub(crate) fn bucket_mut(&mut self, bucket: AttachmentBucket) -> &mut Vec<AttachmentRef> {
        match bucket {
            AttachmentBucket::BloodTests => &mut self.lab_results.blood_tests,
            AttachmentBucket::UrineTests => &mut self.lab_results.urine_tests,
            AttachmentBucket::OtherTests => &mut self.lab_results.other_tests,
            AttachmentBucket::RadiologyReports => &mut self.radiology_reports,
        }
    }
}

impl Default for MedicalRecordDraft {
    fn default() -> Self {
        Self::new()
    }
}
