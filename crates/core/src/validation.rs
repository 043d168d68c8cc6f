//! Submit-time validation of a draft.
//!
//! Validation produces a full replacement error map: exactly the fields
//! failing right now, keyed by [`RequiredField`]. It never merges with a
//! previous result, so fields that have since been corrected drop out.
//! Attachment staging rejections live in a separate map owned by the
//! engine and are not touched here.

use crate::record::MedicalRecordDraft;
use crate::sections::SectionVisibility;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A field that can fail required-field validation.
///
/// The first seven are unconditionally required; the date/type fields of
/// the optional sections are required only while their section is enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    VisitType,
    VisitDate,
    ChiefComplaint,
    BloodPressure,
    HeartRate,
    Temperature,
    Diagnosis,
    AdmissionDate,
    DischargeDate,
    SurgeryType,
    SurgeryDate,
}

impl RequiredField {
    /// camelCase key for this field, matching the serialized record shape.
    pub fn key(&self) -> &'static str {
        match self {
            Self::VisitType => "visitType",
            Self::VisitDate => "visitDate",
            Self::ChiefComplaint => "chiefComplaint",
            Self::BloodPressure => "bloodPressure",
            Self::HeartRate => "heartRate",
            Self::Temperature => "temperature",
            Self::Diagnosis => "diagnosis",
            Self::AdmissionDate => "admissionDate",
            Self::DischargeDate => "dischargeDate",
            Self::SurgeryType => "surgeryType",
            Self::SurgeryDate => "surgeryDate",
        }
    }

    /// Human-readable message shown next to the field.
    pub fn message(&self) -> &'static str {
        match self {
            Self::VisitType => "Visit type is required",
            Self::VisitDate => "Visit date is required",
            Self::ChiefComplaint => "Chief complaint is required",
            Self::BloodPressure => "Blood pressure is required",
            Self::HeartRate => "Heart rate is required",
            Self::Temperature => "Temperature is required",
            Self::Diagnosis => "Diagnosis is required",
            Self::AdmissionDate => "Admission date is required",
            Self::DischargeDate => "Discharge date is required",
            Self::SurgeryType => "Surgery type is required",
            Self::SurgeryDate => "Surgery date is required",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field-level validation errors, keyed by field.
pub type ValidationErrors = BTreeMap<RequiredField, String>;

/// Validates a draft against the required-field rules.
///
/// Returns the complete set of currently failing fields with their
/// messages; an empty map means the draft may be submitted.
pub fn validate(draft: &MedicalRecordDraft, visibility: &SectionVisibility) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let mut require = |field: RequiredField, missing: bool| {
        if missing {
            errors.insert(field, field.message().to_owned());
        }
    };

    require(RequiredField::VisitType, draft.visit_type.is_none());
    require(RequiredField::VisitDate, draft.visit_date.is_none());
    require(
        RequiredField::ChiefComplaint,
        draft.chief_complaint.is_empty(),
    );
    require(
        RequiredField::BloodPressure,
        draft.vital_signs.blood_pressure.is_empty(),
    );
    require(
        RequiredField::HeartRate,
        draft.vital_signs.heart_rate.is_empty(),
    );
    require(
        RequiredField::Temperature,
        draft.vital_signs.temperature.is_empty(),
    );
    require(RequiredField::Diagnosis, draft.diagnosis.is_empty());

    if visibility.include_hospital_stay {
        require(
            RequiredField::AdmissionDate,
            draft.discharge_summary.admission_date.is_none(),
        );
        require(
            RequiredField::DischargeDate,
            draft.discharge_summary.discharge_date.is_none(),
        );
    }

    if visibility.include_surgery {
        require(
            RequiredField::SurgeryType,
            draft.procedures.surgery_type.is_empty(),
        );
        require(
            RequiredField::SurgeryDate,
            draft.procedures.surgery_date.is_none(),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::VisitType;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
    }

    fn complete_draft() -> MedicalRecordDraft {
        let mut draft = MedicalRecordDraft::new();
        draft.visit_type = Some(VisitType::Outpatient);
        draft.visit_date = Some(date("2024-01-01"));
        draft.chief_complaint = "cough".into();
        draft.vital_signs.blood_pressure = "120/80".into();
        draft.vital_signs.heart_rate = "70".into();
        draft.vital_signs.temperature = "98.6".into();
        draft.diagnosis = "flu".into();
        draft
    }

    #[test]
    fn test_complete_draft_passes_with_sections_disabled() {
        let errors = validate(&complete_draft(), &SectionVisibility::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_draft_fails_exactly_the_seven_unconditional_fields() {
        let errors = validate(&MedicalRecordDraft::new(), &SectionVisibility::default());

        let keys: Vec<&str> = errors.keys().map(RequiredField::key).collect();
        assert_eq!(errors.len(), 7);
        for key in [
            "visitType",
            "visitDate",
            "chiefComplaint",
            "bloodPressure",
            "heartRate",
            "temperature",
            "diagnosis",
        ] {
            assert!(keys.contains(&key), "missing key {key}");
        }
    }

    #[test]
    fn test_enabled_hospital_stay_requires_its_dates() {
        let draft = complete_draft();
        let visibility = SectionVisibility {
            include_hospital_stay: true,
            include_surgery: false,
        };

        let errors = validate(&draft, &visibility);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(&RequiredField::AdmissionDate).map(String::as_str),
            Some("Admission date is required")
        );
        assert!(errors.contains_key(&RequiredField::DischargeDate));
    }

    #[test]
    fn test_disabled_section_fields_are_not_required() {
        let mut draft = complete_draft();
        // Surgery data present but section disabled: irrelevant either way.
        draft.procedures.surgery_type = "appendectomy".into();

        let errors = validate(&draft, &SectionVisibility::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validation_replaces_rather_than_merges() {
        let mut draft = MedicalRecordDraft::new();
        let visibility = SectionVisibility::default();

        let first = validate(&draft, &visibility);
        assert!(first.contains_key(&RequiredField::Diagnosis));

        draft = complete_draft();
        draft.diagnosis.clear();
        let second = validate(&draft, &visibility);

        // Only the still-failing field remains.
        assert_eq!(second.len(), 1);
        assert!(second.contains_key(&RequiredField::Diagnosis));
    }
}
