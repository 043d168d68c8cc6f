//! Derived completion progress for a draft.
//!
//! Progress is never stored on the draft; the engine recomputes it after
//! every mutation that could change the filled count or the denominator.

use crate::record::MedicalRecordDraft;
use crate::sections::SectionVisibility;

/// Whether a free-text field counts as filled.
fn filled(text: &str) -> bool {
    !text.is_empty()
}

/// Computes the completion percentage for a draft, 0–100.
///
/// Six fields are always counted: visit type, visit date, chief complaint,
/// blood pressure, heart rate, and diagnosis. Each enabled optional
/// section contributes two more fields to both numerator and denominator
/// (admission/discharge dates; surgery type/date), so the denominator
/// ranges from 6 to 10. The result is `round(100 × filled / total)`.
pub fn completion_progress(draft: &MedicalRecordDraft, visibility: &SectionVisibility) -> u8 {
    let mut counted: Vec<bool> = vec![
        draft.visit_type.is_some(),
        draft.visit_date.is_some(),
        filled(&draft.chief_complaint),
        filled(&draft.vital_signs.blood_pressure),
        filled(&draft.vital_signs.heart_rate),
        filled(&draft.diagnosis),
    ];

    if visibility.include_hospital_stay {
        counted.push(draft.discharge_summary.admission_date.is_some());
        counted.push(draft.discharge_summary.discharge_date.is_some());
    }

    if visibility.include_surgery {
        counted.push(filled(&draft.procedures.surgery_type));
        counted.push(draft.procedures.surgery_date.is_some());
    }

    let total = counted.len();
    let done = counted.iter().filter(|&&c| c).count();

    (done as f64 / total as f64 * 100.0).round() as u8
}
