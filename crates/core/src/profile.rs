//! Medical profile: the read-mostly record groups shown on the profile
//! page, with append-only list sections and replaceable insurance details.
//!
//! Unlike the record form, nothing here is validated or derived; entries
//! are appended as given and order is preserved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A known allergy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Allergy {
    pub substance: String,
    pub reaction: String,
}

/// A diagnosed chronic condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChronicCondition {
    pub condition: String,
    pub date_diagnosed: NaiveDate,
}

/// A family medical history entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FamilyHistoryEntry {
    pub relation: String,
    pub condition: String,
}

/// An immunisation record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Immunization {
    pub vaccine: String,
    pub date_received: NaiveDate,
    pub booster_shot: bool,
}

/// A past surgical procedure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PastSurgery {
    pub procedure: String,
    pub date: NaiveDate,
    pub hospital: String,
    pub surgeon: String,
    pub notes: String,
}

/// Health insurance details; replaced wholesale when edited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InsuranceDetails {
    pub provider: String,
    pub coverage: String,
    pub policy_number: String,
    pub co_pay_amount: u32,
}

/// The patient's medical profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MedicalProfile {
    pub blood_type: String,
    pub allergies: Vec<Allergy>,
    pub chronic_conditions: Vec<ChronicCondition>,
    pub family_medical_history: Vec<FamilyHistoryEntry>,
    pub immunization_records: Vec<Immunization>,
    pub surgeries: Vec<PastSurgery>,
    pub health_insurance_details: InsuranceDetails,
}

impl MedicalProfile {
    /// Appends an allergy, preserving prior entries and order.
    pub fn add_allergy(&mut self, entry: Allergy) {
        self.allergies.push(entry);
    }

    pub fn add_chronic_condition(&mut self, entry: ChronicCondition) {
        self.chronic_conditions.push(entry);
    }

    pub fn add_family_history(&mut self, entry: FamilyHistoryEntry) {
        self.family_medical_history.push(entry);
    }

    pub fn add_immunization(&mut self, entry: Immunization) {
        self.immunization_records.push(entry);
    }

    pub fn add_surgery(&mut self, entry: PastSurgery) {
        self.surgeries.push(entry);
    }

    /// Replaces the insurance details wholesale.
    pub fn update_insurance(&mut self, details: InsuranceDetails) {
        self.health_insurance_details = details;
    }

    /// The seeded sample profile shown by the current application (no
    /// backend exists to load a real one).
    pub fn sample() -> Self {
        let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid sample date");
        Self {
            blood_type: "A+".into(),
            allergies: vec![
                Allergy {
                    substance: "Penicillin".into(),
                    reaction: "Severe rash and breathing difficulties".into(),
                },
                Allergy {
                    substance: "Peanuts".into(),
                    reaction: "Anaphylaxis".into(),
                },
                Allergy {
                    substance: "Latex".into(),
                    reaction: "Skin irritation".into(),
                },
            ],
            chronic_conditions: vec![
                ChronicCondition {
                    condition: "Asthma".into(),
                    date_diagnosed: d("2020-03-15"),
                },
                ChronicCondition {
                    condition: "Type 2 Diabetes".into(),
                    date_diagnosed: d("2019-08-22"),
                },
            ],
            family_medical_history: Vec::new(),
            immunization_records: vec![
                Immunization {
                    vaccine: "COVID-19".into(),
                    date_received: d("2023-01-15"),
                    booster_shot: true,
                },
                Immunization {
                    vaccine: "Flu Shot".into(),
                    date_received: d("2023-09-30"),
                    booster_shot: false,
                },
                Immunization {
                    vaccine: "Tetanus".into(),
                    date_received: d("2020-06-12"),
                    booster_shot: true,
                },
            ],
            surgeries: vec![PastSurgery {
                procedure: "Appendectomy".into(),
                date: d("2022-05-15"),
                hospital: "Metro General Hospital".into(),
                surgeon: "Dr. Sarah Wilson".into(),
                notes: "Laparoscopic procedure, routine recovery".into(),
            }],
            health_insurance_details: InsuranceDetails {
                provider: "HealthGuard Insurance".into(),
                coverage: "Comprehensive Family Plan".into(),
                policy_number: "HG-2024-78945".into(),
                co_pay_amount: 25,
            },
        }
    }
}
