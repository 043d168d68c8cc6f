//! Dashboard summary: the headline stats and known-allergies panel.
//!
//! Read-mostly presentational data; the only logic is the sample-data
//! constructor, since no backend exists to load real values.

use crate::profile::Allergy;
use serde::{Deserialize, Serialize};

/// One headline stat with an optional trend delta against the previous
/// reading ("+1", "-2.3").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub trend: Option<String>,
}

/// The dashboard's patient summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatientSummary {
    pub patient_name: String,
    pub stats: Vec<Stat>,
    pub allergies: Vec<Allergy>,
}

impl PatientSummary {
    /// The seeded sample summary shown by the current application.
    pub fn sample() -> Self {
        let stat = |label: &str, value: &str, trend: Option<&str>| Stat {
            label: label.into(),
            value: value.into(),
            trend: trend.map(Into::into),
        };

        Self {
            patient_name: "John Doe".into(),
            stats: vec![
                stat("Age", "28", Some("+1")),
                stat("Blood Type", "B+", None),
                stat("Weight(kg)", "68", Some("-2.3")),
                stat("Height(cm)", "170", None),
            ],
            allergies: vec![
                Allergy {
                    substance: "Penicillin".into(),
                    reaction: "Severe rash and difficulty breathing".into(),
                },
                Allergy {
                    substance: "Peanuts".into(),
                    reaction: "Anaphylaxis".into(),
                },
                Allergy {
                    substance: "Latex".into(),
                    reaction: "Skin irritation and hives".into(),
                },
                Allergy {
                    substance: "Shellfish".into(),
                    reaction: "Severe swelling and nausea".into(),
                },
            ],
        }
    }
}
