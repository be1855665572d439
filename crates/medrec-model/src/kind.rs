//! Record kinds and their source-file layouts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

pub const PATIENT_COLUMNS: &[&str] = &[
    "patient_id",
    "full_name",
    "age",
    "gender",
    "blood_group",
    "phone_number",
    "email",
    "emergency_contact",
    "hospital_location",
    "bmi",
    "smoker_status",
    "alcohol_use",
    "chronic_conditions",
    "registration_date",
    "insurance_type",
];

pub const VISIT_COLUMNS: &[&str] = &[
    "visit_id",
    "patient_id",
    "visit_date",
    "severity_score",
    "visit_type",
    "length_of_stay",
    "lab_result_glucose",
    "lab_result_bp",
    "previous_visit_gap_days",
    "readmitted_within_30_days",
    "visit_cost",
    "doctor_name",
    "doctor_speciality",
];

pub const PRESCRIPTION_COLUMNS: &[&str] = &[
    "prescription_id",
    "visit_id",
    "patient_id",
    "diagnosis_id",
    "diagnosis_description",
    "drug_name",
    "dosage",
    "quantity",
    "days_supply",
    "prescribed_date",
    "drug_category",
    "cost",
];

/// Prescription layout when written back out; the prescribing doctor rides
/// along as a pass-through column.
const PRESCRIPTION_EXPORT_COLUMNS: &[&str] = &[
    "prescription_id",
    "visit_id",
    "patient_id",
    "diagnosis_id",
    "diagnosis_description",
    "drug_name",
    "dosage",
    "quantity",
    "days_supply",
    "prescribed_date",
    "drug_category",
    "cost",
    "doctor_name",
];

pub const DOCTOR_COLUMNS: &[&str] = &["user_id", "doctor_name", "password", "doctor_speciality"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Patient,
    Visit,
    Doctor,
    Prescription,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Patient,
        RecordKind::Visit,
        RecordKind::Doctor,
        RecordKind::Prescription,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Patient => "patient",
            RecordKind::Visit => "visit",
            RecordKind::Doctor => "doctor",
            RecordKind::Prescription => "prescription",
        }
    }

    /// Human label used in messages ("Patient ID already exists").
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Patient => "Patient",
            RecordKind::Visit => "Visit",
            RecordKind::Doctor => "Doctor User",
            RecordKind::Prescription => "Prescription",
        }
    }

    /// Columns a source file must carry, lower-case.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Patient => PATIENT_COLUMNS,
            RecordKind::Visit => VISIT_COLUMNS,
            RecordKind::Doctor => DOCTOR_COLUMNS,
            RecordKind::Prescription => PRESCRIPTION_COLUMNS,
        }
    }

    /// Columns written when a collection is exported.
    pub fn export_columns(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Prescription => PRESCRIPTION_EXPORT_COLUMNS,
            other => other.columns(),
        }
    }

    /// Prefix of generated identifiers. Doctors pick their own user IDs.
    pub fn id_prefix(&self) -> Option<&'static str> {
        match self {
            RecordKind::Patient => Some("PAT"),
            RecordKind::Visit => Some("VIS"),
            RecordKind::Prescription => Some("PRE"),
            RecordKind::Doctor => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == singular)
            .ok_or_else(|| ModelError::UnknownKind(s.to_string()))
    }
}
