use medrec_model::{Gender, Patient, RecordKind, YesNo};

use crate::columns::RowView;
use crate::validator::{RecordSchema, require};

pub struct PatientSchema;

impl RecordSchema for PatientSchema {
    type Record = Patient;

    const KIND: RecordKind = RecordKind::Patient;

    fn parse_row(row: &RowView<'_>, problems: &mut Vec<&'static str>) -> Option<Patient> {
        let age = require(
            problems,
            row.int("age").and_then(|age| u8::try_from(age).ok()).filter(|age| *age <= 150),
            "Invalid age",
        );
        let gender = require(
            problems,
            row.get("gender").parse::<Gender>().ok(),
            "Invalid gender (must be Male, Female, or Other)",
        );
        let bmi = require(
            problems,
            row.float("bmi").filter(|bmi| (10.0..=60.0).contains(bmi)),
            "Invalid BMI",
        );
        let smoker_status = require(
            problems,
            row.get("smoker_status").parse::<YesNo>().ok(),
            "Invalid smoker_status (must be Yes or No)",
        );
        let alcohol_use = require(
            problems,
            row.get("alcohol_use").parse::<YesNo>().ok(),
            "Invalid alcohol_use (must be Yes or No)",
        );

        Some(Patient {
            patient_id: row.text("patient_id"),
            full_name: row.text("full_name"),
            age: age?,
            gender: gender?,
            blood_group: row.text("blood_group"),
            phone_number: row.text("phone_number"),
            email: row.text("email"),
            emergency_contact: row.text("emergency_contact"),
            hospital_location: row.text("hospital_location"),
            bmi: bmi?,
            smoker_status: smoker_status?,
            alcohol_use: alcohol_use?,
            chronic_conditions: split_conditions(row.get("chronic_conditions")),
            registration_date: row.text("registration_date"),
            insurance_type: row.text("insurance_type"),
        })
    }
}

/// Splits on `;` and trims each part. `Diabetes; Asthma` becomes two
/// conditions. Parts left empty after trimming are dropped, so `"A;;B"` is
/// `["A", "B"]` and an empty cell is no conditions at all.
fn split_conditions(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|condition| !condition.is_empty())
        .map(ToString::to_string)
        .collect()
}
