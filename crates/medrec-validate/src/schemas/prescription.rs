use medrec_model::{Prescription, RecordKind};

use crate::columns::RowView;
use crate::validator::{RecordSchema, require};

pub struct PrescriptionSchema;

impl RecordSchema for PrescriptionSchema {
    type Record = Prescription;

    const KIND: RecordKind = RecordKind::Prescription;

    /// `doctor_name` is never read from the file; it is left empty for the
    /// importing session to fill in.
    fn parse_row(row: &RowView<'_>, problems: &mut Vec<&'static str>) -> Option<Prescription> {
        let quantity = require(
            problems,
            row.int("quantity").and_then(|n| u64::try_from(n).ok()),
            "Invalid quantity",
        );
        let days_supply = require(
            problems,
            row.int("days_supply").and_then(|n| u64::try_from(n).ok()),
            "Invalid days_supply",
        );
        let cost = require(
            problems,
            row.float("cost").filter(|cost| *cost >= 0.0),
            "Invalid cost",
        );

        Some(Prescription {
            prescription_id: row.text("prescription_id"),
            visit_id: row.text("visit_id"),
            patient_id: row.text("patient_id"),
            diagnosis_id: row.text("diagnosis_id"),
            diagnosis_description: row.text("diagnosis_description"),
            drug_name: row.text("drug_name"),
            dosage: row.text("dosage"),
            quantity: quantity?,
            days_supply: days_supply?,
            prescribed_date: row.text("prescribed_date"),
            drug_category: row.text("drug_category"),
            cost: cost?,
            doctor_name: String::new(),
        })
    }
}
