use medrec_model::{Readmission, RecordKind, Visit, VisitType};

use crate::columns::RowView;
use crate::validator::{RecordSchema, require};

pub struct VisitSchema;

impl RecordSchema for VisitSchema {
    type Record = Visit;

    const KIND: RecordKind = RecordKind::Visit;

    fn parse_row(row: &RowView<'_>, problems: &mut Vec<&'static str>) -> Option<Visit> {
        let severity_score = require(
            problems,
            row.int("severity_score")
                .and_then(|score| u8::try_from(score).ok())
                .filter(|score| *score <= 5),
            "Invalid severity_score (must be 0-5)",
        );
        let visit_type = require(
            problems,
            row.get("visit_type").parse::<VisitType>().ok(),
            "Invalid visit_type (must be OP or IP)",
        );
        let length_of_stay = require(
            problems,
            row.int("length_of_stay")
                .and_then(|days| u64::try_from(days).ok()),
            "Invalid length_of_stay",
        );
        let lab_result_glucose = require(
            problems,
            row.float("lab_result_glucose"),
            "Invalid lab_result_glucose",
        );
        let visit_cost = require(
            problems,
            row.float("visit_cost").filter(|cost| *cost >= 0.0),
            "Invalid visit_cost",
        );

        Some(Visit {
            visit_id: row.text("visit_id"),
            patient_id: row.text("patient_id"),
            visit_date: row.text("visit_date"),
            severity_score: severity_score?,
            visit_type: visit_type?,
            length_of_stay: length_of_stay?,
            lab_result_glucose: lab_result_glucose?,
            lab_result_bp: row.text("lab_result_bp"),
            previous_visit_gap_days: row.int("previous_visit_gap_days").unwrap_or(0),
            readmitted_within_30_days: Readmission::from_cell(row.get("readmitted_within_30_days")),
            visit_cost: visit_cost?,
            doctor_name: row.text("doctor_name"),
            doctor_speciality: row.text("doctor_speciality"),
        })
    }
}
