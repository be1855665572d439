use medrec_model::{Doctor, RecordKind, Speciality};

use crate::columns::RowView;
use crate::validator::{RecordSchema, require};

/// Shortest password accepted for a doctor login.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Doctor roster files: one login per row.
pub struct DoctorSchema;

impl RecordSchema for DoctorSchema {
    type Record = Doctor;

    const KIND: RecordKind = RecordKind::Doctor;

    fn parse_row(row: &RowView<'_>, problems: &mut Vec<&'static str>) -> Option<Doctor> {
        let user_id = require(
            problems,
            Some(row.text("user_id")).filter(|id| !id.is_empty()),
            "Missing user_id",
        );
        let doctor_name = require(
            problems,
            Some(row.text("doctor_name")).filter(|name| !name.is_empty()),
            "Missing doctor_name",
        );
        let password = require(
            problems,
            Some(row.text("password")).filter(|pw| pw.chars().count() >= MIN_PASSWORD_LEN),
            "Invalid password (must be at least 6 characters)",
        );
        let doctor_speciality = require(
            problems,
            row.get("doctor_speciality").parse::<Speciality>().ok(),
            "Invalid doctor_speciality (must be Cardiology, Neurology, Orthopedics, Pediatrics, or General)",
        );

        Some(Doctor {
            user_id: user_id?,
            doctor_name: doctor_name?,
            password: password?,
            doctor_speciality: doctor_speciality?,
        })
    }
}
