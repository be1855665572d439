//! Validation of hospital record CSV files.
//!
//! Takes the grid produced by `medrec-ingest` (header row first) and checks
//! it against the layout and field rules of one record kind. Validation is
//! total: every outcome, including a malformed header, is reported through
//! [`ValidationResult`].

mod columns;
mod result;
mod schemas;
mod validator;

pub use columns::{ColumnIndex, RowView};
pub use result::{RowIssue, ValidationResult, Validated};
pub use schemas::{DoctorSchema, MIN_PASSWORD_LEN, PatientSchema, PrescriptionSchema, VisitSchema};
pub use validator::{RecordSchema, validate};

use medrec_ingest::Grid;
use medrec_model::{Doctor, Patient, Prescription, Visit};

pub fn validate_patients(grid: &Grid) -> ValidationResult<Patient> {
    validate::<PatientSchema>(grid)
}

pub fn validate_visits(grid: &Grid) -> ValidationResult<Visit> {
    validate::<VisitSchema>(grid)
}

/// Accepted prescriptions carry an empty `doctor_name`.
pub fn validate_prescriptions(grid: &Grid) -> ValidationResult<Prescription> {
    validate::<PrescriptionSchema>(grid)
}

pub fn validate_doctors(grid: &Grid) -> ValidationResult<Doctor> {
    validate::<DoctorSchema>(grid)
}
