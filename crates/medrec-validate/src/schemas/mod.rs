mod doctor;
mod patient;
mod prescription;
mod visit;

pub use doctor::{DoctorSchema, MIN_PASSWORD_LEN};
pub use patient::PatientSchema;
pub use prescription::PrescriptionSchema;
pub use visit::VisitSchema;
